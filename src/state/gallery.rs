use crate::error::Result;
use crate::libs::routes::Route;
use crate::utils::{ data, format_relative_time_from };
use chrono::{ DateTime, TimeZone, Utc };
use once_cell::sync::Lazy;
use serde::{ Deserialize, Serialize };
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasOwner {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub url: String,
}

/// Everything a gallery card shows about one canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasCardData {
    pub id: String,
    pub title: String,
    pub stars: u64,
    pub owner: CanvasOwner,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_at: Option<DateTime<Utc>>,
}

impl CanvasCardData {
    /// A fresh, empty canvas owned by `owner`
    pub fn draft(title: impl Into<String>, owner: CanvasOwner, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            stars: 0,
            owner,
            description: String::new(),
            image: String::new(),
            created_at: now,
            updated_at: now,
            last_opened_at: Some(now),
        }
    }

    /// Link target of the card
    pub fn href(&self) -> String {
        Route::Canvas { id: self.id.clone() }.path()
    }

    /// When the canvas was last opened; never-opened canvases use their last edit
    pub fn last_opened(&self) -> DateTime<Utc> {
        self.last_opened_at.unwrap_or(self.updated_at)
    }

    /// Caption under the card title, e.g. "Last edited 3 Days ago"
    pub fn last_edited(&self, reference: DateTime<Utc>) -> String {
        format!("Last edited {}", format_relative_time_from(self.updated_at, reference))
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).single().unwrap_or_default()
}

fn sample_owner(id: &str, username: &str) -> CanvasOwner {
    CanvasOwner {
        id: id.to_string(),
        username: username.to_string(),
        avatar: String::new(),
        url: String::new(),
    }
}

static SAMPLE_CANVASES: Lazy<Vec<CanvasCardData>> = Lazy::new(|| {
    vec![
        CanvasCardData {
            id: "1".to_string(),
            title: "Sunset Overdrive".to_string(),
            stars: 120,
            owner: sample_owner("user1", "pixelartist"),
            description: "A vibrant pixel art representation of a sunset.".to_string(),
            image: "/img/canvas1.webp".to_string(),
            created_at: utc(2023, 10, 1, 10, 0),
            updated_at: utc(2023, 10, 2, 11, 0),
            last_opened_at: None,
        },
        CanvasCardData {
            id: "2".to_string(),
            title: "Retro Racer".to_string(),
            stars: 85,
            owner: sample_owner("user2", "retrolover"),
            description: "A pixel art tribute to classic racing games of the 80s.".to_string(),
            image: "/img/canvas1.webp".to_string(),
            created_at: utc(2023, 9, 15, 8, 30),
            updated_at: utc(2023, 9, 16, 9, 45),
            last_opened_at: None,
        },
        CanvasCardData {
            id: "3".to_string(),
            title: "Fantasy Forest".to_string(),
            stars: 2384,
            owner: sample_owner("user3", "fantasyfan"),
            description: "An enchanting pixel art scene depicting a magical forest.".to_string(),
            image: "/img/canvas1.webp".to_string(),
            created_at: utc(2023, 8, 20, 14, 20),
            updated_at: utc(2023, 8, 21, 15, 30),
            last_opened_at: None,
        }
    ]
});

/// The canvases shown on the gallery page when no data file is given
pub fn sample_canvases() -> Vec<CanvasCardData> {
    SAMPLE_CANVASES.clone()
}

/// Load a JSON array of canvases
pub fn load_canvases(path: &Path) -> Result<Vec<CanvasCardData>> {
    let canvases: Vec<CanvasCardData> = data::load_json_from_file(path)?;
    crate::debug_print!("🖼️ Loaded {} canvases from {}", canvases.len(), path.display());
    Ok(canvases)
}

/// Append a draft canvas to the canvases file at `path`, creating the file if needed.
/// Returns the new canvas.
pub fn append_draft(
    path: &Path,
    title: impl Into<String>,
    owner: CanvasOwner,
    now: DateTime<Utc>
) -> Result<CanvasCardData> {
    let mut canvases = if path.exists() { load_canvases(path)? } else { Vec::new() };

    let canvas = CanvasCardData::draft(title, owner, now);
    canvases.push(canvas.clone());
    data::save_json_to_file(&canvases, path)?;

    crate::debug_print!("🆕 Added canvas {} to {}", canvas.id, path.display());
    Ok(canvas)
}
