use crate::libs::ViewMode;
use crate::state::gallery::CanvasCardData;
use crate::utils::format::format_stars;
use chrono::{ DateTime, Utc };
use std::fmt;

pub const EMPTY_RESULT_MESSAGE: &str = "No canvases match your search!";

/// Gallery listing as plain text, in either card or table layout
pub struct GalleryView<'a> {
    pub canvases: Vec<&'a CanvasCardData>,
    pub view: ViewMode,
    /// Instant the "Last edited" captions are measured from
    pub reference: DateTime<Utc>,
}

impl<'a> GalleryView<'a> {
    pub fn new(canvases: Vec<&'a CanvasCardData>, view: ViewMode, reference: DateTime<Utc>) -> Self {
        Self { canvases, view, reference }
    }

    fn fmt_cards(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for canvas in &self.canvases {
            writeln!(f, "{}", canvas.title)?;
            writeln!(f, "  ★ {}  {}", format_stars(canvas.stars), canvas.href())?;
            writeln!(f, "  {}", canvas.last_edited(self.reference))?;
        }
        Ok(())
    }

    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 4]> = self.canvases
            .iter()
            .map(|canvas| {
                [
                    canvas.title.clone(),
                    format_stars(canvas.stars),
                    canvas.owner.username.clone(),
                    canvas.last_edited(self.reference),
                ]
            })
            .collect();

        let header = ["Title", "Stars", "Owner", "Modified"];
        let mut widths = header.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, &header.map(str::to_string), &widths)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String; 4], widths: &[usize; 4]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for GalleryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.canvases.is_empty() {
            return writeln!(f, "{}", EMPTY_RESULT_MESSAGE);
        }
        match self.view {
            ViewMode::Card => self.fmt_cards(f),
            ViewMode::Table => self.fmt_table(f),
        }
    }
}
