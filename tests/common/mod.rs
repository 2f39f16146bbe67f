//! Shared helpers for pixio integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use chrono::{ DateTime, Duration, TimeZone, Utc };
use pixio::state::{ CanvasCardData, CanvasOwner };

/// Fixed "current time" so assertions never depend on the wall clock
pub fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap()
}

pub fn ago(duration: Duration) -> DateTime<Utc> {
    reference() - duration
}

pub fn ahead(duration: Duration) -> DateTime<Utc> {
    reference() + duration
}

pub fn owner(name: &str) -> CanvasOwner {
    CanvasOwner {
        id: name.to_string(),
        username: name.to_string(),
        avatar: String::new(),
        url: String::new(),
    }
}

/// Canvas with the given id, title and last edit
pub fn canvas(id: &str, title: &str, updated_at: DateTime<Utc>) -> CanvasCardData {
    CanvasCardData {
        id: id.to_string(),
        title: title.to_string(),
        stars: 0,
        owner: owner("tester"),
        description: String::new(),
        image: String::new(),
        created_at: updated_at - Duration::days(1),
        updated_at,
        last_opened_at: None,
    }
}

pub fn titles(canvases: &[&CanvasCardData]) -> Vec<String> {
    canvases.iter().map(|c| c.title.clone()).collect()
}
