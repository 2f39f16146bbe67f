//! Integration tests for gallery search, sort and display

mod common;
use common::*;

use chrono::Duration;
use pixio::components::GalleryView;
use pixio::libs::{ GalleryQuery, SortDirection, SortOption, ViewMode };
use pixio::state::gallery::{ load_canvases, sample_canvases };
use pixio::utils::data::save_json_to_file;

fn library() -> Vec<pixio::state::CanvasCardData> {
    vec![
        canvas("a", "banana Split", ago(Duration::days(10))),
        canvas("b", "Apple Orchard", ago(Duration::hours(3))),
        canvas("c", "cherry Blossom", ago(Duration::days(400)))
    ]
}

#[test]
fn default_query_sorts_by_name_case_insensitively() {
    let canvases = library();
    let visible = GalleryQuery::default().apply(&canvases);
    assert_eq!(titles(&visible), vec!["Apple Orchard", "banana Split", "cherry Blossom"]);
}

#[test]
fn oldest_reverses_name_order() {
    let canvases = library();
    let query = GalleryQuery::new("", SortOption::Name, SortDirection::Oldest);
    assert_eq!(titles(&query.apply(&canvases)), vec!["cherry Blossom", "banana Split", "Apple Orchard"]);
}

#[test]
fn last_modified_puts_most_recent_first() {
    let canvases = library();
    let newest = GalleryQuery::new("", SortOption::LastModified, SortDirection::Newest);
    assert_eq!(titles(&newest.apply(&canvases)), vec!["Apple Orchard", "banana Split", "cherry Blossom"]);

    let oldest = GalleryQuery::new("", SortOption::LastModified, SortDirection::Oldest);
    assert_eq!(titles(&oldest.apply(&canvases)), vec!["cherry Blossom", "banana Split", "Apple Orchard"]);
}

#[test]
fn last_opened_uses_open_time_when_known() {
    let mut canvases = library();
    // cherry was edited long ago but opened a minute ago
    canvases[2].last_opened_at = Some(ago(Duration::minutes(1)));

    let query = GalleryQuery::new("", SortOption::LastOpened, SortDirection::Newest);
    assert_eq!(titles(&query.apply(&canvases)), vec!["cherry Blossom", "Apple Orchard", "banana Split"]);
}

#[test]
fn search_matches_title_substring_ignoring_case() {
    let canvases = sample_canvases();
    let query = GalleryQuery::new("  FOREST ", SortOption::Name, SortDirection::Newest);
    assert_eq!(titles(&query.apply(&canvases)), vec!["Fantasy Forest"]);

    let none = GalleryQuery::new("pixelartist", SortOption::Name, SortDirection::Newest);
    assert!(none.apply(&canvases).is_empty());
}

#[test]
fn equal_keys_fall_back_to_id() {
    let when = ago(Duration::days(1));
    let canvases = vec![canvas("z", "Same", when), canvas("m", "same", when)];
    let query = GalleryQuery::new("", SortOption::Name, SortDirection::Newest);
    let ids: Vec<&str> = query.apply(&canvases).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["m", "z"]);
}

#[test]
fn canvases_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvases.json");
    save_json_to_file(&library(), &path).unwrap();

    let loaded = load_canvases(&path).unwrap();
    assert_eq!(loaded, library());
}

#[test]
fn original_gallery_json_shape_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvases.json");
    std::fs
        ::write(
            &path,
            r#"[{
                "id": "9",
                "title": "Pixel Moon",
                "stars": 12,
                "owner": { "id": "u", "username": "luna", "avatar": "", "url": "" },
                "description": "",
                "image": "/img/moon.webp",
                "createdAt": "2024-03-01T00:00:00Z",
                "updatedAt": "2024-03-09T09:30:00Z"
            }]"#
        )
        .unwrap();

    let loaded = load_canvases(&path).unwrap();
    assert_eq!(loaded[0].last_edited(reference()), "Last edited 1 Day ago");
    assert_eq!(loaded[0].last_opened_at, None);
}

#[test]
fn card_view_lists_filtered_canvases() {
    let canvases = library();
    let visible = GalleryQuery::new("apple", SortOption::Name, SortDirection::Newest).apply(&canvases);
    let text = GalleryView::new(visible, ViewMode::Card, reference()).to_string();
    assert_eq!(text, "Apple Orchard\n  ★ 0  /canvas/b\n  Last edited 3 Hours ago\n");
}
