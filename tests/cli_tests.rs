//! End-to-end runs of the pixio binary against a throwaway data directory

use pixio::libs::SortDirection;
use pixio::state::gallery::load_canvases;
use pixio::state::AppConfig;
use std::path::Path;
use std::process::{ Command, Output };

fn pixio(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pixio"))
        .args(args)
        .env("PIXIO_DATA_DIR", data_dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run pixio")
}

#[test]
fn fatal_errors_reach_stderr_with_logging_off() {
    let dir = tempfile::tempdir().unwrap();

    let output = pixio(dir.path(), &["relative", "not-a-date"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid timestamp 'not-a-date'"), "stderr was: {stderr}");
}

#[test]
fn gallery_flip_is_remembered() {
    let dir = tempfile::tempdir().unwrap();

    let output = pixio(dir.path(), &["gallery", "--flip"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("(oldest)"));

    let config = AppConfig::load_from(&dir.path().join("config.json"));
    assert_eq!(config.gallery.direction, SortDirection::Oldest);

    // A plain visit keeps the flipped direction
    let output = pixio(dir.path(), &["gallery"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("(oldest)"));
}

#[test]
fn create_appends_to_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("canvases.json");
    let file_arg = file.to_str().unwrap();

    assert!(pixio(dir.path(), &["create", "First", "--file", file_arg]).status.success());
    assert!(pixio(dir.path(), &["create", "Second", "--file", file_arg]).status.success());

    let titles: Vec<String> = load_canvases(&file)
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}
