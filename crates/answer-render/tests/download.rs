/*
 * download.rs
 * Copyright (c) 2025 Posit, PBC
 */

use answer_render::{RenderConfig, RenderError, SourceTable, render};

#[test]
fn download_writes_original_text() {
    let dir = tempfile::tempdir().unwrap();
    let original = "Answer with [1] and ünïcödé\r\nSources\n";
    let answer = render(original, SourceTable::new(), &RenderConfig::default());

    let path = answer.write_download(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "research_answer.txt");
    assert_eq!(std::fs::read(&path).unwrap(), original.as_bytes());
}

#[test]
fn download_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let answer = render("x", SourceTable::new(), &RenderConfig::default());

    let err = answer.write_download(&missing).unwrap_err();
    assert!(matches!(err, RenderError::Write { .. }));
}
