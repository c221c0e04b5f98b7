mod common;

use std::fs;

use common::cli::{RbWorkspace, create_record, run_rb};

#[test]
fn test_render_escapes_user_markup() {
    let workspace = RbWorkspace::new();
    create_record(&workspace, "<b>x</b>", "Low", "<script>alert(1)</script>");

    let render = run_rb(&workspace, ["render"], "render");
    assert!(render.status.success(), "render failed: {}", render.stderr);
    assert!(render.stdout.contains("&lt;b&gt;x&lt;/b&gt;"));
    assert!(!render.stdout.contains("<b>"));
    assert!(!render.stdout.contains("script"));
    assert!(render.stdout.contains("<tr data-id=\"1\">"));
}

#[test]
fn test_render_page_to_file() {
    let workspace = RbWorkspace::new();
    create_record(&workspace, "ann", "High", "a");
    create_record(&workspace, "bob", "Low", "b");

    let out = workspace.root().join("table.html");
    let render = run_rb(
        &workspace,
        [
            "render",
            "--page",
            "--sort",
            "user",
            "--filter",
            "Low",
            "--output",
            out.to_str().expect("utf-8 path"),
        ],
        "render_page",
    );
    assert!(render.status.success(), "render failed: {}", render.stderr);
    assert!(render.stdout.is_empty());

    let html = fs::read_to_string(&out).expect("rendered file");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("id=\"itemsTableBody\""));
    assert!(html.contains("<option value=\"Low\" selected>"));
    assert!(html.contains("bob"));
    assert!(!html.contains("ann"));
}

#[test]
fn test_render_empty_list() {
    let workspace = RbWorkspace::new();
    let render = run_rb(&workspace, ["render"], "render_empty");
    assert!(render.status.success());
    assert!(render.stdout.is_empty());
}
