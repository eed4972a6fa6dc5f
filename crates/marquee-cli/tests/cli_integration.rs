//! CLI integration tests — run the actual marquee binary.
//! Marked `#[ignore]` to skip in normal `cargo test`; the search and show
//! tests also need network access and `OMDB_API_KEY`.

use std::process::Command;

fn marquee() -> Command {
    Command::new(env!("CARGO_BIN_EXE_marquee"))
}

fn has_api_key() -> bool {
    std::env::var("OMDB_API_KEY").is_ok_and(|k| !k.is_empty())
}

#[test]
#[ignore]
fn test_cli_help_lists_commands() {
    let output = marquee().arg("--help").output().expect("failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["search", "show", "tui", "config"] {
        assert!(stdout.contains(cmd), "help is missing '{cmd}'");
    }
}

#[test]
#[ignore]
fn test_cli_config_masks_key() {
    let output = marquee()
        .arg("config")
        .env("OMDB_API_KEY", "33f76330")
        .output()
        .expect("failed to execute");
    assert!(
        output.status.success(),
        "marquee config failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("****6330"));
    assert!(!stdout.contains("33f76330"));
}

#[test]
#[ignore]
fn test_cli_blank_search_fails() {
    let output = marquee()
        .args(["search", "   "])
        .output()
        .expect("failed to execute");
    assert!(!output.status.success(), "blank search should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("enter a movie title"));
}

#[test]
#[ignore]
fn test_cli_show_rejects_bad_id() {
    let output = marquee()
        .args(["show", "not-an-id"])
        .output()
        .expect("failed to execute");
    assert!(!output.status.success());
}

#[test]
#[ignore]
fn test_cli_tui_link_conflicts_with_id() {
    let output = marquee()
        .args(["tui", "--id", "tt1375666", "--link", "marquee://open?q=Heat"])
        .output()
        .expect("failed to execute");
    assert!(!output.status.success());
}

#[test]
#[ignore]
fn test_cli_search_json() {
    if !has_api_key() {
        eprintln!("OMDB_API_KEY not set, skipping");
        return;
    }
    let output = marquee()
        .args(["search", "Inception", "--json", "--limit", "3"])
        .output()
        .expect("failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let items: Vec<serde_json::Value> =
        serde_json::from_str(stdout.trim()).expect("invalid JSON output");
    assert!(!items.is_empty() && items.len() <= 3);
}

#[test]
#[ignore]
fn test_cli_search_not_found_exits_nonzero() {
    if !has_api_key() {
        eprintln!("OMDB_API_KEY not set, skipping");
        return;
    }
    let output = marquee()
        .args(["search", "zzzznotfound"])
        .output()
        .expect("failed to execute");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No results found for \"zzzznotfound\"."));
}

#[test]
#[ignore]
fn test_cli_show_inception() {
    if !has_api_key() {
        eprintln!("OMDB_API_KEY not set, skipping");
        return;
    }
    let output = marquee()
        .args(["show", "tt1375666"])
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Inception"));
    assert!(stdout.contains("IMDb:"));
}
