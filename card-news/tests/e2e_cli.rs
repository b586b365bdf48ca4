//! End-to-End CLI Tests for card-news

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command pointing at the card-news binary, run inside `dir`
fn card_news(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("card-news");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

const ONE_ITEM: &str =
    r#"[{"id": 1, "title": "A", "description": "Da", "category": "C1"}]"#;

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().expect("temp dir");
        card_news(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--data"))
            .stdout(predicate::str::contains("--fragment"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().expect("temp dir");
        card_news(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn renders_builtin_page_to_stdout() {
        let dir = TempDir::new().expect("temp dir");
        card_news(&dir)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("첫 번째 카드 뉴스"))
            .stdout(predicate::str::contains("두 번째 카드 뉴스"));
    }

    #[test]
    fn fragment_flag_drops_document_shell() {
        let dir = TempDir::new().expect("temp dir");
        card_news(&dir)
            .arg("--fragment")
            .assert()
            .success()
            .stdout(predicate::str::contains("<html").not())
            .stdout(predicate::str::contains("Home_container"));
    }
}

// ============================================
// Data, output and config
// ============================================

mod data_and_config {
    use super::*;
    use std::fs;

    #[test]
    fn renders_dataset_file() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("news.json"), ONE_ITEM).expect("write dataset");

        card_news(&dir)
            .args(["--data", "news.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<h2>A</h2>"))
            .stdout(predicate::str::contains("첫 번째 카드 뉴스").not());
    }

    #[test]
    fn writes_output_file() {
        let dir = TempDir::new().expect("temp dir");

        card_news(&dir)
            .args(["--output", "index.html", "--no-inline-css"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = fs::read_to_string(dir.path().join("index.html")).expect("read output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("<style"));
    }

    #[test]
    fn duplicate_ids_fail() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(
            dir.path().join("dup.json"),
            r#"[
                {"id": 1, "title": "A", "description": "Da", "category": "C1"},
                {"id": 1, "title": "B", "description": "Db", "category": "C2"}
            ]"#,
        )
        .expect("write dataset");

        card_news(&dir)
            .args(["--data", "dup.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate news id 1"));
    }

    #[test]
    fn missing_dataset_fails() {
        let dir = TempDir::new().expect("temp dir");

        card_news(&dir)
            .args(["--data", "absent.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[card-news] Error"))
            .stderr(predicate::str::contains("absent.json"));
    }

    #[test]
    fn implicit_config_is_applied() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("news.json"), ONE_ITEM).expect("write dataset");
        fs::write(
            dir.path().join("card-news.toml"),
            "data = \"news.json\"\n\n[styles]\ncard = \"hashed_card\"\n",
        )
        .expect("write config");

        card_news(&dir)
            .arg("--fragment")
            .assert()
            .success()
            .stdout(predicate::str::contains("class=\"hashed_card\""))
            .stdout(predicate::str::contains("<h2>A</h2>"));
    }

    #[test]
    fn cli_flags_override_config() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("news.json"), ONE_ITEM).expect("write dataset");
        fs::write(
            dir.path().join("card-news.toml"),
            "output = \"from-config.html\"\n",
        )
        .expect("write config");

        card_news(&dir)
            .args(["--data", "news.json", "--output", "from-cli.html"])
            .assert()
            .success();

        assert!(dir.path().join("from-cli.html").exists());
        assert!(!dir.path().join("from-config.html").exists());
    }

    #[test]
    fn explicit_config_paths_are_relative_to_config_file() {
        let dir = TempDir::new().expect("temp dir");
        let site = dir.path().join("site");
        fs::create_dir_all(&site).expect("create site dir");
        fs::write(site.join("news.json"), ONE_ITEM).expect("write dataset");
        fs::write(
            site.join("cfg.toml"),
            "data = \"news.json\"\noutput = \"index.html\"\n",
        )
        .expect("write config");

        card_news(&dir)
            .args(["--config", "site/cfg.toml"])
            .assert()
            .success();

        let html = fs::read_to_string(site.join("index.html")).expect("read output");
        assert!(html.contains("<h2>A</h2>"));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn explicit_invalid_config_fails() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("bad.toml"), "inline_css = = true").expect("write config");

        card_news(&dir)
            .args(["--config", "bad.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("bad.toml"));
    }
}
