//! CLI integration tests at the library level
//!
//! These call the `run_*` command functions directly and verify exit
//! codes and on-disk effects. They change the working directory, so they
//! run serially.

mod common;

use common::{config_toml, read_file, setup_project, setup_rules};
use nameshift::cli::args::{ColorChoice, OutputFormat};
use nameshift::cli::{init, list, migrate};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run `f` with the working directory set to a fresh temp dir
fn in_temp_dir<F>(f: F)
where
    F: FnOnce(&Path),
{
    let temp_dir = TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    f(temp_dir.path());

    std::env::set_current_dir(&original_dir).unwrap();
}

#[test]
#[serial]
fn migrate_with_missing_root_fails_before_any_stage() {
    in_temp_dir(|dir| {
        setup_rules(dir);
        setup_project(&dir.join("proj"));
        fs::write(dir.join("nameshift.toml"), config_toml(dir)).unwrap();

        let code = migrate::run_migrate("missing-root", true, ColorChoice::Never);
        assert_eq!(code, 2);

        // Zero mutations: the fixture is exactly as written
        let player = read_file(&dir.join("proj"), "assets/game/player.ts");
        assert!(player.contains("import core from \"core\""));
        let import_map = read_file(&dir.join("proj"), "import-map.json");
        assert!(import_map.contains("\"core\""));
    });
}

#[test]
#[serial]
fn migrate_without_config_fails() {
    in_temp_dir(|dir| {
        setup_project(&dir.join("proj"));

        let code = migrate::run_migrate("proj", true, ColorChoice::Never);
        assert_eq!(code, 2);
    });
}

#[test]
#[serial]
fn migrate_happy_path_exits_zero() {
    in_temp_dir(|dir| {
        setup_rules(dir);
        setup_project(&dir.join("proj"));
        fs::write(dir.join("nameshift.toml"), config_toml(dir)).unwrap();

        let code = migrate::run_migrate("proj", true, ColorChoice::Never);
        assert_eq!(code, 0);

        let player = read_file(&dir.join("proj"), "assets/game/player.ts");
        assert!(player.contains("import Framework from \"Framework\";"));
    });
}

#[test]
#[serial]
fn migrate_with_failing_stage_exits_one() {
    in_temp_dir(|dir| {
        setup_rules(dir);
        setup_project(&dir.join("proj"));
        fs::write(dir.join("nameshift.toml"), config_toml(dir)).unwrap();
        fs::remove_file(dir.join("proj/tsconfig.json")).unwrap();

        let code = migrate::run_migrate("proj", true, ColorChoice::Never);
        assert_eq!(code, 1);
    });
}

#[test]
#[serial]
fn init_then_list_round_trips() {
    in_temp_dir(|_dir| {
        let result = init::run_init(false).expect("init should succeed");
        assert_eq!(result.created.len(), 4);

        assert_eq!(list::run_list(OutputFormat::Human), 0);
        assert_eq!(list::run_list(OutputFormat::Jsonl), 0);
    });
}

#[test]
#[serial]
fn list_without_config_fails() {
    in_temp_dir(|_dir| {
        assert_eq!(list::run_list(OutputFormat::Human), 2);
    });
}
