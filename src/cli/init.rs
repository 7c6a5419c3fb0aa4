//! Initialize a nameshift project
//!
//! Creates the configuration file and rule table stubs for a new
//! migration.

use std::fs;
use std::path::Path;

/// Default content for nameshift.toml
const DEFAULT_NAMESHIFT_TOML: &str = r#"[migration]
version = "1"

# Seconds granted to cancel with Ctrl+C before files are rewritten
delay_seconds = 5

[rules]
layers = "rules/layers.json"
globals = "rules/globals.json"

[stages.import_map]
settings_file = "settings/v2/packages/project.json"
# Import entries to drop before inserting replacements
remove = []

# [[stages.import_map.insert]]
# name = "Framework"
# path = "./extensions/Framework/Init.ts"

[stages.type_config]
file = "tsconfig.json"

# [[stages.type_config.paths]]
# old = "framework"
# new = "Framework"
# entry = "./types/Framework.d.ts"

# [[stages.type_config.rewrites]]
# from = "./extensions/old-framework/"
# to = "./extensions/Framework/"

[stages.editor_settings]
file = ".vscode/settings.json"

# [[stages.editor_settings.rewrites]]
# from = "./assets/old-framework/**"
# to = "./assets/Framework/**"

[stages.files]
sources = ["assets/**/*.ts"]
assets = ["assets/**/*.prefab", "assets/**/*.scene"]
exclude = []

# [[stages.files.tokens]]
# from = "audio_base/unit"
# to = "AudioBase/Unit"
"#;

/// Default content for rules/layers.json
///
/// Layer 0 renames modules in symmetric import statements; later layers
/// run as the substring cascade, last layer first.
const DEFAULT_LAYERS_JSON: &str = r#"[
	{},
	{}
]
"#;

/// Default content for rules/globals.json
const DEFAULT_GLOBALS_JSON: &str = "{}\n";

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// Result of init command
#[derive(Debug, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

impl InitResult {
    fn new() -> Self {
        Self {
            created: Vec::new(),
            skipped: Vec::new(),
            overwritten: Vec::new(),
        }
    }
}

/// Run the init command
///
/// Creates the following files:
/// - nameshift.toml (migration configuration)
/// - rules/layers.json (layered rename table stub)
/// - rules/globals.json (contextual globals table stub)
///
/// # Arguments
/// * `force` - If true, overwrite existing files. If false, skip them.
pub fn run_init(force: bool) -> Result<InitResult, InitError> {
    let mut result = InitResult::new();

    handle_file(
        Path::new("nameshift.toml"),
        DEFAULT_NAMESHIFT_TOML,
        force,
        &mut result,
    )?;

    create_directory("rules", &mut result)?;

    handle_file(
        Path::new("rules/layers.json"),
        DEFAULT_LAYERS_JSON,
        force,
        &mut result,
    )?;
    handle_file(
        Path::new("rules/globals.json"),
        DEFAULT_GLOBALS_JSON,
        force,
        &mut result,
    )?;

    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    path: &Path,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let path_str = path_to_string(path)?;

    if path.exists() {
        if force {
            fs::write(path, content)?;
            result.overwritten.push(path_str);
        } else {
            result.skipped.push(path_str);
        }
    } else {
        fs::write(path, content)?;
        result.created.push(path_str);
    }

    Ok(())
}

/// Create a directory if it doesn't exist
fn create_directory(path: &str, result: &mut InitResult) -> Result<(), InitError> {
    let dir_path = Path::new(path);

    if dir_path.exists() {
        if dir_path.is_dir() {
            Ok(())
        } else {
            Err(InitError::Path(format!(
                "Path '{}' exists but is not a directory",
                path
            )))
        }
    } else {
        fs::create_dir_all(dir_path)?;
        result.created.push(format!("{}/", path));
        Ok(())
    }
}

/// Convert a path to a string representation
fn path_to_string(path: &Path) -> Result<String, InitError> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| InitError::Path(format!("Invalid UTF-8 in path: {:?}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rules::{GlobalRenames, RuleSet};
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests change the working directory; serialize them
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn with_temp_dir<F, R>(f: F) -> R
    where
        F: FnOnce(&TempDir) -> R,
    {
        let _guard = TEST_MUTEX.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        let result = f(&temp_dir);

        std::env::set_current_dir(&original_dir).unwrap();
        result
    }

    #[test]
    fn test_init_creates_all_files() {
        with_temp_dir(|temp_dir| {
            let result = run_init(false).expect("init should succeed");

            assert!(result.created.contains(&"nameshift.toml".to_string()));
            assert!(result.created.contains(&"rules/".to_string()));
            assert!(result.created.contains(&"rules/layers.json".to_string()));
            assert!(result.created.contains(&"rules/globals.json".to_string()));
            assert!(result.skipped.is_empty());
            assert!(result.overwritten.is_empty());

            assert!(temp_dir.path().join("nameshift.toml").exists());
            assert!(temp_dir.path().join("rules/layers.json").exists());
            assert!(temp_dir.path().join("rules/globals.json").exists());
        });
    }

    #[test]
    fn test_init_templates_are_loadable() {
        with_temp_dir(|temp_dir| {
            run_init(false).expect("init should succeed");

            let config = Config::load(temp_dir.path().join("nameshift.toml"))
                .expect("template config should parse");
            assert_eq!(config.migration.delay_seconds, 5);

            let ruleset = RuleSet::load(&temp_dir.path().join("rules/layers.json"))
                .expect("template layers should parse");
            assert_eq!(ruleset.layer_count(), 2);

            let globals = GlobalRenames::load(&temp_dir.path().join("rules/globals.json"))
                .expect("template globals should parse");
            assert!(globals.is_empty());
        });
    }

    #[test]
    fn test_init_skips_existing_files_without_force() {
        with_temp_dir(|temp_dir| {
            fs::write("nameshift.toml", "existing content").unwrap();

            let result = run_init(false).expect("init should succeed");

            assert!(result.skipped.contains(&"nameshift.toml".to_string()));
            assert!(!result.created.contains(&"nameshift.toml".to_string()));

            let content = fs::read_to_string(temp_dir.path().join("nameshift.toml")).unwrap();
            assert_eq!(content, "existing content");

            // Other files are still created
            assert!(result.created.contains(&"rules/layers.json".to_string()));
        });
    }

    #[test]
    fn test_init_overwrites_with_force() {
        with_temp_dir(|temp_dir| {
            fs::write("nameshift.toml", "old content").unwrap();

            let result = run_init(true).expect("init should succeed");

            assert!(result.overwritten.contains(&"nameshift.toml".to_string()));
            let content = fs::read_to_string(temp_dir.path().join("nameshift.toml")).unwrap();
            assert!(content.contains("[migration]"));
        });
    }

    #[test]
    fn test_init_is_idempotent() {
        with_temp_dir(|_temp_dir| {
            let result1 = run_init(false).expect("first init should succeed");
            assert_eq!(result1.created.len(), 4); // 3 files + 1 directory

            let result2 = run_init(false).expect("second init should succeed");
            assert!(result2.created.is_empty());
            assert_eq!(result2.skipped.len(), 3);
            assert!(result2.overwritten.is_empty());
        });
    }

    #[test]
    fn test_init_error_when_rules_is_a_file() {
        with_temp_dir(|_temp_dir| {
            fs::write("rules", "this is a file").unwrap();

            let result = run_init(false);
            let err = result.unwrap_err();
            assert!(err.to_string().contains("not a directory"));
        });
    }
}
