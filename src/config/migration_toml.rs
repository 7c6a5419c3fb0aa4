//! Parsing and validation for nameshift.toml configuration files
//!
//! The config carries everything the stages need besides the two JSON
//! rule tables: target file locations, removal/insertion lists for the
//! import map, path mappings for the type-declaration file, literal
//! fixes, and the source/asset globs for the bulk sweep.

use crate::error::ConfigError;
use crate::rules::TokenRule;
use crate::types::GlobPattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration struct for nameshift.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Migration metadata
    pub migration: MigrationMeta,

    /// Rule table locations
    #[serde(default)]
    pub rules: RuleTables,

    /// Per-stage parameters
    #[serde(default)]
    pub stages: StagesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.migration.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.migration.version
            )));
        }

        if self.rules.layers.is_empty() {
            return Err(ConfigError::Validation(
                "rules.layers must name the layered rule table file".to_string(),
            ));
        }
        if self.rules.globals.is_empty() {
            return Err(ConfigError::Validation(
                "rules.globals must name the globals rule table file".to_string(),
            ));
        }

        validate_globs("stages.files.sources", &self.stages.files.sources)?;
        validate_globs("stages.files.assets", &self.stages.files.assets)?;
        validate_globs("stages.files.exclude", &self.stages.files.exclude)?;

        for token in &self.stages.files.tokens {
            if token.from.is_empty() {
                return Err(ConfigError::Validation(
                    "asset token 'from' must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Validate glob patterns by attempting to compile them with globset
fn validate_globs(field: &str, patterns: &[GlobPattern]) -> Result<(), ConfigError> {
    for pattern in patterns {
        globset::Glob::new(pattern.as_str()).map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid glob pattern '{}' in {}: {}",
                pattern.as_str(),
                field,
                e
            ))
        })?;
    }
    Ok(())
}

/// Migration metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Length of the pre-flight cancellation window, in seconds
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: u64,
}

fn default_delay_seconds() -> u64 {
    5
}

/// Rule table locations, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTables {
    /// Layered rename table (JSON array of objects; layer 0 = imports)
    #[serde(default = "default_layers_path")]
    pub layers: String,

    /// Contextual globals table (flat JSON object)
    #[serde(default = "default_globals_path")]
    pub globals: String,
}

impl Default for RuleTables {
    fn default() -> Self {
        RuleTables {
            layers: default_layers_path(),
            globals: default_globals_path(),
        }
    }
}

fn default_layers_path() -> String {
    "rules/layers.json".to_string()
}

fn default_globals_path() -> String {
    "rules/globals.json".to_string()
}

/// Per-stage parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StagesConfig {
    /// Import-map rewrite stage
    #[serde(default)]
    pub import_map: ImportMapStage,

    /// Type-declaration configuration rewrite stage
    #[serde(default)]
    pub type_config: TypeConfigStage,

    /// Editor settings rewrite stage
    #[serde(default)]
    pub editor_settings: EditorSettingsStage,

    /// Bulk source + asset rewrite stage
    #[serde(default)]
    pub files: FilesStage,
}

/// Import-map stage parameters
///
/// The settings file holds a `script.importMap` pointer (prefixed with
/// `project://`) naming the import-map file relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportMapStage {
    /// Project settings file, relative to the root
    #[serde(default = "default_settings_file")]
    pub settings_file: String,

    /// Import entries to drop before inserting replacements
    #[serde(default)]
    pub remove: Vec<String>,

    /// Import entries to insert, in order
    #[serde(default)]
    pub insert: Vec<ImportEntry>,
}

impl Default for ImportMapStage {
    fn default() -> Self {
        ImportMapStage {
            settings_file: default_settings_file(),
            remove: Vec::new(),
            insert: Vec::new(),
        }
    }
}

fn default_settings_file() -> String {
    "settings/v2/packages/project.json".to_string()
}

/// One import-map entry to insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportEntry {
    /// Import name (the map key)
    pub name: String,
    /// Module path the name resolves to
    pub path: String,
}

/// Type-declaration stage parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeConfigStage {
    /// Type-declaration configuration file, relative to the root
    #[serde(default = "default_type_config_file")]
    pub file: String,

    /// Path-array mappings: replace the whole `"<old>": [ ... ]` entry
    /// with `"<new>": ["<entry>"]`
    #[serde(default)]
    pub paths: Vec<PathMapping>,

    /// Plain literal fixes applied after the path mappings
    #[serde(default)]
    pub rewrites: Vec<TokenRule>,
}

impl Default for TypeConfigStage {
    fn default() -> Self {
        TypeConfigStage {
            file: default_type_config_file(),
            paths: Vec::new(),
            rewrites: Vec::new(),
        }
    }
}

fn default_type_config_file() -> String {
    "tsconfig.json".to_string()
}

/// One path-array mapping in the type-declaration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMapping {
    /// Key of the entry to replace
    pub old: String,
    /// Replacement key
    pub new: String,
    /// Sole entry of the replacement array
    pub entry: String,
}

/// Editor settings stage parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettingsStage {
    /// Editor settings file, relative to the root; a missing file skips
    /// the stage successfully
    #[serde(default = "default_editor_settings_file")]
    pub file: String,

    /// Plain literal fixes
    #[serde(default)]
    pub rewrites: Vec<TokenRule>,
}

impl Default for EditorSettingsStage {
    fn default() -> Self {
        EditorSettingsStage {
            file: default_editor_settings_file(),
            rewrites: Vec::new(),
        }
    }
}

fn default_editor_settings_file() -> String {
    ".vscode/settings.json".to_string()
}

/// Bulk rewrite stage parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesStage {
    /// Globs selecting source modules (import + cascade + contextual
    /// rewrites)
    #[serde(default = "default_sources")]
    pub sources: Vec<GlobPattern>,

    /// Globs selecting asset files (literal token rewrites)
    #[serde(default = "default_assets")]
    pub assets: Vec<GlobPattern>,

    /// Globs excluded from both sweeps
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,

    /// Literal token pairs for asset text
    #[serde(default)]
    pub tokens: Vec<TokenRule>,
}

impl Default for FilesStage {
    fn default() -> Self {
        FilesStage {
            sources: default_sources(),
            assets: default_assets(),
            exclude: Vec::new(),
            tokens: Vec::new(),
        }
    }
}

fn default_sources() -> Vec<GlobPattern> {
    vec![GlobPattern::new("assets/**/*.ts")]
}

fn default_assets() -> Vec<GlobPattern> {
    vec![
        GlobPattern::new("assets/**/*.prefab"),
        GlobPattern::new("assets/**/*.scene"),
    ]
}
