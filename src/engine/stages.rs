#![forbid(unsafe_code)]

//! Stage orchestrator
//!
//! A migration is four stages run in fixed order, each wrapped in its own
//! failure boundary: a stage that fails is reported and the remaining
//! stages still run. Inside the bulk stage there is deliberately no
//! per-file boundary — an error on one file abandons the rest of that
//! stage's file list. Files already rewritten stay rewritten; there is no
//! rollback.

use crate::config::Config;
use crate::engine::file_walker::{FileWalker, FileWalkerError};
use crate::error::RuleError;
use crate::output::StatusReporter;
use crate::rewrite::{ContextualRewriter, ImportRewriter, LayerCascade, Rewrite, TokenRewriter};
use crate::rules::{GlobalRenames, RuleSet};
use crate::types::GlobPattern;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The four migration stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Rewrite the import-map file resolved through the project settings
    ImportMap,
    /// Rewrite the type-declaration configuration
    TypeConfig,
    /// Rewrite the editor settings file
    EditorSettings,
    /// Bulk rewrite of source modules and asset files
    Files,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 4] = [
        Stage::ImportMap,
        Stage::TypeConfig,
        Stage::EditorSettings,
        Stage::Files,
    ];

    /// Human-readable stage name used in status lines
    pub fn name(&self) -> &'static str {
        match self {
            Stage::ImportMap => "import map",
            Stage::TypeConfig => "type declarations",
            Stage::EditorSettings => "editor settings",
            Stage::Files => "sources and assets",
        }
    }
}

/// Errors produced within a single stage
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing '{}' in {}", .field, .file.display())]
    MissingField { file: PathBuf, field: String },

    #[error("Invalid path mapping pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("File walker error: {0}")]
    Walk(#[from] FileWalkerError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Result of one stage
#[derive(Debug)]
pub struct StageOutcome {
    pub stage: Stage,
    pub result: Result<(), StageError>,
}

/// Results of a full migration run
#[derive(Debug)]
pub struct MigrationReport {
    pub outcomes: Vec<StageOutcome>,
}

impl MigrationReport {
    /// Returns true when every stage completed
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Number of failed stages
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// A configured migration over one project root
pub struct Migration<'a> {
    root: &'a Path,
    config: &'a Config,
}

impl<'a> Migration<'a> {
    /// Creates a migration; the root must already be verified to exist
    pub fn new(root: &'a Path, config: &'a Config) -> Self {
        Migration { root, config }
    }

    /// Run every stage in order, reporting one line per stage
    ///
    /// Stages do not share in-memory state; later stages see earlier
    /// stages' effects only through the files on disk.
    pub fn run(&self, reporter: &mut StatusReporter) -> MigrationReport {
        let mut outcomes = Vec::with_capacity(Stage::ALL.len());

        for stage in Stage::ALL {
            let result = match stage {
                Stage::ImportMap => self.rewrite_import_map(),
                Stage::TypeConfig => self.rewrite_type_config(),
                Stage::EditorSettings => self.rewrite_editor_settings(),
                Stage::Files => self.rewrite_files(),
            };

            match &result {
                Ok(()) => reporter.stage_ok(stage.name()),
                Err(e) => reporter.stage_error(stage.name(), e),
            }

            outcomes.push(StageOutcome { stage, result });
        }

        MigrationReport { outcomes }
    }

    /// Stage (a): import-map rewrite
    ///
    /// The settings file names the import map through a `project://`
    /// pointer. Superseded entries are dropped, replacements inserted,
    /// and the map is written back tab-indented as the engine formats it.
    fn rewrite_import_map(&self) -> Result<(), StageError> {
        let cfg = &self.config.stages.import_map;

        let settings_path = self.root.join(&cfg.settings_file);
        let settings: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&settings_path)?)?;

        let pointer = settings
            .pointer("/script/importMap")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| StageError::MissingField {
                file: settings_path.clone(),
                field: "script.importMap".to_string(),
            })?;

        let map_path = self
            .root
            .join(pointer.strip_prefix("project://").unwrap_or(pointer));

        let mut import_tab: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&map_path)?)?;

        let imports = import_tab
            .get_mut("imports")
            .and_then(serde_json::Value::as_object_mut)
            .ok_or_else(|| StageError::MissingField {
                file: map_path.clone(),
                field: "imports".to_string(),
            })?;

        for name in &cfg.remove {
            // shift_remove keeps the surviving entries in document order
            imports.shift_remove(name);
        }
        for entry in &cfg.insert {
            imports.insert(
                entry.name.clone(),
                serde_json::Value::String(entry.path.clone()),
            );
        }

        fs::write(&map_path, to_tab_indented_json(&import_tab)?)?;
        Ok(())
    }

    /// Stage (b): type-declaration configuration rewrite
    ///
    /// Each path mapping replaces the whole `"<old>": [ ... ]` entry
    /// (non-greedy to the first `]`, across lines) with a single-entry
    /// array under the new key, then the plain literal fixes run.
    fn rewrite_type_config(&self) -> Result<(), StageError> {
        let cfg = &self.config.stages.type_config;
        let path = self.root.join(&cfg.file);
        let mut text = fs::read_to_string(&path)?;

        for mapping in &cfg.paths {
            let pattern = Regex::new(&format!(
                r#"(?s)"{}":.+?\]"#,
                regex::escape(&mapping.old)
            ))?;
            let replacement = format!("\"{}\": [\"{}\"]", mapping.new, mapping.entry);
            text = pattern
                .replace_all(&text, regex::NoExpand(&replacement))
                .into_owned();
        }

        text = TokenRewriter::new(&cfg.rewrites).rewrite(&text);

        fs::write(&path, text)?;
        Ok(())
    }

    /// Stage (c): editor settings rewrite; a missing file is success
    fn rewrite_editor_settings(&self) -> Result<(), StageError> {
        let cfg = &self.config.stages.editor_settings;
        let path = self.root.join(&cfg.file);

        if !path.exists() {
            return Ok(());
        }

        let text = fs::read_to_string(&path)?;
        fs::write(&path, TokenRewriter::new(&cfg.rewrites).rewrite(&text))?;
        Ok(())
    }

    /// Stage (d): bulk source and asset rewrite
    ///
    /// The rule tables load here, once, so a malformed table fails this
    /// stage alone. Source files pass through import, cascade, and
    /// contextual rewrites in that order; asset files get the literal
    /// token pass. A file error abandons the remainder of the list.
    fn rewrite_files(&self) -> Result<(), StageError> {
        let cfg = &self.config.stages.files;

        let ruleset = RuleSet::load(Path::new(&self.config.rules.layers))?;
        let globals = GlobalRenames::load(Path::new(&self.config.rules.globals))?;

        let import = ImportRewriter::new(ruleset.import_layer());
        let cascade = LayerCascade::new(ruleset.cascade_layers());
        let contextual = ContextualRewriter::new(&globals);

        for path in self.discover(&cfg.sources, &cfg.exclude)? {
            let text = fs::read_to_string(&path)?;
            let text = import.rewrite(&text);
            let text = cascade.rewrite(&text);
            let text = contextual.rewrite(&text);
            fs::write(&path, text)?;
        }

        let tokens = TokenRewriter::new(&cfg.tokens);
        for path in self.discover(&cfg.assets, &cfg.exclude)? {
            let text = fs::read_to_string(&path)?;
            fs::write(&path, tokens.rewrite(&text))?;
        }

        Ok(())
    }

    /// Discover files under the root matching the given globs, sorted
    fn discover(
        &self,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Vec<PathBuf>, StageError> {
        if include.is_empty() {
            return Ok(Vec::new());
        }
        let walker = FileWalker::new(self.root, include, exclude)?;
        Ok(walker.collect_sorted()?)
    }
}

/// Serialize a JSON value pretty-printed with tab indentation
fn to_tab_indented_json(value: &serde_json::Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
