//! List command implementation
//!
//! Loads both rule tables plus the configured token pairs and prints a
//! summary, so a table author can sanity-check ordering and counts before
//! running the migration.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::error::MigrateError;
use crate::rules::{GlobalRenames, RuleSet};
use serde::Serialize;
use std::path::Path;

/// Run the list command
pub fn run_list(format: OutputFormat) -> i32 {
    match run_list_inner(format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_list_inner(format: OutputFormat) -> Result<(), MigrateError> {
    let config = super::common::load_config()?;
    let ruleset = RuleSet::load(Path::new(&config.rules.layers))?;
    let globals = GlobalRenames::load(Path::new(&config.rules.globals))?;

    match format {
        OutputFormat::Human => print_human(&config, &ruleset, &globals),
        OutputFormat::Jsonl => print_jsonl(&config, &ruleset, &globals)?,
    }

    Ok(())
}

fn print_human(
    config: &crate::config::Config,
    ruleset: &RuleSet,
    globals: &GlobalRenames,
) {
    println!(
        "Layers: {} ({} rename pairs, layer 0 = imports)",
        ruleset.layer_count(),
        ruleset.rule_count()
    );
    for (index, layer) in std::iter::once(ruleset.import_layer())
        .chain(ruleset.cascade_layers().iter())
        .enumerate()
    {
        println!("  layer {}: {} pair(s)", index, layer.len());
        for rule in layer.rules() {
            println!("    {} -> {}", rule.from, rule.to);
        }
    }

    println!("Globals: {} symbol(s)", globals.len());
    for rule in globals.rules() {
        println!("  {} -> {}", rule.symbol, rule.replacement);
    }

    println!(
        "Asset tokens: {} pair(s)",
        config.stages.files.tokens.len()
    );
    for token in &config.stages.files.tokens {
        println!("  {} -> {}", token.from, token.to);
    }
}

/// JSONL output structure, one line per rule
#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    kind: &'static str,
    layer: Option<usize>,
    from: &'a str,
    to: &'a str,
}

fn print_jsonl(
    config: &crate::config::Config,
    ruleset: &RuleSet,
    globals: &GlobalRenames,
) -> Result<(), MigrateError> {
    let mut lines = Vec::new();

    for (index, layer) in std::iter::once(ruleset.import_layer())
        .chain(ruleset.cascade_layers().iter())
        .enumerate()
    {
        let kind = if index == 0 { "import" } else { "layer" };
        for rule in layer.rules() {
            lines.push(JsonlRule {
                kind,
                layer: Some(index),
                from: &rule.from,
                to: &rule.to,
            });
        }
    }

    for rule in globals.rules() {
        lines.push(JsonlRule {
            kind: "global",
            layer: None,
            from: &rule.symbol,
            to: &rule.replacement,
        });
    }

    for token in &config.stages.files.tokens {
        lines.push(JsonlRule {
            kind: "token",
            layer: None,
            from: &token.from,
            to: &token.to,
        });
    }

    for line in lines {
        println!(
            "{}",
            serde_json::to_string(&line).map_err(crate::error::RuleError::Parse)?
        );
    }

    Ok(())
}
