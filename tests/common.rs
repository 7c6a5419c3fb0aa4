//! Test utilities for nameshift integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Write a file under `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Read a file under `root` to a string
pub fn read_file(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Build a full project fixture resembling an engine project mid-rename
pub fn setup_project(root: &Path) {
    write_file(
        root,
        "settings/v2/packages/project.json",
        r#"{
	"script": {
		"importMap": "project://import-map.json"
	}
}
"#,
    );

    write_file(
        root,
        "import-map.json",
        r#"{
	"imports": {
		"core": "./extensions/old-framework/core.ts",
		"app_config": "./extensions/old-framework/config.ts",
		"untouched": "./keep.ts"
	}
}
"#,
    );

    write_file(
        root,
        "tsconfig.json",
        r#"{
	"compilerOptions": {
		"paths": {
			"core": [
				"./extensions/old-framework/@types/core.d.ts"
			],
			"helpers": [
				"./extensions/old-framework/helpers.ts"
			]
		}
	}
}
"#,
    );

    write_file(
        root,
        ".vscode/settings.json",
        r#"{
	"typescript.tsdk": "./extensions/old-framework/tsdk/**"
}
"#,
    );

    write_file(
        root,
        "assets/game/player.ts",
        r#"import core from "core";

const hp = data.app_config.start;
let app_config = load();
 app_config = reload();
notify(app_config);
old_unit.play();
"#,
    );

    write_file(
        root,
        "assets/ui/panel.prefab",
        "{\"__type__\": \"audio_base/unit\", \"next\": \"audio_base/unit\"}\n",
    );

    write_file(
        root,
        "assets/scenes/main.scene",
        "{\"__type__\": \"audio_base/unit\"}\n",
    );
}

/// Write the rule tables under `dir/rules/`
pub fn setup_rules(dir: &Path) {
    write_file(
        dir,
        "rules/layers.json",
        r#"[
	{"core": "Framework"},
	{"old_unit": "NewUnit"},
	{"old_helper": "NewHelper"}
]
"#,
    );

    write_file(
        dir,
        "rules/globals.json",
        r#"{"app_config": "AppConfig", "app_event": "appEvent"}
"#,
    );
}

/// Configuration TOML for the fixture, with rule table paths rooted at
/// `rules_dir` (relative paths resolve against the working directory)
pub fn config_toml(rules_dir: &Path) -> String {
    format!(
        r#"[migration]
version = "1"
delay_seconds = 0

[rules]
layers = "{layers}"
globals = "{globals}"

[stages.import_map]
settings_file = "settings/v2/packages/project.json"
remove = ["core", "app_config"]

[[stages.import_map.insert]]
name = "Framework"
path = "./extensions/Framework/Init.ts"

[[stages.import_map.insert]]
name = "AppConfig"
path = "./extensions/Framework/AppConfig.ts"

[stages.type_config]
file = "tsconfig.json"

[[stages.type_config.paths]]
old = "core"
new = "Framework"
entry = "./extensions/Framework/@types/Framework.d.ts"

[[stages.type_config.rewrites]]
from = "./extensions/old-framework/"
to = "./extensions/Framework/"

[stages.editor_settings]
file = ".vscode/settings.json"

[[stages.editor_settings.rewrites]]
from = "./extensions/old-framework/tsdk/**"
to = "./extensions/Framework/tsdk/**"

[stages.files]
sources = ["assets/**/*.ts"]
assets = ["assets/**/*.prefab", "assets/**/*.scene"]

[[stages.files.tokens]]
from = "audio_base/unit"
to = "AudioBase/Unit"
"#,
        layers = rules_dir.join("rules/layers.json").display(),
        globals = rules_dir.join("rules/globals.json").display(),
    )
}
