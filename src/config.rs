use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapdiffConfig {
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// [keys] section: one character per action
#[derive(Debug, Clone, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_left_up")]
    pub left_up: char,
    #[serde(default = "default_left_down")]
    pub left_down: char,
    #[serde(default = "default_right_up")]
    pub right_up: char,
    #[serde(default = "default_right_down")]
    pub right_down: char,
    #[serde(default = "default_bottom_up")]
    pub bottom_up: char,
    #[serde(default = "default_bottom_down")]
    pub bottom_down: char,
    #[serde(default = "default_both_up")]
    pub both_up: char,
    #[serde(default = "default_both_down")]
    pub both_down: char,
    #[serde(default = "default_reload")]
    pub reload: char,
    #[serde(default = "default_quit")]
    pub quit: char,
}

/// [tools] section: external collaborators
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_tshark")]
    pub tshark: String,
    /// Display filter applied when listing records; empty lists every frame
    #[serde(default = "default_display_filter")]
    pub display_filter: String,
    /// "builtin" or the name of an external diff program
    #[serde(default = "default_diff")]
    pub diff: String,
    #[serde(default = "default_diff_args")]
    pub diff_args: Vec<String>,
    #[serde(default = "default_context")]
    pub context: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Highlight the cursor row in the comparison pane too
    #[serde(default)]
    pub highlight_diff_cursor: bool,
}

fn default_left_up() -> char {
    'w'
}
fn default_left_down() -> char {
    's'
}
fn default_right_up() -> char {
    'o'
}
fn default_right_down() -> char {
    'l'
}
fn default_bottom_up() -> char {
    'e'
}
fn default_bottom_down() -> char {
    'd'
}
fn default_both_up() -> char {
    'k'
}
fn default_both_down() -> char {
    'j'
}
fn default_reload() -> char {
    'r'
}
fn default_quit() -> char {
    'q'
}

fn default_tshark() -> String {
    "tshark".into()
}

fn default_diff() -> String {
    "builtin".into()
}

fn default_display_filter() -> String {
    "sip".into()
}

fn default_diff_args() -> Vec<String> {
    vec!["-u".into()]
}

fn default_context() -> usize {
    3
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            left_up: default_left_up(),
            left_down: default_left_down(),
            right_up: default_right_up(),
            right_down: default_right_down(),
            bottom_up: default_bottom_up(),
            bottom_down: default_bottom_down(),
            both_up: default_both_up(),
            both_down: default_both_down(),
            reload: default_reload(),
            quit: default_quit(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            tshark: default_tshark(),
            display_filter: default_display_filter(),
            diff: default_diff(),
            diff_args: default_diff_args(),
            context: default_context(),
        }
    }
}

/// Load config by merging global defaults with local overrides.
/// Priority: `explicit` file > `./.capdiff.toml` > `~/.config/capdiff/config.toml`
/// > built-in defaults. Fields inside a section override independently.
pub fn load_config(explicit: Option<&Path>) -> CapdiffConfig {
    let global = dirs::config_dir().and_then(|d| read_table(&d.join("capdiff/config.toml")));
    let local = read_table(Path::new(".capdiff.toml"));
    let explicit = explicit.and_then(read_table);

    let mut layers = [global, local, explicit].into_iter().flatten();
    let Some(mut merged) = layers.next() else {
        return CapdiffConfig::default();
    };
    for layer in layers {
        deep_merge(&mut merged, layer);
    }

    match toml::Value::Table(merged).try_into() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed config");
            CapdiffConfig::default()
        }
    }
}

fn read_table(path: &Path) -> Option<toml::Table> {
    let content = std::fs::read_to_string(path).ok()?;
    match content.parse::<toml::Table>() {
        Ok(table) => {
            tracing::debug!(path = %path.display(), "loaded config");
            Some(table)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unparsable config");
            None
        }
    }
}

/// Recursively merge `overlay` into `base`. Overlay values win; nested tables are merged recursively.
fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
