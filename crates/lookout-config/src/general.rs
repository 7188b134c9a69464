//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Editor command for `org edit`. Empty means `$VISUAL`, then `$EDITOR`.
    #[serde(default)]
    pub editor: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            editor: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.format, "table");
        assert!(config.editor.is_empty());
    }
}
