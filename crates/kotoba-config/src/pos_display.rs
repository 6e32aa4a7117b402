use serde::{Deserialize, Serialize};

fn default_shorten() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PosDisplayConfig {
    /// Use abbreviations (`v.`, `adj.`) instead of full category names
    #[serde(default = "default_shorten")]
    pub shorten: bool,
    /// Fold the subtype into the label, e.g. `う-v.`
    #[serde(default)]
    pub prefix: bool,
}

impl Default for PosDisplayConfig {
    fn default() -> Self {
        Self {
            shorten: default_shorten(),
            prefix: false,
        }
    }
}
