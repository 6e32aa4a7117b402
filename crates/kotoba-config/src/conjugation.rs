use serde::{Deserialize, Serialize};

fn default_prefer_kana_form() -> bool {
    false
}

fn default_normalize_readings() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConjugationConfig {
    /// Conjugate the kana reading even when a kanji form exists
    #[serde(default = "default_prefer_kana_form")]
    pub prefer_kana_form: bool,
    /// NFKC-normalize readings before conjugating
    #[serde(default = "default_normalize_readings")]
    pub normalize_readings: bool,
}

impl Default for ConjugationConfig {
    fn default() -> Self {
        Self {
            prefer_kana_form: default_prefer_kana_form(),
            normalize_readings: default_normalize_readings(),
        }
    }
}
