use kotoba_core::language::Reading;
use serde::Deserialize;

use crate::pos::{RawPosTag, deserialize_tags};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Invalid payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Word entry of a Jotoba word search
#[derive(Debug, Clone, Deserialize)]
pub struct JotobaWord {
    pub reading: JotobaReading,
    #[serde(default)]
    pub common: bool,
    #[serde(default)]
    pub senses: Vec<JotobaSense>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub pitch: Vec<PitchPart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JotobaReading {
    pub kana: String,
    #[serde(default)]
    pub kanji: Option<String>,
    #[serde(default)]
    pub furigana: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JotobaSense {
    #[serde(default)]
    pub glosses: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub pos: Vec<RawPosTag>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PitchPart {
    pub part: String,
    pub high: bool,
}

#[derive(Debug, Deserialize)]
struct WordsResponse {
    words: Vec<JotobaWord>,
}

impl JotobaWord {
    pub fn to_reading(&self) -> Reading {
        Reading {
            kana: self.reading.kana.clone(),
            kanji: self.reading.kanji.clone(),
        }
    }

    /// ↑ before high parts and ↓ before later low ones, e.g. "た↑べ↓る"
    pub fn pitch_notation(&self) -> Option<String> {
        if self.pitch.is_empty() {
            return None;
        }

        let mut notation = String::new();
        for (i, part) in self.pitch.iter().enumerate() {
            if part.high {
                notation.push('↑');
            } else if i > 0 {
                notation.push('↓');
            }
            notation.push_str(&part.part);
        }
        Some(notation)
    }
}

/// Parse the `words` of a word search response
pub fn parse_words(json: &str) -> Result<Vec<JotobaWord>, PayloadError> {
    let response: WordsResponse = serde_json::from_str(json)?;
    Ok(response.words)
}
