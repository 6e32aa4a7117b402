use serde::{Deserialize, Serialize};

use crate::conjugation::ConjugationParadigm;
use crate::grammar::{GrammarDescriptor, VerbGrammarDescriptor};

/// Maps a language's raw part-of-speech vocabulary onto descriptors
pub trait PosClassifier: Send + Sync {
    /// Raw tag type produced by the dictionary source
    type Tag;

    /// Classify a single raw tag. Total over the tag vocabulary.
    fn classify(&self, tag: &Self::Tag) -> GrammarDescriptor;
}

/// Derives the paradigm of a dictionary-form verb
pub trait Conjugator: Send + Sync {
    fn conjugate(
        &self,
        reading: &Reading,
        prefer_kana_form: bool,
        pos: &VerbGrammarDescriptor,
    ) -> ConjugationParadigm;
}

/// Written forms of a word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reading {
    pub kana: String,
    #[serde(default)]
    pub kanji: Option<String>,
}

impl Reading {
    pub fn new(kana: impl Into<String>, kanji: Option<&str>) -> Self {
        Self {
            kana: kana.into(),
            kanji: kanji.map(str::to_string),
        }
    }

    pub fn kana(kana: impl Into<String>) -> Self {
        Self {
            kana: kana.into(),
            kanji: None,
        }
    }

    /// Append `suffix` to every written form that does not already end with it
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let append = |text: &str| {
            if text.ends_with(suffix) {
                text.to_string()
            } else {
                format!("{text}{suffix}")
            }
        };

        Self {
            kana: append(&self.kana),
            kanji: self.kanji.as_deref().map(append),
        }
    }
}
