use unicode_normalization::UnicodeNormalization;

use crate::language::Reading;

pub trait Preprocessor {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), folds half-width kana
        text.nfkc().filter(|c| !c.is_whitespace()).collect()
    }

    fn process_reading(&self, reading: &Reading) -> Reading {
        Reading {
            kana: self.process(&reading.kana),
            kanji: reading
                .kanji
                .as_deref()
                .map(|kanji| self.process(kanji))
                .filter(|kanji| !kanji.is_empty()),
        }
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
