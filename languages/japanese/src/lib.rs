pub mod classifier;
pub mod conjugator;
pub mod custom_pos;
pub mod jotoba;
pub mod kana;
pub mod pos;
pub mod pos_format;
pub mod processor;

#[cfg(test)]
mod tests;

pub use classifier::{JapanesePosClassifier, classify};
pub use conjugator::JapaneseConjugator;
pub use jotoba::{JotobaWord, parse_words};
pub use pos::RawPosTag;
pub use pos_format::PosSummary;
pub use processor::JapaneseMorphology;
