use kotoba_config::Config;
use kotoba_core::conjugation::ConjugationParadigm;
use kotoba_core::error::GrammarError;
use kotoba_core::grammar::{GrammarDescriptor, IrregularRoot, VerbGrammarDescriptor};
use kotoba_core::language::Reading;
use kotoba_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::classifier::JapanesePosClassifier;
use crate::conjugator::JapaneseConjugator;
use crate::jotoba::JotobaWord;
use crate::pos::RawPosTag;
use crate::pos_format::{self, PosSummary};

/// Japanese morphology: tag classification, display and conjugation
pub struct JapaneseMorphology {
    config: Config,
    classifier: JapanesePosClassifier,
    conjugator: JapaneseConjugator,
    preprocessor: DefaultPreprocessor,
}

impl Default for JapaneseMorphology {
    fn default() -> Self {
        Self::new()
    }
}

impl JapaneseMorphology {
    /// Create with configuration from the environment
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            classifier: JapanesePosClassifier::new(),
            conjugator: JapaneseConjugator::new(),
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classify_all(&self, tags: &[RawPosTag]) -> Vec<GrammarDescriptor> {
        use kotoba_core::language::PosClassifier;

        tags.iter().map(|tag| self.classifier.classify(tag)).collect()
    }

    /// Display rows for a sense's tags
    pub fn describe(&self, tags: &[RawPosTag]) -> Vec<PosSummary> {
        pos_format::describe(&self.classify_all(tags), &self.config.pos_display)
    }

    /// Validate a descriptor and conjugate the reading with it
    pub fn conjugate(
        &self,
        reading: &Reading,
        pos: &GrammarDescriptor,
    ) -> Result<ConjugationParadigm, GrammarError> {
        let verb_pos = VerbGrammarDescriptor::try_from(pos)?;
        let reading = if self.config.conjugation.normalize_readings {
            self.preprocessor.process_reading(reading)
        } else {
            reading.clone()
        };

        Ok(self.conjugator.conjugate(
            &reading,
            self.config.conjugation.prefer_kana_form,
            &verb_pos,
        ))
    }

    /// Conjugate with the first verb descriptor among a sense's tags that
    /// can be conjugated, if any
    pub fn conjugate_sense(
        &self,
        reading: &Reading,
        tags: &[RawPosTag],
    ) -> Option<ConjugationParadigm> {
        for pos in self.classify_all(tags) {
            if !pos.is_verb() || pos.verb_class.is_none() {
                continue;
            }

            // 〜する senses are listed under the bare noun
            let reading = if pos.verb_irregular_root == Some(IrregularRoot::NounSuru) {
                reading.with_suffix("する")
            } else {
                reading.clone()
            };

            match self.conjugate(&reading, &pos.normalized_for_conjugation()) {
                Ok(paradigm) => return Some(paradigm),
                Err(e) => {
                    tracing::warn!("Skipping verb descriptor for {}: {}", reading.kana, e);
                }
            }
        }

        tracing::debug!("No conjugable verb descriptor for {}", reading.kana);
        None
    }

    /// Conjugate a dictionary word using its first sense
    pub fn conjugate_word(&self, word: &JotobaWord) -> Option<ConjugationParadigm> {
        let sense = word.senses.first()?;
        self.conjugate_sense(&word.to_reading(), &sense.pos)
    }
}
