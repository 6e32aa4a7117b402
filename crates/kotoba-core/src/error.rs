use crate::grammar::{IrregularRoot, PosCategory};

/// Reasons a descriptor cannot be handed to a conjugator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("Not a verb: category {0:?}")]
    NotAVerb(Option<PosCategory>),

    #[error("Invalid conjugation class: {0}")]
    InvalidConjugationClass(String),

    #[error("Unsupported lexical root {0:?}, normalize the descriptor first")]
    UnsupportedLexicalRoot(IrregularRoot),
}
