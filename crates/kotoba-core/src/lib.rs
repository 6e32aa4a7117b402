pub mod conjugation;
pub mod error;
pub mod grammar;
pub mod language;
pub mod preprocess;
