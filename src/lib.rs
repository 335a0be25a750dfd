pub mod concordance;
pub mod pipeline;
pub mod splitter;

// Re-export main types for convenient access
pub use concordance::{prefix, Concordance};
pub use pipeline::{build_concordance, run, RunConfig, RunStats};
pub use splitter::{clean_word, SentenceSplitter};
