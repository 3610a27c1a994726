pub mod fuzzy;
pub mod index;
pub mod similarity;
pub mod tokenizer;

pub use index::{term_frequency, Document, SearchResult, TermId, TfIdfIndex, DEFAULT_LIMIT};
pub use similarity::cosine_similarity;
