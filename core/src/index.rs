use crate::similarity::cosine_similarity;
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

pub type TermId = usize;

/// Result cap used when the caller has no preference.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub term_frequency: HashMap<String, u32>,
    /// tf-idf weights in vocabulary order, as of the last insertion
    pub vector: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
}

/// In-memory TF-IDF index ranked by cosine similarity.
///
/// Every insertion recomputes IDF over the whole corpus and revectorizes every
/// stored document. `clear` drops the documents but keeps the vocabulary and
/// IDF table, so terms from removed documents still occupy vector dimensions.
#[derive(Debug, Default)]
pub struct TfIdfIndex {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    idf: Vec<f64>,
    documents: Vec<Document>,
}

/// Count occurrences of each distinct term.
pub fn term_frequency<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, u32> {
    let mut tf: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    tf
}

impl TfIdfIndex {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn vocabulary_len(&self) -> usize { self.terms.len() }

    pub fn documents(&self) -> &[Document] { &self.documents }

    /// Current IDF of `term`, if it is part of the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let &tid = self.dictionary.get(term)?;
        self.idf.get(tid).copied()
    }

    pub fn add_document(&mut self, id: impl Into<String>, text: &str) {
        let tokens = tokenize(text);
        for token in &tokens {
            if !self.dictionary.contains_key(token) {
                self.dictionary.insert(token.clone(), self.terms.len());
                self.terms.push(token.clone());
            }
        }
        let term_frequency = term_frequency(&tokens);
        self.documents.push(Document { id: id.into(), term_frequency, vector: Vec::new() });

        self.compute_idf();
        let vectors: Vec<Vec<f64>> = self.documents.iter().map(|doc| self.vectorize(&doc.term_frequency)).collect();
        for (doc, vector) in self.documents.iter_mut().zip(vectors) {
            doc.vector = vector;
        }
        debug!(num_docs = self.documents.len(), vocabulary = self.terms.len(), "document indexed");
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let q_tokens = tokenize(query);
        let q_vector = self.vectorize(&term_frequency(&q_tokens));

        let mut scored: Vec<SearchResult> = self
            .documents
            .iter()
            .map(|doc| SearchResult { id: doc.id.clone(), score: cosine_similarity(&q_vector, &doc.vector) })
            .filter(|r| r.score > 0.0)
            .collect();
        // stable: equal scores keep insertion order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        let total_hits = scored.len();
        scored.truncate(limit);
        debug!(query, total_hits, returned = scored.len(), "search complete");
        scored
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// idf(t) = ln(N / (1 + df(t))) for every vocabulary term, over the full corpus.
    fn compute_idf(&mut self) {
        let n = self.documents.len() as f64;
        let mut df = vec![0u32; self.terms.len()];
        for doc in &self.documents {
            for term in doc.term_frequency.keys() {
                if let Some(&tid) = self.dictionary.get(term) {
                    df[tid] += 1;
                }
            }
        }
        self.idf = df.into_iter().map(|d| (n / (1.0 + d as f64)).ln()).collect();
    }

    /// Project a term-frequency map onto the current vocabulary. Unknown terms are ignored.
    fn vectorize(&self, tf: &HashMap<String, u32>) -> Vec<f64> {
        let mut vector = vec![0.0f64; self.terms.len()];
        for (term, &count) in tf {
            if let Some(&tid) = self.dictionary.get(term) {
                let idf = self.idf.get(tid).copied().unwrap_or(0.0);
                vector[tid] = count as f64 * idf;
            }
        }
        vector
    }
}
