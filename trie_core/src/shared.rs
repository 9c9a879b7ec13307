use crate::engine::SearchEngine;
use crate::error::Result;
use crate::ranker::{ScoredCandidate, Scorer, TermFrequency};
use crate::DocumentId;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one engine shared across threads. Adding a document
/// takes the write lock; searches share the read lock.
pub struct SharedSearchEngine<S = TermFrequency> {
    inner: Arc<RwLock<SearchEngine<S>>>,
}

impl<S> Clone for SharedSearchEngine<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl Default for SharedSearchEngine {
    fn default() -> Self { Self::new(SearchEngine::new()) }
}

impl<S: Scorer> SharedSearchEngine<S> {
    pub fn new(engine: SearchEngine<S>) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn add_document(&self, text: &str) -> DocumentId {
        self.inner.write().add_document(text)
    }

    pub fn search(&self, query: &str) -> Vec<DocumentId> {
        self.inner.read().search(query)
    }

    pub fn search_scored(&self, query: &str) -> Vec<ScoredCandidate> {
        self.inner.read().search_scored(query)
    }

    pub fn search_top_k(&self, query: &str, k: usize) -> Vec<ScoredCandidate> {
        self.inner.read().search_top_k(query, k)
    }

    pub fn get_document_text(&self, id: DocumentId) -> Result<String> {
        self.inner.read().get_document_text(id).map(str::to_string)
    }

    pub fn len(&self) -> usize { self.inner.read().len() }

    pub fn is_empty(&self) -> bool { self.inner.read().is_empty() }
}
