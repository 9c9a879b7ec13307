use crate::error::Result;
use crate::indexer::Indexer;
use crate::ranker::{rank_scored, ScoredCandidate, Scorer, TermFrequency};
use crate::{Document, DocumentId};

/// Keyword search over the documents added to this instance.
///
/// A query matches a document when it equals one of the document's lowercase
/// keywords exactly. Results are ordered by the engine's [`Scorer`], best
/// first, with each document listed once.
#[derive(Debug, Default)]
pub struct SearchEngine<S = TermFrequency> {
    indexer: Indexer,
    scorer: S,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }
}

impl<S: Scorer> SearchEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { indexer: Indexer::new(), scorer }
    }

    /// Store and index `text`, returning its id.
    pub fn add_document(&mut self, text: &str) -> DocumentId {
        let id = self.indexer.add(text);
        let keywords = self.indexer.trie().keyword_count();
        tracing::debug!(doc_id = id, keywords, "document added");
        id
    }

    /// Matching ids, best first. No match (including an empty query) yields
    /// an empty vector.
    pub fn search(&self, query: &str) -> Vec<DocumentId> {
        self.rank(query, None).into_iter().map(|c| c.id).collect()
    }

    pub fn search_scored(&self, query: &str) -> Vec<ScoredCandidate> {
        self.rank(query, None)
    }

    /// At most `k` of the best results.
    pub fn search_top_k(&self, query: &str, k: usize) -> Vec<ScoredCandidate> {
        self.rank(query, Some(k))
    }

    pub fn get_document_text(&self, id: DocumentId) -> Result<&str> {
        self.indexer.store().text(id)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.indexer.store().iter()
    }

    pub fn len(&self) -> usize { self.indexer.store().len() }

    pub fn is_empty(&self) -> bool { self.indexer.store().is_empty() }

    pub fn indexer(&self) -> &Indexer { &self.indexer }

    fn rank(&self, query: &str, limit: Option<usize>) -> Vec<ScoredCandidate> {
        let candidates = self.indexer.trie().lookup_prefix(query);
        let store = self.indexer.store();
        let ranked = rank_scored(
            candidates,
            |id| match store.text(id) {
                Ok(text) => self.scorer.score(query, id, text),
                Err(_) => 0.0,
            },
            limit,
        );
        tracing::debug!(query, candidates = candidates.len(), hits = ranked.len(), "search");
        ranked
    }
}
