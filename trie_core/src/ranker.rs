//! Relevance scoring and ranking of trie candidates.
//!
//! Candidates come straight from a trie node and may repeat an id. Ranking
//! keeps the first occurrence of each id, scores it, and drains a max-heap of
//! `(score, id)` so equal scores fall back to the larger id first.

use crate::tokenizer::count_keyword;
use crate::DocumentId;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::{BinaryHeap, HashSet};

/// Relevance of a document for a query keyword. Implementations must be
/// deterministic.
pub trait Scorer {
    fn score(&self, query: &str, id: DocumentId, text: &str) -> f32;
}

impl<F> Scorer for F
where
    F: Fn(&str, DocumentId, &str) -> f32,
{
    fn score(&self, query: &str, id: DocumentId, text: &str) -> f32 {
        self(query, id, text)
    }
}

/// Number of times the query keyword occurs in the tokenized document.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermFrequency;

impl Scorer for TermFrequency {
    fn score(&self, query: &str, _id: DocumentId, text: &str) -> f32 {
        count_keyword(text, query) as f32
    }
}

/// Ordered by score, then by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub score: OrderedFloat<f32>,
    pub id: DocumentId,
}

impl ScoredCandidate {
    pub fn new(score: f32, id: DocumentId) -> Self {
        Self { score: OrderedFloat(score), id }
    }

    pub fn score(&self) -> f32 { self.score.0 }
}

/// Score candidates, drop repeated ids (first occurrence wins) and return the
/// survivors best first. At most `limit` entries are drained when given.
pub fn rank_scored<F>(
    candidates: &[DocumentId],
    mut score_fn: F,
    limit: Option<usize>,
) -> Vec<ScoredCandidate>
where
    F: FnMut(DocumentId) -> f32,
{
    let mut seen: HashSet<DocumentId> = HashSet::with_capacity(candidates.len());
    let mut heap: BinaryHeap<ScoredCandidate> = BinaryHeap::with_capacity(candidates.len());
    for &id in candidates {
        if seen.insert(id) {
            heap.push(ScoredCandidate::new(score_fn(id), id));
        }
    }

    let take = limit.unwrap_or(heap.len()).min(heap.len());
    let mut out = Vec::with_capacity(take);
    while out.len() < take {
        match heap.pop() {
            Some(c) => out.push(c),
            None => break,
        }
    }
    out
}

/// Ids of [`rank_scored`] without a limit.
pub fn rank_and_dedup<F>(candidates: &[DocumentId], score_fn: F) -> Vec<DocumentId>
where
    F: FnMut(DocumentId) -> f32,
{
    rank_scored(candidates, score_fn, None).into_iter().map(|c| c.id).collect()
}
