//! In-memory keyword search over a character trie.
//!
//! Documents are split into lowercase keywords, each keyword is inserted into a
//! [`Trie`](trie::Trie), and a query walks the trie to the node spelled by the
//! query and ranks the documents found there.

use serde::{Deserialize, Serialize};

pub mod engine;
pub mod error;
pub mod indexer;
pub mod ranker;
pub mod shared;
pub mod store;
pub mod tokenizer;
pub mod trie;

pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use ranker::{ScoredCandidate, Scorer, TermFrequency};
pub use shared::SharedSearchEngine;

/// Identifier of a stored document, assigned sequentially starting at 1.
pub type DocumentId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub text: String,
}
