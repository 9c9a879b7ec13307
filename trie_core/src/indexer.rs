use crate::store::DocumentStore;
use crate::tokenizer::tokenize;
use crate::trie::Trie;
use crate::DocumentId;

/// Owns the stored documents together with the keyword trie built from them.
#[derive(Debug, Default)]
pub struct Indexer {
    store: DocumentStore,
    trie: Trie,
}

impl Indexer {
    pub fn new() -> Self { Self::default() }

    /// Insert every keyword of `text` for `id`, once per occurrence.
    pub fn index_document(&mut self, id: DocumentId, text: &str) {
        for keyword in tokenize(text) {
            self.trie.insert(&keyword, id);
        }
    }

    /// Store `text` and index it under a freshly assigned id.
    pub fn add(&mut self, text: &str) -> DocumentId {
        let id = self.store.insert(text);
        self.index_document(id, text);
        id
    }

    pub fn store(&self) -> &DocumentStore { &self.store }

    pub fn trie(&self) -> &Trie { &self.trie }
}
