use crate::error::{Result, SearchError};
use crate::{Document, DocumentId};

/// Raw document text keyed by id. Ids start at 1 and are never reused, so the
/// document with id `n` sits at index `n - 1`.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Store `text` under the next sequential id.
    pub fn insert(&mut self, text: &str) -> DocumentId {
        let id = self.docs.len() as DocumentId + 1;
        self.docs.push(Document { id, text: text.to_string() });
        id
    }

    pub fn get(&self, id: DocumentId) -> Result<&Document> {
        id.checked_sub(1)
            .and_then(|idx| self.docs.get(idx as usize))
            .ok_or(SearchError::NotFound(id))
    }

    pub fn text(&self, id: DocumentId) -> Result<&str> {
        self.get(id).map(|d| d.text.as_str())
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    /// Documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }
}
