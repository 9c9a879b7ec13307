use trie_core::{SearchEngine, SearchError};

fn cat_corpus() -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.add_document("the cat sat on the mat");
    engine.add_document("the cat is a cat");
    engine
}

#[test]
fn cat_query_ranks_repeated_keyword_first() {
    let engine = cat_corpus();
    assert_eq!(engine.search("cat"), vec![2, 1]);
}

#[test]
fn unknown_keyword_returns_nothing() {
    let engine = cat_corpus();
    assert_eq!(engine.search("dog"), Vec::<u32>::new());
}

#[test]
fn empty_query_returns_nothing() {
    let engine = cat_corpus();
    assert!(engine.search("").is_empty());
    assert!(SearchEngine::new().search("").is_empty());
}

#[test]
fn keyword_prefix_does_not_match_longer_keyword() {
    let mut engine = SearchEngine::new();
    engine.add_document("catalog of items");
    assert!(engine.search("cat").is_empty());
    assert_eq!(engine.search("catalog"), vec![1]);
}

#[test]
fn three_occurrences_outrank_one() {
    let mut engine = SearchEngine::new();
    let a = engine.add_document("apple pie");
    let b = engine.add_document("apple apple APPLE");
    assert_eq!(engine.search("apple"), vec![b, a]);
}

#[test]
fn repeated_keyword_yields_single_result() {
    let mut engine = SearchEngine::new();
    engine.add_document("echo echo echo echo");
    assert_eq!(engine.search("echo"), vec![1]);
    assert_eq!(engine.indexer().trie().lookup_prefix("echo"), &[1, 1, 1, 1]);
}

#[test]
fn ids_are_never_reused_for_identical_text() {
    let mut engine = SearchEngine::new();
    let first = engine.add_document("same text");
    let second = engine.add_document("same text");
    assert_ne!(first, second);
    assert_eq!(engine.search("same"), vec![2, 1]);
}

#[test]
fn unknown_id_is_not_found() {
    let engine = cat_corpus();
    assert_eq!(engine.get_document_text(0), Err(SearchError::NotFound(0)));
    assert_eq!(engine.get_document_text(9).unwrap_err().to_string(), "document 9 not found");
}

#[test]
fn separate_engines_do_not_share_state() {
    let mut a = SearchEngine::new();
    let b = SearchEngine::new();
    a.add_document("lonely");
    assert_eq!(a.search("lonely"), vec![1]);
    assert!(b.search("lonely").is_empty());
    assert!(b.is_empty());
}

#[test]
fn scored_results_serialize_with_plain_scores() {
    let engine = cat_corpus();
    let json = serde_json::to_value(engine.search_scored("cat")).unwrap();
    assert_eq!(json, serde_json::json!([{ "score": 2.0, "id": 2 }, { "score": 1.0, "id": 1 }]));
}

#[test]
fn very_long_keyword_is_indexed_searched_and_dropped() {
    let keyword = "a".repeat(200_000);
    let mut engine = SearchEngine::new();
    engine.add_document(&keyword);
    engine.add_document(&format!("{keyword} {keyword}"));
    assert_eq!(engine.search(&keyword), vec![2, 1]);
    assert!(engine.search(&keyword[..199_999]).is_empty());
    assert_eq!(engine.indexer().trie().keyword_count(), 1);
    assert_eq!(engine.indexer().trie().node_count(), 200_000);
    drop(engine);
}
