use shell::load_documents;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_plain_text_one_document_per_line() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("docs.txt");
    fs::write(&file, "the cat sat on the mat\n\n  \nthe cat is a cat\n").unwrap();
    let texts = load_documents(&file).unwrap();
    assert_eq!(texts, vec!["the cat sat on the mat", "the cat is a cat"]);
}

#[test]
fn loads_jsonl_and_json_with_text_or_body() {
    let dir = tempdir().unwrap();
    let jsonl = "{\"text\": \"first doc\"}\n\n{\"body\": \"second doc\"}\n";
    fs::write(dir.path().join("a.jsonl"), jsonl).unwrap();
    let json = "[{\"text\": \"third doc\"}, {\"text\": \"fourth doc\"}]";
    fs::write(dir.path().join("b.json"), json).unwrap();
    fs::write(dir.path().join("c.json"), "{\"text\": \"fifth doc\"}").unwrap();
    let texts = load_documents(dir.path()).unwrap();
    assert_eq!(texts, vec!["first doc", "second doc", "third doc", "fourth doc", "fifth doc"]);
}

#[test]
fn walks_nested_directories_in_name_order() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/inner.txt"), "inner").unwrap();
    fs::write(dir.path().join("a.txt"), "outer").unwrap();
    let texts = load_documents(dir.path()).unwrap();
    assert_eq!(texts, vec!["outer", "inner"]);
}

#[test]
fn reports_bad_json_and_missing_paths() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.jsonl");
    fs::write(&bad, "{\"title\": \"no text\"}\n").unwrap();
    assert!(load_documents(&bad).is_err());
    assert!(load_documents(&dir.path().join("missing")).is_err());
}
