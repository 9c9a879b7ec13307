use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use trie_core::{DocumentId, SearchEngine};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(alias = "body")]
    text: String,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: DocumentId,
    pub score: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct MenuOptions {
    /// Show at most this many results per search
    pub limit: Option<usize>,
    /// Print results as a JSON array instead of plain text
    pub json: bool,
}

/// Read document texts from a file or, recursively, a directory.
///
/// `.jsonl` holds one `{"text": ...}` object per line, `.json` one object or an
/// array of them; any other file contributes one document per non-blank line.
pub fn load_documents(path: &Path) -> Result<Vec<String>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        let walker = WalkDir::new(path).sort_by_file_name();
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if entry.path().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        bail!("no such file or directory: {}", path.display());
    }

    let mut texts = Vec::new();
    for file in files {
        match file.extension().and_then(|s| s.to_str()) {
            Some("jsonl") => read_jsonl(&file, &mut texts)?,
            Some("json") => read_json(&file, &mut texts)?,
            _ => read_lines(&file, &mut texts)?,
        }
    }
    tracing::info!(path = %path.display(), num_docs = texts.len(), "loaded documents");
    Ok(texts)
}

fn read_jsonl(file: &Path, texts: &mut Vec<String>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", file.display(), n + 1))?;
        texts.push(doc.text);
    }
    Ok(())
}

fn read_json(file: &Path, texts: &mut Vec<String>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("{}: invalid JSON", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                texts.push(doc.text);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            texts.push(doc.text);
        }
        _ => tracing::warn!(file = %file.display(), "skipping JSON that is not an object or array"),
    }
    Ok(())
}

fn read_lines(file: &Path, texts: &mut Vec<String>) -> Result<()> {
    let content = fs::read_to_string(file)?;
    texts.extend(content.lines().filter(|l| !l.trim().is_empty()).map(str::to_string));
    Ok(())
}

/// Prompt and read one line without its line terminator. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Ask for a document count, then for each document's text.
pub fn read_initial_documents<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    let Some(count) = prompt(input, output, "Enter the number of documents: ")? else {
        bail!("input ended before the number of documents was given");
    };
    let count: usize = count
        .trim()
        .parse()
        .with_context(|| format!("not a document count: {count:?}"))?;

    let mut texts = Vec::with_capacity(count);
    for i in 1..=count {
        match prompt(input, output, &format!("Enter the text for Document {i}: "))? {
            Some(text) => texts.push(text),
            None => bail!("input ended after {} of {count} documents", i - 1),
        }
    }
    Ok(texts)
}

pub fn search_hits(
    engine: &SearchEngine,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<SearchHit>> {
    let ranked = match limit {
        Some(k) => engine.search_top_k(query, k),
        None => engine.search_scored(query),
    };
    ranked
        .into_iter()
        .map(|c| -> Result<SearchHit> {
            let text = engine.get_document_text(c.id)?.to_string();
            Ok(SearchHit { id: c.id, score: c.score(), text })
        })
        .collect()
}

fn print_hits<W: Write>(output: &mut W, hits: &[SearchHit], json: bool) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(hits)?)?;
    } else if hits.is_empty() {
        writeln!(output, "No matching documents found.")?;
    } else {
        writeln!(output, "Search Results:")?;
        for hit in hits {
            writeln!(output, "Document ID: {}\n{}\n", hit.id, hit.text)?;
        }
    }
    Ok(())
}

/// Run the search / add / exit menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    engine: &mut SearchEngine,
    input: &mut R,
    output: &mut W,
    opts: &MenuOptions,
) -> Result<()> {
    loop {
        writeln!(output, "\nMenu:\n1. Search\n2. Add Document\n3. Exit")?;
        let Some(choice) = prompt(input, output, "Enter your choice (1, 2, or 3): ")? else {
            break;
        };
        match choice.trim() {
            "1" => {
                let Some(query) = prompt(input, output, "Enter the search query: ")? else {
                    break;
                };
                let hits = search_hits(engine, &query, opts.limit)?;
                tracing::info!(query = %query, hits = hits.len(), "search");
                print_hits(output, &hits, opts.json)?;
            }
            "2" => {
                let Some(text) = prompt(input, output, "Enter the text for the document: ")? else {
                    break;
                };
                let id = engine.add_document(&text);
                writeln!(output, "Document {id} added successfully.")?;
            }
            "3" => break,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
    writeln!(output, "Exiting the program.")?;
    Ok(())
}
