use anyhow::Result;
use clap::Parser;
use shell::{load_documents, read_initial_documents, run_menu, MenuOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use trie_core::SearchEngine;

#[derive(Parser)]
#[command(name = "trieseek")]
#[command(about = "Interactive keyword search over an in-memory trie index", long_about = None)]
struct Args {
    /// File or directory of documents to index at startup (.txt, .json, .jsonl).
    /// Without it, documents are entered interactively.
    #[arg(long)]
    docs: Option<PathBuf>,
    /// Show at most this many results per search
    #[arg(long)]
    limit: Option<usize>,
    /// Print search results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let texts = match &args.docs {
        Some(path) => load_documents(path)?,
        None => read_initial_documents(&mut input, &mut output)?,
    };

    let mut engine = SearchEngine::new();
    for text in &texts {
        engine.add_document(text);
    }
    tracing::info!(
        num_docs = engine.len(),
        num_keywords = engine.indexer().trie().keyword_count(),
        "index built"
    );

    let opts = MenuOptions { limit: args.limit, json: args.json };
    run_menu(&mut engine, &mut input, &mut output, &opts)?;
    output.flush()?;
    Ok(())
}
