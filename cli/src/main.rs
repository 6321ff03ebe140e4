use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use search_core::{DocId, Document, SearchConfig, SearchServer};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
struct Args {
    /// Input file with stop words, document count, documents and query, one per line (stdin if omitted)
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON file holding a search config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of results, overrides the config file
    #[arg(long, env = "SEARCH_MAX_RESULTS")]
    limit: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SearchConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.max_results = limit;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            run(BufReader::new(f), &mut out, config, args.format)
        }
        None => run(io::stdin().lock(), &mut out, config, args.format),
    }
}

fn load_config(path: &Path) -> Result<SearchConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Next line without its line terminator, or `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn read_document_count<R: BufRead>(reader: &mut R) -> Result<usize> {
    let line = read_line(reader)?.context("missing document count line")?;
    line.trim()
        .parse()
        .with_context(|| format!("invalid document count {:?}", line.trim()))
}

fn create_search_server<R: BufRead>(reader: &mut R, config: SearchConfig) -> Result<SearchServer> {
    let stop_words = read_line(reader)?.unwrap_or_default();
    let mut server = SearchServer::builder().stop_words(&stop_words).config(config).build();

    let document_count = read_document_count(reader)?;
    for position in 0..document_count {
        let id = DocId::try_from(position).context("document id out of range")?;
        let text = read_line(reader)?.unwrap_or_default();
        if let Err(err) = server.add_document(id, &text) {
            tracing::warn!(doc_id = id, %err, "skipping document");
        }
    }
    tracing::info!(num_docs = server.document_count(), num_terms = server.index().term_count(), "index built");
    Ok(server)
}

fn write_results<W: Write>(out: &mut W, results: &[Document], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for doc in results {
                writeln!(out, "{doc}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run<R: BufRead, W: Write>(mut reader: R, out: &mut W, config: SearchConfig, format: Format) -> Result<()> {
    let server = create_search_server(&mut reader, config)?;
    let raw_query = read_line(&mut reader)?.unwrap_or_default();
    let results = server.find_top_documents(&raw_query);
    write_results(out, &results, format)?;
    out.flush()?;
    Ok(())
}
