use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tfidf_core::corpus::read_tsv;
use tfidf_core::{Document, PipelineConfig, TfIdfIndex, TsvLayout};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tfidf")]
#[command(about = "Find the most relevant document for a term with hashed TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best document for a single term
    Query {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Query term, matched verbatim (case-sensitive)
        #[arg(long)]
        term: String,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print corpus and feature-space statistics
    Inspect {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Args)]
struct CorpusArgs {
    /// Input path (TSV file or directory of .tsv files)
    #[arg(long)]
    input: String,
    /// JSON pipeline config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Hash-space size
    #[arg(long)]
    num_features: Option<usize>,
    /// Minimum number of documents a feature must appear in to be weighted
    #[arg(long)]
    min_doc_freq: Option<u32>,
    /// Zero-based column holding the document identifier
    #[arg(long, default_value_t = 1)]
    title_field: usize,
    /// Zero-based column holding the document text
    #[arg(long, default_value_t = 3)]
    text_field: usize,
}

impl CorpusArgs {
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(n) = self.num_features { config.num_features = n; }
        if let Some(t) = self.min_doc_freq { config.min_doc_freq = t; }
        Ok(config)
    }

    fn layout(&self) -> TsvLayout {
        TsvLayout { id_field: self.title_field, text_field: self.text_field }
    }
}

#[derive(Serialize)]
struct Stats {
    num_docs: usize,
    num_features: usize,
    min_doc_freq: u32,
    distinct_features: usize,
    weighted_features: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { corpus, term, json } => {
            let index = build_index(&corpus)?;
            let best = index.best_match(&term)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&best)?);
            } else {
                println!("Best document for {term} is:");
                println!("({}, {})", best.id, best.score);
            }
            Ok(())
        }
        Commands::Inspect { corpus } => {
            let index = build_index(&corpus)?;
            let stats = Stats {
                num_docs: index.num_docs(),
                num_features: index.num_features(),
                min_doc_freq: index.min_doc_freq(),
                distinct_features: index.distinct_features(),
                weighted_features: index.weighted_features(),
            };
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

fn build_index(args: &CorpusArgs) -> Result<TfIdfIndex> {
    let config = args.pipeline_config()?;
    let docs = load_corpus(Path::new(&args.input), &args.layout())?;
    tracing::info!(num_docs = docs.len(), input = %args.input, "loaded corpus");
    Ok(TfIdfIndex::build(&docs, &config)?)
}

fn load_corpus(input_path: &Path, layout: &TsvLayout) -> Result<Vec<Document>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        // Sorted so corpus order, and with it tie-breaking, is reproducible.
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("tsv") {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        bail!("input path {} does not exist", input_path.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let f = File::open(&file).with_context(|| format!("opening {}", file.display()))?;
        let mut part = read_tsv(BufReader::new(f), layout).with_context(|| format!("reading {}", file.display()))?;
        tracing::debug!(file = %file.display(), num_docs = part.len(), "read corpus file");
        docs.append(&mut part);
    }
    Ok(docs)
}
