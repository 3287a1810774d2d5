use anyhow::Result;
use axum::Router;
use clap::Parser;
use server::build_app;
use std::net::SocketAddr;
use tfidf_core::{PipelineConfig, TsvLayout};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// TSV corpus path
    #[arg(long)]
    corpus: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Hash-space size
    #[arg(long, default_value_t = tfidf_core::config::DEFAULT_NUM_FEATURES)]
    num_features: usize,
    /// Minimum document frequency for a feature to be weighted
    #[arg(long, default_value_t = tfidf_core::config::DEFAULT_MIN_DOC_FREQ)]
    min_doc_freq: u32,
    /// Zero-based column holding the document identifier
    #[arg(long, default_value_t = 1)]
    title_field: usize,
    /// Zero-based column holding the document text
    #[arg(long, default_value_t = 3)]
    text_field: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = PipelineConfig::new(args.num_features, args.min_doc_freq);
    let layout = TsvLayout { id_field: args.title_field, text_field: args.text_field };
    let app: Router = build_app(&args.corpus, &layout, &config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
