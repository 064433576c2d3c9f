mod console;
mod input;
mod loader;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use search_core::{
    paginate, DocumentStatus, RequestQueueConfig, SearchConfig, SearchServer, StopWords,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Index documents in memory and rank them by TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RankingArgs {
    /// Maximum number of documents returned per query
    #[arg(long, default_value_t = 5)]
    max_results: usize,
    /// Relevances closer than this are ranked by rating
    #[arg(long, default_value_t = 1e-6)]
    epsilon: f64,
    /// Documents printed per page
    #[arg(long, default_value_t = 5)]
    page_size: usize,
}

impl RankingArgs {
    fn search_config(&self) -> SearchConfig {
        SearchConfig { max_results: self.max_results, relevance_epsilon: self.epsilon }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load documents from JSON/JSONL files and run a single query
    Search {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Query text; prefix a word with '-' to exclude documents containing it
        #[arg(long)]
        query: String,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Only return documents with this status
        #[arg(long, value_enum, default_value_t = StatusArg::Active)]
        status: StatusArg,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        #[command(flatten)]
        ranking: RankingArgs,
    },
    /// Read stop words, documents and queries line by line from stdin
    Console {
        /// Number of recent requests tracked for the empty-result count
        #[arg(long, default_value_t = 1440)]
        window: usize,
        #[command(flatten)]
        ranking: RankingArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl From<StatusArg> for DocumentStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Active => DocumentStatus::Active,
            StatusArg::Irrelevant => DocumentStatus::Irrelevant,
            StatusArg::Banned => DocumentStatus::Banned,
            StatusArg::Removed => DocumentStatus::Removed,
        }
    }
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    total_docs: usize,
    results: &'a [search_core::Document],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { input, query, stop_words, status, json, ranking } => {
            search(&input, &query, &stop_words, status.into(), json, &ranking)
        }
        Commands::Console { window, ranking } => {
            let settings = console::ConsoleSettings {
                search: ranking.search_config(),
                queue: RequestQueueConfig { window },
                page_size: ranking.page_size,
            };
            console::run(&mut io::stdin().lock(), &mut io::stdout().lock(), &settings)
        }
    }
}

fn search(
    input: &str,
    query: &str,
    stop_words: &str,
    status: DocumentStatus,
    json: bool,
    ranking: &RankingArgs,
) -> Result<()> {
    let mut server = SearchServer::with_config(StopWords::from_text(stop_words)?, ranking.search_config());
    loader::load_documents(&mut server, Path::new(input))?;

    let results = server.find_top_documents_with(query, &status)?;
    let mut out = io::stdout().lock();
    if json {
        let response = SearchResponse { query, total_docs: server.document_count(), results: &results };
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
        return Ok(());
    }
    for (n, page) in paginate(&results, ranking.page_size)?.iter().enumerate() {
        writeln!(out, "Page {}", n + 1)?;
        for document in page.iter() {
            writeln!(out, "{document}")?;
        }
    }
    Ok(())
}
