use anyhow::Result;
use clap::{Parser, Subcommand};
use rsmorph::{Analyzer, Lemmatizer, WordAnalysis};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Stemming and lemmatization demo in Rust", long_about = None)]
struct Args {
    /// Optional JSON file with a custom irregular-form table
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stem a word with the naive rule-based suffix stripper
    Stem { word: String },
    /// Resolve a word through the irregular-form table
    Lemma { word: String },
    /// Run a text through every normalizer and print a comparison table
    Analyze { text: String },
    /// Serve the transforms over HTTP
    Serve {
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn build_analyzer(table: Option<&PathBuf>) -> Result<Analyzer> {
    let analyzer = Analyzer::new();
    match table {
        Some(path) => {
            let lemmatizer = Lemmatizer::from_file(path)?;
            tracing::info!("loaded lemma table from {}", path.display());
            Ok(analyzer.with_lemmatizer(lemmatizer))
        }
        None => Ok(analyzer),
    }
}

fn print_comparison(analyses: &[WordAnalysis]) {
    println!(
        "{:<15} {:<15} {:<15} {:<15}",
        "word", "rule stem", "lemma", "snowball"
    );
    println!("{}", "-".repeat(60));
    for a in analyses {
        println!(
            "{:<15} {:<15} {:<15} {:<15}",
            a.word, a.rule_stem, a.lemma, a.snowball_stem
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rsmorph=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let analyzer = build_analyzer(args.table.as_ref())?;

    match args.command {
        Command::Stem { word } => {
            let analysis = analyzer.analyze_word(&word);
            println!("{}", analysis.rule_stem);
        }
        Command::Lemma { word } => {
            let analysis = analyzer.analyze_word(&word);
            println!("{}", analysis.lemma);
        }
        Command::Analyze { text } => {
            let analyses = analyzer.analyze_text(&text);
            print_comparison(&analyses);

            let summary = analyzer.summarize(&analyses);
            println!();
            println!(
                "{} words, rule/snowball agree on {}, {} irregular",
                summary.words, summary.rule_snowball_agreement, summary.irregular_hits
            );
        }
        Command::Serve { addr } => {
            let app = rsmorph::api::create_router(Arc::new(analyzer));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
