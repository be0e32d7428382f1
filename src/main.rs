use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sleighwatch::config::Config;
use sleighwatch::roster;
use sleighwatch::session::{self, AnalysisOutcome, Session};

#[derive(Parser)]
#[command(
    name = "sleighwatch",
    about = "North Pole security operations console",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the console (dashboard + JSON API)
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate synthetic incident batches and print them (no analysis)
    Generate {
        /// Number of batches to generate
        #[arg(long, default_value = "1")]
        batches: u32,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// One-shot console run: generate, analyze via the API, print the roster
    Demo {
        /// Number of batches to generate before analyzing
        #[arg(long, default_value = "2")]
        batches: u32,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(p) => Config::load(&p),
        None => Ok(Config::load_or_default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        // Keep stdout clean for --json output.
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, config } => {
            let mut cfg = load_config(config)?;
            if let Some(bind) = bind {
                cfg.bind = bind;
            }
            tracing::info!(bind = %cfg.bind, "Starting SleighWatch console");
            sleighwatch::serve(cfg).await?;
        }
        Commands::Generate { batches, json } => {
            let mut session = Session::new();
            for _ in 0..batches {
                session.generate();
            }
            let feed = session.store().feed();

            if json {
                println!("{}", serde_json::to_string_pretty(feed)?);
            } else {
                println!("\nSleighWatch Incident Feed ({} entries)", feed.len());
                println!("{:<42} | {:<12} | Event", "Id", "Actor");
                println!("{:-<42}-|-{:-<12}-|-{:-<50}", "", "", "");
                for inc in feed {
                    println!("{:<42} | {:<12} | {}", inc.id, inc.actor, inc.event);
                }
                println!();
            }
        }
        Commands::Demo { batches, config } => {
            let cfg = load_config(config)?;
            if cfg.analysis.api_key.is_none() {
                anyhow::bail!(
                    "demo requires an API key; set ANTHROPIC_API_KEY or add it to the config file"
                );
            }

            let session = Session::shared();
            {
                let mut s = session.write().await;
                for _ in 0..batches {
                    s.generate();
                }
            }

            let analyzer = sleighwatch::analysis::ClaudeAnalyzer::new(cfg.analysis.clone());
            match session::run_analysis(&session, &analyzer).await {
                Ok(AnalysisOutcome::NoOp) => println!("Nothing to analyze."),
                Ok(AnalysisOutcome::Analyzed(count)) => {
                    println!("\nAnalyzed {count} incidents.");
                }
                Err(e) => anyhow::bail!("analysis failed: {e}"),
            }

            let s = session.read().await;
            let standings = roster::compile_roster(s.store().history());
            let stats = roster::summary_stats(s.store().history());

            println!("\n=== Naughty & Nice List ===");
            println!("{:<14} | {:<8} | {:<4} | Naughty/Nice", "Actor", "Status", "Avg");
            println!("{:-<14}-|-{:-<8}-|-{:-<4}-|-{:-<12}", "", "", "", "");
            for st in &standings {
                println!(
                    "{:<14} | {:<8} | {:<4} | {}/{}",
                    st.actor, st.status, st.avg_score, st.naughty_count, st.nice_count
                );
            }
            println!(
                "\n{} analyzed, {} critical, {} high, avg naughtiness {}",
                stats.total, stats.critical, stats.high, stats.avg_naughty
            );
            println!("===========================\n");
        }
    }

    Ok(())
}
