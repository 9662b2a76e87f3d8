mod catalog;
mod config;
mod conversation;
mod errors;
mod matching;
mod models;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::conversation::tips::RandomTipSelector;
use crate::conversation::Conversation;
use crate::matching::KeywordMatcher;

const ASSISTANT_PREFIX: &str = "CareerMap AI: ";
const USER_PROMPT: &str = "You: ";

#[derive(Parser)]
#[command(name = "careermap")]
#[command(about = "Conversational career matcher and learning-roadmap assistant")]
struct Cli {
    /// Career catalog JSON file (overrides CAREERMAP_CATALOG)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log filter, e.g. debug or careermap=trace (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.catalog, cli.log_level);

    // Logs go to stderr so they never interleave with the chat on stdout.
    tracing_subscriber::registry()
        .with(log_filter(&config.rust_log)?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting CareerMap v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!(
            "Cannot start without a career catalog (looked at {})",
            config.catalog_path.display()
        )
    })?;
    if catalog.is_empty() {
        warn!(
            "Catalog {} is empty; every session will end without suggestions",
            config.catalog_path.display()
        );
    }

    run_chat(build_conversation(catalog), io::stdin().lock(), io::stdout().lock())
}

fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{directives}' (RUST_LOG / --log-level)"))
}

/// Keyword ranking and a random motivational tip.
fn build_conversation(catalog: Catalog) -> Conversation {
    Conversation::new(catalog, Box::new(KeywordMatcher), Box::new(RandomTipSelector))
}

/// Reads user lines until an exit keyword or end of input.
fn run_chat(mut convo: Conversation, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", convo.greet())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{USER_PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        if Conversation::is_exit_command(&line) {
            break;
        }

        let reply = convo.process_turn(&line);
        writeln!(out, "\n{ASSISTANT_PREFIX}{reply}\n")?;
    }

    writeln!(out, "{ASSISTANT_PREFIX}{}", convo.farewell())?;
    let session = convo.session();
    info!(
        "Session {} ended in {:?}, selected career: {}",
        session.id,
        convo.state(),
        session
            .selected_career
            .as_ref()
            .map_or("none", |c| c.title.as_str())
    );
    Ok(())
}
