//! Terminal Wordle - CLI
//!
//! Wordle in the terminal with TUI and line-based modes. Targets come from
//! the Datamuse word service unless offline play is requested.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::run_simple,
    core::Word,
    interactive::{App, run_tui},
    services::{
        BuiltinSource, DatamuseSource, Dictionary, DictionaryApi, ListDictionary, WordSource,
    },
    wordlists::{self, DEFAULT_TARGET, FALLBACK_WORDS},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal, with live word selection and dictionary lookup",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play offline against the built-in word list
    #[arg(long, global = true)]
    offline: bool,

    /// Play offline against a custom word list file (one word per line)
    #[arg(short = 'w', long, global = true, value_name = "PATH")]
    wordlist: Option<PathBuf>,

    /// Fixed target word for practice (skips word fetching)
    #[arg(short, long, global = true, value_name = "WORD")]
    target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (initial_target, fixed_target) = resolve_target(&cli)?;
    let (source, dictionary) = build_services(&cli, &initial_target)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(source, dictionary, initial_target, fixed_target);
            run_tui(app)
        }
        Commands::Simple => run_simple(
            source.as_ref(),
            dictionary.as_ref(),
            initial_target,
            fixed_target,
        ),
    }
}

/// First game's target, and whether it is pinned for the whole run
fn resolve_target(cli: &Cli) -> Result<(Word, bool)> {
    match &cli.target {
        Some(word) => Ok((Word::new(word.as_str())?, true)),
        None => Ok((Word::new(DEFAULT_TARGET)?, false)),
    }
}

/// Wire up the word source and dictionary based on the offline flags
fn build_services(
    cli: &Cli,
    target: &Word,
) -> Result<(Arc<dyn WordSource>, Arc<dyn Dictionary>)> {
    if cli.offline || cli.wordlist.is_some() {
        let mut words = match &cli.wordlist {
            Some(path) => wordlists::load_from_file(path)?,
            None => wordlists::words_from_slice(FALLBACK_WORDS),
        };
        anyhow::ensure!(
            !words.is_empty(),
            "word list contains no playable five-letter words"
        );

        // A pinned practice target has to be guessable offline too.
        if cli.target.is_some() && !words.contains(target) {
            words.push(target.clone());
        }

        let dictionary = ListDictionary::new(&words);
        Ok((Arc::new(BuiltinSource::new(words)), Arc::new(dictionary)))
    } else {
        Ok((
            Arc::new(DatamuseSource::new()?),
            Arc::new(DictionaryApi::new()?),
        ))
    }
}
