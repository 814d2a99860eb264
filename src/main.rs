mod config;
mod dictionary;
mod error;
mod gui;
mod viewer;

use std::io::{self, Read, Write};

use tracing_subscriber::EnvFilter;

use config::Config;
use dictionary::{Dictionary, Matcher};
use gui::Session;

use error::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordcards=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::load(config::CONFIG_FILE);
    let dictionary = Dictionary::load(&config.dictionary_path);
    if dictionary.is_empty() {
        tracing::warn!("dictionary is empty, no words will match");
    }
    let matcher = Matcher::new()?;

    println!("Enter text, then press Ctrl+D to finish:");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let matches = matcher.find_matches(&text, &dictionary, print_progress);
    println!("Processed {} cards.", matches.cards.len());

    let session = Session {
        matches,
        dictionary_size: dictionary.len(),
    };
    gui::run(session, config)?;

    Ok(())
}

fn print_progress(done: usize, total: usize) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "\rProcessing: {done}/{total}");
    if done == total {
        let _ = writeln!(stdout);
    }
    let _ = stdout.flush();
}
