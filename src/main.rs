//! Marknote - edit markdown notes from the terminal.
//!
//! # Usage
//!
//! ```bash
//! marknote --keys script.keys            # new note, replay keys, save
//! marknote todo.md --keys - < edits.keys # edit an existing note
//! marknote todo.md --keys edits.keys --print
//! ```

use std::io::Read;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use marknote::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use marknote::input::{action_for_key, parse_key_script};
use marknote::session::Session;

/// Edit markdown notes with list continuation and auto-pairing
#[derive(Parser, Debug)]
#[command(name = "marknote", version, about, long_about = None)]
struct Cli {
    /// Note to open; a new note is started when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Key script to replay, `-` for stdin (e.g. "- space a enter ctrl+s")
    #[arg(short, long, value_name = "SCRIPT")]
    keys: Option<PathBuf>,

    /// Directory notes are saved into
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Spaces inserted by the tab key
    #[arg(long, value_name = "N")]
    tab_width: Option<usize>,

    /// Print the resulting text instead of saving it
    #[arg(long)]
    print: bool,

    /// Log edits and file operations
    #[arg(short, long)]
    verbose: bool,

    /// Save current command-line flags as defaults in .marknoterc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .marknoterc
    #[arg(long)]
    clear: bool,
}

fn read_script(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read key script from stdin")?;
        return Ok(script);
    }
    std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read key script {}", source.display()))
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Initialize logging
    let level = if effective.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let root = effective.notes_root();
    let settings = effective.editor_settings();
    let mut session = match &cli.file {
        Some(path) => Session::open(path, root, settings)
            .with_context(|| format!("Failed to open {}", path.display()))?,
        None => Session::new(root, settings),
    };

    if let Some(source) = &cli.keys {
        let keys = parse_key_script(&read_script(source)?)?;
        tracing::debug!(count = keys.len(), "replaying keys");
        for key in keys {
            let Some(action) = action_for_key(key) else {
                continue;
            };
            if let ControlFlow::Break(()) = session.dispatch(action) {
                break;
            }
        }
    }

    let messages = [session.diagnostic(), session.status()];
    for message in messages.into_iter().flatten() {
        eprintln!("[warn] {message}");
    }

    if cli.print {
        print!("{}", session.current_text());
        return Ok(());
    }

    if session.is_dirty() {
        let path = session.save().context("Failed to save note")?;
        println!("{}", path.display());
    }
    Ok(())
}
