//! folio terminal host.
//!
//! Line-mode host for the terminal portfolio: reads stdin, feeds the
//! session one event at a time, and prints new transcript entries.
//! Usage: `folio [config.toml]` (or set `FOLIO_CONFIG`). Ctrl-D quits.

mod input;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_terminal::{HostAction, Session, portfolio_session, resolve_content};
use folio_types::config::FolioConfig;

use render::TranscriptView;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    let table = resolve_content(config.content.as_deref()).context("loading content table")?;
    log::info!("Starting folio with {} commands", table.commands.len());
    let mut session = portfolio_session(table, config.welcome_node());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let interactive = stdin.is_terminal() && stdout.is_terminal();
    let mut view = TranscriptView::default();

    write!(stdout, "{}", view.render_new(&config.prompt, session.transcript()))?;
    show_prompt(&mut stdout, &config.prompt, &session, interactive)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        for event in input::line_to_events(&line) {
            session.handle_input(&event);
        }

        if view.is_cleared(session.transcript()) && interactive {
            write!(stdout, "\u{1b}[2J\u{1b}[H")?;
        }
        let fresh = view.render_new(&config.prompt, session.transcript());
        if !fresh.is_empty() {
            writeln!(stdout)?;
            write!(stdout, "{fresh}")?;
        }
        perform_actions(&mut stdout, &mut session)?;
        show_prompt(&mut stdout, &config.prompt, &session, interactive)?;
    }

    if interactive {
        writeln!(stdout)?;
    }
    log::info!("folio shut down cleanly");
    Ok(())
}

/// Resolve config from CLI arg, `FOLIO_CONFIG` env var, or defaults.
fn load_config() -> Result<FolioConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) if path.is_file() => FolioConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        Some(path) => {
            log::warn!(
                "Config '{}' not found -- using defaults",
                path.display()
            );
            Ok(FolioConfig::default())
        },
        None => Ok(FolioConfig::default()),
    }
}

/// Hand requested side effects to the user; nothing is awaited.
fn perform_actions(out: &mut impl Write, session: &mut Session) -> io::Result<()> {
    for action in session.take_actions() {
        match action {
            HostAction::OpenUrl(url) => {
                log::info!("Open URL requested: {url}");
                writeln!(out, "Opening {url}")?;
            },
        }
    }
    Ok(())
}

/// Print the prompt with any pending input. The pending text is only
/// echoed when running interactively.
fn show_prompt(
    out: &mut impl Write,
    prompt: &str,
    session: &Session,
    interactive: bool,
) -> io::Result<()> {
    if interactive {
        write!(out, "{prompt} {}", session.input())?;
        out.flush()?;
    }
    Ok(())
}
