//! Prompt loop: every line is a view command with the CLI grammar, run
//! against one long-lived dashboard so repeated views hit the result cache.

use crate::cli::commands::{config, run_view};
use crate::cli::parser::{Cli, Commands};
use crate::cli::{FilterArgs, Session};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{data_failure, error, info, success};
use crate::utils::date::today;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "servdash> ";

pub fn handle(session: &Session) -> AppResult<()> {
    let stdin = io::stdin();
    run_loop(stdin.lock(), session)
}

/// Read commands from `input` until EOF, `quit` or `exit`.
pub fn run_loop<R: BufRead>(mut input: R, session: &Session) -> AppResult<()> {
    info("Interactive mode: type a view command (e.g. `status`, `shift-start --region VR`), `refresh`, `help` or `quit`.");

    loop {
        print!("{PROMPT}");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "refresh" => {
                session.dashboard.refresh();
                success("Cached results cleared.");
                continue;
            }
            _ => {}
        }

        let words = match split_line(line) {
            Ok(w) => w,
            Err(e) => {
                error(e);
                continue;
            }
        };

        let cli = match Cli::try_parse_from(std::iter::once("servdash".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // help and version requests land here too
                print!("{e}");
                continue;
            }
        };

        if let Err(e) = run_line(&cli, session) {
            data_failure(&e);
        }
        debug!(cached = session.dashboard.cached_results(), "line done");
    }

    info("Bye.");
    Ok(())
}

fn run_line(cli: &Cli, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Interactive => Err(AppError::InvalidCommand(
            "already in interactive mode".to_string(),
        )),
        Commands::Config { .. } => config::handle(&cli.command, session.cfg, None),
        cmd => {
            let filter = session
                .defaults
                .overlay(FilterArgs::from_cli(cli))
                .resolve(session.cfg, today())?;
            run_view(cmd, session, &filter)
        }
    }
}

/// Split on whitespace, keeping single- or double-quoted parts together.
///
/// `shift-start --region "Volta Redonda"` → `["shift-start", "--region", "Volta Redonda"]`
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::InvalidCommand(format!("unterminated quote in: {line}")));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
