//! # CLI Layer
//!
//! This module is **one possible UI client** for todoz. It is the only place
//! that reads stdin, writes stdout/stderr, or knows about exit codes.
//!
//! A run is one session. Lines come from `--command` flags when given, and
//! from stdin otherwise. Each line is parsed into a [`LineCommand`], handed to
//! the API, and the resulting `CmdResult` is rendered. A line that fails
//! prints its error and the session carries on; the number of failed lines is
//! returned so `main` can pick the exit code.

use super::render::{build_renderer, render_json, render_messages, render_status, render_task_list};
use super::setup::{Cli, LineCommand, SessionLine};
use super::theme::Renderer;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use todoz::api::{CmdResult, TodozApi};
use todoz::config::{ColorChoice, TodozConfig};
use todoz::error::{Result, TodozError};
use todoz::model::{seed_tasks, FilterMode};
use todoz::session::{Session, StateView};
use tracing::trace;

const PROMPT: &str = "> ";

struct AppContext {
    api: TodozApi<Session>,
    renderer: Renderer,
    failures: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Parses arguments, runs the session, and returns how many lines failed.
pub fn run() -> Result<usize> {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mut ctx = init_context(&cli, &config)?;

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            if run_line(&mut ctx, line) == Flow::Quit {
                break;
            }
        }
    } else {
        run_stdin(&mut ctx)?;
    }

    Ok(ctx.failures)
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("", "", "todoz").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn load_config(cli: &Cli) -> Result<TodozConfig> {
    match config_dir(cli) {
        Some(dir) => TodozConfig::load(dir),
        None => Ok(TodozConfig::default()),
    }
}

fn init_context(cli: &Cli, config: &TodozConfig) -> Result<AppContext> {
    let filter = cli
        .filter
        .map(FilterMode::from)
        .unwrap_or(config.default_filter);
    let tasks = if cli.empty || !config.seed {
        Vec::new()
    } else {
        seed_tasks()
    };
    let color = cli.color.map(ColorChoice::from).unwrap_or(config.color);

    let renderer = build_renderer(color.as_override())
        .map_err(|e| TodozError::Api(format!("Template error: {}", e)))?;

    Ok(AppContext {
        api: TodozApi::new(Session::with_state(tasks, filter)),
        renderer,
        failures: 0,
    })
}

fn run_stdin(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if run_line(ctx, &line?) == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn run_line(ctx: &mut AppContext, line: &str) -> Flow {
    let words = split_words(line);
    if words.is_empty() || words[0].starts_with('#') {
        return Flow::Continue;
    }
    trace!(line, "session line");

    let command = match SessionLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => print!("{}", e),
                _ => {
                    eprint!("{}", e);
                    ctx.failures += 1;
                }
            }
            return Flow::Continue;
        }
    };

    match handle_command(ctx, command) {
        Ok(flow) => flow,
        Err(e) => {
            eprintln!("Error: {}", e);
            ctx.failures += 1;
            Flow::Continue
        }
    }
}

fn handle_command(ctx: &mut AppContext, command: LineCommand) -> Result<Flow> {
    match command {
        LineCommand::List { json } => handle_list(ctx, json)?,
        LineCommand::Add { description } => {
            let result = ctx.api.add_task(&description.join(" "))?;
            print_messages(ctx, &result);
        }
        LineCommand::Done { indexes } => {
            let result = ctx.api.complete_tasks(&indexes)?;
            print_messages(ctx, &result);
        }
        LineCommand::Undo { indexes } => {
            let result = ctx.api.reopen_tasks(&indexes)?;
            print_messages(ctx, &result);
        }
        LineCommand::Toggle { indexes } => {
            let result = ctx.api.toggle_tasks(&indexes)?;
            print_messages(ctx, &result);
        }
        LineCommand::Show { mode } => {
            let result = ctx.api.set_filter(mode.into())?;
            print_list(ctx, &result);
        }
        LineCommand::Status => handle_status(ctx)?,
        LineCommand::Help => {
            print!("{}", SessionLine::command().render_help());
        }
        LineCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_tasks()?;
    if json {
        println!("{}", render_json(&result.listed_tasks)?);
    } else {
        print_list(ctx, &result);
    }
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(counts) = &result.counts {
        let filter = result.filter.unwrap_or_default();
        println!("{}", render_status(&ctx.renderer, counts, filter));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn print_list(ctx: &AppContext, result: &CmdResult) {
    let filter = result.filter.unwrap_or_else(|| ctx.api.state().filter());
    let total = ctx.api.state().tasks().len();
    println!(
        "{}",
        render_task_list(&ctx.renderer, &result.listed_tasks, filter, total)
    );
}

fn print_messages(ctx: &AppContext, result: &CmdResult) {
    let output = render_messages(&ctx.renderer, &result.messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Splits a session line into words. A single or double quote at the start of
/// a word groups up to the matching quote; quotes inside a word are literal.
/// There are no escapes.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if !in_word && (c == '"' || c == '\'') => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AppContext {
        AppContext {
            api: TodozApi::new(Session::seeded()),
            renderer: build_renderer(Some(false)).unwrap(),
            failures: 0,
        }
    }

    #[test]
    fn splits_plain_words() {
        assert_eq!(split_words("  add  Learn D "), vec!["add", "Learn", "D"]);
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"add "Learn  D" 'and E'"#),
            vec!["add", "Learn  D", "and E"]
        );
        assert_eq!(split_words(r#"add """#), vec!["add", ""]);
    }

    #[test]
    fn apostrophes_inside_words_are_literal() {
        assert_eq!(
            split_words("add Don't forget"),
            vec!["add", "Don't", "forget"]
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let mut ctx = context();
        assert_eq!(run_line(&mut ctx, "   "), Flow::Continue);
        assert_eq!(run_line(&mut ctx, "# a note"), Flow::Continue);
        assert_eq!(ctx.failures, 0);
    }

    #[test]
    fn scenario_through_lines() {
        let mut ctx = context();
        run_line(&mut ctx, "show incomplete");
        run_line(&mut ctx, "add Learn D");
        run_line(&mut ctx, "done 3");

        let visible = ctx.api.state().visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].description, "Learn D");
        assert_eq!(ctx.failures, 0);
    }

    #[test]
    fn failures_are_counted_and_session_continues() {
        let mut ctx = context();
        assert_eq!(run_line(&mut ctx, "done 42"), Flow::Continue);
        assert_eq!(run_line(&mut ctx, "frobnicate"), Flow::Continue);
        assert_eq!(run_line(&mut ctx, "add \"  \""), Flow::Continue);
        assert_eq!(ctx.failures, 3);
        assert_eq!(ctx.api.state().tasks().len(), 3);
    }

    #[test]
    fn quit_stops_the_session() {
        let mut ctx = context();
        assert_eq!(run_line(&mut ctx, "quit"), Flow::Quit);
        assert_eq!(run_line(&mut ctx, "exit"), Flow::Quit);
    }
}
