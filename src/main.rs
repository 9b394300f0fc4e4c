use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use simplecalc::calculator::{CalcError, copy_to_clipboard};
use simplecalc::display::format_number;
use simplecalc::{Config, Key, KeypadState, Locale, Messages, evaluate_expression};
use tracing::{info, trace, warn};
use tracing_subscriber::EnvFilter;

/// Left-to-right keypad calculator.
///
/// `*` and `/` apply to the last number entered, so `2+3*4` is 14 and
/// `2*3*4+1` is 25.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Starts an interactive keypad session when omitted.
    expression: Option<String>,

    /// Language of error messages.
    #[arg(short, long, value_enum)]
    locale: Option<Locale>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Copy a successful result to the clipboard.
    #[arg(short, long)]
    copy: bool,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    ok: bool,
    value: Option<f64>,
    display: String,
    error: Option<&'static str>,
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let messages = config.messages(args.locale);
    let copy = args.copy || config.copy_on_evaluate;

    match args.expression {
        Some(expression) => evaluate_once(&expression, &messages, args.json, copy),
        None => interactive(messages, copy),
    }
}

fn evaluate_once(expression: &str, messages: &Messages, json: bool, copy: bool) -> Result<ExitCode> {
    let result = evaluate_expression(expression);
    let display = result.display(messages);

    if json {
        let report = Report {
            expression: result.expression(),
            ok: result.is_success(),
            value: result.value(),
            display,
            error: result.error().map(CalcError::kind),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{display}");
    }

    if copy && let Some(text) = result.clipboard() {
        copy_result(&text);
    }

    let failed = result
        .error()
        .is_some_and(|e| !matches!(e, CalcError::EmptyInput));
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Read keypad labels or raw expression text from stdin, one line at a time.
fn interactive(messages: Messages, copy: bool) -> Result<ExitCode> {
    let mut state = KeypadState::new(messages);
    state.set_on_change(|input| trace!(input, "display changed"));

    println!("Enter keys separated by spaces (7 8 9 / 4 5 6 * 1 2 3 - . 0 = + C DEL)");
    println!("or type an expression. 'copy' copies the last result, 'quit' exits.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "copy" => {
                match state.last_result() {
                    Some(value) => copy_result(&format_number(value)),
                    None => warn!("nothing to copy yet"),
                }
                continue;
            }
            _ => {}
        }

        for word in line.split_whitespace() {
            match Key::from_label(word) {
                Some(key) => {
                    if let Some(Ok(value)) = state.press(key)
                        && copy
                    {
                        copy_result(&format_number(value));
                    }
                }
                None => state.append(word),
            }
        }

        writeln!(stdout, "{}", state.input())?;
        stdout.flush()?;
    }

    info!("session ended");
    Ok(ExitCode::SUCCESS)
}

fn copy_result(text: &str) {
    if let Err(e) = copy_to_clipboard(text) {
        warn!("{e}");
    }
}
