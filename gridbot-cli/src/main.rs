//! # gridbot CLI
//!
//! Interactive front end for the gridbot engine.
//!
//! Usage:
//!   gridbot                  # interactive session
//!   gridbot script <FILE>    # run commands from a file
//!   gridbot grammar          # print the command grammar
//!
//! The interactive session reads one command per line, dispatches it to the
//! engine, and prints the outcome. Two sentinels are handled here and never
//! reach the engine: `EXIT` ends the session, `HELP` prints the grammar.

mod logging;

use clap::{Parser, Subcommand};
use gridbot_engine::{grammar_summary, CommandResult, Engine, Grid};
use std::io::Write;

#[derive(Parser)]
#[command(name = "gridbot")]
#[command(author, version, about = "gridbot - a grid-confined robot driven by text commands")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid width
    #[arg(long, default_value_t = 5, global = true)]
    width: i32,

    /// Grid height
    #[arg(long, default_value_t = 5, global = true)]
    height: i32,

    /// Emit one JSON result per command instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Print the session trace on exit
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run commands from a file, one per line
    Script {
        /// Path to the command file
        #[arg(required = true)]
        file: String,
    },
    /// Print the command grammar and exit
    Grammar,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let grid = match Grid::new(cli.width, cli.height) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e.message());
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Grammar) => print!("{}", grammar_summary()),
        Some(Commands::Script { file }) => run_script(&file, grid, cli.json, cli.verbose),
        None => run_repl(grid, cli.json, cli.verbose),
    }
}

/// Interactive loop: prompt, read, dispatch, render, repeat until EXIT/EOF.
fn run_repl(grid: Grid, json: bool, verbose: bool) {
    let mut engine = Engine::with_grid(grid);
    let stdin = std::io::stdin();

    loop {
        print!("Command: ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "EXIT" {
            break;
        }
        if line == "HELP" {
            print!("{}", grammar_summary());
            continue;
        }

        dispatch_and_render(&mut engine, line, json);
    }

    if verbose {
        print_trace(&engine, json);
    }
}

/// Batch mode: dispatch every non-empty line of the file.
///
/// Command failures are reported and execution continues; only an unreadable
/// file terminates the process.
fn run_script(path: &str, grid: Grid, json: bool, verbose: bool) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    };

    tracing::debug!(path, lines = content.lines().count(), "running script");

    let mut engine = Engine::with_grid(grid);
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "EXIT" {
            break;
        }
        dispatch_and_render(&mut engine, line, json);
    }

    if verbose {
        print_trace(&engine, json);
    }
}

fn dispatch_and_render(engine: &mut Engine, line: &str, json: bool) {
    let result = engine.dispatch(line);

    if let Err(e) = &result {
        tracing::debug!(error = %e, "command rejected");
    }

    if json {
        let record = CommandResult::from_dispatch(&result);
        match serde_json::to_string(&record) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error encoding result: {}", e),
        }
        return;
    }

    match result {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                println!("{}", message);
            }
        }
        Err(e) => println!("Error: {}", e.message()),
    }
}

fn print_trace(engine: &Engine, json: bool) {
    let trace = engine.trace();

    if json {
        match serde_json::to_string(trace) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error encoding trace: {}", e),
        }
        return;
    }

    println!("\n--- Session Trace ({} commands) ---", trace.len());
    for entry in trace {
        let marker = if entry.had_error { " !" } else { "" };
        println!("  {:3}. {} -> {}{}", entry.seq, entry.line, entry.result, marker);
    }
}
