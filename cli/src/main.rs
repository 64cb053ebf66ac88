//! MedBot console front end
//!
//! Talks to the keyword catalog from a terminal, previews the fixed triage
//! scenarios, or smoke-tests the AI-service boundary with a mock context.
//!
//! Usage:
//!   cargo run -p medbot-cli                  # same as `chat`
//!   cargo run -p medbot-cli -- chat --show-transcript
//!   cargo run -p medbot-cli -- scenarios
//!   cargo run -p medbot-cli -- all
//!   cargo run -p medbot-cli -- self-check
//!   cargo run -p medbot-cli -- --catalog my-catalog.toml chat

mod repl;

use std::{io, path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medbot_catalog::KeywordRouter;
use medbot_contracts::error::MedbotResult;
use medbot_service::{
    open_session,
    scenarios::run_triage_cases,
    selfcheck::run_self_check,
    ServiceParams,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MedBot symptom assistant console.
///
/// Replies come from a fixed keyword catalog; nothing is sent to a hosted
/// model.
#[derive(Parser)]
#[command(
    name = "medbot",
    about = "MedBot symptom assistant console",
    long_about = "Chat with MedBot's keyword catalog, preview the fixed triage scenarios,\n\
                  or smoke-test the AI-service boundary with a mock context."
)]
struct Cli {
    /// Answer from this TOML catalog instead of the builtin one.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive conversation (the default).
    Chat {
        /// Print the session transcript as JSON when the chat ends.
        #[arg(long)]
        show_transcript: bool,
    },
    /// Route the five fixed triage messages and preview each reply.
    Scenarios,
    /// Scenarios first, then an interactive conversation.
    All {
        #[arg(long)]
        show_transcript: bool,
    },
    /// Exercise the service constructor and both handlers with a mock context.
    SelfCheck,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to stderr so they never interleave with the chat.
    // Set RUST_LOG=debug to see routing decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let catalog = cli.catalog.as_deref();

    let result = match cli.command.unwrap_or(Command::Chat { show_transcript: false }) {
        Command::Chat { show_transcript } => {
            KeywordRouter::load(catalog).and_then(|r| run_conversation(r, show_transcript))
        }
        Command::Scenarios => KeywordRouter::load(catalog).map(|r| print_scenarios(&r)),
        Command::All { show_transcript } => KeywordRouter::load(catalog).and_then(|r| {
            print_scenarios(&r);
            println!("{}", "=".repeat(50));
            run_conversation(r, show_transcript)
        }),
        Command::SelfCheck => Ok(print_self_check(cli.catalog.clone())),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("medbot error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_conversation(router: KeywordRouter, show_transcript: bool) -> MedbotResult<bool> {
    println!("MedBot Interactive Chat");
    println!("{}", "=".repeat(50));
    println!("Describe how you feel and MedBot will suggest what to watch for.");
    println!("Type 'quit' to exit.");
    println!();

    let (session, transcript) = open_session(Arc::new(router));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run_chat(&session, stdin.lock(), &mut stdout)?;

    if show_transcript {
        let log = transcript.export_log()?;
        match log.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("could not render transcript: {e}"),
        }
    }

    Ok(true)
}

fn print_scenarios(router: &KeywordRouter) -> bool {
    println!("Triage Scenarios");
    println!("{}", "=".repeat(50));

    for (i, outcome) in run_triage_cases(router).iter().enumerate() {
        println!();
        println!("Test Case {}: {}", i + 1, outcome.input);
        println!("{}", "-".repeat(30));
        println!("Rule: {}", outcome.rule_id.as_deref().unwrap_or("fallback"));
        let ellipsis = if outcome.truncated { "..." } else { "" };
        println!("Response: {}{}", outcome.preview, ellipsis);
    }
    println!();

    true
}

fn print_self_check(catalog_path: Option<PathBuf>) -> bool {
    println!("MedBot Service Self Check");
    println!("{}", "=".repeat(50));

    let params = ServiceParams {
        catalog_path,
        ..ServiceParams::default()
    };
    let results = run_self_check(&params);

    for result in &results {
        let status = if result.passed { "PASSED" } else { "FAILED" };
        println!("{:<24} {}  {}", result.name, status, result.detail);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    println!();
    println!("Total: {}/{} checks passed", passed, results.len());

    passed == results.len()
}
