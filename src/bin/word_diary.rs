//! word-diary — 単語日記のコマンドラインクライアント
//!
//! Usage:
//!   word-diary generate <word>... [--save]   Generate a diary entry (3, 5 or 7 words)
//!   word-diary draft show                    Print the saved draft
//!   word-diary draft clear                   Remove the saved draft
//!   word-diary version                       Show version information

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use word_diary::draft::FileDraftStore;
use word_diary::{DiaryClient, Orchestrator, Status, WordCount};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]).await,
        "draft" => cmd_draft(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("word-diary {}", env!("CARGO_PKG_VERSION"));
            0
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!(
        r#"word-diary — 単語日記

USAGE:
    word-diary <COMMAND> [OPTIONS]

COMMANDS:
    generate <word>... [--save]   Generate a diary entry from 3, 5 or 7 words
    draft show                    Print the saved draft
    draft clear                   Remove the saved draft
    version                       Show version information
    help                          Show this help message

ENVIRONMENT:
    WORD_DIARY_RELAY_URL          Relay endpoint (default http://localhost:8888/.netlify/functions/generate)
    WORD_DIARY_DRAFT_DIR          Directory holding the draft file (default .)"#
    );
}

fn orchestrator(count: WordCount) -> Result<Orchestrator, word_diary::Error> {
    let client = DiaryClient::builder().build()?;
    Ok(Orchestrator::builder(Arc::new(client))
        .drafts(Arc::new(FileDraftStore::from_env()))
        .word_count(count)
        .build())
}

/// Exit code for a status line: 0 unless it reports a failure.
fn report(status: &Status) -> i32 {
    eprintln!("{status}");
    i32::from(status.is_failure())
}

async fn cmd_generate(args: &[String]) -> i32 {
    let save = args.iter().any(|a| a == "--save");
    let words: Vec<&String> = args.iter().filter(|a| a.as_str() != "--save").collect();
    let count = match u32::try_from(words.len()).ok().and_then(|n| WordCount::try_from(n).ok()) {
        Some(count) => count,
        None => {
            eprintln!("Error: expected 3, 5 or 7 words, got {}", words.len());
            return 1;
        }
    };

    let app = match orchestrator(count) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    for (i, word) in words.iter().enumerate() {
        if let Err(e) = app.set_word(i, word.as_str()) {
            eprintln!("Error: {e}");
            return 1;
        }
    }

    let status = app.generate().await;
    if !matches!(status, Status::Generated | Status::GeneratedEmpty) {
        eprintln!("{status}");
        return 1;
    }
    println!("{}", app.result());
    let code = report(&status);
    if save {
        return report(&app.save_draft()).max(code);
    }
    code
}

fn cmd_draft(args: &[String]) -> i32 {
    let app = match orchestrator(WordCount::default()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    match args.first().map(String::as_str) {
        Some("show") | Some("load") | None => {
            let status = app.load_draft();
            if status == Status::DraftRestored {
                let words = app.words();
                println!("[{}] {}", words.count(), words.as_slice().join(" / "));
                println!("{}", app.result());
            }
            report(&status)
        }
        Some("clear") => report(&app.clear_draft()),
        Some(other) => {
            eprintln!("Unknown draft command: {other}");
            1
        }
    }
}
