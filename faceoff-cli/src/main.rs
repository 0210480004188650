mod config;
mod output;
mod prompt;

use clap::Parser;
use faceoff_core::{RankingSession, SessionState};
use std::io;
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "faceoff", version, about = "Rank a list by answering which-do-you-prefer questions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank items by answering pairwise matchups
    Rank(RankArgs),
    /// Create a default config file at ~/.config/faceoff/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one item per line (or a JSON array of strings)
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline item (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print the final preference graph as Graphviz DOT to stderr
    #[arg(long)]
    dot: bool,

    /// Give up after this many invalid answers to a single matchup
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Path to config file (default: ~/.config/faceoff/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a string as either a JSON array of strings or plain text
/// (one item per line).
fn parse_items_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let items: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
        items.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one item per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load items from --items file and --item inline args. Empty means the
/// caller falls back to interactive collection.
fn load_items(args: &RankArgs) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse_items_from_str(&content);
    }

    items.extend(args.inline_items.iter().cloned());
    items
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set defaults for --json and --max-attempts.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let json = args.json || cfg.json.unwrap_or(false);
    let max_attempts = args
        .max_attempts
        .or(cfg.max_attempts)
        .unwrap_or(prompt::DEFAULT_MAX_ATTEMPTS);
    if max_attempts == 0 {
        bail("--max-attempts must be at least 1");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut items = load_items(&args);
    if items.is_empty() {
        items = prompt::collect_items(&mut input);
    }

    let mut session = RankingSession::new();
    for label in items {
        session.register(label).unwrap_or_else(|e| bail(e));
    }
    session.finish_collecting().unwrap_or_else(|e| bail(e));

    if session.state() == SessionState::Ranking {
        println!("Enter a or b to indicate your preference for the following items:");
    }

    let mut total_comparisons = 0usize;
    loop {
        let matchup = match session.next_matchup() {
            Ok(Some(m)) => m,
            Ok(None) => break,
            Err(e) => bail(e),
        };
        let (winner, loser) = prompt::faceoff(&mut input, &session, &matchup, max_attempts);
        println!(
            "{} > {}\n",
            session.label(winner).unwrap_or(""),
            session.label(loser).unwrap_or(""),
        );
        session.submit_preference(winner, loser).unwrap_or_else(|e| bail(e));
        total_comparisons += 1;
    }

    if args.dot {
        eprint!("{}", session.dot());
    }

    let results = session.results().unwrap_or_else(|e| bail(e));
    if json {
        output::print_json(&results, total_comparisons);
    } else {
        output::print_table(&results, total_comparisons);
    }
}
