/// Interactive prompts: item collection and the judgment loop.
///
/// Both read lines from a caller-supplied `BufRead` so they are
/// scriptable through a pipe and testable against a cursor.
use std::io::BufRead;

use faceoff_core::{Matchup, NodeId, RankingSession};

use crate::bail;

/// Give up after this many answers to a single matchup that pick
/// neither side. Re-prompting is a bounded loop, never recursion.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    First,
    Second,
    ShowGraph,
    Invalid,
}

pub fn parse_answer(line: &str) -> Answer {
    match line.trim() {
        "a" | "A" => Answer::First,
        "b" | "B" => Answer::Second,
        "?" => Answer::ShowGraph,
        _ => Answer::Invalid,
    }
}

/// Read labels one per line until a blank line (or EOF).
pub fn collect_items(input: &mut impl BufRead) -> Vec<String> {
    println!("Enter one option per line. Enter a blank line when done.");

    let mut items = Vec::new();
    loop {
        let Some(line) = read_line(input) else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        items.push(line.to_string());
    }
    items
}

/// Present one matchup and return (winner, loser).
///
/// `?` prints the current preference graph and re-asks; anything other
/// than a/b re-asks up to `max_attempts` times before giving up.
pub fn faceoff(
    input: &mut impl BufRead,
    session: &RankingSession,
    matchup: &Matchup,
    max_attempts: usize,
) -> (NodeId, NodeId) {
    for _ in 0..max_attempts {
        println!("a: {}", session.label(matchup.a).unwrap_or(""));
        println!("b: {}", session.label(matchup.b).unwrap_or(""));

        let Some(line) = read_line(input) else {
            bail("Input closed before ranking finished");
        };
        match parse_answer(&line) {
            Answer::First => return matchup.split(matchup.a),
            Answer::Second => return matchup.split(matchup.b),
            Answer::ShowGraph => print!("{}", session.dot()),
            Answer::Invalid => println!("Please answer a or b (or ? to see the graph)."),
        }
    }
    bail(format!("No valid answer after {max_attempts} attempts"))
}

fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => bail(format!("Failed to read from stdin: {e}")),
    }
}
