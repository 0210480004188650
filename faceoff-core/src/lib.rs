/// faceoff-core: Preference-graph ranking engine.
///
/// Rank a list of items by answering pairwise "which do you prefer"
/// questions. No IO, no terminal, no persistence — just the graph that
/// records judgments, the selector that picks the next fair pair, and
/// the reader that walks out the final order. Bring your own front end.
///
/// Each judgment moves the loser underneath the winner and prunes the
/// now-redundant sibling edge, so accumulated judgments collapse the
/// initial flat forest into a single fully-ordered chain.
///
/// # Quick start
///
/// ```rust
/// use faceoff_core::RankingSession;
///
/// let mut session = RankingSession::new();
/// session.register("Apples").unwrap();
/// session.register("Bananas").unwrap();
/// session.finish_collecting().unwrap();
///
/// while let Some(matchup) = session.next_matchup().unwrap() {
///     // ask the user; here the first option always wins
///     session.submit_preference(matchup.a, matchup.b).unwrap();
/// }
///
/// for entry in session.results().unwrap() {
///     println!("{}\t{}", entry.rank, entry.label);
/// }
/// ```

pub mod graph;
pub mod matchup;
pub mod order;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use graph::{GraphError, PreferenceGraph};
pub use matchup::{find_matchups, next_matchup};
pub use order::{ordered_sequence, to_dot};
pub use session::{RankingSession, SessionError};
pub use types::{Matchup, NodeId, RankedEntry, SessionState};
