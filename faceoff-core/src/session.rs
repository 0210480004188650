/// Whole-session state machine: Collecting → Ranking → Results.
///
/// `RankingSession` is the surface front ends talk to. It owns the
/// preference graph and enforces which operations are valid in which
/// phase; the graph itself stays purely structural.
use thiserror::Error;

use crate::graph::{GraphError, PreferenceGraph};
use crate::matchup::next_matchup;
use crate::order::{ordered_sequence, to_dot};
use crate::types::{Matchup, NodeId, RankedEntry, SessionState};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("operation is not valid in the {0:?} phase")]
    WrongPhase(SessionState),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub struct RankingSession {
    graph: PreferenceGraph,
    state: SessionState,
}

impl RankingSession {
    pub fn new() -> Self {
        RankingSession {
            graph: PreferenceGraph::new(),
            state: SessionState::Collecting,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read-only view of the underlying graph, for diagnostics.
    pub fn graph(&self) -> &PreferenceGraph {
        &self.graph
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.graph.label(id)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Add an item. Collecting phase only.
    pub fn register(&mut self, label: impl Into<String>) -> Result<NodeId, SessionError> {
        self.expect(SessionState::Collecting)?;
        Ok(self.graph.register(label))
    }

    /// The caller's explicit "done adding items" signal. With fewer than
    /// two items there is nothing to ask, so the session lands directly
    /// in Results.
    pub fn finish_collecting(&mut self) -> Result<(), SessionError> {
        self.expect(SessionState::Collecting)?;
        self.state = if next_matchup(&self.graph).is_some() {
            SessionState::Ranking
        } else {
            SessionState::Results
        };
        Ok(())
    }

    /// The next pair to present, or `None` once ranking is complete.
    /// Observing `None` transitions the session to Results.
    pub fn next_matchup(&mut self) -> Result<Option<Matchup>, SessionError> {
        match self.state {
            SessionState::Ranking => {
                let matchup = next_matchup(&self.graph);
                if matchup.is_none() {
                    self.state = SessionState::Results;
                }
                Ok(matchup)
            }
            SessionState::Results => Ok(None),
            SessionState::Collecting => Err(SessionError::WrongPhase(self.state)),
        }
    }

    /// Record one judgment. Ranking phase only. When the judgment
    /// resolves the last pending matchup the session moves to Results.
    pub fn submit_preference(&mut self, winner: NodeId, loser: NodeId) -> Result<(), SessionError> {
        self.expect(SessionState::Ranking)?;
        self.graph.record_preference(winner, loser)?;
        if next_matchup(&self.graph).is_none() {
            self.state = SessionState::Results;
        }
        Ok(())
    }

    /// The final total order as (rank, label) entries. Results phase only.
    pub fn results(&self) -> Result<Vec<RankedEntry>, SessionError> {
        self.expect(SessionState::Results)?;
        Ok(ordered_sequence(&self.graph)
            .into_iter()
            .enumerate()
            .map(|(i, id)| RankedEntry {
                rank: i + 1,
                label: self.graph.label(id).unwrap_or_default().to_string(),
            })
            .collect())
    }

    /// Discard everything and return to Collecting with no items.
    pub fn reset(&mut self) {
        self.graph = PreferenceGraph::new();
        self.state = SessionState::Collecting;
    }

    /// Discard all judgments but keep the item set: every label is
    /// re-registered in its original order and the session returns to
    /// Collecting, where more items may still be added.
    pub fn rematch(&mut self) {
        let labels: Vec<String> = self.graph.labels().map(str::to_string).collect();
        self.graph = PreferenceGraph::new();
        for label in labels {
            self.graph.register(label);
        }
        self.state = SessionState::Collecting;
    }

    /// Graphviz dump of the current preference edges.
    pub fn dot(&self) -> String {
        to_dot(&self.graph)
    }

    fn expect(&self, state: SessionState) -> Result<(), SessionError> {
        if self.state == state {
            Ok(())
        } else {
            Err(SessionError::WrongPhase(self.state))
        }
    }
}

impl Default for RankingSession {
    fn default() -> Self {
        RankingSession::new()
    }
}
