/// Shared value types for the preference-graph engine.
///
/// Nodes live in an arena owned by `PreferenceGraph` and are addressed by
/// `NodeId` handles. Handles stay valid for the lifetime of the graph that
/// issued them — a graph never removes nodes, it only re-homes edges.

/// Stable handle to a node in a `PreferenceGraph` arena.
///
/// Identity is the handle, not the label: two registered items may carry
/// the same label and still rank independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The synthetic root every registered item is first attached beneath.
    /// Never labeled, never offered in a matchup, never ranked.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub fn is_root(self) -> bool {
        self == NodeId::ROOT
    }
}

/// An unordered pair of sibling nodes offered to the user for comparison.
///
/// Ephemeral: recomputed from the graph on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub a: NodeId,
    pub b: NodeId,
}

impl Matchup {
    pub fn contains(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// Given the winning side, returns (winner, loser).
    /// Panics if `winner` is not part of this matchup — caller contract.
    pub fn split(&self, winner: NodeId) -> (NodeId, NodeId) {
        if winner == self.a {
            (self.a, self.b)
        } else if winner == self.b {
            (self.b, self.a)
        } else {
            panic!("winner is not part of this matchup");
        }
    }
}

/// One line of the final ranking: 1-based rank plus the item's label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    pub rank: usize,
    pub label: String,
}

/// Phases of a ranking session.
///
/// `Collecting` accepts registrations; `Ranking` is the matchup/judgment
/// loop; `Results` is terminal until the caller resets or rematches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    Collecting,
    Ranking,
    Results,
}
