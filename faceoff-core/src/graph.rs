/// The preference graph: the set of registered items plus every recorded
/// "prefer A over B" edge.
///
/// Structure is an arena of nodes addressed by `NodeId`. Slot 0 is a
/// synthetic unlabeled root; registering an item attaches it beneath the
/// root as an initial preference edge. A judgment re-homes the loser from
/// the pair's shared parent to the winner (sibling pruning), so every
/// registered node has exactly one parent at all times and the structure
/// stays a tree converging toward a single chain.
use thiserror::Error;

use crate::types::NodeId;

/// Rejected `record_preference` arguments. The graph is never mutated
/// when one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("an item cannot be preferred over itself")]
    SelfPreference,

    #[error("the root placeholder cannot take part in a preference")]
    RootNotRankable,

    #[error("node handle does not belong to this graph")]
    UnknownNode,

    #[error("items are not currently siblings in any matchup")]
    NotSiblings,
}

pub(crate) struct Node {
    /// `None` only for the root.
    pub(crate) label: Option<String>,
    /// Counter value from the last judgment this node took part in.
    pub(crate) stamp: u64,
    /// Nodes this one is currently preferred over, oldest judgment first.
    pub(crate) children: Vec<NodeId>,
}

pub struct PreferenceGraph {
    nodes: Vec<Node>,
    stamp_seq: u64,
}

impl PreferenceGraph {
    /// An empty graph containing only the synthetic root.
    pub fn new() -> Self {
        PreferenceGraph {
            nodes: vec![Node { label: None, stamp: 0, children: Vec::new() }],
            stamp_seq: 0,
        }
    }

    /// Number of registered items (the root is not counted).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a new item and record the initial root → item edge.
    /// Labels may repeat; the returned handle is the item's identity.
    pub fn register(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            label: Some(label.into()),
            stamp: 0,
            children: Vec::new(),
        });
        self.attach(NodeId::ROOT, id);
        id
    }

    /// Record that `winner` is preferred over `loser`.
    ///
    /// Both must currently be children of the same node — i.e. a pair some
    /// matchup could have offered. That restriction is what keeps the
    /// structure a tree: the loser leaves the shared parent and becomes a
    /// child of the winner, so it always has exactly one parent and stays
    /// reachable from the root. A pair that is already ordered
    /// transitively is no longer siblings and is rejected with
    /// `NotSiblings` rather than corrupting the structure.
    pub fn record_preference(&mut self, winner: NodeId, loser: NodeId) -> Result<(), GraphError> {
        self.check(winner)?;
        self.check(loser)?;
        if winner == loser {
            return Err(GraphError::SelfPreference);
        }
        let parent = self.parent_of(loser).ok_or(GraphError::NotSiblings)?;
        if !self.nodes[parent.0].children.contains(&winner) {
            return Err(GraphError::NotSiblings);
        }
        self.attach(winner, loser);
        Ok(())
    }

    /// Create the `parent → child` edge: advance the counter, stamp both
    /// participants, insert the child oldest-first, then prune.
    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.stamp_seq += 1;
        self.nodes[parent.0].stamp = self.stamp_seq;
        self.nodes[child.0].stamp = self.stamp_seq;

        // Order by stamp, so we present less recent pairs first.
        let mut children = std::mem::take(&mut self.nodes[parent.0].children);
        children.push(child);
        children.sort_by_key(|id| self.nodes[id.0].stamp);
        self.nodes[parent.0].children = children;

        // Any other node listing both participants is redundant in listing
        // the child: its position is now determined relative to the parent.
        for n in 0..self.nodes.len() {
            self.prune_sibling(NodeId(n), parent, child);
        }
    }

    /// If `node` lists both `keep` and `drop` as children, drop `drop` and
    /// re-sort what remains. `keep` was just re-stamped, so it moves to the
    /// most-recent end of the surviving sibling group.
    fn prune_sibling(&mut self, node: NodeId, keep: NodeId, drop: NodeId) {
        {
            let children = &self.nodes[node.0].children;
            if !(children.contains(&keep) && children.contains(&drop)) {
                return;
            }
        }
        let mut children = std::mem::take(&mut self.nodes[node.0].children);
        children.retain(|&c| c != drop);
        children.sort_by_key(|id| self.nodes[id.0].stamp);
        self.nodes[node.0].children = children;
    }

    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.is_root() {
            return Err(GraphError::RootNotRankable);
        }
        if id.0 >= self.nodes.len() {
            return Err(GraphError::UnknownNode);
        }
        Ok(())
    }

    /// The node currently listing `id` as a child, if any.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_ids()
            .find(|n| self.nodes[n.0].children.contains(&id))
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.label.as_deref())
    }

    /// Registered item labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| n.label.as_deref())
    }

    /// Every node handle, root included.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn stamp(&self, id: NodeId) -> u64 {
        self.nodes[id.0].stamp
    }
}

impl Default for PreferenceGraph {
    fn default() -> Self {
        PreferenceGraph::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_attaches_under_root() {
        let mut g = PreferenceGraph::new();
        let a = g.register("Apples");
        let b = g.register("Bananas");
        assert_eq!(g.len(), 2);
        assert_eq!(g.children(g.root()), &[a, b]);
        assert_eq!(g.parent_of(a), Some(g.root()));
        assert_eq!(g.label(a), Some("Apples"));
        assert_eq!(g.label(g.root()), None);
    }

    #[test]
    fn test_labels_may_repeat() {
        let mut g = PreferenceGraph::new();
        let a = g.register("same");
        let b = g.register("same");
        assert_ne!(a, b);
        assert_eq!(g.labels().collect::<Vec<_>>(), vec!["same", "same"]);
    }

    #[test]
    fn test_judgment_rehomes_loser_under_winner() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        let b = g.register("b");
        let c = g.register("c");

        g.record_preference(a, b).unwrap();

        // b was pruned from the root and now lives under a; a's fresh
        // stamp moves it behind c in the root's oldest-first order.
        assert_eq!(g.children(g.root()), &[c, a]);
        assert_eq!(g.children(a), &[b]);
        assert_eq!(g.parent_of(b), Some(a));
    }

    #[test]
    fn test_no_duplicate_parent_after_judgments() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        let b = g.register("b");
        let c = g.register("c");
        let d = g.register("d");

        g.record_preference(a, b).unwrap();
        g.record_preference(c, a).unwrap();
        g.record_preference(c, d).unwrap();

        for id in [a, b, c, d] {
            let parents: Vec<NodeId> = g
                .node_ids()
                .filter(|n| g.children(*n).contains(&id))
                .collect();
            assert_eq!(parents.len(), 1, "node should have exactly one parent");
        }
    }

    #[test]
    fn test_children_stay_oldest_first() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        let b = g.register("b");
        let c = g.register("c");
        let d = g.register("d");

        // a beats b, then a beats c (sibling via root), then a beats d.
        g.record_preference(a, b).unwrap();
        g.record_preference(a, c).unwrap();
        g.record_preference(a, d).unwrap();

        assert_eq!(g.children(a), &[b, c, d]);
        assert!(g.stamp(b) < g.stamp(c));
        assert!(g.stamp(c) < g.stamp(d));
    }

    #[test]
    fn test_self_preference_rejected() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        assert_eq!(g.record_preference(a, a), Err(GraphError::SelfPreference));
    }

    #[test]
    fn test_root_rejected_in_preference() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        assert_eq!(
            g.record_preference(g.root(), a),
            Err(GraphError::RootNotRankable)
        );
        assert_eq!(
            g.record_preference(a, g.root()),
            Err(GraphError::RootNotRankable)
        );
    }

    #[test]
    fn test_unknown_handle_rejected() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        g.register("b");
        assert_eq!(
            g.record_preference(a, NodeId(99)),
            Err(GraphError::UnknownNode)
        );
    }

    #[test]
    fn test_resolved_pair_no_longer_siblings() {
        let mut g = PreferenceGraph::new();
        let a = g.register("a");
        let b = g.register("b");

        g.record_preference(a, b).unwrap();

        // Already ordered: re-submitting either way must not mutate.
        assert_eq!(g.record_preference(a, b), Err(GraphError::NotSiblings));
        assert_eq!(g.record_preference(b, a), Err(GraphError::NotSiblings));
        assert_eq!(g.children(a), &[b]);
        assert_eq!(g.children(g.root()), &[a]);
    }
}
