//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references, so the tree
//! owns every node outright and parent links are plain indices.

use crate::core::{GameRng, GameState, PlayerMap};

use super::node::{NodeId, SearchNode};
use super::search::SearchError;

/// Arena-based search tree.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    nodes: Vec<SearchNode<S>>,
    root: NodeId,
}

impl<S: GameState> SearchTree<S> {
    /// Create a tree whose root owns `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(SearchNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root)
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add one child to `id` for its next untried play.
    ///
    /// The play buffer is filled and shuffled on the first call. The child
    /// gets a clone of the parent's state with the play committed.
    pub fn expand(&mut self, id: NodeId, rng: &mut GameRng) -> Result<NodeId, SearchError> {
        let parent = self.get_mut(id);
        if !parent.ensure_plays(rng) {
            return Err(SearchError::NoLegalPlays);
        }
        let play = parent
            .next_untried()
            .cloned()
            .ok_or(SearchError::FullyExpanded)?;

        let mut state = parent.state().clone();
        let mover = state.current_player();
        state.commit_play(play.clone())?;

        let child = SearchNode::new(id, Some(play), mover, parent.depth + 1, state);
        let child_id = self.alloc(child);
        self.get_mut(id).push_child(child_id);
        Ok(child_id)
    }

    /// Walk from `leaf` to the root crediting each node with its mover's reward.
    pub fn backpropagate(&mut self, leaf: NodeId, rewards: &PlayerMap<f64>) {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.update(rewards[node.mover]);
            current = node.parent;
        }
    }

    /// Root children paired with their visit counts.
    pub fn play_visits(&self) -> Vec<(S::Move, u32)> {
        self.root_node()
            .children()
            .iter()
            .map(|&child| self.get(child))
            .filter_map(|node| node.play.clone().map(|play| (play, node.visits)))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let fully_expanded_count = self.nodes.iter().filter(|n| n.is_fully_expanded()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            fully_expanded_count,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Nodes with a child for every legal play.
    pub fully_expanded_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::row::{RowGameConfig, RowGameState};

    fn small_state() -> RowGameState {
        let config = RowGameConfig::default().with_player_count(2).with_hand_size(2);
        let mut state = RowGameState::new(config).unwrap();
        state.deal_card(PlayerId::new(0), 30).unwrap();
        state.deal_card(PlayerId::new(0), 40).unwrap();
        for (row, card) in [10, 11, 12, 13].into_iter().enumerate() {
            state.add_starting_card(row, card).unwrap();
        }
        state
    }

    #[test]
    fn test_tree_new() {
        let tree = SearchTree::new(small_state());

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
    }

    #[test]
    fn test_expand_adds_one_child_per_call() {
        let mut tree = SearchTree::new(small_state());
        let mut rng = GameRng::new(3);
        let root = tree.root();

        let first = tree.expand(root, &mut rng).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(first).parent, root);
        assert_eq!(tree.get(first).depth, 1);
        assert_eq!(tree.get(first).mover, PlayerId::new(0));
        // The child's state moved on; the root's did not
        assert_eq!(tree.get(first).state().current_player(), PlayerId::new(1));
        assert_eq!(tree.root_node().state().current_player(), PlayerId::new(0));

        let second = tree.expand(root, &mut rng).unwrap();
        assert_ne!(tree.get(first).play, tree.get(second).play);
        assert!(tree.root_node().is_fully_expanded());

        assert!(matches!(
            tree.expand(root, &mut rng),
            Err(SearchError::FullyExpanded)
        ));
    }

    #[test]
    fn test_backpropagate_credits_mover() {
        let mut tree = SearchTree::new(small_state());
        let mut rng = GameRng::new(3);
        let root = tree.root();
        let child = tree.expand(root, &mut rng).unwrap();

        let rewards = PlayerMap::new(2, |p| if p.index() == 0 { 60.0 } else { 66.0 });
        tree.backpropagate(child, &rewards);

        assert_eq!(tree.get(child).visits, 1);
        assert_eq!(tree.get(child).value, 60.0);
        assert_eq!(tree.root_node().visits, 1);
        assert_eq!(tree.play_visits().len(), 1);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = SearchTree::new(small_state());
        let mut rng = GameRng::new(3);
        let root = tree.root();
        tree.expand(root, &mut rng).unwrap();
        tree.expand(root, &mut rng).unwrap();

        let stats = tree.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.fully_expanded_count, 1);
        assert_eq!(stats.terminal_count, 0);
    }
}
