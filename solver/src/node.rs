//! Search nodes and the arena that owns them.
//!
//! Nodes reference their parent by index into the arena instead of by
//! pointer, so the whole search tree lives in one allocation-friendly `Vec`
//! and stays alive until the engine returns. Parent links form a tree and
//! are only walked for path reconstruction.

use freecell_engine::game_state::GameState;
use freecell_engine::r#move::Move;

/// One expansion in the search tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Arena index of the parent; `None` for the root.
    pub parent: Option<u32>,
    /// The move that produced this node's state; `None` for the root.
    pub mv: Option<Move>,
    pub state: GameState,
    /// Edge count from the root.
    pub depth: u32,
    /// Strategy-dependent score assigned at push time.
    pub cost: i64,
}

#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: u32) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The move sequence from the root to `id`, in execution order.
    pub fn path(&self, id: u32) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut current = id;
        loop {
            let node = self.node(current);
            match (node.mv, node.parent) {
                (Some(mv), Some(parent)) => {
                    moves.push(mv);
                    current = parent;
                }
                _ => break,
            }
        }
        moves.reverse();
        moves
    }
}
