//! Arena-backed mutation-annotated tree.
//!
//! Nodes live in a flat `Vec` and are addressed by [NodeId] indices; the
//! search code keys its memo tables by `NodeId` instead of holding node
//! references, which keeps ownership trivial while the masking step mutates
//! token lists in place. Node names are unique and stable for one run.

pub mod io;

use std::collections::HashSet;

/// Stable arena index of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub mutations: Vec<String>,
    pub branch_length: f64,
}

#[derive(Debug, Clone)]
pub struct MutationTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl MutationTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Node {
            name: root_name.into(),
            parent: None,
            children: Vec::new(),
            mutations: Vec::new(),
            branch_length: 0.0,
        };
        MutationTree {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a child under `parent` and returns its id.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        mutations: Vec<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let branch_length = mutations.len() as f64;
        self.nodes.push(Node {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            mutations,
            branch_length,
        });
        self.nodes[parent.idx()].children.push(id);
        id
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.idx()].name
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.idx()].children
    }

    pub fn mutations(&self, id: NodeId) -> &[String] {
        &self.nodes[id.idx()].mutations
    }

    pub fn branch_length(&self, id: NodeId) -> f64 {
        self.nodes[id.idx()].branch_length
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.idx()].children.is_empty()
    }

    /// Replaces the node's mutation list in place; when
    /// `update_branch_length` is set the branch length becomes the new
    /// list length.
    pub fn update_mutations(
        &mut self,
        id: NodeId,
        mutations: Vec<String>,
        update_branch_length: bool,
    ) {
        let node = &mut self.nodes[id.idx()];
        node.mutations = mutations;
        if update_branch_length {
            node.branch_length = node.mutations.len() as f64;
        }
    }

    /// Detaches `id` and its subtree from the parent. The root cannot be
    /// removed. Detached nodes stay in the arena but are unreachable from
    /// the root, so every traversal ignores them.
    pub fn remove_subtree(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.idx()].parent.take() {
            self.nodes[parent.idx()].children.retain(|c| *c != id);
        }
    }

    /// Ancestors of `id` ordered parent first, root last.
    pub fn ancestor_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.nodes[id.idx()].parent;
        while let Some(p) = current {
            path.push(p);
            current = self.nodes[p.idx()].parent;
        }
        path
    }

    /// Children-first order over the region rooted at `start`. Children
    /// whose id is in `boundary` root other regions and are not descended
    /// into; `start` itself is always visited (last).
    pub fn postorder(&self, start: NodeId, boundary: &HashSet<NodeId>) -> Vec<NodeId> {
        let mut order = Vec::new();
        // (node, next child index) explicit stack; deep trees would blow
        // the call stack recursively.
        let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
        while let Some((node, child_idx)) = stack.pop() {
            let children = self.children(node);
            if child_idx < children.len() {
                stack.push((node, child_idx + 1));
                let child = children[child_idx];
                if !boundary.contains(&child) {
                    stack.push((child, 0));
                }
            } else {
                order.push(node);
            }
        }
        order
    }

    /// Every node reachable from the root, preorder.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            order.push(node);
            // Reverse push keeps children in tree order.
            for child in self.children(node).iter().rev() {
                stack.push(*child);
            }
        }
        order
    }

    /// Leaves of the region rooted at `start`, bounded by `boundary`.
    pub fn region_tips(&self, start: NodeId, boundary: &HashSet<NodeId>) -> Vec<NodeId> {
        self.postorder(start, boundary)
            .into_iter()
            .filter(|id| self.is_leaf(*id))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }
}
