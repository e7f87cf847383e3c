// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk-loaded R-tree over ring edges.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::ControlFlow;

use crate::backend::{Backend, EdgeVisitor};
use crate::ring::Edges;
use crate::types::{Overlap, Rect, Segment};

/// Maximum number of children per node. Must be a power of two.
pub const MAX_CHILDREN: usize = 16;

const _: () = assert!(
    MAX_CHILDREN.is_power_of_two() && MAX_CHILDREN >= 2,
    "fanout must be a power of two of at least 2"
);

const LOG2_CHILDREN: u32 = MAX_CHILDREN.trailing_zeros();

/// R-tree over edge bounding rectangles, packed once at construction.
///
/// Nodes live in an arena and refer to children by index; the tree is never
/// mutated after [`Backend::build`].
pub struct RTree {
    root: Option<NodeIdx>,
    arena: Vec<RNode>,
    len: usize,
}

#[derive(Clone)]
struct RNode {
    rect: Rect,
    leaf: bool,
    children: Vec<RChild>,
}

#[derive(Clone)]
enum RChild {
    Node(NodeIdx),
    Item { slot: usize, rect: Rect, seg: Segment },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone)]
struct Entry {
    slot: usize,
    rect: Rect,
    seg: Segment,
}

impl RTree {
    /// Number of levels needed to hold `n` entries, i.e. `ceil(log_M(n))`,
    /// at least one.
    fn height_for(n: usize) -> usize {
        if n <= MAX_CHILDREN {
            return 1;
        }
        let bits = usize::BITS - (n - 1).leading_zeros();
        bits.div_ceil(LOG2_CHILDREN) as usize
    }

    /// Build a packed tree from `(slot, segment)` pairs.
    pub fn bulk_load(pairs: impl IntoIterator<Item = (usize, Segment)>) -> Self {
        let mut items: Vec<Entry> = pairs
            .into_iter()
            .map(|(slot, seg)| Entry {
                slot,
                rect: seg.rect(),
                seg,
            })
            .collect();
        let len = items.len();
        let mut arena = Vec::new();
        let root = if items.is_empty() {
            None
        } else {
            let height = Self::height_for(len);
            Some(Self::build_node(&mut arena, &mut items, height))
        };
        let tree = Self { root, arena, len };
        tracing::debug!(
            edges = len,
            height = tree.height(),
            nodes = tree.arena.len(),
            "bulk loaded edge index"
        );
        tree
    }

    fn build_node(arena: &mut Vec<RNode>, items: &mut [Entry], height: usize) -> NodeIdx {
        if height <= 1 || items.len() <= MAX_CHILDREN {
            let children: Vec<RChild> = items
                .iter()
                .map(|e| RChild::Item {
                    slot: e.slot,
                    rect: e.rect,
                    seg: e.seg,
                })
                .collect();
            return Self::push_node(arena, true, children);
        }
        let child_cap = 1_usize << (LOG2_CHILDREN as usize * (height - 1));
        let mut groups: Vec<&mut [Entry]> = Vec::with_capacity(MAX_CHILDREN);
        Self::partition(items, MAX_CHILDREN, child_cap, &mut groups);
        let children: Vec<RChild> = groups
            .into_iter()
            .map(|group| RChild::Node(Self::build_node(arena, group, height - 1)))
            .collect();
        Self::push_node(arena, false, children)
    }

    /// Split `items` into at most `parts` groups of at most `cap` entries each,
    /// halving at the median of the longer axis.
    fn partition<'a>(
        items: &'a mut [Entry],
        parts: usize,
        cap: usize,
        out: &mut Vec<&'a mut [Entry]>,
    ) {
        if parts <= 1 || items.len() <= cap {
            out.push(items);
            return;
        }
        let bounds = items
            .iter()
            .fold(Rect::EMPTY, |acc, e| acc.union(&e.rect));
        let mid = items.len() / 2;
        if bounds.width() >= bounds.height() {
            items.select_nth_unstable_by(mid, |a, b| a.rect.min.x.total_cmp(&b.rect.min.x));
        } else {
            items.select_nth_unstable_by(mid, |a, b| a.rect.min.y.total_cmp(&b.rect.min.y));
        }
        let (left, right) = items.split_at_mut(mid);
        Self::partition(left, parts / 2, cap, out);
        Self::partition(right, parts / 2, cap, out);
    }

    fn push_node(arena: &mut Vec<RNode>, leaf: bool, children: Vec<RChild>) -> NodeIdx {
        let rect = Self::node_rect(arena, &children);
        let idx = arena.len();
        arena.push(RNode {
            rect,
            leaf,
            children,
        });
        NodeIdx::new(idx)
    }

    fn node_rect(arena: &[RNode], children: &[RChild]) -> Rect {
        children.iter().fold(Rect::EMPTY, |acc, c| match c {
            RChild::Node(i) => acc.union(&arena[i.get()].rect),
            RChild::Item { rect, .. } => acc.union(rect),
        })
    }

    /// Number of indexed edges.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no edges are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes (leaf and internal).
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Number of node levels on the deepest path; zero for an empty tree.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.node_height(root))
    }

    fn node_height(&self, idx: NodeIdx) -> usize {
        let node = &self.arena[idx.get()];
        if node.leaf {
            return 1;
        }
        let below = node
            .children
            .iter()
            .filter_map(|c| match c {
                RChild::Node(ci) => Some(self.node_height(*ci)),
                RChild::Item { .. } => None,
            })
            .max()
            .unwrap_or(0);
        below + 1
    }

    /// Bounds of every indexed edge; empty for an empty tree.
    pub fn rect(&self) -> Rect {
        self.root
            .map(|i| self.arena[i.get()].rect)
            .unwrap_or(Rect::EMPTY)
    }

    /// Visit every edge whose bounding rectangle intersects `target`.
    ///
    /// Subtrees entirely inside `target` are walked without further rectangle
    /// tests; subtrees disjoint from it are skipped.
    pub fn search(&self, target: Rect, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        match self.root {
            Some(root) => self.search_node(root, &target, visit),
            None => ControlFlow::Continue(()),
        }
    }

    fn search_node(
        &self,
        idx: NodeIdx,
        target: &Rect,
        visit: &mut EdgeVisitor<'_>,
    ) -> ControlFlow<()> {
        let node = &self.arena[idx.get()];
        match target.overlap(&node.rect) {
            Overlap::Disjoint => ControlFlow::Continue(()),
            Overlap::Contains => self.visit_all(idx, visit),
            Overlap::Intersects => {
                for c in &node.children {
                    match c {
                        RChild::Node(ci) => self.search_node(*ci, target, visit)?,
                        RChild::Item { slot, rect, seg } => {
                            if rect.intersects(target) {
                                visit(*slot, *seg)?;
                            }
                        }
                    }
                }
                ControlFlow::Continue(())
            }
        }
    }

    fn visit_all(&self, idx: NodeIdx, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        for c in &self.arena[idx.get()].children {
            match c {
                RChild::Node(ci) => self.visit_all(*ci, visit)?,
                RChild::Item { slot, seg, .. } => visit(*slot, *seg)?,
            }
        }
        ControlFlow::Continue(())
    }

    /// Depth-first walk over every node and leaf entry with its depth (root
    /// is `0`). For diagnostics and visualization.
    pub fn traverse(&self, mut visit: impl FnMut(&Rect, usize) -> ControlFlow<()>) -> ControlFlow<()> {
        match self.root {
            Some(root) => self.traverse_node(root, 0, &mut visit),
            None => ControlFlow::Continue(()),
        }
    }

    fn traverse_node(
        &self,
        idx: NodeIdx,
        depth: usize,
        visit: &mut dyn FnMut(&Rect, usize) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let node = &self.arena[idx.get()];
        visit(&node.rect, depth)?;
        for c in &node.children {
            match c {
                RChild::Node(ci) => self.traverse_node(*ci, depth + 1, visit)?,
                RChild::Item { rect, .. } => visit(rect, depth + 1)?,
            }
        }
        ControlFlow::Continue(())
    }
}

impl Backend for RTree {
    fn build(edges: Edges<'_>) -> Self {
        Self::bulk_load(edges.enumerate())
    }

    fn search(&self, _edges: Edges<'_>, rect: Rect, visit: &mut EdgeVisitor<'_>) -> ControlFlow<()> {
        Self::search(self, rect, visit)
    }
}

impl Debug for RTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("max_children", &MAX_CHILDREN)
            .field("edges", &self.len)
            .field("arena_nodes", &self.arena.len())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}
