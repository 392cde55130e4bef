use super::types::{QuadNode, ROOT};
use common::collider::Collider;
use log::warn;

/// Snapshot of pool usage since the last clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub lists_used: usize,
    pub lists_capacity: usize,
    pub blocks_used: usize,
    pub blocks_capacity: usize,
}

/// Collider-list buffers handed out by increasing index and rewound, never freed.
///
/// A list keeps its heap buffer across rewinds, so once every slot has grown to its
/// high-water mark a full rebuild allocates nothing.
pub(crate) struct ListPool {
    lists: Vec<Vec<Collider>>,
    used: usize,
    list_capacity: usize,
}

impl ListPool {
    pub(crate) fn with_capacity(slots: usize, list_capacity: usize) -> Self {
        let mut lists = Vec::with_capacity(slots);
        lists.resize_with(slots, || Vec::with_capacity(list_capacity));
        Self {
            lists,
            used: 0,
            list_capacity,
        }
    }

    pub(crate) fn acquire(&mut self) -> u32 {
        if self.used == self.lists.len() {
            warn!(
                "collider list pool exhausted at {} slots, growing",
                self.lists.len()
            );
            self.lists.push(Vec::with_capacity(self.list_capacity));
        }
        let idx = self.used;
        self.lists[idx].clear();
        self.used += 1;
        idx as u32
    }

    #[inline(always)]
    pub(crate) fn get(&self, idx: u32) -> &[Collider] {
        &self.lists[idx as usize]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, idx: u32) -> &mut Vec<Collider> {
        &mut self.lists[idx as usize]
    }

    /// Moves a list out of its slot, leaving an unallocated placeholder behind.
    pub(crate) fn take(&mut self, idx: u32) -> Vec<Collider> {
        std::mem::take(&mut self.lists[idx as usize])
    }

    /// Puts a taken buffer back, emptied but with its capacity intact.
    pub(crate) fn restore(&mut self, idx: u32, mut list: Vec<Collider>) {
        list.clear();
        self.lists[idx as usize] = list;
    }

    pub(crate) fn rewind(&mut self) {
        self.used = 0;
    }

    pub(crate) fn used(&self) -> usize {
        self.used
    }

    pub(crate) fn capacity(&self) -> usize {
        self.lists.len()
    }
}

/// Node arena. Slot 0 is the root; every split appends one block of four children.
pub(crate) struct NodePool {
    nodes: Vec<QuadNode>,
    blocks_capacity: usize,
}

impl NodePool {
    pub(crate) fn with_root(root: QuadNode, blocks: usize) -> Self {
        let mut nodes = Vec::with_capacity(1 + blocks * 4);
        nodes.push(root);
        Self {
            nodes,
            blocks_capacity: blocks,
        }
    }

    /// Stores four children next to each other and returns the index of the first one.
    pub(crate) fn acquire_block(&mut self, children: [QuadNode; 4]) -> u32 {
        if self.blocks_used() == self.blocks_capacity {
            warn!(
                "child block pool exhausted at {} blocks, growing",
                self.blocks_capacity
            );
            self.blocks_capacity += 1;
        }
        let first = self.nodes.len() as u32;
        self.nodes.extend_from_slice(&children);
        first
    }

    #[inline(always)]
    pub(crate) fn get(&self, idx: u32) -> &QuadNode {
        &self.nodes[idx as usize]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, idx: u32) -> &mut QuadNode {
        &mut self.nodes[idx as usize]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, QuadNode> {
        self.nodes.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every block, keeping only the root slot.
    pub(crate) fn rewind(&mut self) {
        self.nodes.truncate(ROOT as usize + 1);
    }

    pub(crate) fn blocks_used(&self) -> usize {
        (self.nodes.len() - 1) / 4
    }

    pub(crate) fn blocks_capacity(&self) -> usize {
        self.blocks_capacity
    }
}
