use common::shapes::Region;

pub(crate) const ROOT: u32 = 0;

/// A node either owns a pooled collider list or four children, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf { list: u32 },
    /// Children occupy four consecutive node slots starting at `first_child`, ordered
    /// top-left, top-right, bottom-left, bottom-right.
    Internal { first_child: u32 },
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct QuadNode {
    pub(crate) region: Region,
    pub(crate) level: u32,
    pub(crate) kind: NodeKind,
}

impl QuadNode {
    #[inline(always)]
    pub(crate) fn leaf(region: Region, level: u32, list: u32) -> Self {
        Self {
            region,
            level,
            kind: NodeKind::Leaf { list },
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

#[inline(always)]
pub(crate) fn child_indices(first_child: u32) -> [u32; 4] {
    [first_child, first_child + 1, first_child + 2, first_child + 3]
}
