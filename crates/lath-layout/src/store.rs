//! Box store: a flat arena of layout nodes with stable index handles.
//!
//! The tree is a `Vec` of nodes plus [`BoxId`] indices for parent/child
//! edges, so parents and children can reference each other without ownership
//! cycles. A handle stays valid for the life of the store; boxes are never
//! individually destroyed, the whole store is torn down together.

use lath_types::policy::SizePolicy;

/// Index handle into a [`LayoutStore`].
pub type BoxId = usize;

/// One box in a single-axis layout tree.
#[derive(Debug, Clone, Default)]
pub struct LayoutNode {
    /// How this box's size is derived. May be changed any time before a
    /// layout pass.
    pub policy: SizePolicy,
    /// Inset applied on both ends of the box's content region.
    pub padding: f32,
    /// Spacing between consecutive children; not before the first or after
    /// the last.
    pub child_gap: f32,
    /// Computed size. Zero until a pass resolves it; written only by the
    /// layout passes.
    pub(crate) size: f32,
    pub(crate) parent: Option<BoxId>,
    pub(crate) children: Vec<BoxId>,
}

impl LayoutNode {
    /// The size computed by the most recent layout pass.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Back-reference to the parent box, if one has been linked. Used for
    /// policy-consistency checks; never owns the parent.
    pub fn parent(&self) -> Option<BoxId> {
        self.parent
    }

    /// Child boxes, in insertion order. Order determines gap placement and
    /// traversal order.
    pub fn children(&self) -> &[BoxId] {
        &self.children
    }
}

/// Owns every box record and hands out index handles.
#[derive(Debug, Default)]
pub struct LayoutStore {
    nodes: Vec<LayoutNode>,
}

impl LayoutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new box: policy `Absolute(0.0)`, zero padding and gap, no
    /// parent, no children. Growth is unbounded; there is no error path.
    pub fn create_box(&mut self) -> BoxId {
        self.nodes.push(LayoutNode::default());
        self.nodes.len() - 1
    }

    /// Dereference a handle.
    ///
    /// Panics if `id` is out of range. Handles are only ever produced by
    /// this store, so an out-of-range index is a usage bug rather than a
    /// recoverable condition.
    pub fn get(&self, id: BoxId) -> &LayoutNode {
        &self.nodes[id]
    }

    /// Mutable form of [`get`](Self::get). Same panic behavior.
    pub fn get_mut(&mut self, id: BoxId) -> &mut LayoutNode {
        &mut self.nodes[id]
    }

    /// Declare a parent/child edge on both sides at once: `child` is pushed
    /// onto `parent`'s child list and its parent pointer is set. Keeping
    /// the two writes in one operation is what keeps edges consistent.
    pub fn add_child(&mut self, parent: BoxId, child: BoxId) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Number of boxes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no boxes have been created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
