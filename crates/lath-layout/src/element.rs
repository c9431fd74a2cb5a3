//! Two-axis pairing: one x and one y box per visual element.
//!
//! The engine sizes one axis at a time, so a real 2-D layout is two
//! independent one-axis trees with identical topology. `AxisPair` keeps the
//! two handles of one element together and links and computes them in
//! lockstep, so the trees cannot drift apart. Positions and drawing stay
//! with the presentation layer; this is sizes only.

use crate::compute::compute_layout;
use crate::store::{BoxId, LayoutStore};

/// The x- and y-axis boxes of one visual element.
#[derive(Debug, Clone, Copy)]
pub struct AxisPair {
    x: BoxId,
    y: BoxId,
}

impl AxisPair {
    /// Allocate both axis boxes from `store`.
    pub fn new(store: &mut LayoutStore) -> Self {
        Self {
            x: store.create_box(),
            y: store.create_box(),
        }
    }

    /// Handle of the horizontal-axis box. Set its policy, padding, and gap
    /// through the store.
    pub fn x(&self) -> BoxId {
        self.x
    }

    /// Handle of the vertical-axis box.
    pub fn y(&self) -> BoxId {
        self.y
    }

    /// Link `child` under this element on both axes at once, keeping the
    /// two trees' topology identical.
    pub fn add_child(&self, store: &mut LayoutStore, child: &AxisPair) {
        store.add_child(self.x, child.x);
        store.add_child(self.y, child.y);
    }

    /// Run the layout passes over both axis trees.
    pub fn compute_layout(&self, store: &mut LayoutStore) {
        compute_layout(store, self.x);
        compute_layout(store, self.y);
    }

    /// The computed `(width, height)` of this element.
    pub fn size(&self, store: &LayoutStore) -> (f32, f32) {
        (store.get(self.x).size(), store.get(self.y).size())
    }
}
