//! Three-pass layout computation.
//!
//! Sizing runs as three strictly ordered full-tree walks: a top-down base
//! pass seeds absolute sizes and zero placeholders, a bottom-up fit/shrink
//! pass wraps parents around their children, and a top-down grow pass hands
//! leftover space to growing children. Fit must precede grow: a `Fit`
//! parent's size is only known once its children have reported theirs, and a
//! `Grow` child can only claim a share once its parent's size is settled.

use lath_types::policy::SizePolicy;

use crate::store::{BoxId, LayoutStore};

/// Compute `size` for every box in `root`'s subtree.
///
/// Mutates stored sizes in place; read them back with
/// [`LayoutNode::size`](crate::store::LayoutNode::size). Repeated calls with
/// unchanged inputs produce identical sizes. Panics on a structurally
/// inconsistent tree (a `Grow` box under a `Fit` or `ShrinkAcrossAxis`
/// parent); run [`validate`](crate::validate::validate) first to get a
/// diagnostic instead of an abort.
pub fn compute_layout(store: &mut LayoutStore, root: BoxId) {
    base_size_pass(store, root);
    fit_size_pass(store, root);
    grow_size_pass(store, root);
    log::trace!("layout computed from root {root} ({} boxes in store)", store.len());
}

/// Top-down seeding pass: absolute sizes land, everything else resets to a
/// zero placeholder for the later passes. Never reads children, so the
/// order of self versus children does not matter here.
fn base_size_pass(store: &mut LayoutStore, id: BoxId) {
    let node = store.get_mut(id);
    node.size = match node.policy {
        SizePolicy::Absolute(v) => v,
        SizePolicy::Grow
        | SizePolicy::GrowAcrossAxis
        | SizePolicy::Fit
        | SizePolicy::ShrinkAcrossAxis => 0.0,
    };

    let children = store.get(id).children.clone();
    for child in children {
        base_size_pass(store, child);
    }
}

/// Bottom-up wrapping pass: children resolve first, then `Fit` and
/// `ShrinkAcrossAxis` boxes take their measure. Absolute sizes are already
/// settled and growing boxes wait for the grow pass.
fn fit_size_pass(store: &mut LayoutStore, id: BoxId) {
    let children = store.get(id).children.clone();
    for &child in &children {
        fit_size_pass(store, child);
    }

    let policy = store.get(id).policy;
    match policy {
        SizePolicy::Fit => {
            if children.is_empty() {
                store.get_mut(id).size = 0.0;
                return;
            }
            let node = store.get(id);
            let mut size = 2.0 * node.padding + (children.len() - 1) as f32 * node.child_gap;
            for &child in &children {
                let child_node = store.get(child);
                assert!(
                    !child_node.policy.is_grow(),
                    "box {child}: Grow child under Fit parent {id}"
                );
                size += child_node.size;
            }
            store.get_mut(id).size = size;
        },
        SizePolicy::ShrinkAcrossAxis => {
            if children.is_empty() {
                store.get_mut(id).size = 0.0;
                return;
            }
            let mut max_child = 0.0f32;
            for &child in &children {
                let child_node = store.get(child);
                assert!(
                    !child_node.policy.is_grow(),
                    "box {child}: Grow child under ShrinkAcrossAxis parent {id}"
                );
                max_child = max_child.max(child_node.size);
            }
            let padding = store.get(id).padding;
            store.get_mut(id).size = 2.0 * padding + max_child;
        },
        SizePolicy::Absolute(_) | SizePolicy::Grow | SizePolicy::GrowAcrossAxis => {},
    }
}

/// Top-down distribution pass. Space is handed out parent-to-child before
/// recursing, so nested growth cascades with each parent's size already
/// settled -- whether it came from the base pass, the fit pass, or a grow
/// higher up.
fn grow_size_pass(store: &mut LayoutStore, id: BoxId) {
    let children = store.get(id).children.clone();
    if children.is_empty() {
        return;
    }

    grow_across_axis(store, id, &children);
    grow_along_axis(store, id, &children);

    for &child in &children {
        grow_size_pass(store, child);
    }
}

/// Cross-axis growth: every `GrowAcrossAxis` child fills the parent's
/// padded span outright. No competition between siblings.
fn grow_across_axis(store: &mut LayoutStore, id: BoxId, children: &[BoxId]) {
    let node = store.get(id);
    let grow_size = node.size - 2.0 * node.padding;
    for &child in children {
        if store.get(child).policy.is_grow_across_axis() {
            store.get_mut(child).size = grow_size;
        }
    }
}

/// Along-axis growth: leftover space after padding, gaps, and already-sized
/// siblings is split evenly between `Grow` children. Overflow clamps the
/// share to zero rather than going negative.
fn grow_along_axis(store: &mut LayoutStore, id: BoxId, children: &[BoxId]) {
    let node = store.get(id);
    let mut available = node.size - 2.0 * node.padding - (children.len() - 1) as f32 * node.child_gap;

    let mut grow_count = 0;
    for &child in children {
        let child_node = store.get(child);
        if child_node.policy.is_grow() {
            debug_assert!(child_node.size == 0.0, "box {child}: grow placeholder already sized");
            grow_count += 1;
        }
        available -= child_node.size;
    }

    // No growing children: nothing to distribute, and no division to guard.
    if grow_count == 0 {
        return;
    }

    let grow_size = (available / grow_count as f32).max(0.0);
    for &child in children {
        if store.get(child).policy.is_grow() {
            store.get_mut(child).size = grow_size;
        }
    }
}
