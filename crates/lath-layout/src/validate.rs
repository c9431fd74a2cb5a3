//! Pre-flight tree validation.
//!
//! The layout passes treat structural inconsistencies as fatal and panic.
//! `validate` runs the same checks ahead of time and reports the first
//! violation as an ordinary error, which is the debuggable option while a
//! host is still wiring up its tree construction.

use lath_types::error::{LathError, Result};

use crate::store::{BoxId, LayoutStore};

/// Check `root`'s subtree for construction bugs.
///
/// Verifies that every parent/child edge is declared on both sides, that no
/// `Grow` box sits under a `Fit` or `ShrinkAcrossAxis` parent, and that
/// padding and child gaps are non-negative. Passing validation does not
/// change any stored state.
pub fn validate(store: &LayoutStore, root: BoxId) -> Result<()> {
    let node = store.get(root);

    if node.padding < 0.0 {
        return Err(LathError::Tree(format!(
            "box {root}: negative padding {}",
            node.padding
        )));
    }
    if node.child_gap < 0.0 {
        return Err(LathError::Tree(format!(
            "box {root}: negative child_gap {}",
            node.child_gap
        )));
    }

    let wraps_children = node.policy.wraps_children();

    for &child in node.children() {
        let child_node = store.get(child);
        if child_node.parent() != Some(root) {
            return Err(LathError::Tree(format!(
                "box {child} is listed as a child of box {root} but points at parent {:?}",
                child_node.parent()
            )));
        }
        if wraps_children && child_node.policy.is_grow() {
            return Err(LathError::Tree(format!(
                "box {child}: Grow child under {:?} parent {root}",
                node.policy
            )));
        }
        validate(store, child)?;
    }

    Ok(())
}
