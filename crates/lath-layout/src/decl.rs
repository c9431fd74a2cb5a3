//! Declarative one-axis tree descriptions.
//!
//! Hosts can describe a box tree in TOML instead of wiring a store by hand.
//! One document describes one axis; a 2-D layout loads two documents (or
//! builds its second tree in code). This is the engine's only surface fed by
//! external text, so failures here are ordinary errors, not asserts.
//!
//! ```toml
//! policy = "fit"
//! padding = 4.0
//! child_gap = 2.0
//!
//! [[children]]
//! policy = "absolute"
//! size = 40.0
//!
//! [[children]]
//! policy = "grow"
//! ```

use lath_types::error::{LathError, Result};
use lath_types::policy::SizePolicy;
use serde::Deserialize;

use crate::store::{BoxId, LayoutStore};

/// Declarative description of one box and its subtree.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxDecl {
    /// Policy name: `absolute`, `grow`, `grow-across`, `fit`, or
    /// `shrink-across`.
    #[serde(default = "default_policy")]
    pub policy: String,
    /// Fixed size; only meaningful for `absolute`.
    #[serde(default)]
    pub size: f32,
    #[serde(default)]
    pub padding: f32,
    #[serde(default)]
    pub child_gap: f32,
    #[serde(default)]
    pub children: Vec<BoxDecl>,
}

fn default_policy() -> String {
    "absolute".to_string()
}

/// Resolve a declaration's policy name.
fn parse_policy(decl: &BoxDecl) -> Result<SizePolicy> {
    match decl.policy.as_str() {
        "absolute" => Ok(SizePolicy::Absolute(decl.size)),
        "grow" => Ok(SizePolicy::Grow),
        "grow-across" => Ok(SizePolicy::GrowAcrossAxis),
        "fit" => Ok(SizePolicy::Fit),
        "shrink-across" => Ok(SizePolicy::ShrinkAcrossAxis),
        other => Err(LathError::Decl(format!("unknown policy '{other}'"))),
    }
}

/// Materialize a declaration into stored boxes, children in document order.
/// Returns the subtree root's handle.
///
/// On error, boxes already created stay in the store (handles are never
/// reclaimed); callers that care should build into a fresh store.
pub fn build_tree(store: &mut LayoutStore, decl: &BoxDecl) -> Result<BoxId> {
    if decl.padding < 0.0 || decl.child_gap < 0.0 {
        return Err(LathError::Decl(format!(
            "negative padding or child_gap in '{}' declaration",
            decl.policy
        )));
    }
    let policy = parse_policy(decl)?;

    let id = store.create_box();
    let node = store.get_mut(id);
    node.policy = policy;
    node.padding = decl.padding;
    node.child_gap = decl.child_gap;

    for child_decl in &decl.children {
        let child = build_tree(store, child_decl)?;
        store.add_child(id, child);
    }
    Ok(id)
}

/// Parse a TOML document and build its tree in `store`.
pub fn from_toml_str(store: &mut LayoutStore, document: &str) -> Result<BoxId> {
    let decl: BoxDecl = toml::from_str(document)?;
    let root = build_tree(store, &decl)?;
    log::debug!("built {} boxes from declaration", store.len());
    Ok(root)
}
