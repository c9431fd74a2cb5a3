//! Error types for LATH.
//!
//! Only the engine's reportable surfaces return these: tree validation and
//! declarative tree parsing. Programmer errors -- an out-of-range handle, a
//! structurally inconsistent tree reaching a layout pass -- panic instead;
//! they signal bugs in the process building the tree, not bad input.

/// Errors produced by the LATH layout engine.
#[derive(Debug, thiserror::Error)]
pub enum LathError {
    #[error("layout tree error: {0}")]
    Tree(String),

    #[error("declaration error: {0}")]
    Decl(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LathError>;
