//! Advanced SubStation Alpha output
//!
//! This module owns everything that touches the destination script:
//! the one-time preamble, the per-shape `Dialogue:` events, and the
//! TOML-configurable script metadata.

pub mod profile;
pub mod writer;

pub use profile::{ProfileError, ScriptProfile};
pub use writer::{EventWriter, OpenMode};
