//! Accessibility-aware subway network model.
//!
//! Thin facade over [`kindmap_core`]: build a [`TransitNetwork`] from a JSON
//! snapshot with [`create_network_from_file`], or from rows already in memory
//! with [`build_network`], then query it from any number of threads.

pub use kindmap_core::prelude::*;
pub use kindmap_core::{loading, model};
