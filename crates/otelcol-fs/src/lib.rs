//! Fragment storage for otelcol-config
//!
//! A configuration directory is a flat set of named YAML fragments. This
//! crate exposes that set through the [`FragmentStore`] trait with a
//! directory-backed and an in-memory implementation.

pub mod error;
pub mod io;
pub mod name;
pub mod store;

pub use error::{Error, Result};
pub use name::{is_fragment_name, validate_fragment_name};
pub use store::{DirStore, FragmentStore, MemoryStore};
