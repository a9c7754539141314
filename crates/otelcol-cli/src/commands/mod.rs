//! Command implementations for otelcol-cli

pub mod delete_tag;

pub use delete_tag::{DeleteTagOptions, run_delete_tag};
