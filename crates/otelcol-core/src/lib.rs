//! Core tag editing engine for otelcol-config
//!
//! The collector reads its configuration from a `conf.d` directory of YAML
//! fragments. Two of them belong to this tool:
//!
//! - **Settings** (`00-otelcol-config-settings.yaml`) holds defaults,
//! - **Overrides** (`99-otelcol-config-overrides.yaml`) is applied on top.
//!
//! Every other fragment is user-owned and is never written.
//!
//! # Architecture
//!
//! ```text
//!                 otelcol-cli
//!                      |
//!                 otelcol-core
//!        (layer, tag, directory, delete, plan)
//!                /            \
//!        otelcol-fs      otelcol-content
//!     (FragmentStore)    (YamlDocument, KeyPath)
//! ```
//!
//! # Example
//!
//! ```
//! use otelcol_core::{DeleteTagRequest, TagEditor};
//! use otelcol_fs::MemoryStore;
//!
//! let store = MemoryStore::new().with_file(
//!     "00-otelcol-config-settings.yaml",
//!     "extensions:\n  sumologic:\n    collector_fields:\n      foo: bar\n      bar: baz\n",
//! );
//! let mut editor = TagEditor::new(store);
//!
//! let request = DeleteTagRequest::new("foo", false)?;
//! let planned = editor.plan_delete(&request)?;
//! editor.apply(&planned.plan)?;
//!
//! assert_eq!(
//!     editor.store().get("00-otelcol-config-settings.yaml"),
//!     Some(&b"extensions:\n  sumologic:\n    collector_fields:\n      bar: baz\n"[..]),
//! );
//! # Ok::<(), otelcol_core::Error>(())
//! ```

pub mod delete;
pub mod directory;
pub mod editor;
pub mod error;
pub mod layer;
pub mod plan;
pub mod tag;

pub use delete::{DeleteTagRequest, delete_tag};
pub use directory::{ConfigDirectory, Fragment};
pub use editor::{PlannedDelete, TagEditor};
pub use error::{Error, Result};
pub use layer::{DEFAULT_CONFIG_ROOT, FragmentLayer, FragmentLayout};
pub use plan::WritePlan;
pub use tag::TagName;
