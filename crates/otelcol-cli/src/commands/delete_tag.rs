//! Delete-tag command implementation

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use otelcol_core::{DeleteTagRequest, FragmentLayout, PlannedDelete, TagEditor};
use otelcol_fs::DirStore;

use crate::error::Result;

/// Flags that shape a delete-tag run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteTagOptions {
    pub override_mode: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Run the delete-tag command against `config_root`.
///
/// Returns the names of the fragments written (none on dry runs).
pub fn run_delete_tag(
    config_root: &Path,
    tag: &str,
    options: DeleteTagOptions,
) -> Result<Vec<String>> {
    let layout = FragmentLayout::default();
    let store = DirStore::new(layout.fragment_dir(config_root));
    tracing::debug!(conf_d = %store.root().display(), "Using fragment directory");

    let mut editor = TagEditor::with_layout(store, layout);
    let request = DeleteTagRequest::new(tag, options.override_mode)?;
    let planned = editor.plan_delete(&request)?;

    let written = if options.dry_run {
        Vec::new()
    } else {
        editor.apply(&planned.plan)?
    };

    if options.json {
        print_json(&request, &planned, options)?;
    } else {
        print_human(&request, &planned, options);
    }

    Ok(written)
}

fn print_json(
    request: &DeleteTagRequest,
    planned: &PlannedDelete,
    options: DeleteTagOptions,
) -> Result<()> {
    let output = json!({
        "tag": request.tag.as_str(),
        "override": request.override_mode,
        "dry_run": options.dry_run,
        "changed": !planned.plan.is_empty(),
        "files": planned.plan.files().collect::<Vec<_>>(),
        "shadowed_by": planned.plan.shadowed_by(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(request: &DeleteTagRequest, planned: &PlannedDelete, options: DeleteTagOptions) {
    let tag = request.tag.as_str();

    if planned.plan.is_empty() {
        println!(
            "{} Tag '{}' is not set in {}. Nothing to change.",
            "OK".green().bold(),
            tag,
            if request.override_mode {
                "the settings or overrides fragments"
            } else {
                "the settings fragment"
            }
        );
    } else if options.dry_run {
        println!("{} Would delete tag '{}':", "DRY-RUN".yellow().bold(), tag);
        println!();
        print!("{}", planned.preview());
    } else {
        for file in planned.plan.files() {
            println!("{} Deleted tag '{}' from {}", "OK".green().bold(), tag, file);
        }
    }

    for file in planned.plan.shadowed_by() {
        println!(
            "{} '{}' is still set in user-owned {}; that value remains in effect.",
            "warning:".yellow().bold(),
            tag,
            file
        );
    }
}
