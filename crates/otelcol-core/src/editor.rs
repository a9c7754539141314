//! Store-bound entry point for tag edits

use otelcol_fs::FragmentStore;

use crate::delete::{DeleteTagRequest, delete_tag};
use crate::directory::ConfigDirectory;
use crate::layer::FragmentLayout;
use crate::plan::WritePlan;
use crate::Result;

/// A computed plan together with the snapshot it was computed from.
#[derive(Debug, Clone)]
pub struct PlannedDelete {
    pub directory: ConfigDirectory,
    pub plan: WritePlan,
}

impl PlannedDelete {
    /// Unified diff of the planned rewrites.
    pub fn preview(&self) -> String {
        self.plan.preview(&self.directory)
    }
}

/// Runs tag operations against one fragment store.
///
/// Planning and applying are separate steps so callers can preview a plan
/// or discard it. Nothing guards against another process editing the
/// directory between the two.
pub struct TagEditor<S> {
    store: S,
    layout: FragmentLayout,
}

impl<S: FragmentStore> TagEditor<S> {
    pub fn new(store: S) -> Self {
        Self::with_layout(store, FragmentLayout::default())
    }

    pub fn with_layout(store: S, layout: FragmentLayout) -> Self {
        Self { store, layout }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn layout(&self) -> &FragmentLayout {
        &self.layout
    }

    pub fn load(&self) -> Result<ConfigDirectory> {
        ConfigDirectory::load(&self.store, &self.layout)
    }

    pub fn plan_delete(&self, request: &DeleteTagRequest) -> Result<PlannedDelete> {
        let directory = self.load()?;
        let plan = delete_tag(&directory, request)?;
        Ok(PlannedDelete { directory, plan })
    }

    /// Write a plan to the store, returning the fragments written.
    pub fn apply(&mut self, plan: &WritePlan) -> Result<Vec<String>> {
        plan.apply(&mut self.store)
    }

    /// Plan and apply in one step.
    pub fn delete_tag(&mut self, request: &DeleteTagRequest) -> Result<WritePlan> {
        let planned = self.plan_delete(request)?;
        self.apply(&planned.plan)?;
        Ok(planned.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::CONF_D_SETTINGS;
    use otelcol_fs::MemoryStore;

    #[test]
    fn plan_does_not_touch_store() {
        let store = MemoryStore::new().with_file(
            CONF_D_SETTINGS,
            "extensions:\n  sumologic:\n    collector_fields:\n      foo: bar\n",
        );
        let editor = TagEditor::new(store.clone());

        let planned = editor
            .plan_delete(&DeleteTagRequest::new("foo", false).unwrap())
            .unwrap();

        assert_eq!(planned.plan.len(), 1);
        assert_eq!(editor.store(), &store);
        assert!(planned.preview().contains("-      foo: bar"));
    }

    #[test]
    fn delete_tag_applies_plan() {
        let store = MemoryStore::new().with_file(
            CONF_D_SETTINGS,
            "extensions:\n  sumologic:\n    collector_fields:\n      foo: bar\n",
        );
        let mut editor = TagEditor::new(store);

        editor
            .delete_tag(&DeleteTagRequest::new("foo", false).unwrap())
            .unwrap();

        assert_eq!(
            editor.store().get(CONF_D_SETTINGS),
            Some(&b"extensions:\n  sumologic:\n    collector_fields: {}\n"[..])
        );
    }
}
