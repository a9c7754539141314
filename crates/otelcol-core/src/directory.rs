//! Snapshot of a layered configuration directory

use otelcol_content::YamlDocument;
use otelcol_fs::FragmentStore;

use crate::layer::{FragmentLayer, FragmentLayout};
use crate::tag::{self, TagName};
use crate::{Error, Result};

/// One fragment as read at the start of an operation.
#[derive(Debug, Clone)]
pub struct Fragment {
    name: String,
    layer: FragmentLayer,
    raw: Vec<u8>,
    document: YamlDocument,
}

impl Fragment {
    pub fn parse(name: impl Into<String>, layer: FragmentLayer, raw: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let document = YamlDocument::parse(&raw).map_err(|source| Error::FragmentParse {
            name: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            layer,
            raw,
            document,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer(&self) -> FragmentLayer {
        self.layer
    }

    /// Bytes as last read from the store.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn document(&self) -> &YamlDocument {
        &self.document
    }

    pub fn defines(&self, tag: &TagName) -> bool {
        tag::locate(Some(&self.document), tag)
    }
}

/// Every fragment of one directory, classified and parsed.
#[derive(Debug, Clone, Default)]
pub struct ConfigDirectory {
    settings: Option<Fragment>,
    overrides: Option<Fragment>,
    user: Vec<Fragment>,
}

impl ConfigDirectory {
    /// Read and parse every fragment in `store`.
    ///
    /// A fragment listed but gone by the time it is read is treated as
    /// absent. Any parse failure aborts the load.
    pub fn load<S>(store: &S, layout: &FragmentLayout) -> Result<Self>
    where
        S: FragmentStore + ?Sized,
    {
        let mut directory = Self::default();
        for name in store.list()? {
            let Some(raw) = store.read(&name)? else {
                tracing::debug!(%name, "Fragment vanished before it was read");
                continue;
            };
            let layer = layout.classify(&name);
            tracing::debug!(%name, %layer, "Loaded fragment");
            directory.insert(Fragment::parse(name, layer, raw)?);
        }
        Ok(directory)
    }

    fn insert(&mut self, fragment: Fragment) {
        match fragment.layer {
            FragmentLayer::Settings => self.settings = Some(fragment),
            FragmentLayer::Overrides => self.overrides = Some(fragment),
            FragmentLayer::User => self.user.push(fragment),
        }
    }

    pub fn settings(&self) -> Option<&Fragment> {
        self.settings.as_ref()
    }

    pub fn overrides(&self) -> Option<&Fragment> {
        self.overrides.as_ref()
    }

    pub fn user_fragments(&self) -> &[Fragment] {
        &self.user
    }

    /// Fragment by file name, in any layer.
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.settings
            .iter()
            .chain(self.overrides.iter())
            .chain(self.user.iter())
            .find(|fragment| fragment.name == name)
    }

    /// Names of user-owned fragments that define `tag`.
    pub fn user_fragments_defining(&self, tag: &TagName) -> Vec<String> {
        self.user
            .iter()
            .filter(|fragment| fragment.defines(tag))
            .map(|fragment| fragment.name.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_none() && self.overrides.is_none() && self.user.is_empty()
    }
}
