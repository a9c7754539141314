//! Fragment ownership layers
//!
//! Classification is by file name only. The two reserved names are kept in
//! a [`FragmentLayout`]; every comparison against them happens in
//! [`FragmentLayout::classify`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Default configuration root of the collector package.
pub const DEFAULT_CONFIG_ROOT: &str = "/etc/otelcol-sumo";

/// Fragment directory below the configuration root.
pub const CONF_DOT_D: &str = "conf.d";

/// Tool-managed settings fragment.
pub const CONF_D_SETTINGS: &str = "00-otelcol-config-settings.yaml";

/// Tool-managed overrides fragment.
pub const CONF_D_OVERRIDES: &str = "99-otelcol-config-overrides.yaml";

/// Who owns a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentLayer {
    /// Tool-managed defaults
    Settings,
    /// Tool-managed values applied on top of settings
    Overrides,
    /// Hand-authored; read-only for this tool
    User,
}

impl FragmentLayer {
    /// Whether this tool may rewrite fragments of this layer.
    pub fn is_tool_managed(&self) -> bool {
        !matches!(self, Self::User)
    }
}

impl fmt::Display for FragmentLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings => write!(f, "settings"),
            Self::Overrides => write!(f, "overrides"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Names that make up a layered configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentLayout {
    /// Fragment directory relative to the configuration root
    pub conf_dir: String,
    /// File name of the settings fragment
    pub settings: String,
    /// File name of the overrides fragment
    pub overrides: String,
}

impl Default for FragmentLayout {
    fn default() -> Self {
        Self {
            conf_dir: CONF_DOT_D.to_string(),
            settings: CONF_D_SETTINGS.to_string(),
            overrides: CONF_D_OVERRIDES.to_string(),
        }
    }
}

impl FragmentLayout {
    pub fn classify(&self, name: &str) -> FragmentLayer {
        if name == self.settings {
            FragmentLayer::Settings
        } else if name == self.overrides {
            FragmentLayer::Overrides
        } else {
            FragmentLayer::User
        }
    }

    /// Fragment directory for a configuration root.
    pub fn fragment_dir(&self, config_root: &Path) -> PathBuf {
        config_root.join(&self.conf_dir)
    }
}
