//! NavStack configuration

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};

/// How a shrunken stack path is compared with the rendered one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackDiff {
    /// Removed entries are the rendered details whose index is missing from
    /// the new path
    #[default]
    ByIndex,
    /// Removed entries are the symmetric difference of both paths, compared
    /// as whole details
    SymmetricDifference,
}

/// NavStack configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavStackConfig {
    /// Stack path comparison
    pub stack_diff: StackDiff,
    /// Invoke a sheet's or cover's dismiss callback after it is dismissed
    pub notify_on_dismiss: bool,
    /// Refuse write-backs from handles rendered against older routes
    ///
    /// Off by default: a single gesture may issue several write-backs from
    /// the same render (a sheet's stack path clearing, then the sheet itself
    /// going away), and each of them has to land.
    pub reject_stale_writes: bool,
}

impl Default for NavStackConfig {
    fn default() -> Self {
        Self {
            stack_diff: StackDiff::ByIndex,
            notify_on_dismiss: true,
            reject_stale_writes: false,
        }
    }
}

impl NavStackConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(NavError::Config)
    }

    /// Set the stack path comparison
    pub fn stack_diff(mut self, stack_diff: StackDiff) -> Self {
        self.stack_diff = stack_diff;
        self
    }

    /// Enable or disable dismiss callbacks
    pub fn notify_on_dismiss(mut self, enabled: bool) -> Self {
        self.notify_on_dismiss = enabled;
        self
    }

    /// Enable or disable stale write rejection
    pub fn reject_stale_writes(mut self, enabled: bool) -> Self {
        self.reject_stale_writes = enabled;
        self
    }
}
