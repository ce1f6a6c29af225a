//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    AlertService, ClipboardService, FormSubmitter, NoopAlertService, NoopClipboardService,
    NoopFormSubmitter, NoopStorageUsageService, NoopUploadInputService, StorageUsageService,
    UploadInputService,
};

/// Host strategy selected for the current composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// No-op or in-memory adapters (native builds and tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the page runtime.
///
/// Service selection happens before this bundle crosses into `filehost_runtime`, which keeps
/// the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Storage-usage endpoint client.
    pub storage_usage: Rc<dyn StorageUsageService>,
    /// Clipboard writer.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Form submitter for navigation-bound posts.
    pub forms: Rc<dyn FormSubmitter>,
    /// Blocking alert surface.
    pub alerts: Rc<dyn AlertService>,
    /// Upload form file input.
    pub upload_input: Rc<dyn UploadInputService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters.
    pub fn headless() -> Self {
        Self {
            storage_usage: Rc::new(NoopStorageUsageService),
            clipboard: Rc::new(NoopClipboardService),
            forms: Rc::new(NoopFormSubmitter),
            alerts: Rc::new(NoopAlertService),
            upload_input: Rc::new(NoopUploadInputService),
            host_strategy: HostStrategy::Headless,
        }
    }
}
