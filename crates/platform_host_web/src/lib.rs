//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for storage-usage polling,
//! clipboard writes, form submission, blocking alerts, and the upload form's file input.
//! Every adapter compiles on native targets with a fallback that reports the missing browser
//! capability, so the runtime's headless tests never touch a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod alerts;
pub mod clipboard;
pub mod forms;
pub mod storage_usage;
pub mod upload_input;

pub use adapters::{build_host_services, host_strategy_name};
pub use alerts::WebAlertService;
pub use clipboard::WebClipboardService;
pub use forms::WebFormSubmitter;
pub use storage_usage::WebStorageUsageService;
pub use upload_input::{stage_dropped_files, stage_input_files, WebUploadInputService};

pub(crate) fn unsupported(capability: &str) -> String {
    format!("{capability} is only available when compiled for wasm32")
}
