//! Typed host-domain contracts and shared wire models for the file-hosting page runtime.
//!
//! This crate is the API-first boundary for browser services. It exposes the storage-usage
//! payload, form-submission model, clipboard/alert/upload-input service traits, and the shared
//! DOM id contract, while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alerts;
pub mod clipboard;
pub mod dom;
pub mod forms;
pub mod host;
pub mod storage_usage;
pub mod time;
pub mod uploads;

pub use alerts::{AlertService, MemoryAlertService, NoopAlertService};
pub use clipboard::{
    ClipboardFuture, ClipboardService, MemoryClipboardService, NoopClipboardService,
};
pub use forms::{FormSubmission, FormSubmitter, MemoryFormSubmitter, NoopFormSubmitter};
pub use host::{HostServices, HostStrategy};
pub use storage_usage::{
    MemoryStorageUsageService, NoopStorageUsageService, StorageInfo, StorageUsageFuture,
    StorageUsageService,
};
pub use time::unix_time_ms_now;
pub use uploads::{
    MemoryUploadInputService, NoopUploadInputService, StagedFileDescriptor, UploadInputService,
};
