//! Headless page runtime and Leptos components for the file-hosting page.
//!
//! [`reduce_page`] owns every state transition; components only dispatch [`PageAction`]
//! values and derive their markup from [`PageState`]. Browser side effects run through the
//! [`platform_host::HostServices`] bundle injected into [`PageProvider`].

pub mod boot;
pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod model;
pub mod poller;
pub mod reducer;
mod runtime_context;
pub mod size;

pub use boot::{
    initial_page_state, load_boot_payload, read_embedded_json, BootPayload, BootstrapError,
};
pub use components::FileHostPage;
pub use config::PageConfig;
pub use model::*;
pub use poller::{poll_storage_once, StoragePoller};
pub use reducer::{reduce_page, PageAction, PageEffect, ReducerError};
pub use runtime_context::{use_page_runtime, PageProvider, PageRuntimeContext};
pub use size::format_file_size;
