//! Bootstrap payloads embedded in the server-rendered page.
//!
//! The page may carry three `<script type="application/json">` elements: page configuration,
//! the uploaded-file listing, and an initial storage-usage snapshot. Each is optional. A
//! malformed payload is logged and replaced by its default so the rest of the page still works.

use leptos::logging;
use platform_host::{
    dom::{CONFIG_PAYLOAD_ID, FILES_PAYLOAD_ID, STORAGE_PAYLOAD_ID},
    StorageInfo,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    config::PageConfig,
    model::{PageState, UploadedFile},
};

#[derive(Debug, Error)]
/// Bootstrap payload parse failures.
pub enum BootstrapError {
    /// The element text was not valid JSON for the expected payload shape.
    #[error("malformed `#{element_id}` payload: {source}")]
    MalformedPayload {
        /// DOM id of the offending script element.
        element_id: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Parsed bootstrap payloads with defaults applied.
pub struct BootPayload {
    /// Page configuration.
    pub config: PageConfig,
    /// Uploaded files in document order.
    pub files: Vec<UploadedFile>,
    /// Server-rendered storage usage, if embedded.
    pub storage: Option<StorageInfo>,
}

fn parse_payload<T: DeserializeOwned>(
    element_id: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, BootstrapError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    serde_json::from_str(raw)
        .map(Some)
        .map_err(|source| BootstrapError::MalformedPayload { element_id, source })
}

/// Parses the `#filehost-config` payload; absent text yields [`PageConfig::default`].
///
/// # Errors
///
/// Returns [`BootstrapError::MalformedPayload`] for invalid JSON.
pub fn parse_config(raw: Option<&str>) -> Result<PageConfig, BootstrapError> {
    Ok(parse_payload(CONFIG_PAYLOAD_ID, raw)?.unwrap_or_default())
}

/// Parses the `#filehost-files` listing payload; absent text yields an empty listing.
///
/// # Errors
///
/// Returns [`BootstrapError::MalformedPayload`] for invalid JSON.
pub fn parse_listing(raw: Option<&str>) -> Result<Vec<UploadedFile>, BootstrapError> {
    Ok(parse_payload(FILES_PAYLOAD_ID, raw)?.unwrap_or_default())
}

/// Parses the `#filehost-storage` snapshot payload.
///
/// # Errors
///
/// Returns [`BootstrapError::MalformedPayload`] for invalid JSON.
pub fn parse_storage(raw: Option<&str>) -> Result<Option<StorageInfo>, BootstrapError> {
    parse_payload(STORAGE_PAYLOAD_ID, raw)
}

/// Reads all bootstrap payloads through `read`, logging and defaulting malformed ones.
pub fn load_boot_payload(read: impl Fn(&'static str) -> Option<String>) -> BootPayload {
    let config = parse_config(read(CONFIG_PAYLOAD_ID).as_deref()).unwrap_or_else(|err| {
        logging::warn!("{err}; using default page config");
        PageConfig::default()
    });
    let files = parse_listing(read(FILES_PAYLOAD_ID).as_deref()).unwrap_or_else(|err| {
        logging::warn!("{err}; rendering an empty listing");
        Vec::new()
    });
    let storage = parse_storage(read(STORAGE_PAYLOAD_ID).as_deref()).unwrap_or_else(|err| {
        logging::warn!("{err}; storage indicator waits for the first poll");
        None
    });

    BootPayload {
        config,
        files,
        storage,
    }
}

/// Builds the initial [`PageState`] from parsed payloads.
pub fn initial_page_state(payload: BootPayload) -> PageState {
    let mut state = PageState::with_config(payload.config);
    state.files.load(payload.files);
    state.storage.info = payload.storage;
    state
}

/// Returns the text content of the element with DOM id `element_id`, if present.
pub fn read_embedded_json(element_id: &'static str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        return web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id))
            .and_then(|element| element.text_content());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{FileId, StorageLevel};

    #[test]
    fn missing_payloads_fall_back_to_defaults() {
        let payload = load_boot_payload(|_| None);
        assert_eq!(payload, BootPayload::default());
    }

    #[test]
    fn blank_payload_text_counts_as_missing() {
        assert_eq!(parse_listing(Some("  \n ")).expect("blank"), Vec::new());
        assert!(parse_storage(Some("")).expect("blank").is_none());
    }

    #[test]
    fn malformed_payload_reports_element_id() {
        let err = parse_config(Some("{not json")).expect_err("malformed");
        assert!(err.to_string().starts_with("malformed `#filehost-config` payload"));
    }

    #[test]
    fn malformed_listing_does_not_discard_other_payloads() {
        let payload = load_boot_payload(|id| match id {
            FILES_PAYLOAD_ID => Some("[{\"id\": ".to_string()),
            STORAGE_PAYLOAD_ID => Some(
                r#"{"totalSpace": 1000, "usedSpace": 850, "usagePercentage": 85.0, "fileCount": 4}"#
                    .to_string(),
            ),
            _ => None,
        });

        assert!(payload.files.is_empty());
        let storage = payload.storage.expect("storage snapshot");
        assert_eq!(storage.file_count, 4);
        assert_eq!(storage.formatted_usage_percentage(), "85.0%");
    }

    #[test]
    fn initial_state_loads_listing_unchecked() {
        let payload = BootPayload {
            files: parse_listing(Some(r#"[{"id": 1, "originalName": "a.txt"}]"#)).expect("list"),
            ..BootPayload::default()
        };
        let state = initial_page_state(payload);

        assert_eq!(state.files.len(), 1);
        assert!(state.files.get(&FileId::new("1")).is_some_and(|entry| !entry.checked));
        assert!(!state.download_selected_enabled());
    }

    #[test]
    fn over_quota_snapshot_and_null_counters_survive_boot() {
        let payload = load_boot_payload(|id| match id {
            FILES_PAYLOAD_ID => Some(
                r#"[{"id": 1, "originalName": "a.txt", "fileSize": 10, "downloadCount": null}]"#
                    .to_string(),
            ),
            STORAGE_PAYLOAD_ID => Some(
                r#"{"totalSpace": 1000, "usedSpace": 1200, "availableSpace": -200,
                    "usagePercentage": 120.0, "fileCount": 1}"#
                    .to_string(),
            ),
            _ => None,
        });
        let state = initial_page_state(payload);

        assert_eq!(state.files.len(), 1);
        let storage = state.storage.info.as_ref().expect("storage snapshot");
        assert_eq!(storage.available_space, -200);
        assert_eq!(state.storage_level(), Some(StorageLevel::Full));
    }
}
