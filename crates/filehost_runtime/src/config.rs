//! Page configuration loaded from the optional `#filehost-config` JSON payload.

use serde::{Deserialize, Serialize};

/// Default storage poll interval.
pub const DEFAULT_STORAGE_POLL_INTERVAL_MS: u32 = 30_000;
/// Default toast lifetime.
pub const DEFAULT_TOAST_DISMISS_MS: u32 = 3_000;
/// Archive name used when the user leaves the zip-name field blank.
pub const DEFAULT_ZIP_NAME: &str = "selected_files";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Endpoint paths, timer intervals, and indicator thresholds for the page runtime.
///
/// Every field has a default, so a partial (or absent) payload is valid.
pub struct PageConfig {
    /// `POST` target for bulk zip downloads.
    pub download_zip_path: String,
    /// Prefix for `POST {prefix}{id}` delete submissions.
    pub delete_path_prefix: String,
    /// `GET` endpoint returning the storage-usage JSON.
    pub storage_usage_path: String,
    /// Multipart upload form action.
    pub upload_path: String,
    /// Prefix for per-file download links.
    pub download_path_prefix: String,
    /// Link target for downloading every file.
    pub download_all_path: String,
    /// `GET` search form action (`q` query parameter).
    pub search_path: String,
    /// Prefix for listing filter links.
    pub filter_path_prefix: String,
    /// Storage poll period in milliseconds.
    pub storage_poll_interval_ms: u32,
    /// Toast auto-dismiss delay in milliseconds.
    pub toast_dismiss_ms: u32,
    /// Archive name used for blank zip-name input.
    pub default_zip_name: String,
    /// Usage percentage at which the indicator switches to its warning level.
    pub storage_warning_percent: f64,
    /// Usage percentage at which the indicator switches to its full level.
    pub storage_full_percent: f64,
    /// Render the upload form. Pages that only list files turn this off.
    pub show_upload_form: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            download_zip_path: "/download-zip".to_string(),
            delete_path_prefix: "/delete/".to_string(),
            storage_usage_path: "/api/storage".to_string(),
            upload_path: "/upload".to_string(),
            download_path_prefix: "/download/".to_string(),
            download_all_path: "/download-all".to_string(),
            search_path: "/search".to_string(),
            filter_path_prefix: "/filter/".to_string(),
            storage_poll_interval_ms: DEFAULT_STORAGE_POLL_INTERVAL_MS,
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
            default_zip_name: DEFAULT_ZIP_NAME.to_string(),
            storage_warning_percent: 80.0,
            storage_full_percent: 95.0,
            show_upload_form: true,
        }
    }
}

impl PageConfig {
    /// Form action for deleting `file_id`.
    pub fn delete_action(&self, file_id: &str) -> String {
        format!("{}{file_id}", self.delete_path_prefix)
    }

    /// Relative download link for `file_id`.
    pub fn download_href(&self, file_id: &str) -> String {
        format!("{}{file_id}", self.download_path_prefix)
    }

    /// Listing filter link for `filter` (`all`, `images`, `videos`).
    pub fn filter_href(&self, filter: &str) -> String {
        format!("{}{filter}", self.filter_path_prefix)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_payload_keeps_remaining_defaults() {
        let payload = r#"{"storage_poll_interval_ms": 5000, "delete_path_prefix": "/x/delete/"}"#;
        let config: PageConfig = serde_json::from_str(payload).expect("parse config");

        assert_eq!(config.storage_poll_interval_ms, 5000);
        assert_eq!(config.delete_action("42"), "/x/delete/42");
        assert_eq!(config.download_zip_path, "/download-zip");
        assert_eq!(config.toast_dismiss_ms, DEFAULT_TOAST_DISMISS_MS);
    }

    #[test]
    fn default_links_match_server_routes() {
        let config = PageConfig::default();
        assert_eq!(config.download_href("7"), "/download/7");
        assert_eq!(config.filter_href("images"), "/filter/images");
        assert_eq!(config.storage_usage_path, "/api/storage");
    }
}
