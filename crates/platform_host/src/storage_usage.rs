//! Storage-usage payload model and polling service contracts.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`StorageUsageService`].
pub type StorageUsageFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Aggregate storage usage reported by the server's storage endpoint.
pub struct StorageInfo {
    /// Storage quota in bytes.
    pub total_space: u64,
    /// Bytes consumed by uploaded files.
    pub used_space: u64,
    /// Remaining bytes before the quota is reached. Negative once usage exceeds the quota.
    pub available_space: i64,
    /// Used share of the quota, `0.0..=100.0`.
    pub usage_percentage: f64,
    /// Number of stored files.
    pub file_count: u64,
}

impl StorageInfo {
    /// Builds a payload from raw totals, deriving the available space and usage percentage.
    pub fn from_totals(total_space: u64, used_space: u64, file_count: u64) -> Self {
        let usage_percentage = if total_space > 0 {
            used_space as f64 / total_space as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_space,
            used_space,
            available_space: signed_bytes(total_space).saturating_sub(signed_bytes(used_space)),
            usage_percentage,
            file_count,
        }
    }

    /// Returns the usage percentage rendered with one decimal, e.g. `"12.5%"`.
    pub fn formatted_usage_percentage(&self) -> String {
        format!("{:.1}%", self.usage_percentage)
    }
}

fn signed_bytes(bytes: u64) -> i64 {
    i64::try_from(bytes).unwrap_or(i64::MAX)
}

/// Host service that reads aggregate storage usage.
pub trait StorageUsageService {
    /// Fetches the current storage usage from `path`.
    fn fetch_storage_info<'a>(
        &'a self,
        path: &'a str,
    ) -> StorageUsageFuture<'a, Result<StorageInfo, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Storage-usage service for targets without network access.
pub struct NoopStorageUsageService;

impl StorageUsageService for NoopStorageUsageService {
    fn fetch_storage_info<'a>(
        &'a self,
        _path: &'a str,
    ) -> StorageUsageFuture<'a, Result<StorageInfo, String>> {
        Box::pin(async { Err("storage usage endpoint unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory storage-usage service that replays scripted responses in order.
///
/// Once the script is exhausted every fetch fails. Requested paths are recorded.
pub struct MemoryStorageUsageService {
    responses: Rc<RefCell<VecDeque<Result<StorageInfo, String>>>>,
    requested: Rc<RefCell<Vec<String>>>,
}

impl MemoryStorageUsageService {
    /// Queues a response for the next fetch.
    pub fn push_response(&self, response: Result<StorageInfo, String>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Returns the paths requested so far.
    pub fn requested_paths(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl StorageUsageService for MemoryStorageUsageService {
    fn fetch_storage_info<'a>(
        &'a self,
        path: &'a str,
    ) -> StorageUsageFuture<'a, Result<StorageInfo, String>> {
        Box::pin(async move {
            self.requested.borrow_mut().push(path.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted storage response".to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn from_totals_derives_available_space_and_percentage() {
        let info = StorageInfo::from_totals(1_000, 250, 3);
        assert_eq!(info.available_space, 750);
        assert_eq!(info.formatted_usage_percentage(), "25.0%");
        assert_eq!(StorageInfo::from_totals(0, 0, 0).usage_percentage, 0.0);
        assert_eq!(StorageInfo::from_totals(1_000, 1_200, 4).available_space, -200);
    }

    #[test]
    fn over_quota_payload_decodes_with_negative_available_space() {
        let info: StorageInfo = serde_json::from_str(
            r#"{"totalSpace":1000,"usedSpace":1200,"availableSpace":-200,"usagePercentage":120.0,"fileCount":4}"#,
        )
        .expect("parse over-quota storage info");
        assert_eq!(info.used_space, 1200);
        assert_eq!(info.available_space, -200);
        assert_eq!(info.formatted_usage_percentage(), "120.0%");
    }

    #[test]
    fn deserializes_camel_case_payload_with_missing_fields() {
        let info: StorageInfo = serde_json::from_str(
            r#"{"totalSpace":2048,"usedSpace":1024,"usagePercentage":50.0,"fileCount":2}"#,
        )
        .expect("parse storage info");
        assert_eq!(info.total_space, 2048);
        assert_eq!(info.used_space, 1024);
        assert_eq!(info.available_space, 0);
        assert_eq!(info.file_count, 2);
    }

    #[test]
    fn memory_service_replays_script_then_fails() {
        let service = MemoryStorageUsageService::default();
        service.push_response(Ok(StorageInfo::from_totals(10, 5, 1)));
        let service_obj: &dyn StorageUsageService = &service;

        assert!(block_on(service_obj.fetch_storage_info("/api/storage")).is_ok());
        assert!(block_on(service_obj.fetch_storage_info("/api/storage")).is_err());
        assert_eq!(
            service.requested_paths(),
            vec!["/api/storage".to_string(), "/api/storage".to_string()]
        );
    }
}
