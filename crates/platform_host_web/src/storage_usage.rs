//! Storage-usage endpoint client backed by `fetch`.

use platform_host::{StorageInfo, StorageUsageFuture, StorageUsageService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser storage-usage client issuing `GET` requests against the page origin.
pub struct WebStorageUsageService;

impl StorageUsageService for WebStorageUsageService {
    fn fetch_storage_info<'a>(
        &'a self,
        path: &'a str,
    ) -> StorageUsageFuture<'a, Result<StorageInfo, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use gloo_net::http::Request;

                let response = Request::get(path)
                    .send()
                    .await
                    .map_err(|err| format!("storage request failed: {err}"))?;
                if !response.ok() {
                    return Err(format!(
                        "storage request returned status {}",
                        response.status()
                    ));
                }
                return response
                    .json::<StorageInfo>()
                    .await
                    .map_err(|err| format!("storage payload decode failed: {err}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = path;
                Err(crate::unsupported("storage usage fetch"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_fetch_reports_unsupported() {
        let err = block_on(WebStorageUsageService.fetch_storage_info("/api/storage"))
            .expect_err("native fetch should fail");
        assert_eq!(
            err,
            "storage usage fetch is only available when compiled for wasm32"
        );
    }
}
