//! Boundary source downloading.
//!
//! Boundary hosts are static file servers that occasionally rate-limit or
//! truncate responses, so every download retries transient failures with
//! exponential backoff and logs the offending body on failure. Region
//! codes within one load request fetch concurrently; one region failing
//! leaves its siblings untouched and callers fall back to point markers
//! for the missing region.

use std::collections::HashMap;
use std::sync::Arc;

use geojson::{FeatureCollection, GeoJson};

use crate::cache::BoundaryCache;
use crate::sources::BoundarySource;
use crate::BoundaryError;

/// Maximum retry attempts per download.
const FETCH_MAX_RETRIES: u32 = 3;

/// Longest response-body prefix to include in failure logs.
const BODY_LOG_LIMIT: usize = 500;

/// Downloads and parses one boundary `GeoJSON` file.
///
/// Each attempt is retried with exponential backoff on transient failures
/// (request errors, non-2xx status, malformed JSON).
///
/// # Errors
///
/// Returns [`BoundaryError::Fetch`] when every attempt failed.
pub async fn fetch_feature_collection(
    client: &reqwest::Client,
    url: &str,
    label: &str,
) -> Result<FeatureCollection, BoundaryError> {
    let mut last_error = String::new();

    for attempt in 0..FETCH_MAX_RETRIES {
        if attempt > 0 {
            let delay_secs = 1u64 << (attempt + 1); // 4s, 8s
            log::warn!("{label}: retry {attempt}/{FETCH_MAX_RETRIES} in {delay_secs}s...");
            tokio::time::sleep(std::time::Duration::from_secs(delay_secs)).await;
        }

        let resp = match client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                last_error = format!("HTTP request error: {e}");
                log::warn!("{label} (attempt {attempt}): {last_error}");
                continue;
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(b) => b,
            Err(e) => {
                last_error = format!("Failed to read response body: {e}");
                log::warn!("{label} (attempt {attempt}): {last_error}");
                continue;
            }
        };

        if !status.is_success() {
            last_error = format!("HTTP {status}");
            log::warn!(
                "{label} (attempt {attempt}): {last_error}. Response body: {}",
                truncate_for_log(&body, BODY_LOG_LIMIT)
            );
            continue;
        }

        match body.parse::<GeoJson>() {
            Ok(GeoJson::FeatureCollection(collection)) => return Ok(collection),
            Ok(_) => {
                last_error = "Payload is not a feature collection".to_string();
                log::warn!("{label} (attempt {attempt}): {last_error}");
                continue;
            }
            Err(e) => {
                last_error = format!("GeoJSON parse error: {e}");
                log::warn!(
                    "{label} (attempt {attempt}): {last_error}. Response body: {}",
                    truncate_for_log(&body, BODY_LOG_LIMIT)
                );
                continue;
            }
        }
    }

    Err(BoundaryError::Fetch {
        message: format!("{label}: {last_error}"),
    })
}

/// Loads a nationwide (non-regional) boundary source through the cache.
///
/// Returns `None` when the fetch ultimately failed; the caller proceeds
/// without polygons for this level.
pub async fn load_nationwide(
    client: &reqwest::Client,
    cache: &BoundaryCache,
    source: &BoundarySource,
) -> Option<Arc<FeatureCollection>> {
    let url = source.url_template.clone();
    let label = source.id.clone();
    match cache
        .get_or_fetch(&source.id, || async move {
            fetch_feature_collection(client, &url, &label).await
        })
        .await
    {
        Ok(collection) => Some(collection),
        Err(e) => {
            log::warn!("No boundary data for source {}: {e}", source.id);
            None
        }
    }
}

/// Loads several region codes of one boundary source concurrently.
///
/// Cache keys are `"<source id>:<region code>"`. Regions that fail to
/// load are omitted from the result map after a warning; sibling regions
/// are unaffected.
pub async fn load_regions(
    client: &reqwest::Client,
    cache: &BoundaryCache,
    source: &BoundarySource,
    region_codes: &[&str],
) -> HashMap<String, Arc<FeatureCollection>> {
    let tasks = region_codes.iter().map(|code| {
        let key = format!("{}:{code}", source.id);
        let url = source.url_for_region(code);
        async move {
            let result = cache
                .get_or_fetch(&key, || async {
                    fetch_feature_collection(client, &url, &key).await
                })
                .await;
            ((*code).to_string(), result)
        }
    });

    let mut loaded = HashMap::new();
    for (code, result) in futures::future::join_all(tasks).await {
        match result {
            Ok(collection) => {
                loaded.insert(code, collection);
            }
            Err(e) => log::warn!("No boundary data for region {code}: {e}"),
        }
    }
    loaded
}

/// Truncates a string for logging, appending "..." past `max_len`.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
