//! Sequential batch resolution of observation addresses.
//!
//! The provider's rate limit rules out parallel requests: the loop issues
//! one request at a time with a fixed minimum delay between consecutive
//! requests. A progress callback fires after every completed request so
//! the upload UI can show a counter. Cancellation is cooperative: once the
//! flag is set the loop stops issuing new requests after the in-flight one
//! completes; the network call itself is never aborted.

use std::sync::atomic::{AtomicBool, Ordering};

use photo_map_address::resolver;
use photo_map_spatial_models::{AdminAddress, LocatedObservation, ResolvedObservation};

use crate::{ProviderConfig, reverse};

/// Resolves addresses for a batch of observations, strictly sequentially.
///
/// Returns one [`ResolvedObservation`] per processed observation, in input
/// order. A failed geocode logs a warning and degrades to an all-`None`
/// address for that observation; the batch continues. When `cancel` is set
/// the remaining observations are skipped entirely and the partial result
/// is returned.
pub async fn resolve_batch<F>(
    client: &reqwest::Client,
    config: &ProviderConfig,
    access_token: &str,
    observations: &[LocatedObservation],
    cancel: &AtomicBool,
    mut on_progress: F,
) -> Vec<ResolvedObservation>
where
    F: FnMut(usize, usize),
{
    let total = observations.len();
    let delay = std::time::Duration::from_millis(config.rate_limit_ms);
    let mut resolved = Vec::with_capacity(total);

    for (index, observation) in observations.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            log::info!(
                "Geocoding cancelled after {index}/{total} observations"
            );
            break;
        }

        if index > 0 {
            tokio::time::sleep(delay).await;
        }

        let address = match reverse::reverse_geocode(
            client,
            config,
            access_token,
            observation.latitude,
            observation.longitude,
        )
        .await
        {
            Ok(features) => resolver::resolve(&features),
            Err(e) => {
                log::warn!(
                    "Reverse geocode failed for observation {}: {e}",
                    observation.id
                );
                AdminAddress::default()
            }
        };

        resolved.push(ResolvedObservation {
            observation: observation.clone(),
            address,
        });
        on_progress(index + 1, total);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{build_client, provider_config};

    fn obs(id: &str) -> LocatedObservation {
        LocatedObservation {
            id: id.to_string(),
            latitude: 35.70,
            longitude: 139.66,
            timestamp: Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn empty_batch_completes_without_progress() {
        let client = build_client().unwrap();
        let config = provider_config();
        let cancel = AtomicBool::new(false);
        let mut calls = 0;

        let resolved =
            resolve_batch(&client, &config, "token", &[], &cancel, |_, _| calls += 1).await;

        assert!(resolved.is_empty());
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn preset_cancellation_issues_no_requests() {
        let client = build_client().unwrap();
        let config = provider_config();
        let cancel = AtomicBool::new(true);
        let mut calls = 0;

        let observations = vec![obs("a"), obs("b")];
        let resolved = resolve_batch(&client, &config, "token", &observations, &cancel, |_, _| {
            calls += 1;
        })
        .await;

        assert!(resolved.is_empty());
        assert_eq!(calls, 0);
    }
}
