use contracts::domain::a001_satellite::dto::{decode_response, SatellitesQuery, SatellitesResponse};
use contracts::domain::a001_satellite::LoadError;
use contracts::enums::ObjectType;
use gloo_net::http::Request;

use crate::shared::api_utils::satellites_url;

/// Fetch the catalog for the given object types
///
/// Exactly one request per call, no retry. An empty `object_types` slice omits
/// the `objectTypes` parameter.
pub async fn fetch_satellites(object_types: &[ObjectType]) -> Result<SatellitesResponse, LoadError> {
    let query = SatellitesQuery::new(object_types).to_query_string()?;
    let url = satellites_url(&query);
    log::debug!("Fetching data from: {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Network(format!("Failed to send request: {}", e)))?;

    log::debug!("Response status: {}", response.status());

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(format!("Failed to read response: {}", e)))?;

    if !response.ok() {
        log::error!("API error {}: {}", response.status(), body);
        return Err(LoadError::Status {
            status: response.status(),
            body,
        });
    }

    let result = decode_response(&body)?;
    log::info!(
        "API response: {} records, total {}",
        result.data.len(),
        result.counts.total()
    );
    Ok(result)
}
