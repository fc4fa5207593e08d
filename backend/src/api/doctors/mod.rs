//! Loads the full doctor list from the configured endpoint.

use common::{doctor::Doctor, doctor_payload::parse_doctor_list, error::FetchError};

use crate::http_utils::{get_doctors_api_url, get_http_client};

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// One GET against `DOCTORS_API_URL`. No retries and no caching.
pub async fn load_doctors() -> Result<Vec<Doctor>, FetchError> {
    let url = get_doctors_api_url();
    let client = get_http_client().map_err(|e| FetchError::Network(e.to_string()))?;
    fetch_doctors(&client, &url).await
}

pub async fn fetch_doctors(client: &reqwest::Client, url: &str) -> Result<Vec<Doctor>, FetchError> {
    tracing::info!("loading doctors from {url}");
    let t0 = std::time::Instant::now();
    let result = fetch_and_parse(client, url).await;
    let dt_ms = t0.elapsed().as_millis();
    match &result {
        Ok(doctors) => tracing::info!("loaded {} doctors in {dt_ms}ms", doctors.len()),
        Err(e) => tracing::error!("failed to load doctors after {dt_ms}ms: {e}"),
    }
    result
}

async fn fetch_and_parse(client: &reqwest::Client, url: &str) -> Result<Vec<Doctor>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = response.status();
    let response_txt = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: response_txt.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
        });
    }
    parse_doctor_list(&response_txt)
}
