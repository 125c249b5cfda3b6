// Image reference resolution

use crate::error::{GatewayError, Result};
use crate::models::gemini::InlineData;
use base64::Engine;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Lazily initialized regex for `data:` URIs
static DATA_URI_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get or initialize the data URI regex.
///
/// The `;base64` marker is optional and does not change how the data group
/// is captured.
fn data_uri_regex() -> &'static Regex {
    DATA_URI_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^data:(?P<mime>[^;,]+)(?:;base64)?,(?P<data>.*)$")
            .expect("Invalid regex pattern")
    })
}

/// Resolve an image reference into inline base64 data.
///
/// Remote `http(s)` references are fetched; anything else must be a
/// `data:` URI. No retry, no caching, no size limit.
pub async fn resolve_image_ref(client: &reqwest::Client, reference: &str) -> Result<InlineData> {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return fetch_remote_image(client, reference).await;
    }

    let captures = data_uri_regex()
        .captures(reference)
        .ok_or_else(|| GatewayError::InvalidImage(truncate_ref(reference)))?;

    Ok(InlineData {
        mime_type: captures["mime"].to_string(),
        data: captures["data"].to_string(),
    })
}

async fn fetch_remote_image(client: &reqwest::Client, url: &str) -> Result<InlineData> {
    debug!("Fetching remote image: {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::ImageDownload(status.to_string()));
    }

    let mime_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_string();

    let bytes = response.bytes().await?;

    Ok(InlineData {
        mime_type,
        data: base64::engine::general_purpose::STANDARD.encode(&bytes),
    })
}

/// References can be megabytes of base64; keep error payloads readable.
fn truncate_ref(reference: &str) -> String {
    reference.chars().take(64).collect()
}
