//! Reverse geocoding adapter (Nominatim).

use serde::Deserialize;

/// Resolves a coordinate pair to a short human-readable label.
///
/// Implementations never fail outward; any error degrades to a
/// coordinate-formatted label so job creation is never blocked.
pub trait ReverseGeocoder {
    fn reverse_geocode(&self, lat: f64, lng: f64) -> String;
}

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl ReverseGeocoder for NominatimClient {
    fn reverse_geocode(&self, lat: f64, lng: f64) -> String {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1",
            self.config.base_url, lat, lng
        );

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<ReverseResponse>());

        match response {
            Ok(body) => short_label(body.display_name.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "reverse geocoding failed, using coordinate label");
                coordinate_label(lat, lng)
            }
        }
    }
}

/// First comma-delimited segment of the display name, trimmed.
fn short_label(display_name: Option<&str>) -> String {
    display_name
        .and_then(|name| name.split(',').next())
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown Location".to_string())
}

/// Fixed-precision fallback label, e.g. "44.4268, 26.1025".
pub fn coordinate_label(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}
