//! Art Institute of Chicago API client.
//!
//! API docs: https://api.artic.edu/docs/
//! One request per call: no retries, no pagination follow-up, no
//! caching. Identical queries always re-fetch.

use crate::error::{CurioError, Result};
use crate::model::Artwork;
use crate::schema;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const AIC_API_BASE: &str = "https://api.artic.edu/api/v1";
const IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

/// Field subset requested from the API; everything else the server
/// chooses to send anyway passes through the validator untouched.
const ARTWORK_FIELDS: &str = "id,title,artist_title,image_id";

pub const DEFAULT_SEARCH_LIMIT: u32 = 24;

const USER_AGENT: &str = concat!("curio/", env!("CARGO_PKG_VERSION"));

/// Render widths supported by the IIIF image endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageWidth {
    /// Landing-view hero image.
    Hero,
    /// Result/gallery card.
    Card,
    /// Small thumbnail.
    Thumb,
}

impl ImageWidth {
    pub fn pixels(self) -> u32 {
        match self {
            ImageWidth::Hero => 1200,
            ImageWidth::Card => 400,
            ImageWidth::Thumb => 200,
        }
    }
}

/// Build the deterministic IIIF URL for an image reference token.
/// Existence of the image is never checked here.
pub fn iiif_image_url(image_id: &str, width: ImageWidth) -> String {
    format!(
        "{}/{}/full/{},/0/default.jpg",
        IIIF_BASE,
        image_id,
        width.pixels()
    )
}

pub struct AicClient {
    http: Client,
    base_url: String,
}

impl AicClient {
    pub fn new() -> Self {
        Self::with_base_url(AIC_API_BASE)
    }

    /// Point the client at a different base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Search the collection. An empty or whitespace-only query
    /// short-circuits to an empty result without touching the network.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Artwork>> {
        let q = query.trim();
        if q.is_empty() {
            return Ok(Vec::new());
        }

        let url = Url::parse_with_params(
            &format!("{}/artworks/search", self.base_url),
            &[
                ("q", q),
                ("limit", limit.to_string().as_str()),
                ("fields", ARTWORK_FIELDS),
            ],
        )
        .map_err(|e| CurioError::Api(format!("Invalid search URL: {}", e)))?;

        let body = self.fetch(url).await?;
        Self::parse_search_response(&body)
    }

    /// Fetch a single artwork by id. Used by the save-by-id flow.
    pub async fn artwork(&self, id: i64) -> Result<Artwork> {
        let url = Url::parse_with_params(
            &format!("{}/artworks/{}", self.base_url, id),
            &[("fields", ARTWORK_FIELDS)],
        )
        .map_err(|e| CurioError::Api(format!("Invalid artwork URL: {}", e)))?;

        let body = self.fetch(url).await?;
        Self::parse_artwork_response(&body)
    }

    async fn fetch(&self, url: Url) -> Result<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CurioError::Remote {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    /// Parse a search envelope: `{ "data": [ {...}, ... ] }`.
    ///
    /// Records without a coercible id are excluded individually rather
    /// than failing the whole response.
    pub fn parse_search_response(json: &str) -> Result<Vec<Artwork>> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| CurioError::ResponseShape(format!("not JSON: {}", e)))?;
        let data = value
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| CurioError::ResponseShape("missing `data` array".to_string()))?;

        Ok(data.iter().filter_map(schema::artwork_from_value).collect())
    }

    /// Parse a single-artwork envelope: `{ "data": { ... } }`.
    pub fn parse_artwork_response(json: &str) -> Result<Artwork> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| CurioError::ResponseShape(format!("not JSON: {}", e)))?;
        let data = value
            .get("data")
            .ok_or_else(|| CurioError::ResponseShape("missing `data` object".to_string()))?;

        schema::artwork_from_value(data)
            .ok_or_else(|| CurioError::ResponseShape("record has no usable id".to_string()))
    }
}

impl Default for AicClient {
    fn default() -> Self {
        Self::new()
    }
}
