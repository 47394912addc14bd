//! Where catalogs come from.
//!
//! - `HttpCatalogSource` (wasm): one `fetch` of the configured relative URL.
//! - `EmbeddedCatalogSource` (all targets): the `i18n/i18n.json` shipped
//!   inside the binary via `rust-embed`.

use std::future::Future;

use rust_embed::Embed;
use thiserror::Error;

use super::catalog::Catalog;

/// Everything that can go wrong obtaining a catalog.
///
/// None of these reach the page: the store logs them and hands back an empty
/// bundle.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("catalog request returned HTTP {0}")]
    Status(u16),
    #[error("catalog body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("embedded catalog `{0}` not found")]
    MissingAsset(String),
}

/// A single-shot loader for the whole catalog.
///
/// Implementations are not retried; one call is one attempt.
pub trait CatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<Catalog, CatalogError>>;
}

/// Name of the bundled catalog file (relative to `ui/i18n/`).
pub const EMBEDDED_CATALOG: &str = "i18n.json";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedCatalogSource;

impl EmbeddedCatalogSource {
    pub fn load() -> Result<Catalog, CatalogError> {
        let file = Localizations::get(EMBEDDED_CATALOG)
            .ok_or_else(|| CatalogError::MissingAsset(EMBEDDED_CATALOG.to_string()))?;
        Catalog::from_slice(&file.data)
    }
}

impl CatalogSource for EmbeddedCatalogSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Self::load()
    }
}

/// `GET <url>` through the browser's `fetch`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpCatalogSource {
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self { url: url.into() }
    }

    async fn request(&self) -> Result<String, CatalogError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, Response};

        let network = |what: &str| CatalogError::Network(what.to_string());

        let opts = RequestInit::new();
        opts.set_method("GET");
        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|_| network("invalid request"))?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(|_| network("unable to set headers"))?;

        let window = web_sys::window().ok_or_else(|| network("window unavailable"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| CatalogError::Network(format!("{err:?}")))?
            .dyn_into()
            .map_err(|_| network("unexpected fetch result"))?;

        if !response.ok() {
            return Err(CatalogError::Status(response.status()));
        }

        let text = response.text().map_err(|_| network("body unreadable"))?;
        JsFuture::from(text)
            .await
            .map_err(|_| network("body read interrupted"))?
            .as_string()
            .ok_or_else(|| network("body is not text"))
    }
}

#[cfg(target_arch = "wasm32")]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let body = self.request().await?;
        Catalog::from_json(&body)
    }
}
