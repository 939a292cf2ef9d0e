//! HTTP client for the `/products` collection

use crate::shared::api_utils::Endpoints;
use async_trait::async_trait;
use contracts::domain::a001_product::ProductDto;
use gloo_net::http::{Request, Response};
use serde_json::Value;

/// Remote products collection.
///
/// Errors are plain strings describing the transport or HTTP failure;
/// callers decide which user notice they map to.
#[async_trait(?Send)]
pub trait ProductApi {
    /// `GET /products`, returning the raw JSON body
    async fn fetch_all(&self) -> Result<Value, String>;

    /// `POST /products`
    async fn create(&self, dto: &ProductDto) -> Result<(), String>;

    /// `PUT /products/:id`
    async fn update(&self, id: &str, dto: &ProductDto) -> Result<(), String>;

    /// `DELETE /products/:id`
    async fn delete(&self, id: &str) -> Result<(), String>;
}

/// [`ProductApi`] over the browser fetch API
#[derive(Clone, Copy, Debug)]
pub struct HttpProductApi {
    endpoints: &'static Endpoints,
}

impl HttpProductApi {
    pub fn new(endpoints: &'static Endpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn fetch_all(&self) -> Result<Value, String> {
        let response = Request::get(&self.endpoints.products)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create(&self, dto: &ProductDto) -> Result<(), String> {
        let response = Request::post(&self.endpoints.products)
            .json(dto)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        ensure_saved(response).await
    }

    async fn update(&self, id: &str, dto: &ProductDto) -> Result<(), String> {
        let response = Request::put(&self.endpoints.product(id))
            .json(dto)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        ensure_saved(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        let response = Request::delete(&self.endpoints.product(id))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        Ok(())
    }
}

/// Fail on a non-success status, logging whatever error body the server sent
async fn ensure_saved(response: Response) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    match response.json::<Value>().await {
        Ok(body) => log::error!("save rejected with HTTP {}: {}", status, body),
        Err(_) => log::error!("save rejected with HTTP {} (no JSON body)", status),
    }
    Err(format!("HTTP error: {}", status))
}
