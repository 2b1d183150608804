//! [Essent dynamic prices](https://www.essent.nl/dynamische-energieprijzen) client.

pub mod models;
pub mod normalize;

use std::time::Duration;

use chrono::Local;
use reqwest::{Client, StatusCode, header};

use crate::{essent::models::Prices, prelude::*};

pub const API_ENDPOINT: &str =
    "https://www.essent.nl/api/public/tariffmanagement/dynamic-prices/v1/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Essent API client.
///
/// The [`Client`] is supplied by the caller so its connection pool can be
/// shared with other integrations. The client is never closed here.
#[derive(bon::Builder)]
pub struct Api {
    client: Client,

    /// Endpoint URL, fixed at construction.
    #[builder(into, default = API_ENDPOINT.to_string())]
    endpoint: String,

    /// Total request timeout, fixed at construction.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl Api {
    /// Build a client against the production endpoint with the default timeout.
    pub fn new(client: Client) -> Self {
        Self::builder().client(client).build()
    }

    /// Fetch and normalize the current day-ahead prices.
    ///
    /// One GET per call: no retries, no caching. «Today» is selected by the
    /// local civil date.
    #[instrument(skip_all)]
    pub async fn get_prices(&self) -> Result<Prices> {
        let (status, body) = self.request().await?;
        info!(status = %status, n_bytes = body.len(), "Fetched");
        normalize::normalize(status, &body, Local::now().date_naive())
    }

    /// Perform the HTTP request and hand back the raw status and body.
    ///
    /// Status interpretation is the normalizer's job; only transport-level
    /// failures are reported here.
    async fn request(&self) -> Result<(StatusCode, String)> {
        info!(endpoint = %self.endpoint, "Fetching…");
        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Error::Connection)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Connection)?;
        Ok((status, body))
    }
}
