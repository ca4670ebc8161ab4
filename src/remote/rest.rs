use crate::remote::record::{NewPropertyRecord, PropertyPatch, PropertyRecord};
use crate::remote::traits::RemoteCollection;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};

const TABLE: &str = "properties";

/// PostgREST client for the hosted `properties` table
pub struct RestCollection {
    client: Client,
    table_url: String,
}

impl RestCollection {
    /// Create a client for the project at `base_url`, authenticating with `api_key`
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(api_key).context("API key is not a valid header value")?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .context("API key is not a valid header value")?,
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        let table_url = format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), TABLE);
        info!("Using remote collection at {}", table_url);

        Ok(Self { client, table_url })
    }

    /// Send a request and decode the JSON body, failing on non-success status
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = self.send(request, what).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to decode {what} response"))
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to {what}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Remote collection returned {} for {}", status, what);
            anyhow::bail!("HTTP {}: {}", status, body);
        }

        Ok(response)
    }

    /// First row of a `return=representation` response
    fn single(rows: Vec<PropertyRecord>, what: &str) -> Result<PropertyRecord> {
        rows.into_iter()
            .next()
            .with_context(|| format!("Remote collection returned no row for {what}"))
    }
}

#[async_trait]
impl RemoteCollection for RestCollection {
    #[tracing::instrument(skip(self), err)]
    async fn list_active(&self) -> Result<Vec<PropertyRecord>> {
        let request = self.client.get(&self.table_url).query(&[
            ("select", "*"),
            ("is_active", "eq.true"),
            ("order", "created_at.desc"),
        ]);

        let rows: Vec<PropertyRecord> = self.fetch(request, "list properties").await?;
        debug!("Fetched {} active rows", rows.len());
        Ok(rows)
    }

    #[tracing::instrument(skip(self), err)]
    async fn get_by_id(&self, id: &str) -> Result<Option<PropertyRecord>> {
        let request = self.client.get(&self.table_url).query(&[
            ("select", "*".to_string()),
            ("id", format!("eq.{id}")),
            ("is_active", "eq.true".to_string()),
        ]);

        let rows: Vec<PropertyRecord> = self.fetch(request, "fetch property").await?;
        Ok(rows.into_iter().next())
    }

    #[tracing::instrument(skip(self, record), err)]
    async fn insert(&self, record: &NewPropertyRecord) -> Result<PropertyRecord> {
        let request = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(&[record]);

        let rows = self.fetch(request, "create property").await?;
        Self::single(rows, "create property")
    }

    #[tracing::instrument(skip(self, patch), err)]
    async fn update(&self, id: &str, patch: &PropertyPatch) -> Result<PropertyRecord> {
        let request = self
            .client
            .patch(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch);

        let rows = self.fetch(request, "update property").await?;
        Self::single(rows, "update property")
    }

    #[tracing::instrument(skip(self), err)]
    async fn soft_delete(&self, id: &str) -> Result<()> {
        let request = self
            .client
            .patch(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .json(&json!({ "is_active": false }));

        self.send(request, "delete property").await?;
        Ok(())
    }

    fn collection_name(&self) -> &'static str {
        "rest"
    }
}
