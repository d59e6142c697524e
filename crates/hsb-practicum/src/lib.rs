//! Practicum API adapter.
//!
//! Implements the `hsb-core` StatusApi port over the homework-statuses REST
//! endpoint with reqwest. Shape checking of the payload happens in the core;
//! this crate only classifies the HTTP exchange.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use hsb_core::{config::Config, errors::Error, ports::StatusApi, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct StatusQuery {
    from_date: i64,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("reqwest client build");
        Self {
            endpoint: cfg.endpoint.clone(),
            token: cfg.practicum_token.clone(),
            http,
        }
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value> {
        info!("requesting homework statuses since {from_date}");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("OAuth {}", self.token),
            )
            .query(&StatusQuery { from_date })
            .send()
            .await
            .map_err(|e| Error::ServerUnavailable(format!("request error: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            info!("homework status request answered {status}");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }
        info!("homework status request answered 200 OK");

        resp.json::<Value>()
            .await
            .map_err(|e| Error::ServerUnavailable(format!("body is not valid json: {e}")))
    }
}
