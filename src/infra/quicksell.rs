use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};

use crate::domain::board::BoardPayload;
use crate::error::{AppError, AppResult};
use crate::services::TicketSourceService;

/// HTTP client for the QuickSell-style board endpoint: a single GET that
/// returns the full `{tickets, users}` payload.
pub struct QuickSellClient {
    http: Client,
    endpoint: String,
}

impl QuickSellClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TicketSourceService for QuickSellClient {
    async fn fetch_board(&self) -> AppResult<BoardPayload> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AppError::Configuration(
                "ticket source URL must not be empty".to_string(),
            ));
        }

        let response = self
            .http
            .get(endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::TicketSource(format!("failed to call ticket API: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::TicketSource(format!(
                "ticket API responded with {status}: {body}"
            )));
        }

        let payload: BoardPayload = response.json().await.map_err(|err| {
            AppError::TicketSource(format!("failed to parse ticket API response: {err}"))
        })?;

        Ok(payload)
    }
}
