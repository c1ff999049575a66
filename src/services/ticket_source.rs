use async_trait::async_trait;

use crate::domain::board::BoardPayload;
use crate::error::AppResult;

#[async_trait]
pub trait TicketSourceService: Send + Sync {
    async fn fetch_board(&self) -> AppResult<BoardPayload>;
}
