use crate::context::AppContext;
use crate::domain::board::BoardPayload;
use crate::error::{AppError, AppResult};

pub struct BoardLoad {
    pub payload: BoardPayload,
    /// True when the payload came fresh from the remote source; the caller
    /// should update the snapshot cache.
    pub fetched: bool,
}

/// Resolves the board payload for one invocation. `cached` is the snapshot
/// previously stored for this source, if any. A failed fetch degrades to the
/// snapshot, then to an empty board; only `--offline` with no snapshot is an
/// error.
pub async fn load_board(
    ctx: &AppContext,
    cached: Option<BoardPayload>,
    offline: bool,
) -> AppResult<BoardLoad> {
    if offline {
        let payload = cached.ok_or_else(|| {
            AppError::Cache(
                "no cached board for this source; run once without --offline".to_string(),
            )
        })?;
        return Ok(BoardLoad {
            payload,
            fetched: false,
        });
    }

    match ctx.ticket_source.fetch_board().await {
        Ok(payload) => Ok(BoardLoad {
            payload,
            fetched: true,
        }),
        Err(err) => match cached {
            Some(payload) => {
                eprintln!("Warning: fetch failed ({err}); showing cached board.");
                Ok(BoardLoad {
                    payload,
                    fetched: false,
                })
            }
            None => {
                eprintln!("Warning: fetch failed ({err}); rendering empty board.");
                Ok(BoardLoad {
                    payload: BoardPayload::default(),
                    fetched: false,
                })
            }
        },
    }
}
