use std::io;

use thiserror::Error;

use crate::domain::ticket::TicketId;
use crate::store::SyncError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("ticket gateway error: {0}")]
    Gateway(String),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error("Ticket not found: #{0}")]
    TicketNotFound(TicketId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
