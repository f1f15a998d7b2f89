use tracing::error;

use crate::context::AppContext;
use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::UserId;
use crate::error::{AppError, AppResult};

pub async fn create_ticket(ctx: &AppContext, description: &str) -> AppResult<Ticket> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AppError::InvalidInput(
            "ticket description must not be empty".to_string(),
        ));
    }

    ctx.store.create_ticket(description).await.map_err(|err| {
        error!(error = %err, "failed to create ticket");
        AppError::from(err)
    })
}

pub async fn assign_user(ctx: &AppContext, ticket_id: TicketId, user_id: UserId) -> AppResult<()> {
    let ticket = require_ticket(ctx, ticket_id)?;
    ctx.store
        .assign_ticket(ticket.id, user_id)
        .await
        .map_err(|err| {
            error!(error = %err, ticket_id, user_id, "failed to assign user");
            AppError::from(err)
        })
}

pub async fn unassign_user(ctx: &AppContext, ticket_id: TicketId) -> AppResult<()> {
    let ticket = require_ticket(ctx, ticket_id)?;
    ctx.store.unassign_ticket(ticket.id).await.map_err(|err| {
        error!(error = %err, ticket_id, "failed to unassign user");
        AppError::from(err)
    })
}

/// Flips the mirrored completion flag of the ticket.
pub async fn toggle_completion(ctx: &AppContext, ticket_id: TicketId) -> AppResult<bool> {
    let ticket = require_ticket(ctx, ticket_id)?;
    let completed = !ticket.completed;
    ctx.store
        .complete_ticket(ticket.id, completed)
        .await
        .map_err(|err| {
            error!(error = %err, ticket_id, "failed to update ticket completion");
            AppError::from(err)
        })?;
    Ok(completed)
}

fn require_ticket(ctx: &AppContext, ticket_id: TicketId) -> AppResult<Ticket> {
    ctx.store
        .get_ticket_by_id(ticket_id)
        .ok_or(AppError::TicketNotFound(ticket_id))
}
