use async_trait::async_trait;

use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::{User, UserId};
use crate::error::AppResult;

/// Remote source of truth for tickets and users.
///
/// Any non-success response is reported as an error; implementations never
/// interpret failure bodies.
#[async_trait]
pub trait TicketGateway: Send + Sync {
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>>;
    async fn list_users(&self) -> AppResult<Vec<User>>;
    async fn create_ticket(&self, description: &str) -> AppResult<Ticket>;
    async fn assign_ticket(&self, ticket_id: TicketId, user_id: UserId) -> AppResult<()>;
    async fn unassign_ticket(&self, ticket_id: TicketId) -> AppResult<()>;
    async fn mark_complete(&self, ticket_id: TicketId) -> AppResult<()>;
    async fn mark_incomplete(&self, ticket_id: TicketId) -> AppResult<()>;
}
