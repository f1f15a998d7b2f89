use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

pub type TicketId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub description: String,
    pub assignee_id: Option<UserId>,
    pub completed: bool,
}

impl Ticket {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Open" }
    }
}

/// Body of `POST /api/tickets`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket<'a> {
    pub description: &'a str,
}
