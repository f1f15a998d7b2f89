use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::{User, UserId};

/// Point-in-time view of the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState {
    pub(super) fn pending() -> Self {
        Self {
            tickets: Vec::new(),
            users: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn ticket_by_id(&self, ticket_id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == ticket_id)
    }

    /// `None` means "no assignee" and never triggers a lookup.
    pub fn user_by_id(&self, user_id: Option<UserId>) -> Option<&User> {
        let user_id = user_id?;
        self.users.iter().find(|user| user.id == user_id)
    }

    /// Applies `change` to the ticket with `ticket_id` in place. Returns
    /// whether a ticket matched.
    pub(super) fn patch_ticket(
        &mut self,
        ticket_id: TicketId,
        change: impl FnOnce(&mut Ticket),
    ) -> bool {
        match self.tickets.iter_mut().find(|ticket| ticket.id == ticket_id) {
            Some(ticket) => {
                change(ticket);
                true
            }
            None => false,
        }
    }

    /// Appends a newly created ticket. An id that is already mirrored is
    /// replaced in place instead, so ids stay unique; returns `false` then.
    pub(super) fn insert_ticket(&mut self, ticket: Ticket) -> bool {
        match self.tickets.iter_mut().find(|existing| existing.id == ticket.id) {
            Some(existing) => {
                *existing = ticket;
                false
            }
            None => {
                self.tickets.push(ticket);
                true
            }
        }
    }
}
