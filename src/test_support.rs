//! In-memory gateway double shared by unit tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::{User, UserId};
use crate::error::{AppError, AppResult};
use crate::services::TicketGateway;
use crate::store::SyncStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListTickets,
    ListUsers,
    Create,
    Assign,
    Unassign,
    MarkComplete,
    MarkIncomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ListTickets,
    ListUsers,
    Create(String),
    Assign(TicketId, UserId),
    Unassign(TicketId),
    MarkComplete(TicketId),
    MarkIncomplete(TicketId),
}

/// Behaves like a cooperative server: keeps its own tickets, applies
/// accepted mutations, records every call, and rejects calls to endpoints
/// marked as failing.
#[derive(Default)]
pub struct FakeGateway {
    tickets: Mutex<Vec<Ticket>>,
    users: Vec<User>,
    failing: Mutex<HashSet<Endpoint>>,
    calls: Mutex<Vec<GatewayCall>>,
    assign_gate: Option<Arc<Notify>>,
}

impl FakeGateway {
    pub fn seeded(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self {
            tickets: Mutex::new(tickets),
            users,
            ..Self::default()
        }
    }

    /// Holds every assign call until `gate` is notified.
    pub fn with_assign_gate(mut self, gate: Arc<Notify>) -> Self {
        self.assign_gate = Some(gate);
        self
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall, endpoint: Endpoint) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&endpoint) {
            return Err(AppError::Gateway(format!(
                "{endpoint:?} responded with 500 Internal Server Error"
            )));
        }
        Ok(())
    }

    fn update_ticket(
        &self,
        ticket_id: TicketId,
        change: impl FnOnce(&mut Ticket),
    ) -> AppResult<()> {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == ticket_id)
            .ok_or_else(|| AppError::Gateway("responded with 404 Not Found".to_string()))?;
        change(ticket);
        Ok(())
    }
}

#[async_trait]
impl TicketGateway for FakeGateway {
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>> {
        self.record(GatewayCall::ListTickets, Endpoint::ListTickets)?;
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.record(GatewayCall::ListUsers, Endpoint::ListUsers)?;
        Ok(self.users.clone())
    }

    async fn create_ticket(&self, description: &str) -> AppResult<Ticket> {
        self.record(GatewayCall::Create(description.to_string()), Endpoint::Create)?;
        let mut tickets = self.tickets.lock().unwrap();
        let id = tickets.iter().map(|ticket| ticket.id).max().unwrap_or(0) + 1;
        let ticket = Ticket {
            id,
            description: description.to_string(),
            assignee_id: None,
            completed: false,
        };
        tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn assign_ticket(&self, ticket_id: TicketId, user_id: UserId) -> AppResult<()> {
        if let Some(gate) = &self.assign_gate {
            gate.notified().await;
        }
        self.record(GatewayCall::Assign(ticket_id, user_id), Endpoint::Assign)?;
        self.update_ticket(ticket_id, |ticket| ticket.assignee_id = Some(user_id))
    }

    async fn unassign_ticket(&self, ticket_id: TicketId) -> AppResult<()> {
        self.record(GatewayCall::Unassign(ticket_id), Endpoint::Unassign)?;
        self.update_ticket(ticket_id, |ticket| ticket.assignee_id = None)
    }

    async fn mark_complete(&self, ticket_id: TicketId) -> AppResult<()> {
        self.record(GatewayCall::MarkComplete(ticket_id), Endpoint::MarkComplete)?;
        self.update_ticket(ticket_id, |ticket| ticket.completed = true)
    }

    async fn mark_incomplete(&self, ticket_id: TicketId) -> AppResult<()> {
        self.record(GatewayCall::MarkIncomplete(ticket_id), Endpoint::MarkIncomplete)?;
        self.update_ticket(ticket_id, |ticket| ticket.completed = false)
    }
}

pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: 1,
            description: "Install a monitor arm".to_string(),
            assignee_id: Some(1),
            completed: false,
        },
        Ticket {
            id: 2,
            description: "Move the desk to the new location".to_string(),
            assignee_id: None,
            completed: true,
        },
    ]
}

pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
        },
    ]
}

/// A store whose initial load has already run; a failed load stays recorded
/// in the store's `error` field.
pub async fn loaded_store(gateway: Arc<FakeGateway>) -> SyncStore {
    let store = SyncStore::new(gateway);
    let _ = store.initialize().await;
    store
}
