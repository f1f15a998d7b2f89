//! In-memory mirror of the ticket gateway.
//!
//! [`SyncStore`] loads tickets and users once, then applies each mutation
//! only after the gateway confirms it. The initial load replaces both
//! collections wholesale; mutations patch the single entry they target.
//!
//! Requests are never retried, cancelled, or timed out by the store, and the
//! mirror is never re-fetched after a failure. A request that does not
//! resolve leaves its caller suspended. Retry is the caller's decision.

mod error;
mod state;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::{User, UserId};
use crate::error::AppResult;
use crate::services::TicketGateway;

pub use error::SyncError;
pub use state::StoreState;

/// Shared, single-writer state container for the ticket and user mirror.
///
/// Only methods on this type write the state. The lock is released before
/// every gateway await, so concurrent mutations each touch their own entry
/// and the visible `error` follows completion order.
pub struct SyncStore {
    gateway: Arc<dyn TicketGateway>,
    state: RwLock<StoreState>,
    initialized: AtomicBool,
}

impl SyncStore {
    pub fn new(gateway: Arc<dyn TicketGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(StoreState::pending()),
            initialized: AtomicBool::new(false),
        }
    }

    /// Fetches tickets and users concurrently and replaces the mirror.
    ///
    /// Runs once per store; later calls return `Ok(())` without touching the
    /// gateway.
    pub async fn initialize(&self) -> Result<(), SyncError> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("store already initialized; skipping load");
            return Ok(());
        }

        let outcome = tokio::try_join!(self.gateway.list_tickets(), self.gateway.list_users());

        match outcome {
            Ok((tickets, users)) => {
                info!(tickets = tickets.len(), users = users.len(), "mirror loaded");
                self.update(|state| {
                    state.tickets = tickets;
                    state.users = users;
                    state.loading = false;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "initial load failed");
                let failure = SyncError::Load;
                self.update(|state| {
                    state.tickets.clear();
                    state.users.clear();
                    state.loading = false;
                    state.error = Some(failure.to_string());
                });
                Err(failure)
            }
        }
    }

    pub async fn create_ticket(&self, description: &str) -> Result<Ticket, SyncError> {
        let ticket = self
            .confirm(SyncError::Create, self.gateway.create_ticket(description))
            .await?;

        let appended = self.update(|state| state.insert_ticket(ticket.clone()));
        if appended {
            debug!(ticket_id = ticket.id, "ticket created");
        } else {
            warn!(ticket_id = ticket.id, "gateway returned an id already mirrored");
        }
        Ok(ticket)
    }

    pub async fn assign_ticket(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
    ) -> Result<(), SyncError> {
        self.confirm(
            SyncError::Assign,
            self.gateway.assign_ticket(ticket_id, user_id),
        )
        .await?;
        self.patch(ticket_id, |ticket| ticket.assignee_id = Some(user_id));
        debug!(ticket_id, user_id, "ticket assigned");
        Ok(())
    }

    pub async fn unassign_ticket(&self, ticket_id: TicketId) -> Result<(), SyncError> {
        self.confirm(SyncError::Unassign, self.gateway.unassign_ticket(ticket_id))
            .await?;
        self.patch(ticket_id, |ticket| ticket.assignee_id = None);
        debug!(ticket_id, "ticket unassigned");
        Ok(())
    }

    /// Marks the ticket complete (`true`) or incomplete (`false`); the two
    /// directions are separate gateway operations.
    pub async fn complete_ticket(
        &self,
        ticket_id: TicketId,
        completed: bool,
    ) -> Result<(), SyncError> {
        let call = if completed {
            self.gateway.mark_complete(ticket_id)
        } else {
            self.gateway.mark_incomplete(ticket_id)
        };
        self.confirm(SyncError::Complete { completed }, call).await?;
        self.patch(ticket_id, |ticket| ticket.completed = completed);
        debug!(ticket_id, completed, "ticket completion updated");
        Ok(())
    }

    pub fn get_user_by_id(&self, user_id: Option<UserId>) -> Option<User> {
        let user_id = user_id?;
        self.read(|state| state.user_by_id(Some(user_id)).cloned())
    }

    pub fn get_ticket_by_id(&self, ticket_id: TicketId) -> Option<Ticket> {
        self.read(|state| state.ticket_by_id(ticket_id).cloned())
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.read(|state| state.tickets.clone())
    }

    pub fn users(&self) -> Vec<User> {
        self.read(|state| state.users.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.read(|state| state.error.clone())
    }

    pub fn snapshot(&self) -> StoreState {
        self.read(StoreState::clone)
    }

    /// Shared shape of every mutation: clear the previous error, await the
    /// single gateway call, and on failure record `failure` before returning
    /// it. Nothing in the mirror changes here.
    async fn confirm<T, F>(&self, failure: SyncError, call: F) -> Result<T, SyncError>
    where
        F: Future<Output = AppResult<T>>,
    {
        self.update(|state| state.error = None);

        match call.await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(error = %err, "{failure}");
                self.update(|state| state.error = Some(failure.to_string()));
                Err(failure)
            }
        }
    }

    fn patch(&self, ticket_id: TicketId, change: impl FnOnce(&mut Ticket)) {
        if !self.update(|state| state.patch_ticket(ticket_id, change)) {
            debug!(ticket_id, "confirmed change for a ticket missing from the mirror");
        }
    }

    fn read<R>(&self, view: impl FnOnce(&StoreState) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        view(&guard)
    }

    fn update<R>(&self, change: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut guard)
    }
}
