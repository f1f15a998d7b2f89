use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, header::ACCEPT};
use serde::de::DeserializeOwned;

use crate::domain::ticket::{NewTicket, Ticket, TicketId};
use crate::domain::user::{User, UserId};
use crate::error::{AppError, AppResult};
use crate::services::TicketGateway;

pub struct HttpTicketGateway {
    http: Client,
    base_url: String,
}

impl HttpTicketGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn ticket_endpoint(&self, ticket_id: TicketId, action: &str) -> String {
        self.endpoint(&format!("tickets/{ticket_id}/{action}"))
    }

    async fn send(request: RequestBuilder, operation: &str) -> AppResult<Response> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::Gateway(format!("failed to {operation}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Gateway(format!(
                "{operation} responded with {status}"
            )));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> AppResult<T> {
        response.json::<T>().await.map_err(|err| {
            AppError::Gateway(format!("failed to parse {operation} response: {err}"))
        })
    }
}

#[async_trait]
impl TicketGateway for HttpTicketGateway {
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>> {
        let response = Self::send(self.http.get(self.endpoint("tickets")), "list tickets").await?;
        Self::decode(response, "list tickets").await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let response = Self::send(self.http.get(self.endpoint("users")), "list users").await?;
        Self::decode(response, "list users").await
    }

    async fn create_ticket(&self, description: &str) -> AppResult<Ticket> {
        let request = self
            .http
            .post(self.endpoint("tickets"))
            .json(&NewTicket { description });
        let response = Self::send(request, "create ticket").await?;
        Self::decode(response, "create ticket").await
    }

    async fn assign_ticket(&self, ticket_id: TicketId, user_id: UserId) -> AppResult<()> {
        let url = self.ticket_endpoint(ticket_id, &format!("assign/{user_id}"));
        Self::send(self.http.put(url), "assign ticket").await?;
        Ok(())
    }

    async fn unassign_ticket(&self, ticket_id: TicketId) -> AppResult<()> {
        let url = self.ticket_endpoint(ticket_id, "unassign");
        Self::send(self.http.put(url), "unassign ticket").await?;
        Ok(())
    }

    async fn mark_complete(&self, ticket_id: TicketId) -> AppResult<()> {
        let url = self.ticket_endpoint(ticket_id, "complete");
        Self::send(self.http.put(url), "complete ticket").await?;
        Ok(())
    }

    async fn mark_incomplete(&self, ticket_id: TicketId) -> AppResult<()> {
        let url = self.ticket_endpoint(ticket_id, "complete");
        Self::send(self.http.delete(url), "uncomplete ticket").await?;
        Ok(())
    }
}
