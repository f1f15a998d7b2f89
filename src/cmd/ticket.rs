use clap::Subcommand;

use crate::context::AppContext;
use crate::domain::filter::StatusFilter;
use crate::domain::ticket::TicketId;
use crate::domain::user::UserId;
use crate::error::{AppError, AppResult};
use crate::view::{render_detail, render_list};
use crate::workflow::ticket as workflow;

#[derive(Subcommand, Debug, Clone)]
pub enum TicketCommand {
    /// List tickets, optionally filtered by status.
    List {
        /// all, open, or completed. Defaults to the configured filter.
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show a single ticket.
    Show { id: TicketId },
    /// Create a ticket with the given description.
    Create {
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Assign a user to a ticket.
    Assign { id: TicketId, user_id: UserId },
    /// Remove the assignee from a ticket.
    Unassign { id: TicketId },
    /// Mark an open ticket complete, or a completed ticket incomplete.
    Toggle { id: TicketId },
}

/// Loads the mirror, performs the command's action, and renders the view
/// the user lands on afterwards.
pub async fn run(ctx: &AppContext, command: TicketCommand) -> AppResult<String> {
    let loaded = ctx.store.initialize().await;

    match command {
        TicketCommand::List { status } => {
            let filter = match status {
                Some(value) => StatusFilter::from_str(&value).ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "unknown status '{value}' (expected all, open, or completed)"
                    ))
                })?,
                None => ctx.config.default_status,
            };
            Ok(render_list(&ctx.store.snapshot(), filter))
        }
        TicketCommand::Show { id } => Ok(render_detail(&ctx.store.snapshot(), id)),
        TicketCommand::Create { description } => {
            loaded?;
            let ticket = workflow::create_ticket(ctx, &description.join(" ")).await?;
            Ok(format!(
                "Ticket #{} created.\n\n{}",
                ticket.id,
                render_detail(&ctx.store.snapshot(), ticket.id)
            ))
        }
        TicketCommand::Assign { id, user_id } => {
            loaded?;
            workflow::assign_user(ctx, id, user_id).await?;
            Ok(render_detail(&ctx.store.snapshot(), id))
        }
        TicketCommand::Unassign { id } => {
            loaded?;
            workflow::unassign_user(ctx, id).await?;
            Ok(render_detail(&ctx.store.snapshot(), id))
        }
        TicketCommand::Toggle { id } => {
            loaded?;
            workflow::toggle_completion(ctx, id).await?;
            Ok(render_detail(&ctx.store.snapshot(), id))
        }
    }
}
