use crate::domain::ticket::TicketId;
use crate::store::StoreState;

pub fn render_detail(state: &StoreState, ticket_id: TicketId) -> String {
    if state.loading {
        return "Loading ticket details...".to_string();
    }
    if let Some(error) = &state.error {
        return format!("Error: {error}");
    }
    let Some(ticket) = state.ticket_by_id(ticket_id) else {
        return "Ticket not found".to_string();
    };

    let assignee = state.user_by_id(ticket.assignee_id);
    let assignable = state
        .users
        .iter()
        .map(|user| {
            let marker = if assignee.is_some_and(|current| current.id == user.id) {
                "*"
            } else {
                " "
            };
            format!("  {marker} {} ({})", user.name, user.id)
        })
        .collect::<Vec<_>>();

    let mut lines = vec![
        format!("Ticket #{}", ticket.id),
        String::new(),
        "Description".to_string(),
        format!("  {}", ticket.description),
        "Status".to_string(),
        format!("  {}", ticket.status_label()),
        "Assigned To".to_string(),
        format!(
            "  {}",
            assignee.map(|user| user.name.as_str()).unwrap_or("Unassigned")
        ),
        String::new(),
        "Assign User".to_string(),
    ];
    lines.extend(assignable);
    lines.push(String::new());
    lines.push(if ticket.completed {
        "Mark as Incomplete".to_string()
    } else {
        "Mark as Complete".to_string()
    });

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_tickets, sample_users};

    fn loaded() -> StoreState {
        StoreState {
            tickets: sample_tickets(),
            users: sample_users(),
            loading: false,
            error: None,
        }
    }

    #[test]
    fn renders_ticket_details() {
        let output = render_detail(&loaded(), 1);
        assert!(output.starts_with("Ticket #1"));
        assert!(output.contains("  Install a monitor arm"));
        assert!(output.contains("Status\n  Open"));
        assert!(output.contains("Assigned To\n  Alice"));
        assert!(output.contains("  * Alice (1)"));
        assert!(output.contains("    Bob (2)"));
        assert!(output.ends_with("Mark as Complete"));
    }

    #[test]
    fn renders_unassigned_completed_ticket() {
        let output = render_detail(&loaded(), 2);
        assert!(output.contains("Status\n  Completed"));
        assert!(output.contains("Assigned To\n  Unassigned"));
        assert!(output.ends_with("Mark as Incomplete"));
    }

    #[test]
    fn renders_not_found() {
        assert_eq!(render_detail(&loaded(), 42), "Ticket not found");
    }

    #[test]
    fn renders_loading_and_error_states() {
        let loading = StoreState {
            loading: true,
            ..loaded()
        };
        assert_eq!(render_detail(&loading, 1), "Loading ticket details...");

        let failed = StoreState {
            error: Some("Failed to fetch data".to_string()),
            ..loaded()
        };
        assert_eq!(render_detail(&failed, 1), "Error: Failed to fetch data");
    }
}
