use crate::domain::filter::StatusFilter;
use crate::store::StoreState;

pub fn render_list(state: &StoreState, filter: StatusFilter) -> String {
    if state.loading {
        return "Loading tickets...".to_string();
    }
    if let Some(error) = &state.error {
        return format!("Error: {error}");
    }

    let visible = state
        .tickets
        .iter()
        .filter(|ticket| filter.matches(ticket))
        .collect::<Vec<_>>();

    let mut lines = vec![
        format!("Tickets ({})", visible.len()),
        format!("Filter by status: {}", filter.as_str()),
        String::new(),
    ];

    if visible.is_empty() {
        lines.push(match filter {
            StatusFilter::All => "No tickets found. Create your first ticket!".to_string(),
            other => format!("No {} tickets found.", other.as_str()),
        });
    }

    for ticket in visible {
        let assignee = state
            .user_by_id(ticket.assignee_id)
            .map(|user| user.name.as_str())
            .unwrap_or("Unassigned");
        lines.push(format!(
            "#{} - {} [{}]",
            ticket.id,
            ticket.description,
            ticket.status_label()
        ));
        lines.push(format!("    Assigned to: {assignee}"));
    }

    lines.join("\n")
}
