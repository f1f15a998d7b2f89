use crate::domain::ticket::Ticket;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Completed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Open => "open",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "open" => Some(StatusFilter::Open),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => !ticket.completed,
            StatusFilter::Completed => ticket.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(completed: bool) -> Ticket {
        Ticket {
            id: 1,
            description: "Install a monitor arm".to_string(),
            assignee_id: None,
            completed,
        }
    }

    #[test]
    fn parses_status_filter() {
        assert_eq!(StatusFilter::from_str("OPEN"), Some(StatusFilter::Open));
        assert_eq!(StatusFilter::from_str(" all "), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_str("completed"),
            Some(StatusFilter::Completed)
        );
        assert_eq!(StatusFilter::from_str("closed"), None);
    }

    #[test]
    fn filters_by_completion() {
        assert!(StatusFilter::All.matches(&ticket(true)));
        assert!(StatusFilter::Open.matches(&ticket(false)));
        assert!(!StatusFilter::Open.matches(&ticket(true)));
        assert!(StatusFilter::Completed.matches(&ticket(true)));
    }
}
