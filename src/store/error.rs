use thiserror::Error;

/// Failure of a store operation.
///
/// The `Display` text is the fixed, user-facing message that the store also
/// records in its `error` field. Gateway detail is logged, never carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Failed to fetch data")]
    Load,
    #[error("Failed to create ticket")]
    Create,
    #[error("Failed to assign ticket")]
    Assign,
    #[error("Failed to unassign ticket")]
    Unassign,
    #[error("Failed to {} ticket", completion_verb(.completed))]
    Complete { completed: bool },
}

fn completion_verb(completed: &bool) -> &'static str {
    if *completed { "complete" } else { "uncomplete" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_message_names_direction() {
        assert_eq!(
            SyncError::Complete { completed: true }.to_string(),
            "Failed to complete ticket"
        );
        assert_eq!(
            SyncError::Complete { completed: false }.to_string(),
            "Failed to uncomplete ticket"
        );
    }
}
