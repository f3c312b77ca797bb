use thiserror::Error;

/// Both kinds are terminal for the current fetch cycle and surfaced
/// verbatim as the page's error text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    /// Synthesized locally when the seller id has not resolved; no
    /// request is issued in that case.
    #[error("User ID not found.")]
    IdentityUnavailable,
    /// Whatever the read produced: transport failure, backend-reported
    /// error payload, or a decode failure.
    #[error("{0}")]
    Fetch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_surface_verbatim() {
        assert_eq!(
            LeaderboardError::IdentityUnavailable.to_string(),
            "User ID not found."
        );
        assert_eq!(
            LeaderboardError::Fetch("timeout".to_string()).to_string(),
            "timeout"
        );
    }
}
