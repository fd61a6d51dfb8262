/// Row types mapping directly to SQLite rows.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub id: i64,
    pub text: String,
    pub votes: i64,
}

/// Outcome of a vote attempt. `NoOp` means stored state did not change,
/// which also suppresses the downstream push notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Applied,
    NoOp,
}
