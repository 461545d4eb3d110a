//! Requested actions and counseling modes.

use serde::{Deserialize, Serialize};

/// Conversation modes offered by the counselor.
///
/// [`ChatMode::Standard`] is open to every tier; the other modes require a
/// tier with full mode access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatMode {
    /// Default supportive-listening conversation.
    Standard,
    /// Guided reflection with structured follow-up questions.
    Reflective,
    /// Goal-oriented coaching sessions.
    Coaching,
}

/// An action a caller asks the service to admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Submit a chat message in the given mode.
    Chat(ChatMode),
    /// Generate a session analysis report.
    Analysis,
}
