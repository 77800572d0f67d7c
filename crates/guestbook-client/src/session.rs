use std::sync::Arc;

use tracing::debug;

use guestbook_types::SessionStatus;

use crate::api::ApiClient;
use crate::error::ClientError;

/// What the caller was about to do when it asked for the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateIntent {
    Login,
    Logout,
    Delete,
}

/// Outcome of a status check: the decoded session state, plus the link to
/// follow when the intent and the state call for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub status: SessionStatus,
    pub navigate: Option<String>,
}

/// Two-state login gate. Holds no cached state on purpose: the session can
/// expire server-side between calls, so every check hits the status
/// endpoint and decodes the answer fresh.
pub struct LoginGate {
    api: Arc<ApiClient>,
}

impl LoginGate {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn check(&self, intent: GateIntent) -> Result<GateDecision, ClientError> {
        let status = self.api.login_status().await?;
        debug!(?intent, logged_in = status.is_logged_in(), "login status checked");
        Ok(decide(intent, status))
    }
}

/// Navigate only when the link actually flips the state the caller wants
/// flipped: the login link while logged out, the logout link while logged
/// in. A delete intent never navigates; the caller gets the state and
/// decides.
fn decide(intent: GateIntent, status: SessionStatus) -> GateDecision {
    let navigate = match (intent, status.is_logged_in()) {
        (GateIntent::Login, false) | (GateIntent::Logout, true) => {
            Some(status.link().to_string())
        }
        _ => None,
    };
    GateDecision { status, navigate }
}
