/// Login state derived from the `/login-status` endpoint. The endpoint
/// answers with a single link: a logout link while a session is active,
/// a login link otherwise. Decoded once per response; never cached, since
/// the session can expire server-side between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    LoggedIn { logout_url: String },
    LoggedOut { login_url: String },
}

impl SessionStatus {
    /// Classify the status link. The backend's logout links carry a
    /// "logout" path segment; anything else is treated as a login link.
    pub fn from_link(link: &str) -> Self {
        let link = link.trim();
        let path = link
            .split_once("://")
            .map(|(_, rest)| rest)
            .and_then(|rest| rest.split_once('/').map(|(_, path)| path))
            .unwrap_or(link);

        if path.contains("logout") {
            SessionStatus::LoggedIn { logout_url: link.to_string() }
        } else {
            SessionStatus::LoggedOut { login_url: link.to_string() }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionStatus::LoggedIn { .. })
    }

    /// The link to follow to flip the session state.
    pub fn link(&self) -> &str {
        match self {
            SessionStatus::LoggedIn { logout_url } => logout_url,
            SessionStatus::LoggedOut { login_url } => login_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_link_means_logged_in() {
        let status = SessionStatus::from_link("/_ah/logout?continue=%2Findex.html");
        assert!(status.is_logged_in());
        assert_eq!(status.link(), "/_ah/logout?continue=%2Findex.html");
    }

    #[test]
    fn login_link_means_logged_out() {
        let status = SessionStatus::from_link("/_ah/login?continue=%2Findex.html");
        assert!(!status.is_logged_in());
    }

    #[test]
    fn absolute_urls_are_classified_by_path() {
        // "logout" in the host must not count as a logout link.
        let status = SessionStatus::from_link("https://logout.example.com/login");
        assert!(!status.is_logged_in());

        let status = SessionStatus::from_link("https://auth.example.com/session/logout");
        assert!(status.is_logged_in());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let status = SessionStatus::from_link("  /_ah/logout\n");
        assert!(status.is_logged_in());
        assert_eq!(status.link(), "/_ah/logout");
    }
}
