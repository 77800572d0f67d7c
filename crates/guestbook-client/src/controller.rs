use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use guestbook_types::{CommentQuery, PageFilter, SessionStatus};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::render::{render_page, RenderOp};
use crate::session::{GateIntent, LoginGate};
use crate::surface::Surface;

/// Session-scoped view state. Created with defaults on startup, mutated by
/// user actions, never persisted. The pagination cursor is deliberately
/// not part of the stored query: it rides in as a one-shot override, and
/// only the *next* cursor (taken from the last comment of the latest
/// page) is kept.
#[derive(Debug)]
struct ViewState {
    max_results: u32,
    language_code: Option<String>,
    next_cursor: Option<String>,
}

/// Owns the comment list: composes queries, fetches pages, renders them
/// through the surface, and routes deletes through the login gate.
///
/// State sits behind a mutex that is never held across an await, so every
/// operation takes `&self` and the controller can be shared. Concurrent
/// refreshes are serialized by outcome, not by locking: each refresh takes
/// a sequence number, and a response that resolves after a newer refresh
/// has started is dropped without rendering.
pub struct CommentListController<S: Surface> {
    api: Arc<ApiClient>,
    gate: LoginGate,
    surface: S,
    state: Mutex<ViewState>,
    refresh_seq: AtomicU64,
}

impl<S: Surface> CommentListController<S> {
    pub fn new(config: &ClientConfig, surface: S) -> Result<Self, ClientError> {
        let api = Arc::new(ApiClient::new(config)?);
        Ok(Self {
            gate: LoginGate::new(api.clone()),
            api,
            surface,
            state: Mutex::new(ViewState {
                max_results: config.default_max_results,
                language_code: None,
                next_cursor: None,
            }),
            refresh_seq: AtomicU64::new(0),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetch one page and re-render the list. Overrides merge into the
    /// stored state: an explicit cursor applies to this request only, an
    /// explicit language sticks for the rest of the session. The raw
    /// max-results input is re-read and validated first; a bad value
    /// aborts before any request is sent and mutates nothing.
    pub async fn refresh(&self, overrides: PageFilter) -> Result<(), ClientError> {
        let query = self.compose_query(overrides)?;
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let page = match self.api.fetch_comments(&query).await {
            Ok(page) => page,
            Err(err) => {
                warn!(%err, "comment fetch failed");
                self.surface.notify(&format!("Could not load comments: {err}"));
                return Err(err);
            }
        };

        if self.refresh_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "dropping stale refresh response");
            return Ok(());
        }

        let ops = render_page(&page, query.language_code.as_deref());
        self.surface.apply(&ops);

        let mut state = self.state.lock().unwrap();
        state.next_cursor = page.last().map(|c| c.cursor.clone());
        info!(count = page.len(), has_next = state.next_cursor.is_some(), "comment list refreshed");
        Ok(())
    }

    /// Fetch the page after the one currently shown. Nothing stored means
    /// nothing after the first unseeded page: no request, no-op.
    pub async fn next_page(&self) -> Result<(), ClientError> {
        let cursor = self.state.lock().unwrap().next_cursor.clone();
        match cursor {
            Some(cursor) if !cursor.is_empty() => self.refresh(PageFilter::cursor(cursor)).await,
            _ => {
                debug!("next_page without a stored cursor, nothing to fetch");
                Ok(())
            }
        }
    }

    /// Re-fetch with server-side translation. The language sticks until
    /// changed again, and the rendered list carries it as its language
    /// attribute.
    pub async fn set_translation_language(&self, code: &str) -> Result<(), ClientError> {
        self.refresh(PageFilter::language(code)).await
    }

    /// Delete a comment, gated on a fresh login check. Logged out: the
    /// user is told and nothing is sent. Logged in: one delete request,
    /// the server's confirmation is surfaced, then one refresh with the
    /// current filter resynchronizes the view. Deleting the last item of
    /// a page may leave the refreshed window empty or shifted; that is
    /// accepted rather than re-paginated.
    pub async fn delete_comment(&self, id: &str) -> Result<(), ClientError> {
        let decision = self.gate.check(GateIntent::Delete).await?;
        self.surface
            .apply(&[RenderOp::SetFormVisible(decision.status.is_logged_in())]);

        if !decision.status.is_logged_in() {
            self.surface.notify("Please log in to delete comments.");
            return Err(ClientError::AuthRequired);
        }

        let confirmation = match self.api.delete_comment(id).await {
            Ok(message) => message,
            Err(err) => {
                warn!(%err, id, "delete failed");
                self.surface.notify(&format!("Could not delete comment: {err}"));
                return Err(err);
            }
        };

        info!(id, "comment deleted");
        self.surface.notify(&confirmation);
        self.refresh(PageFilter::default()).await
    }

    /// Resolve a login or logout click: fresh status check, navigation
    /// when the state and the intent call for it, post-form visibility
    /// synced to the derived state, and a full refresh as the final step
    /// so the list matches whatever the session just became.
    pub async fn check_login(&self, intent: GateIntent) -> Result<SessionStatus, ClientError> {
        let decision = self.gate.check(intent).await?;
        self.surface
            .apply(&[RenderOp::SetFormVisible(decision.status.is_logged_in())]);
        if let Some(url) = &decision.navigate {
            self.surface.navigate(url);
        }
        self.refresh(PageFilter::default()).await?;
        Ok(decision.status)
    }

    /// Fetch a single-use upload URL and rewire the post form to it,
    /// revealing the attachment control. Safe to call repeatedly; each
    /// call just refetches and overwrites the target.
    pub async fn fetch_upload_target(&self) -> Result<(), ClientError> {
        let url = match self.api.blob_upload_url().await {
            Ok(url) => url,
            Err(err) => {
                warn!(%err, "upload URL fetch failed");
                self.surface.notify(&format!("Could not prepare upload: {err}"));
                return Err(err);
            }
        };

        self.surface.apply(&[
            RenderOp::SetFormAction(url),
            RenderOp::ShowAttachmentControl,
        ]);
        Ok(())
    }

    fn compose_query(&self, overrides: PageFilter) -> Result<CommentQuery, ClientError> {
        let raw_input = self.surface.max_results_input();

        let mut state = self.state.lock().unwrap();
        if let Some(raw) = raw_input {
            // Validate before mutating anything; a bad value must leave
            // state untouched and send no request.
            let max_results = parse_max_results(&raw).inspect_err(|err| {
                self.surface.notify(&err.to_string());
            })?;
            state.max_results = max_results;
        }
        if let Some(code) = overrides.language_code {
            state.language_code = Some(code);
        }

        Ok(CommentQuery {
            max_results: state.max_results,
            cursor: overrides.cursor,
            language_code: state.language_code.clone(),
        })
    }
}

fn parse_max_results(raw: &str) -> Result<u32, ClientError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ClientError::InvalidMaxResults(raw.to_string()))
}
