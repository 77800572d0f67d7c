use chrono::DateTime;

use guestbook_types::Comment;

/// One rendered comment, ready for the view to display. The id is kept so
/// the view can wire a delete control back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: String,
    pub author: String,
    pub posted_at: String,
    pub content: String,
    pub mood_icon: Option<&'static str>,
    pub image_url: Option<String>,
    pub sentiment: Option<f32>,
}

/// Instructions for the view. Rendering never touches the view directly;
/// it produces these and the surface applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    ClearList,
    SetListLanguage(String),
    AppendItem(ListItem),
    SetFormVisible(bool),
    SetFormAction(String),
    ShowAttachmentControl,
}

/// Pure rendering: a fetched page plus the active translation language in,
/// render instructions out. Comments keep the server's order.
pub fn render_page(comments: &[Comment], language: Option<&str>) -> Vec<RenderOp> {
    let mut ops = Vec::with_capacity(comments.len() + 2);
    ops.push(RenderOp::ClearList);
    if let Some(code) = language {
        ops.push(RenderOp::SetListLanguage(code.to_string()));
    }
    for comment in comments {
        ops.push(RenderOp::AppendItem(list_item(comment)));
    }
    ops
}

fn list_item(comment: &Comment) -> ListItem {
    ListItem {
        id: comment.id.clone(),
        author: comment.author.clone(),
        posted_at: format_timestamp(comment.timestamp),
        content: comment.content.clone(),
        mood_icon: comment.mood.map(|m| m.icon()),
        image_url: comment.image_url.clone(),
        sentiment: comment.sentiment_score(),
    }
}

fn format_timestamp(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "unknown time".to_string(),
    }
}
