use serde::{Deserialize, Serialize};

/// Sentiment score the backend stores when analysis was skipped
/// (empty comment body). Mapped to `None` on the client.
pub const SENTIMENT_UNSET: f32 = -2.0;

/// A single guestbook comment as served by the backend. The client never
/// mutates a comment after it is fetched — deletion is the only lifecycle
/// transition, and it is applied by re-fetching the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Display name of the poster. Wire name is `name`.
    #[serde(rename = "name")]
    pub author: String,
    /// Epoch milliseconds, UTC.
    pub timestamp: i64,
    pub content: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f32>,
    /// Opaque pagination token for this comment's position in the result
    /// set. The token of the last comment on a page fetches the next page.
    pub cursor: String,
}

impl Comment {
    /// Sentiment score, with the backend's "not analyzed" sentinel
    /// normalized away.
    pub fn sentiment_score(&self) -> Option<f32> {
        self.sentiment.filter(|s| *s > SENTIMENT_UNSET)
    }
}

/// Mood tag attached to a comment, rendered as an icon.
/// Stored PascalCase on the wire; unknown tags decode as `Other`
/// rather than failing the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Surprised,
    #[serde(other)]
    Other,
}

impl Mood {
    pub fn icon(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Surprised => "😮",
            Mood::Other => "💬",
        }
    }
}
