pub mod models;
pub mod query;
pub mod session;

pub use models::{Comment, Mood};
pub use query::{CommentQuery, PageFilter};
pub use session::SessionStatus;
