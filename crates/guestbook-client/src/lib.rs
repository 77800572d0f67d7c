pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod session;
pub mod surface;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use controller::CommentListController;
pub use error::ClientError;
pub use render::{ListItem, RenderOp};
pub use session::{GateDecision, GateIntent, LoginGate};
pub use surface::Surface;
