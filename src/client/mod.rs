// src/client/mod.rs

pub mod api;
pub mod course;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use session::{Role, Session, SessionError, View};
