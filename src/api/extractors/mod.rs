mod auth_ctx;

pub use auth_ctx::{Auth, AuthResult, Identity, RejectReason};
