/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - provide handlers with the request's AuthResult
 * - HTTP / axum plumbing stays in core, the types (the contract) in types
 *
 * Public API:
 * - Identity, RejectReason, AuthResult
 * - Auth (extractor)
 */

mod core;
mod types;

pub use core::Auth;
pub use types::{AuthResult, Identity, RejectReason};
