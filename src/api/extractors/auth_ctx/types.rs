/*
 * Responsibility
 * - The authentication context types handlers see
 * - The gate middleware computes one AuthResult per request and stores it in
 *   request extensions; handlers only ever consume this type
 */

use std::fmt;

/// The verified subject of a request: the user's email address.
///
/// Doubles as the users table primary key and the comments foreign key;
/// there is no separate numeric user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(String);

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a supplied credential was rejected. Each reason maps to its own
/// documented 401 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Malformed,
    Expired,
    InvalidSignature,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::Malformed => "Authorization header is malformed",
            RejectReason::Expired => "JWT token has expired",
            RejectReason::InvalidSignature => "Invalid JWT token",
        }
    }
}

/// Tri-state outcome of the authentication gate.
///
/// "No token" and "bad token" are different outcomes on purpose: the former
/// continues as anonymous, the latter terminates the request. Handlers never
/// observe `Rejected` (the gate short-circuits it with a 401); it exists so
/// classification is a total function over the credential states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Unauthenticated,
    Rejected(RejectReason),
    Authenticated(Identity),
}

impl AuthResult {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthResult::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated(_))
    }
}
