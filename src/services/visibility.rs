//! Field-level visibility and write permission.
//!
//! Each resource's public/private field partition is data (a table of field
//! name → required access), not inline conditionals, so the rules are
//! testable on their own and handlers stay thin. Reads never fail here: the
//! resolver always produces *some* field set. Writes go through a separate
//! gate that distinguishes "not logged in" (401) from "logged in as someone
//! else" (403).

use serde_json::{Map, Value};

use crate::api::extractors::{AuthResult, Identity};
use crate::error::AppError;

/// The minimum caller standing required to see a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, including anonymous callers.
    Public,
    /// Any authenticated identity; ownership irrelevant.
    Authenticated,
    /// Only the identity owning the resource.
    Owner,
}

pub struct FieldRule {
    pub name: &'static str,
    pub access: Access,
}

const fn rule(name: &'static str, access: Access) -> FieldRule {
    FieldRule { name, access }
}

/// Volcano detail: reference columns are public, the measurement and
/// population group requires authentication (any identity).
pub const VOLCANO_FIELDS: &[FieldRule] = &[
    rule("id", Access::Public),
    rule("name", Access::Public),
    rule("country", Access::Public),
    rule("region", Access::Public),
    rule("subregion", Access::Public),
    rule("last_eruption", Access::Authenticated),
    rule("summit", Access::Authenticated),
    rule("elevation", Access::Authenticated),
    rule("latitude", Access::Authenticated),
    rule("longitude", Access::Authenticated),
    rule("population_5km", Access::Authenticated),
    rule("population_10km", Access::Authenticated),
    rule("population_30km", Access::Authenticated),
    rule("population_100km", Access::Authenticated),
];

/// User profile: name fields are visible to any viewer, dob/address only to
/// the profile's own identity.
pub const PROFILE_FIELDS: &[FieldRule] = &[
    rule("email", Access::Public),
    rule("firstName", Access::Public),
    rule("lastName", Access::Public),
    rule("dob", Access::Owner),
    rule("address", Access::Owner),
];

fn is_visible(access: Access, auth: &AuthResult, owner: Option<&Identity>) -> bool {
    match access {
        Access::Public => true,
        Access::Authenticated => auth.is_authenticated(),
        Access::Owner => match (auth.identity(), owner) {
            (Some(caller), Some(owner)) => caller == owner,
            _ => false,
        },
    }
}

/// Project a serialized record down to the fields visible to this caller.
///
/// Fields without a rule are dropped: anything not explicitly partitioned
/// (e.g. a stored password hash) never reaches a response. Non-object values
/// pass through untouched. Output field order follows the rule table.
pub fn project(
    rules: &[FieldRule],
    auth: &AuthResult,
    owner: Option<&Identity>,
    record: Value,
) -> Value {
    let Value::Object(mut fields) = record else {
        return record;
    };

    let mut projected = Map::new();
    for rule in rules {
        if is_visible(rule.access, auth, owner)
            && let Some(value) = fields.remove(rule.name)
        {
            projected.insert(rule.name.to_string(), value);
        }
    }

    Value::Object(projected)
}

/// Write gate for mutations.
///
/// - anonymous (or rejected) caller: 401
/// - `owner` given and the caller is someone else: 403
/// - otherwise: the caller's identity, for the write itself
pub fn authorize_write(
    auth: &AuthResult,
    owner: Option<&Identity>,
) -> Result<Identity, AppError> {
    let Some(caller) = auth.identity() else {
        return Err(AppError::Unauthorized("Unauthorized"));
    };

    if let Some(owner) = owner
        && caller != owner
    {
        return Err(AppError::Forbidden);
    }

    Ok(caller.clone())
}
