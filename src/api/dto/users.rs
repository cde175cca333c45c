/*
 * Responsibility
 * - user request/response DTOs
 * - profile update is parsed from a raw JSON value: each documented 400
 *   (incomplete body, non-string fields, bad or future dob) has its own
 *   message, and the dob round-trip check guards against calendar rollover
 */
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::repos::user_repo::UserRow;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Shared by register and login: both fields are required.
    pub fn credentials(&self) -> Result<(&str, &str), &'static str> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok((email, password))
            }
            _ => Err("Request body incomplete, both email and password are required"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    /// Serializes as YYYY-MM-DD.
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
}

impl From<UserRow> for ProfileResponse {
    fn from(row: UserRow) -> Self {
        Self {
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            dob: row.dob,
            address: row.address,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub address: String,
}

const INCOMPLETE: &str =
    "Request body incomplete: firstName, lastName, dob and address are required.";
const NOT_STRINGS: &str =
    "Request body invalid: firstName, lastName and address must be strings only.";
const BAD_DATE: &str = "Invalid input: dob must be a real date in format YYYY-MM-DD.";
const FUTURE_DATE: &str = "Invalid input: dob must be a date in the past.";

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

impl ProfileUpdateRequest {
    pub fn parse(body: &Value) -> Result<Self, &'static str> {
        Self::parse_at(body, chrono::Utc::now().date_naive())
    }

    // `today` injected so the past-date rule is testable.
    fn parse_at(body: &Value, today: NaiveDate) -> Result<Self, &'static str> {
        let (Some(first_name), Some(last_name), Some(dob), Some(address)) = (
            present(body.get("firstName")),
            present(body.get("lastName")),
            present(body.get("dob")),
            present(body.get("address")),
        ) else {
            return Err(INCOMPLETE);
        };

        let (Some(first_name), Some(last_name), Some(address)) =
            (first_name.as_str(), last_name.as_str(), address.as_str())
        else {
            return Err(NOT_STRINGS);
        };

        let dob = dob.as_str().ok_or(BAD_DATE)?;
        let parsed = NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|_| BAD_DATE)?;
        // Exact round-trip: rejects rollover dates and unpadded components.
        if parsed.format("%Y-%m-%d").to_string() != dob {
            return Err(BAD_DATE);
        }
        if parsed >= today {
            return Err(FUTURE_DATE);
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            dob: parsed,
            address: address.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn body(dob: &str) -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "dob": dob,
            "address": "12 St James's Square"
        })
    }

    #[test]
    fn valid_body_parses_and_preserves_the_date() {
        let req = ProfileUpdateRequest::parse_at(&body("2021-02-28"), today()).unwrap();
        assert_eq!(req.dob, NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
        assert_eq!(req.dob.format("%Y-%m-%d").to_string(), "2021-02-28");
    }

    #[test]
    fn missing_field_is_incomplete() {
        let body = json!({"firstName": "Ada", "lastName": "Lovelace", "dob": "2021-02-28"});
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body, today()).unwrap_err(),
            INCOMPLETE
        );
    }

    #[test]
    fn non_string_text_fields_are_rejected() {
        let body = json!({
            "firstName": 7,
            "lastName": "Lovelace",
            "dob": "2021-02-28",
            "address": "somewhere"
        });
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body, today()).unwrap_err(),
            NOT_STRINGS
        );
    }

    #[test]
    fn rollover_date_is_rejected() {
        // 2021 is not a leap year; a Date-style rollover to March 1st must not pass.
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body("2021-02-29"), today()).unwrap_err(),
            BAD_DATE
        );
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body("2023-02-30"), today()).unwrap_err(),
            BAD_DATE
        );
    }

    #[test]
    fn unpadded_date_fails_the_round_trip() {
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body("2021-2-28"), today()).unwrap_err(),
            BAD_DATE
        );
    }

    #[test]
    fn non_date_strings_are_rejected() {
        for dob in ["yesterday", "2021/02/28", "2021-02-28T00:00:00"] {
            assert_eq!(
                ProfileUpdateRequest::parse_at(&body(dob), today()).unwrap_err(),
                BAD_DATE
            );
        }
    }

    #[test]
    fn today_and_future_dates_are_rejected() {
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body("2024-06-01"), today()).unwrap_err(),
            FUTURE_DATE
        );
        assert_eq!(
            ProfileUpdateRequest::parse_at(&body("2030-01-01"), today()).unwrap_err(),
            FUTURE_DATE
        );
    }

    #[test]
    fn leap_day_on_a_leap_year_is_accepted() {
        let req = ProfileUpdateRequest::parse_at(&body("2020-02-29"), today()).unwrap();
        assert_eq!(req.dob, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn credentials_require_both_fields() {
        let req = CredentialsRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert!(req.credentials().is_err());

        let req = CredentialsRequest {
            email: Some("a@x.com".to_string()),
            password: Some("hunter2".to_string()),
        };
        assert_eq!(req.credentials().unwrap(), ("a@x.com", "hunter2"));
    }
}
