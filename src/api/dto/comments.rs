/*
 * Responsibility
 * - comment request/response DTOs
 * - the request body is parsed from a raw JSON value so that a missing
 *   field, a wrong type, and an out-of-range rating each produce the
 *   documented 400 message instead of a generic serde rejection
 */
use serde::Serialize;
use serde_json::Value;

use crate::repos::comment_repo::CommentRow;

#[derive(Debug, PartialEq, Eq)]
pub struct AddCommentRequest {
    pub comment: String,
    pub rating: i32,
}

impl AddCommentRequest {
    pub fn parse(body: &Value) -> Result<Self, &'static str> {
        let comment = body.get("comment").filter(|v| !v.is_null());
        let rating = body.get("rating").filter(|v| !v.is_null());

        let (Some(comment), Some(rating)) = (comment, rating) else {
            return Err("Request body incomplete: comment and rating are required.");
        };

        let Some(comment) = comment.as_str() else {
            return Err("Invalid input: comment must be a string.");
        };

        let rating = rating
            .as_i64()
            .filter(|r| (1..=5).contains(r))
            .ok_or("Invalid input: rating must be an integer between 1 and 5.")?;

        Ok(Self {
            comment: comment.to_string(),
            rating: rating as i32,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    #[serde(rename = "volcanoId")]
    pub volcano_id: i32,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    pub comment: String,
    pub rating: i32,
}

impl From<CommentRow> for CommentResponse {
    fn from(row: CommentRow) -> Self {
        Self {
            volcano_id: row.volcano_id,
            user_email: row.user_email,
            comment: row.comment,
            rating: row.rating,
        }
    }
}
