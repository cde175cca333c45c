pub mod comment_repo;
pub mod error;
pub mod user_repo;
pub mod volcano_repo;
