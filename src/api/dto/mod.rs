pub mod comments;
pub mod users;
pub mod volcanoes;
