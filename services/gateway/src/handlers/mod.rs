pub mod book;
pub mod login;
