pub mod config;
pub mod conversation;
pub mod responses;
