pub mod config;
pub mod dashboard;
pub mod init;
pub mod rating;
pub mod session;
