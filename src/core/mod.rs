pub mod chat;
pub mod config;
pub mod dispatch;
pub mod gateway;
pub mod keyfile;
pub mod markdown;
pub mod message;
pub mod session;
pub mod settings;
pub mod store;
