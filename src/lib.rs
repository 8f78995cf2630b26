pub mod cli;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod status;
pub mod submit;
