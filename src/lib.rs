pub mod config;
pub mod error;
pub mod invoker;
pub mod llm;
pub mod operations;
pub mod orchestrator;
pub mod server;
pub mod speech;

pub use error::{Error, Result};
