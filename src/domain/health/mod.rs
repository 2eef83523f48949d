pub mod dto;
pub mod handler;
mod service;

pub use handler::{api_root, health_check};
