pub mod client;
pub mod dto;
pub mod handler;
pub mod parser;
pub mod prompt;
pub mod service;

pub use client::{ChatRequest, LlmClient, LlmGateway, OpenAiGateway};
pub use dto::{AiResponse, ObjectionRequest, PracticeFeedback, PracticeResponse, ResponseType};
pub use service::CoachService;
