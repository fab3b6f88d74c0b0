//! External AI integration
//!
//! Wraps a Gemini-style completion endpoint for single-word question
//! answering: sanitize the question, issue one bounded call, reduce the
//! reply to a single word.

mod answer;
mod client;


pub use client::AiClient;
