// src/services/mod.rs
pub mod chatbot;
pub mod generator;
pub mod preprocess;
pub mod responder;
