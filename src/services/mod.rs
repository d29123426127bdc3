pub mod chatbot;
pub mod suggestions;
