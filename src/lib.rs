pub mod bot;
pub mod chatbot;
pub mod config;
pub mod discord;
pub mod error;
pub mod events;
pub mod openai;
pub mod persona;
pub mod types;
pub mod welcome;

#[cfg(test)]
mod test_support;

pub use bot::run;
