pub mod adapter;
pub mod builder;
pub mod configuration;
pub mod documentation;
pub mod help;
pub mod logger;
pub mod message;
pub mod message_context;
#[cfg(test)]
mod mock_adapter;
pub mod preview;
pub mod runner;
pub mod types;
pub mod version;
pub mod wording;
