//! Floating chat widget that forwards questions to a RAG endpoint.
//!
//! [`widget::WidgetState`] holds the conversation and the send state machine,
//! [`client::HttpChatClient`] talks to the endpoint, and [`ui`] renders both
//! with Dioxus.
pub mod client;
pub mod config;
pub mod theme;
pub mod types;
pub mod ui;
pub mod widget;

pub use client::{AnswerBackend, ChatError, ChatResult, HttpChatClient};
pub use config::ChatConfig;
pub use types::{Message, Sender};
pub use widget::WidgetState;
