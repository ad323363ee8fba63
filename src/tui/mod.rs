//! Terminal user interfaces for auction search and the chat room.
//!
//! Both views follow the Model-View-Update pattern of bubbletea-rs:
//!
//! - **Model**: [`SearchApp`] and [`ChatApp`]
//! - **View**: rendering in each app plus the reusable [`components`]
//! - **Update**: message-driven transitions; network work runs as commands
//!   whose results come back as messages
//!
//! # Start-up context
//!
//! `Model::init()` takes no arguments, so the CLI stores what each view needs
//! with [`set_search_context`] or [`set_chat_context`] before the program
//! starts.

pub mod chat;
pub mod components;
pub mod search;
mod storage;
mod viewport;

pub use chat::{ChatApp, ChatMsg};
pub use search::{SearchApp, SearchMsg, apply_start_criteria};
pub use storage::{
    ChatContext, SearchContext, set_chat_context, set_initial_terminal_size, set_search_context,
    set_telemetry_sink,
};
