//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`chat_tui`]: Interactive chat room
//! - [`review_render`]: Print reviews from a JSON file
//! - [`search_listing`]: Print one page of search results
//! - [`search_tui`]: Interactive auction search
//!
//! Output formatting utilities are in [`output`].

pub mod chat_tui;
pub mod output;
pub mod review_render;
pub mod search_listing;
pub mod search_tui;
