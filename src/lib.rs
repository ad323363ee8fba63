//! Gavel library crate: a terminal front end for an online auction platform.
//!
//! The crate covers three surfaces:
//!
//! - auction search against the platform's REST API, with category and title
//!   filters and server-side pagination ([`auctions`])
//! - a public and private chat room over a publish/subscribe transport
//!   ([`chat`])
//! - review rendering with formatted dates and a star bar ([`review`])
//!
//! Interactive views for search and chat live in [`tui`].

pub mod auctions;
pub mod chat;
pub mod config;
pub mod error;
mod local_files;
pub mod logging;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use auctions::{
    Auction, AuctionGateway, AuctionIntake, AuctionPage, Category, PageInfo,
    ReqwestAuctionGateway, SearchState,
};
pub use chat::{
    ChatMessage, ChatSession, ChatState, LoopbackBroker, MessageStatus, MessagingTransport,
};
pub use config::{GavelConfig, OperationMode};
pub use error::ClientError;
pub use review::{Review, ReviewComponent};
