//! UI components for the search and chat views.
//!
//! Each component renders from a borrowed `*ViewContext` so views never
//! allocate copies of model data per frame.

mod auction_list;
mod chat_log;
mod pagination;
mod text_truncate;

pub use auction_list::{AuctionListComponent, AuctionListViewContext};
pub use chat_log::{
    ChatLogComponent, ChatLogViewContext, MemberListComponent, MemberListViewContext,
};
pub use pagination::{PaginationComponent, PaginationViewContext};
