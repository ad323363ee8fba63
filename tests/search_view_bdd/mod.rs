//! Support modules for the search view BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{mount_category, mount_listing_pages, mount_response, titled_envelope};
pub(crate) use state::{SearchViewState, dispatch, ensure_runtime_and_server, rendered_view};
