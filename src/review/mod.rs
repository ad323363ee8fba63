//! Review display: the review record, date formatting, and the star bar.
//!
//! Reviews are rendered one at a time by [`ReviewComponent`]; the caller
//! owns the list.

mod component;
mod date;
mod stars;

pub use component::ReviewComponent;
pub use date::format_review_date;
pub use stars::render_stars;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::local_files;

/// A single buyer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Email address of the reviewer.
    pub user_email: String,
    /// Date the review was written, as sent by the server.
    pub date: String,
    /// Rating between 0 and 5.
    pub rating: f64,
    /// Review text.
    pub review_description: String,
}

impl Review {
    /// Decodes a JSON array of reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not an array of
    /// review objects.
    pub fn list_from_json(body: &str) -> Result<Vec<Self>, ClientError> {
        serde_json::from_str(body).map_err(|error| ClientError::decode(&error))
    }

    /// Reads and decodes a JSON array of reviews from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] when the file cannot be read, or
    /// [`ClientError::Decode`] when it is not an array of reviews.
    pub fn list_from_file(path: &Utf8Path) -> Result<Vec<Self>, ClientError> {
        let body = local_files::read_to_string(path)?;
        Self::list_from_json(&body)
    }
}
