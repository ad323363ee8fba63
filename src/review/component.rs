//! Single-review renderer.

use crate::error::ClientError;

use super::Review;
use super::date::format_review_date;
use super::stars::render_stars;

/// Renders one review as three lines of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewComponent;

impl ReviewComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the reviewer email, the formatted date with the star bar, and
    /// the review text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidDate`] when the review date cannot be
    /// parsed.
    pub fn view(&self, review: &Review) -> Result<String, ClientError> {
        let date = format_review_date(&review.date)?;
        let stars = render_stars(review.rating);
        Ok(format!(
            "{}\n{date}  {stars}\n{}\n",
            review.user_email, review.review_description
        ))
    }
}
