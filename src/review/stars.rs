//! Star-rating bar.

const SLOTS: usize = 5;
const FULL: char = '★';
const HALF: char = '⯪';
const EMPTY: char = '☆';

/// Renders a five-slot star bar for `rating`.
///
/// Ratings are clamped to `0..=5` and rounded to the nearest half star.
/// Non-finite ratings render as zero stars.
#[must_use]
pub fn render_stars(rating: f64) -> String {
    let halves = half_stars(rating);
    let full = halves.div_euclid(2);
    let half = halves.rem_euclid(2);
    let empty = SLOTS.saturating_sub(full).saturating_sub(half);

    let mut bar = String::with_capacity(SLOTS.saturating_mul(FULL.len_utf8()));
    bar.extend(std::iter::repeat_n(FULL, full));
    bar.extend(std::iter::repeat_n(HALF, half));
    bar.extend(std::iter::repeat_n(EMPTY, empty));
    bar
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rating is clamped to 0..=5 so the doubled value fits in usize"
)]
fn half_stars(rating: f64) -> usize {
    if !rating.is_finite() {
        return 0;
    }
    (rating.clamp(0.0, 5.0) * 2.0).round() as usize
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::render_stars;

    #[rstest]
    #[case::zero(0.0, "☆☆☆☆☆")]
    #[case::whole(4.0, "★★★★☆")]
    #[case::half(3.5, "★★★⯪☆")]
    #[case::rounds_down(2.2, "★★☆☆☆")]
    #[case::rounds_to_half(2.3, "★★⯪☆☆")]
    #[case::rounds_up(4.8, "★★★★★")]
    #[case::clamps_high(9.0, "★★★★★")]
    #[case::clamps_low(-1.0, "☆☆☆☆☆")]
    #[case::not_a_number(f64::NAN, "☆☆☆☆☆")]
    fn renders_rating(#[case] rating: f64, #[case] expected: &str) {
        assert_eq!(render_stars(rating), expected);
    }

    #[rstest]
    fn bar_always_has_five_slots() {
        for rating in [0.0, 0.2, 0.7, 1.25, 2.5, 3.74, 3.75, 4.24, 4.9, 5.0] {
            assert_eq!(render_stars(rating).chars().count(), 5, "rating {rating}");
        }
    }
}
