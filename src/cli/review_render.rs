//! Review rendering mode: print every review from a JSON file.

use std::io::{self, Write};

use gavel::{ClientError, GavelConfig, Review};

use super::output::write_reviews;

/// Reads the configured reviews file and prints each review.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] when no file is configured,
/// [`ClientError::Io`] or [`ClientError::Decode`] when the file cannot be
/// read or decoded, and [`ClientError::InvalidDate`] for an unparseable
/// review date.
pub fn run(config: &GavelConfig) -> Result<(), ClientError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, &mut stdout)
}

/// Renders the configured reviews into `writer`.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_writer<W: Write>(config: &GavelConfig, writer: &mut W) -> Result<(), ClientError> {
    let path = config.require_reviews_file()?;
    let reviews = Review::list_from_file(path)?;
    tracing::debug!(count = reviews.len(), %path, "rendering reviews");
    write_reviews(writer, &reviews)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gavel::{ClientError, GavelConfig};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::run_with_writer;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    fn config_for(dir: &TempDir, body: &str) -> GavelConfig {
        let path = dir.path().join("reviews.json");
        fs::write(&path, body).expect("reviews file written");
        GavelConfig {
            reviews_file: Some(path.to_string_lossy().into_owned()),
            ..GavelConfig::default()
        }
    }

    fn render(config: &GavelConfig) -> (Result<(), ClientError>, String) {
        let mut buffer = Vec::new();
        let result = run_with_writer(config, &mut buffer);
        (result, String::from_utf8(buffer).expect("utf-8 output"))
    }

    #[rstest]
    fn renders_reviews_from_file(dir: TempDir) {
        let config = config_for(
            &dir,
            r#"[{"userEmail":"ann@example.com","date":"2024-03-05","rating":3,"reviewDescription":"Solid."}]"#,
        );

        let (result, output) = render(&config);

        assert_eq!(result, Ok(()));
        assert!(output.starts_with("ann@example.com\nMarch 5 2024  "));
        assert!(output.ends_with("Solid.\n"));
    }

    #[rstest]
    fn invalid_date_fails_the_run(dir: TempDir) {
        let config = config_for(
            &dir,
            r#"[{"userEmail":"ann@example.com","date":"yesterday","rating":3,"reviewDescription":"Solid."}]"#,
        );

        let (result, _) = render(&config);

        assert_eq!(
            result,
            Err(ClientError::InvalidDate {
                value: "yesterday".to_owned()
            })
        );
    }

    #[rstest]
    fn malformed_file_is_a_decode_error(dir: TempDir) {
        let config = config_for(&dir, "{ not json");

        let (result, output) = render(&config);

        assert!(matches!(result, Err(ClientError::Decode { .. })));
        assert!(output.is_empty());
    }

    #[rstest]
    fn missing_reviews_file_is_a_configuration_error() {
        let (result, _) = render(&GavelConfig::default());

        assert!(matches!(result, Err(ClientError::Configuration { .. })));
    }
}
