//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gavel.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GAVEL_API_BASE_URL`, `GAVEL_PAGE_SIZE`, …
//! 4. **Command-line arguments** – `--api-base-url`/`-a`, `--page-size`/`-s`, …
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "http://localhost:8080/api/auctions"
//! page_size = 5
//! chat_endpoint = "http://localhost:8080/ws"
//! display_name = "alice"
//! log_file = "gavel.log"
//! ```

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auctions::state::MAX_PAGE_SIZE;
use crate::chat::DEFAULT_CHAT_ENDPOINT;
use crate::error::ClientError;

/// Default auction API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/auctions";
/// Default number of auctions per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print reviews read from a JSON file.
    ReviewRender,
    /// Interactive chat room.
    ChatRoom,
    /// Print one page of search results and exit.
    SearchListing,
    /// Interactive auction search.
    SearchTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use gavel::GavelConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GavelConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GAVEL",
    discovery(
        dotfile_name = ".gavel.toml",
        config_file_name = "gavel.toml",
        app_name = "gavel"
    )
)]
pub struct GavelConfig {
    /// Base URL of the auction REST resource.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `GAVEL_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: String,

    /// Auctions per page, between 1 and 100.
    #[ortho_config(cli_short = 's')]
    pub page_size: u32,

    /// Title search applied before the first fetch.
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Category filter applied before the first fetch.
    ///
    /// Values outside the category list fall back to the unfiltered listing.
    #[ortho_config(cli_short = 'c')]
    pub category: Option<String>,

    /// 1-based page to start on.
    #[ortho_config(cli_short = 'p')]
    pub page: u32,

    /// Prints one page of results instead of launching the search TUI.
    ///
    /// Note: ortho-config does not read boolean values from the environment,
    /// so this is set on the command line or in a configuration file.
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Launches the chat room instead of the auction search.
    #[ortho_config(cli_short = 'C')]
    pub chat: bool,

    /// Messaging endpoint for the chat room.
    ///
    /// The bundled chat transport is an in-process loopback room; the
    /// endpoint is validated and shown but not contacted.
    #[ortho_config(cli_short = 'e')]
    pub chat_endpoint: String,

    /// Display name used in the chat room.
    ///
    /// Normally supplied by the identity provider. When absent the chat view
    /// asks for one.
    #[ortho_config(cli_short = 'n')]
    pub display_name: Option<String>,

    /// JSON file holding an array of reviews to render.
    #[ortho_config(cli_short = 'r')]
    pub reviews_file: Option<String>,

    /// File that receives log output. Logging is off when unset.
    #[ortho_config(cli_short = 'L')]
    pub log_file: Option<String>,
}

impl Default for GavelConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            query: None,
            category: None,
            page: 1,
            list: false,
            chat: false,
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            display_name: None,
            reviews_file: None,
            log_file: None,
        }
    }
}

impl GavelConfig {
    /// Determines the operation mode.
    ///
    /// A reviews file wins over chat, chat wins over listing, and the search
    /// TUI is the fallback.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.reviews_file.is_some() {
            OperationMode::ReviewRender
        } else if self.chat {
            OperationMode::ChatRoom
        } else if self.list {
            OperationMode::SearchListing
        } else {
            OperationMode::SearchTui
        }
    }

    /// Validates values that ortho-config cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPagination`] for an out-of-range page
    /// size or a zero page, and [`ClientError::InvalidUrl`] when either
    /// endpoint does not parse.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ClientError::InvalidPagination {
                message: format!(
                    "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                    self.page_size
                ),
            });
        }
        if self.page == 0 {
            return Err(ClientError::InvalidPagination {
                message: "page numbers start at 1".to_owned(),
            });
        }
        parse_endpoint("api_base_url", &self.api_base_url)?;
        parse_endpoint("chat_endpoint", &self.chat_endpoint)?;
        Ok(())
    }

    /// Returns the configured display name, ignoring blank values.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Returns the trimmed search query, ignoring blank values.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
    }

    /// Returns the reviews file path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when no file is configured.
    pub fn require_reviews_file(&self) -> Result<&Utf8Path, ClientError> {
        self.reviews_file
            .as_deref()
            .map(Utf8Path::new)
            .ok_or_else(|| ClientError::Configuration {
                message: "a reviews file is required (use --reviews-file or -r)".to_owned(),
            })
    }

    /// Returns the log file path, if logging is enabled.
    #[must_use]
    pub fn log_path(&self) -> Option<&Utf8Path> {
        self.log_file.as_deref().map(Utf8Path::new)
    }
}

fn parse_endpoint(field: &str, value: &str) -> Result<Url, ClientError> {
    Url::parse(value)
        .map_err(|error| ClientError::InvalidUrl(format!("{field} `{value}`: {error}")))
}

#[cfg(test)]
mod tests;
