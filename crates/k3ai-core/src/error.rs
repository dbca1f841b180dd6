//! Error types for the plugin catalog.
//!
//! Every failure in the fetch → normalize → validate pipeline surfaces as
//! one of these variants. Nothing is recovered locally: transport, decode
//! and listing failures carry the URL that failed plus the underlying cause.
//!
//! # Examples
//!
//! ```
//! use k3ai_core::{Error, ValidationError};
//!
//! let err = Error::from(ValidationError::EmptyNamespace);
//! assert!(err.is_validation());
//! assert!(err.to_string().contains("namespace"));
//! ```

use thiserror::Error;

/// Boxed cause attached to transport and decode failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the catalog.
#[derive(Error, Debug)]
pub enum Error {
    /// The content at a URL could not be retrieved.
    ///
    /// Covers network failures, non-success HTTP statuses and not-found.
    #[error("failed to fetch {url}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Underlying transport error
        #[source]
        source: BoxError,
    },

    /// Retrieved bytes are not a well-formed descriptor.
    #[error("failed to decode descriptor at {url}")]
    Decode {
        /// URL the bytes came from
        url: String,
        /// Underlying decoder error
        #[source]
        source: BoxError,
    },

    /// The remote directory listing itself failed.
    #[error("failed to list entries at {url}")]
    Listing {
        /// Base URL that was enumerated
        url: String,
        /// Underlying transport error
        #[source]
        source: BoxError,
    },

    /// A descriptor violates a structural rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Settings are missing or inconsistent.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` for transport failures on a single descriptor.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Returns `true` for malformed descriptor content.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns `true` when the directory listing failed.
    #[must_use]
    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing { .. })
    }

    /// Returns `true` for structural rule violations.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// URL involved in the failure, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Fetch { url, .. } | Self::Decode { url, .. } | Self::Listing { url, .. } => {
                Some(url)
            }
            Self::Validation(_) | Self::Config { .. } => None,
        }
    }
}

/// Structural rule a descriptor failed.
///
/// The messages are stable; callers and tests match on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("namespace value must be 'default' or another value")]
    EmptyNamespace,

    #[error("type must be file or kustomize")]
    InvalidYamlType {
        /// Position of the offending step in `yaml`
        index: usize,
        /// The rejected type value
        found: String,
    },

    #[error("group-name must not be empty")]
    EmptyGroupName,

    #[error("group member name must not be empty")]
    EmptyMemberName {
        /// Position of the offending member in `plugins`
        index: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
