//! k3ai Core Library
//!
//! Discovers, fetches and validates k3ai plugin descriptors published in a
//! remote directory listing. Installation of the declared steps is out of
//! scope; this crate only reads and checks the declarations.

pub mod config;
pub mod error;
pub mod plugins;
pub mod remote;

pub use error::{Error, Result, ValidationError};

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{RemoteSettings, Settings, SettingsStore};

    // Errors
    pub use crate::error::{Error, Result, ValidationError};

    // Descriptors
    pub use crate::plugins::{
        Catalog, Defaults, DescriptorFiles, Group, GroupMember, Groups, Plugin, Plugins,
        PostInstall, YamlStep,
    };

    // Remote capabilities
    pub use crate::remote::{
        ContentEntry, ContentFetcher, Decoder, DirectoryLister, GithubClient, UrlJoiner,
        UrlPathJoiner, YamlDecoder,
    };
}
