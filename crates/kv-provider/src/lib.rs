//! Key/value configuration data provider.
//!
//! Loads `.env`, `.ini` and `.properties` files into flat `{key, value}`
//! record sets for a data-viewing host, and saves edited record sets back as
//! `.properties` text.
//!
//! # Architecture
//!
//! - [`format`] maps a file extension to the parser options for its format.
//! - [`parser`] tokenizes key/value text into a [`KeyValueMap`].
//! - [`PropertiesDataProvider`] orchestrates load (read, parse, normalize)
//!   and save (shape check, serialize, write). It implements the
//!   [`DataProvider`] trait that hosts program against.
//!
//! File access and user notifications are collaborators behind the
//! [`FileSystem`] and [`Notifier`] traits, so hosts can plug in their own.

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod logging;
pub mod normalize;
pub mod notify;
pub mod parser;
pub mod properties;
pub mod provider;
pub mod registry;
pub mod writer;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use format::{FormatTag, ParseOptions, SUPPORTED_EXTENSIONS, resolve};
pub use io::{FileSystem, LocalFileSystem};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier};
pub use parser::{KeyValue, KeyValueMap, KeyValueParser, PropertiesParser};
pub use properties::{NOT_PROPERTIES_WARNING, PropertiesDataProvider};
pub use provider::{
    DataProvider, LoadCompletion, LoadOutcome, SaveCompletion, SaveOutcome, SkipReason,
};
pub use registry::ProviderRegistry;
