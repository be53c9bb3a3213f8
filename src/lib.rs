pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use core::parser::{parse_apartments, parse_houses, parse_listings, parse_listings_on};
pub use core::{etl::EtlEngine, pipeline::ListingPipeline};
pub use domain::model::{ListingKind, TypedRecord, Value};
pub use utils::error::{EtlError, Result};
