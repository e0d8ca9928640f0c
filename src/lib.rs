pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{http::XmlServiceClient, storage::LocalStorage};
pub use crate::core::{
    adapter::LookupAdapter, batch::BatchRunner, engine::BatchEngine, pipeline::LookupPipeline,
    target::SampleTarget,
};
pub use crate::domain::ports::{RemoteLookupClient, Target};
pub use crate::utils::error::{BridgeError, Result};
