pub mod adapter;
pub mod batch;
pub mod codec;
pub mod engine;
pub mod pipeline;
pub mod target;

pub use crate::domain::model::{
    BatchOutcome, BatchRecord, BatchReport, BatchSummary, LookupRequest, LookupResponse,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RemoteLookupClient, Storage, Target};
pub use crate::utils::error::Result;
