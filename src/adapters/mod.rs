// Adapters layer: concrete implementations for external systems (remote XML service, local files).

pub mod http;
pub mod storage;
