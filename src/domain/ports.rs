use crate::domain::model::{BatchReport, BatchSummary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 呼叫端期待的介面：JSON 進、JSON 出
#[async_trait]
pub trait Target: Send + Sync {
    async fn request(&self, json_request: &str) -> Result<String>;
}

/// 既有的 XML web service 客戶端 (adaptee)。
///
/// 非 2xx 回應必須回傳空字串；只有連線層級的失敗才回傳錯誤。
#[async_trait]
pub trait RemoteLookupClient: Send + Sync {
    async fn fetch(&self, customer_id: &str) -> Result<String>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn service_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn requests_file(&self) -> &str;
    fn responses_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<BatchReport>;
    async fn load(&self, report: BatchReport) -> Result<BatchSummary>;
}
