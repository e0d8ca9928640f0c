use crate::core::codec;
use crate::domain::ports::Target;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 不連線的範例 Target：照樣檢查 request envelope，回傳固定的範例帳號。
/// `--dry-run` 時用它取代真正的 adapter。
#[derive(Debug, Clone)]
pub struct SampleTarget {
    accounts: Vec<String>,
}

impl SampleTarget {
    pub fn new(accounts: Vec<String>) -> Self {
        Self { accounts }
    }
}

impl Default for SampleTarget {
    fn default() -> Self {
        Self::new(vec!["11111111".to_string(), "22222222".to_string()])
    }
}

#[async_trait]
impl Target for SampleTarget {
    async fn request(&self, json_request: &str) -> Result<String> {
        let request = codec::decode_request(json_request)?;
        tracing::debug!("Sample response for cunbr '{}'", request.customer_id());
        codec::encode_response(request.customer_id(), &self.accounts)
    }
}
