use serde::{Deserialize, Serialize};

/// 一次客戶查詢：只帶一個不透明的客戶編號 (cunbr)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    customer_id: String,
}

impl LookupRequest {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub customer_id: String,
    pub account_numbers: Vec<String>,
}

impl LookupResponse {
    pub fn new(customer_id: impl Into<String>, account_numbers: Vec<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            account_numbers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Completed { response: String },
    Failed { kind: String, message: String },
}

/// 批次中的一行：原始行號、送出的 request 以及結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    pub line_number: usize,
    pub customer_id: String,
    pub request: String,
    pub outcome: BatchOutcome,
}

impl BatchRecord {
    /// 寫入 responses 檔的那一行；失敗時改寫成 error envelope
    pub fn response_line(&self) -> String {
        match &self.outcome {
            BatchOutcome::Completed { response } => response.clone(),
            BatchOutcome::Failed { kind, message } => serde_json::json!({
                "error": {
                    "line": self.line_number,
                    "cunbr": self.customer_id,
                    "kind": kind,
                    "message": message,
                }
            })
            .to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Completed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub records: Vec<BatchRecord>,
    pub skipped_lines: usize,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn requests_text(&self) -> String {
        self.records
            .iter()
            .map(|r| format!("{}\n", r.request))
            .collect()
    }

    pub fn responses_text(&self) -> String {
        self.records
            .iter()
            .map(|r| format!("{}\n", r.response_line()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub requests_path: String,
    pub responses_path: String,
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}
