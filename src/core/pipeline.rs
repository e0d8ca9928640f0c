use crate::core::batch::BatchRunner;
use crate::core::{BatchReport, BatchSummary, ConfigProvider, Pipeline, Storage, Target};
use crate::utils::error::{BridgeError, Result};
use std::path::Path;

/// 讀取輸入檔 → 逐行查詢 → 寫出 requests / responses 兩個檔案
pub struct LookupPipeline<S: Storage, C: ConfigProvider, T: Target> {
    storage: S,
    config: C,
    runner: BatchRunner<T>,
}

impl<S: Storage, C: ConfigProvider, T: Target> LookupPipeline<S, C, T> {
    pub fn new(storage: S, config: C, target: T) -> Self {
        Self {
            storage,
            config,
            runner: BatchRunner::new(target),
        }
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, T: Target> Pipeline for LookupPipeline<S, C, T> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading identifiers from: {}", self.config.input_file());
        let data = self.storage.read_file(self.config.input_file()).await?;

        let content = String::from_utf8(data).map_err(|e| BridgeError::ProcessingError {
            message: format!(
                "input file '{}' is not valid UTF-8: {}",
                self.config.input_file(),
                e
            ),
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }

    async fn transform(&self, lines: Vec<String>) -> Result<BatchReport> {
        Ok(self.runner.run(lines.as_slice()).await)
    }

    async fn load(&self, report: BatchReport) -> Result<BatchSummary> {
        let requests_path = self.output_file(self.config.requests_file());
        let responses_path = self.output_file(self.config.responses_file());

        tracing::debug!(
            "Writing {} request/response pairs to {} and {}",
            report.records.len(),
            requests_path,
            responses_path
        );

        self.storage
            .write_file(&requests_path, report.requests_text().as_bytes())
            .await?;
        self.storage
            .write_file(&responses_path, report.responses_text().as_bytes())
            .await?;

        Ok(BatchSummary {
            requests_path,
            responses_path,
            processed: report.records.len(),
            succeeded: report.succeeded(),
            failed: report.failed(),
            skipped: report.skipped_lines,
        })
    }
}
