use crate::core::codec;
use crate::domain::model::{BatchOutcome, BatchRecord, BatchReport, LookupRequest};
use crate::domain::ports::Target;
use crate::utils::error::Result;

/// 逐行送出查詢。單行失敗只會被記錄下來，不會中斷整個批次。
pub struct BatchRunner<T: Target> {
    target: T,
}

impl<T: Target> BatchRunner<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub async fn run<S: AsRef<str> + Sync>(&self, lines: &[S]) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let customer_id = line.as_ref().trim();

            if customer_id.is_empty() {
                tracing::debug!("Skipping blank line {}", line_number);
                report.skipped_lines += 1;
                continue;
            }

            let record = self.run_line(line_number, customer_id).await;
            if let BatchOutcome::Failed { kind, message } = &record.outcome {
                tracing::warn!(
                    "Line {} (cunbr '{}') failed: {} ({})",
                    line_number,
                    customer_id,
                    message,
                    kind
                );
            }
            report.records.push(record);
        }

        tracing::info!(
            "Batch finished: {} succeeded, {} failed, {} skipped",
            report.succeeded(),
            report.failed(),
            report.skipped_lines
        );

        report
    }

    async fn run_line(&self, line_number: usize, customer_id: &str) -> BatchRecord {
        let request = LookupRequest::new(customer_id);

        let (request_json, outcome) = match codec::encode_request(&request) {
            Ok(request_json) => {
                let outcome = to_outcome(self.target.request(&request_json).await);
                (request_json, outcome)
            }
            Err(e) => (String::new(), to_outcome(Err(e))),
        };

        BatchRecord {
            line_number,
            customer_id: customer_id.to_string(),
            request: request_json,
            outcome,
        }
    }
}

fn to_outcome(result: Result<String>) -> BatchOutcome {
    match result {
        Ok(response) => BatchOutcome::Completed { response },
        Err(e) => BatchOutcome::Failed {
            kind: e.kind().to_string(),
            message: e.to_string(),
        },
    }
}
