use crate::core::{BatchSummary, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchSummary> {
        let started = Instant::now();
        tracing::info!("Starting batch lookup...");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} input line(s)", lines.len());

        // Transform
        let report = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Processed {} lookup(s), {} failed",
            report.records.len(),
            report.failed()
        );

        // Load
        let summary = self.pipeline.load(report).await?;
        tracing::info!(
            "Requests saved to: {}, responses saved to: {} ({:?})",
            summary.requests_path,
            summary.responses_path,
            started.elapsed()
        );

        Ok(summary)
    }
}
