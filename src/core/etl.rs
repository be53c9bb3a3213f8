use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting ETL process...");

        // Extract
        let documents = self.pipeline.extract().await?;
        tracing::info!("Extracted {} HTML documents", documents.len());

        // Transform
        let result = self.pipeline.transform(documents).await?;
        tracing::info!(
            apartments = result.apartments.len(),
            houses = result.houses.len(),
            "Transformed {} records",
            result.total()
        );

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!(elapsed = ?started.elapsed(), "Output saved to: {}", output_path);

        Ok(output_path)
    }
}
