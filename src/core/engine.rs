use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Nothing is written unless
    /// the first two stages succeed.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting CV generation");

        let resume = self.pipeline.extract().await?;
        tracing::info!("📄 Loaded resume for '{}'", resume.basics.name);

        let document = self.pipeline.transform(resume).await?;
        tracing::info!("🧩 Rendered sections: [{}]", document.sections.join(", "));

        let output_path = self.pipeline.load(document).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
