use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EditEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EditEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    /// 讀取 → 逐筆編輯 → 寫回；讀取或驗證失敗時不會寫入任何檔案
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading values file");
        let document = self.pipeline.extract().await?;
        tracing::info!("Loaded {} records", document.list.len());

        let report = self.pipeline.transform(document).await?;
        tracing::info!(
            kept = report.kept,
            changed = report.changed,
            entered = report.entered,
            drained = report.drained,
            quit_at = ?report.quit_at,
            "Edited {} records",
            report.records.len()
        );

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
