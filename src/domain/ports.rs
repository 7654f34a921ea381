use crate::domain::model::{Document, EditReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn values_path(&self) -> &str;
    fn placeholder(&self) -> &str;
}

/// Line-oriented console used by the editor.
pub trait Prompter: Send {
    /// Prints one line of information.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Prints `prompt` without a newline and reads one reply.
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Document>;
    async fn transform(&self, document: Document) -> Result<EditReport>;
    async fn load(&self, report: EditReport) -> Result<String>;
}
