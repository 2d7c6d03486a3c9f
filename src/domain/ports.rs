use crate::domain::model::{RenderedDocument, Resume};
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
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn document_class(&self) -> &str;
    fn theme_color(&self) -> &str;
    fn repository_hosts(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Resume>;
    async fn transform(&self, resume: Resume) -> Result<RenderedDocument>;
    async fn load(&self, document: RenderedDocument) -> Result<String>;
}
