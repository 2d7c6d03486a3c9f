use crate::core::{ConfigProvider, Pipeline, RenderedDocument, Resume, Storage};
use crate::latex::{render_document, RenderOptions};
use crate::utils::error::{CvError, Result};

/// Reads a JSON resume, renders it to LaTeX and writes the result.
pub struct ResumePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ResumePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            document_class: self.config.document_class().to_string(),
            theme_color: self.config.theme_color().to_string(),
            repository_hosts: self.config.repository_hosts().to_vec(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ResumePipeline<S, C> {
    async fn extract(&self) -> Result<Resume> {
        let path = self.config.input_path();
        tracing::debug!("Reading resume from: {}", path);

        let data = self.storage.read_file(path).await.map_err(|e| match e {
            CvError::IoError(source) => CvError::InputReadError {
                path: path.to_string(),
                source,
            },
            other => other,
        })?;

        let resume = Resume::from_json_slice(&data).map_err(|source| CvError::ParseError {
            path: path.to_string(),
            source,
        })?;

        tracing::debug!(
            "Loaded resume for '{}': {} work, {} education, {} projects",
            resume.basics.name,
            resume.work.len(),
            resume.education.len(),
            resume.projects.len()
        );
        Ok(resume)
    }

    async fn transform(&self, resume: Resume) -> Result<RenderedDocument> {
        let document = render_document(&resume, &self.render_options());
        tracing::debug!(
            "Rendered {} sections ({} bytes)",
            document.sections.len(),
            document.content.len()
        );
        Ok(document)
    }

    async fn load(&self, document: RenderedDocument) -> Result<String> {
        let path = self.config.output_path();
        tracing::debug!("Writing {} bytes to: {}", document.content.len(), path);

        self.storage
            .write_file(path, document.content.as_bytes())
            .await
            .map_err(|e| match e {
                CvError::IoError(source) => CvError::OutputWriteError {
                    path: path.to_string(),
                    source,
                },
                other => other,
            })?;

        Ok(path.to_string())
    }
}
