pub mod config;
pub mod core;
pub mod domain;
pub mod latex;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, GenerationConfig};
pub use core::{engine::GenerationEngine, pipeline::ResumePipeline};
pub use domain::model::{RenderedDocument, Resume};
pub use latex::{escape_latex, format_date, render_document, RenderOptions};
pub use utils::error::{CvError, Result};
