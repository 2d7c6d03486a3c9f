pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::latex::RenderOptions;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "resume.json";
pub const DEFAULT_OUTPUT_PATH: &str = "cv.tex";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "cv-tex")]
#[command(about = "Generate a LaTeX CV from a JSON resume")]
pub struct CliConfig {
    /// Resume JSON to read [default: resume.json]
    pub input: Option<String>,

    /// LaTeX file to write [default: cv.tex]
    pub output: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Positional arguments win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<GenerationConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Ok(GenerationConfig::from_sources(
            self.input.clone(),
            self.output.clone(),
            file_config.as_ref(),
        ))
    }
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub input_path: String,
    pub output_path: String,
    pub render: RenderOptions,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl GenerationConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    pub fn from_sources(
        input: Option<String>,
        output: Option<String>,
        file_config: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        let from_file = |get: fn(&TomlConfig) -> Option<&str>| {
            file_config.and_then(get).map(str::to_string)
        };

        let input_path = input
            .or_else(|| from_file(TomlConfig::input_path))
            .unwrap_or(defaults.input_path);
        let output_path = output
            .or_else(|| from_file(TomlConfig::output_path))
            .unwrap_or(defaults.output_path);

        let render = RenderOptions {
            document_class: from_file(TomlConfig::document_class)
                .unwrap_or(defaults.render.document_class),
            theme_color: from_file(TomlConfig::theme_color)
                .unwrap_or(defaults.render.theme_color),
            repository_hosts: file_config
                .and_then(TomlConfig::repository_hosts)
                .map(<[String]>::to_vec)
                .unwrap_or(defaults.render.repository_hosts),
        };

        Self {
            input_path,
            output_path,
            render,
        }
    }
}

impl ConfigProvider for GenerationConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn document_class(&self) -> &str {
        &self.render.document_class
    }

    fn theme_color(&self) -> &str {
        &self.render.theme_color
    }

    fn repository_hosts(&self) -> &[String] {
        &self.render.repository_hosts
    }
}

impl Validate for GenerationConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.input", &self.input_path)?;
        validate_path("paths.output", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)?;

        validate_non_empty_string("document.class", &self.render.document_class)?;
        validate_non_empty_string("document.theme_color", &self.render.theme_color)?;
        for host in &self.render.repository_hosts {
            validate_non_empty_string("projects.repository_hosts", host)?;
        }

        Ok(())
    }
}
