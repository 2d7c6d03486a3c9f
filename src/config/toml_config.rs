use crate::utils::error::{CvError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的設定檔，所有區段與鍵值皆可省略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
    pub document: Option<DocumentConfig>,
    pub projects: Option<ProjectsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub class: Option<String>,
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsConfig {
    pub repository_hosts: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CvError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CvError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CvError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.paths.as_ref()?.input.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.paths.as_ref()?.output.as_deref()
    }

    pub fn document_class(&self) -> Option<&str> {
        self.document.as_ref()?.class.as_deref()
    }

    pub fn theme_color(&self) -> Option<&str> {
        self.document.as_ref()?.theme_color.as_deref()
    }

    pub fn repository_hosts(&self) -> Option<&[String]> {
        self.projects.as_ref()?.repository_hosts.as_deref()
    }
}
