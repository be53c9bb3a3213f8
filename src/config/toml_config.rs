use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate, HTML_EXTENSIONS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub apartment_files: Vec<String>,
    #[serde(default)]
    pub house_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub output_formats: Vec<String>,
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

fn default_archive_name() -> String {
    "listings.zip".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LISTING_DIR})，未設定者保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn apartment_files(&self) -> &[String] {
        &self.source.apartment_files
    }

    fn house_files(&self) -> &[String] {
        &self.source.house_files
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn archive_name(&self) -> &str {
        &self.load.archive_name
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_has_inputs(
            "source.apartment_files/house_files",
            &self.source.apartment_files,
            &self.source.house_files,
        )?;
        validation::validate_file_extensions(
            "source.apartment_files",
            &self.source.apartment_files,
            HTML_EXTENSIONS,
        )?;
        validation::validate_file_extensions(
            "source.house_files",
            &self.source.house_files,
            HTML_EXTENSIONS,
        )?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_non_empty_string("load.archive_name", &self.load.archive_name)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        Ok(())
    }
}
