use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, HTML_EXTENSIONS};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "listing-etl")]
#[command(about = "Extract REINS-style grid tables into apartment / villa sheets")]
pub struct CliConfig {
    /// HTML files holding apartment (マンション / 区分) tables
    #[arg(long = "apartment", value_name = "FILE", num_args = 1..)]
    pub apartment_files: Vec<String>,

    /// HTML files holding detached house (戸建) tables
    #[arg(long = "house", value_name = "FILE", num_args = 1..)]
    pub house_files: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<String>,

    #[arg(long, default_value = "listings.zip")]
    pub archive_name: String,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long, value_name = "TOML")]
    pub config: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn apartment_files(&self) -> &[String] {
        &self.apartment_files
    }

    fn house_files(&self) -> &[String] {
        &self.house_files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_has_inputs("--apartment/--house", &self.apartment_files, &self.house_files)?;
        validation::validate_file_extensions("--apartment", &self.apartment_files, HTML_EXTENSIONS)?;
        validation::validate_file_extensions("--house", &self.house_files, HTML_EXTENSIONS)?;
        validation::validate_path("--output-path", &self.output_path)?;
        validation::validate_non_empty_string("--archive-name", &self.archive_name)?;
        validation::validate_output_formats("--formats", &self.formats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "listing-etl",
            "--apartment",
            "a1.html",
            "a2.html",
            "--house",
            "v.html",
            "--formats",
            "csv,json",
        ]);

        assert_eq!(config.apartment_files, vec!["a1.html", "a2.html"]);
        assert_eq!(config.house_files, vec!["v.html"]);
        assert_eq!(config.formats, vec!["csv", "json"]);
        assert_eq!(config.output_path, "./output");
        assert_eq!(config.archive_name, "listings.zip");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_inputs() {
        let config = CliConfig::parse_from(["listing-etl"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["listing-etl", "--house", "v.html", "--formats", "xlsx"]);
        assert!(config.validate().is_err());
    }
}
