use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One company in the analysis registry. Identity is the ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub ticker: String,
    /// Base website URL, scheme included (e.g. `https://apple.com`).
    pub website: String,
}

#[derive(Debug, Deserialize)]
pub struct CompaniesFile {
    pub companies: Vec<Company>,
}

/// Load and validate the company registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_companies(path: &Path) -> Result<CompaniesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CompaniesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let companies_file: CompaniesFile = serde_yaml::from_str(&content)?;

    validate_companies(&companies_file)?;

    Ok(companies_file)
}

fn validate_companies(companies_file: &CompaniesFile) -> Result<(), ConfigError> {
    let mut seen_tickers = HashSet::new();

    for company in &companies_file.companies {
        if company.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "company name must be non-empty".to_string(),
            ));
        }

        if company.ticker.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "company '{}' has an empty ticker",
                company.name
            )));
        }

        if !company.website.starts_with("https://") && !company.website.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "company '{}' has invalid website '{}'; must start with http:// or https://",
                company.name, company.website
            )));
        }

        let ticker = company.ticker.to_uppercase();
        if !seen_tickers.insert(ticker) {
            return Err(ConfigError::Validation(format!(
                "duplicate ticker: '{}'",
                company.ticker
            )));
        }
    }

    Ok(())
}
