use std::collections::BTreeSet;

use url::Url;

use data_portfolio::tags::{is_known_category, is_known_technology};

use crate::error::AppError;

/// Trim `value` and reject it if nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(value.to_owned())
}

/// Check categories against the published vocabulary.
pub fn parse_categories(
    categories: &[String],
) -> Result<BTreeSet<String>, AppError> {
    for category in categories {
        if !is_known_category(category) {
            return Err(AppError::UnknownCategory(category.to_owned()));
        }
    }
    Ok(categories.iter().cloned().collect())
}

/// Check technologies against the published vocabulary.
pub fn parse_technologies(
    technologies: &[String],
) -> Result<BTreeSet<String>, AppError> {
    for technology in technologies {
        if !is_known_technology(technology) {
            return Err(AppError::UnknownTechnology(technology.to_owned()));
        }
    }
    Ok(technologies.iter().cloned().collect())
}

/// Validate an external link and hand it back unchanged.
pub fn parse_link(field: &str, value: &str) -> Result<String, AppError> {
    Url::parse(value).map_err(|_| {
        AppError::InvalidUrl(field.to_owned(), value.to_owned())
    })?;
    Ok(value.to_owned())
}
