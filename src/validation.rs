use regex::Regex;

use crate::errors::AppError;

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Must be non-empty
    // Must contain only decimal digits (any script), no "+" or separators
    let re = Regex::new(r"^\d+$")?;
    Ok(re.is_match(phone))
}
