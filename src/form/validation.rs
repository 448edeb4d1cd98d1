use std::fmt;

use crate::form::modes::Mode;

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub message: String,
    pub field: Option<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String, field: Option<String>) {
        self.errors.push(ValidationIssue { message, field });
    }

    pub fn add_warning(&mut self, message: String, field: Option<String>) {
        self.warnings.push(ValidationIssue { message, field });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "Errors:")?;
            for error in &self.errors {
                if let Some(field) = &error.field {
                    writeln!(f, "  [{}] {}", field, error.message)?;
                } else {
                    writeln!(f, "  {}", error.message)?;
                }
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                if let Some(field) = &warning.field {
                    writeln!(f, "  [{}] {}", field, warning.message)?;
                } else {
                    writeln!(f, "  {}", warning.message)?;
                }
            }
        }

        Ok(())
    }
}

/// Check an entry line against its mode before any body is assembled.
///
/// Required fields must be present and non-sentinel; numeric fields must
/// parse positive when a real value is given. A sentinel in an optional
/// numeric slot is an intentional blank, not an error.
pub fn validate_line(mode: &Mode, values: &[String]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (idx, field) in mode.fields.iter().enumerate() {
        let value = values.get(idx).map(String::as_str).unwrap_or("");
        let blank = value.is_empty() || is_sentinel(value);

        if field.required && blank {
            result.add_error(
                format!("Missing required field for {}", mode.label),
                Some(field.label.to_string()),
            );
            continue;
        }

        if field.positive_number && !blank {
            match value.trim().parse::<f64>() {
                Ok(number) if number > 0.0 => {}
                Ok(_) => result.add_error(
                    format!("{} must be greater than zero", field.label),
                    Some(field.label.to_string()),
                ),
                Err(_) => result.add_error(
                    format!("{} is not a number", field.label),
                    Some(field.label.to_string()),
                ),
            }
        }
    }

    result
}

/// Warn when a shop with the same name is already recorded.
pub fn check_duplicate_shop(name: &str, existing: &[String], result: &mut ValidationResult) {
    if existing.iter().any(|shop| shop == name) {
        result.add_warning(
            format!("Shop '{}' already exists", name),
            Some("Name".to_string()),
        );
    }
}

fn is_sentinel(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c == '_')
}
