//! Validation rules for editable fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Returns the i18n message key of the first broken rule.
    pub fn validate_string(&self, value: &str) -> Result<(), &'static str> {
        if self.required && value.trim().is_empty() {
            return Err("messages:error-required");
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err("messages:error-max-length");
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64) -> Result<(), &'static str> {
        if let Some(min) = self.min {
            if value < min {
                return Err("messages:error-min-value");
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err("messages:error-max-value");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules {
            required: true,
            ..ValidationRules::none()
        };
        assert_eq!(rules.validate_string("   "), Err("messages:error-required"));
        assert!(rules.validate_string("A1").is_ok());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules {
            max_length: Some(3),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("été").is_ok());
        assert_eq!(rules.validate_string("abcd"), Err("messages:error-max-length"));
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(10.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(0.0).is_ok());
        assert_eq!(rules.validate_number(-1.0), Err("messages:error-min-value"));
        assert_eq!(rules.validate_number(10.5), Err("messages:error-max-value"));
    }
}
