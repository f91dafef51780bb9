// Validation Module - field-level validation with accumulated errors
use std::fmt;

mod validators;

pub use validators::{CollectionValidator, FieldValidator, RangeValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}: {}", self.errors[0].field, self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Accumulates field errors and reports them all at once.
///
/// Nested structures push a path segment so that errors read as
/// `analysis.sample_minutes` instead of a bare field name.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    path: Vec<String>,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    fn qualified(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    /// Add an error
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        let field = self.qualified(field);
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V)
    where
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
    }

    /// Require `earlier < later`; used for time windows.
    pub fn validate_ordered<T>(&mut self, field: &str, earlier: T, later: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if earlier >= later {
            self.add_error(field, format!("{} must be before {}", earlier, later));
        }
    }

    /// Validate that a float is finite and non-negative
    pub fn validate_non_negative_finite(&mut self, field: &str, value: f64) {
        if !value.is_finite() {
            self.add_error(field, "must be a finite number");
        } else if value < 0.0 {
            self.add_error(field, format!("must be non-negative, got {}", value));
        }
    }

    /// Validate with nested context
    pub fn validate_nested<F>(&mut self, field: &str, f: F)
    where
        F: FnOnce(&mut Validator),
    {
        self.path.push(field.to_string());
        f(self);
        self.path.pop();
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
