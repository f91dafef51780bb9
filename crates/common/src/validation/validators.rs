use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a value, returning a human-readable message on failure
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Inclusive numeric range validator
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: T,
    max: T,
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if *value < self.min {
            return Err(format!("Value must be at least {}", self.min));
        }
        if *value > self.max {
            return Err(format!("Value must not exceed {}", self.max));
        }
        Ok(())
    }
}

/// Collection validator: minimum size and uniqueness
#[derive(Debug, Clone, Default)]
pub struct CollectionValidator {
    min_size: Option<usize>,
    unique: bool,
}

impl CollectionValidator {
    /// Create a validator with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` items
    pub fn min_size(mut self, min: usize) -> Self {
        self.min_size = Some(min);
        self
    }

    /// Reject duplicate items
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl<T> FieldValidator<[T]> for CollectionValidator
where
    T: Eq + Hash + Debug,
{
    fn validate(&self, value: &[T]) -> Result<(), String> {
        if let Some(min) = self.min_size {
            if value.len() < min {
                return Err(format!("must contain at least {} items", min));
            }
        }

        if self.unique {
            let mut seen = HashSet::with_capacity(value.len());
            for item in value {
                if !seen.insert(item) {
                    return Err(format!("contains duplicate item {:?}", item));
                }
            }
        }

        Ok(())
    }
}

impl<T> FieldValidator<Vec<T>> for CollectionValidator
where
    T: Eq + Hash + Debug,
{
    fn validate(&self, value: &Vec<T>) -> Result<(), String> {
        <Self as FieldValidator<[T]>>::validate(self, value.as_slice())
    }
}
