//! Macro for implementing Display and FromStr for simple domain enums
//!
//! Unit-only enums that travel through config files, environment variables
//! and command line flags share one textual representation. The macro keeps
//! `Display` and `FromStr` in sync and accepts optional aliases on parse.
//!
//! # Example
//!
//! ```rust
//! use geofleet_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum OutputKind {
//!     Table,
//!     Json,
//! }
//!
//! impl_domain_enum_conversions!(OutputKind {
//!     Table => "table" | "text",
//!     Json => "json",
//! });
//!
//! assert_eq!("TEXT".parse::<OutputKind>().unwrap(), OutputKind::Table);
//! assert_eq!(OutputKind::Json.to_string(), "json");
//! ```

/// Implements Display and FromStr traits for unit-only enums
///
/// This macro generates:
/// - Display: writes the canonical (first) string of each variant
/// - FromStr: parses the canonical string or any alias, case-insensitively
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str | $alias...` - Canonical string and optional aliases
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
