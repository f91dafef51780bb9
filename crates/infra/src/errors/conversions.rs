//! Conversions from external infrastructure errors into domain errors.

use geofleet_common::{CommonError, ErrorClassification, ErrorSeverity};
use geofleet_domain::GeofleetError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraError(pub GeofleetError);

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<InfraError> for GeofleetError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GeofleetError> for InfraError {
    fn from(value: GeofleetError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGeofleetError {
    fn into_geofleet(self) -> GeofleetError;
}

/* -------------------------------------------------------------------------- */
/* CommonError → GeofleetError */
/* -------------------------------------------------------------------------- */

impl IntoGeofleetError for CommonError {
    fn into_geofleet(self) -> GeofleetError {
        let message = self.to_string();
        match self {
            CommonError::Serialization { .. } | CommonError::Validation { .. } => {
                GeofleetError::InvalidInput(message)
            }
            CommonError::Persistence { .. } => GeofleetError::Io(message),
        }
    }
}

impl From<CommonError> for InfraError {
    fn from(value: CommonError) -> Self {
        InfraError(value.into_geofleet())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → GeofleetError */
/* -------------------------------------------------------------------------- */

impl IntoGeofleetError for std::io::Error {
    fn into_geofleet(self) -> GeofleetError {
        match self.kind() {
            std::io::ErrorKind::NotFound => GeofleetError::NotFound(self.to_string()),
            std::io::ErrorKind::InvalidData => GeofleetError::InvalidInput(self.to_string()),
            _ => CommonError::from(self).into_geofleet(),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_geofleet())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → GeofleetError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(CommonError::from(value).into_geofleet())
    }
}

/* -------------------------------------------------------------------------- */
/* Classification */
/* -------------------------------------------------------------------------- */

impl ErrorClassification for InfraError {
    fn severity(&self) -> ErrorSeverity {
        match &self.0 {
            GeofleetError::NotFound(_) => ErrorSeverity::Warning,
            GeofleetError::Internal(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self.0, GeofleetError::Internal(_))
    }

    fn label(&self) -> &'static str {
        match &self.0 {
            GeofleetError::MalformedInterval(_) => "malformed_interval",
            GeofleetError::Config(_) => "config",
            GeofleetError::InvalidInput(_) => "invalid_input",
            GeofleetError::Io(_) => "io",
            GeofleetError::NotFound(_) => "not_found",
            GeofleetError::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "presence.csv");
        let infra = InfraError::from(err);
        assert!(matches!(infra.0, GeofleetError::NotFound(_)));
        assert_eq!(infra.label(), "not_found");
        assert_eq!(infra.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn io_other_maps_to_io() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let domain: GeofleetError = InfraError::from(err).into();
        assert!(matches!(domain, GeofleetError::Io(ref m) if m.contains("denied")));
    }

    #[test]
    fn common_errors_map_by_kind() {
        let mut invalid = geofleet_common::validation::ValidationError::new();
        invalid.add_field_error("vehicle_id", "not a number");
        let validation = InfraError::from(CommonError::from(invalid));
        assert!(
            matches!(validation.0, GeofleetError::InvalidInput(ref m) if m.contains("vehicle_id"))
        );

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let persistence = InfraError::from(CommonError::from(denied));
        assert_eq!(persistence.label(), "io");
        assert!(!persistence.is_critical());
    }

    #[test]
    fn internal_errors_are_critical() {
        let internal = InfraError(GeofleetError::Internal("bucket vanished".into()));
        assert!(internal.is_critical());
        assert_eq!(internal.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn json_errors_are_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let infra = InfraError::from(err);
        assert_eq!(infra.label(), "invalid_input");
        assert!(infra.to_string().contains("JSON"));
    }

    #[test]
    fn malformed_interval_is_labelled() {
        let infra = InfraError(GeofleetError::MalformedInterval("line 4".into()));
        assert_eq!(infra.label(), "malformed_interval");
        assert!(!infra.is_critical());
    }
}
