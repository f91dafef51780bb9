//! Process exit codes

use geofleet_domain::GeofleetError;

/// Exit status reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    /// Anything not covered below
    Failure,
    /// Unreadable CSV row or malformed interval
    InvalidInput,
    /// Invalid config file, environment override or flag combination
    Config,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::InvalidInput => 2,
            Self::Config => 3,
        }
    }

    pub fn for_error(error: &GeofleetError) -> Self {
        match error {
            GeofleetError::InvalidInput(_) | GeofleetError::MalformedInterval(_) => {
                Self::InvalidInput
            }
            GeofleetError::Config(_) => Self::Config,
            GeofleetError::Io(_) | GeofleetError::NotFound(_) | GeofleetError::Internal(_) => {
                Self::Failure
            }
        }
    }
}
