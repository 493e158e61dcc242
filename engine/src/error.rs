//! Engine-specific error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Horses must be generated first")]
    HorsesNotGenerated,

    #[error("Race schedule must be generated first")]
    ScheduleNotGenerated,

    #[error("A race is already running")]
    RaceAlreadyRunning,

    #[error("Name pool too small: roster needs {needed} names but only {available} are configured")]
    NamePoolTooSmall { needed: usize, available: usize },

    #[error("Color pool must not be empty")]
    EmptyColorPool,
}

impl EngineError {
    /// Precondition failures are recoverable: the caller performs the
    /// missing prerequisite step and retries the same call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            EngineError::HorsesNotGenerated
                | EngineError::ScheduleNotGenerated
                | EngineError::RaceAlreadyRunning
        )
    }

    /// Configuration failures indicate a setup defect, not a runtime
    /// condition worth retrying.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EngineError::NamePoolTooSmall { .. } | EngineError::EmptyColorPool
        )
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages_match_contract() {
        assert_eq!(
            EngineError::HorsesNotGenerated.to_string(),
            "Horses must be generated first"
        );
        assert_eq!(
            EngineError::ScheduleNotGenerated.to_string(),
            "Race schedule must be generated first"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(EngineError::HorsesNotGenerated.is_precondition());
        assert!(EngineError::ScheduleNotGenerated.is_precondition());
        assert!(EngineError::RaceAlreadyRunning.is_precondition());
        assert!(!EngineError::HorsesNotGenerated.is_configuration());

        let config_err = EngineError::NamePoolTooSmall {
            needed: 20,
            available: 5,
        };
        assert!(config_err.is_configuration());
        assert!(!config_err.is_precondition());
        assert!(EngineError::EmptyColorPool.is_configuration());
    }
}
