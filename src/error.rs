use thiserror::Error;

/// Unified error type for the entire crate.
/// Every fallible operation returns `Result<T, PlanError>` at the public seam.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Startup problems: missing credential, unreadable config, missing or
    /// incompatible model artifact. The process should not serve requests.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// User input outside the declared domain, or an unknown category name.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The allocation model was handed values it cannot score.
    #[error("prediction error: {0}")]
    Prediction(String),

    /// The generative service call failed, timed out, or returned nothing usable.
    #[error("study plan service error: {0}")]
    ExternalService(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        PlanError::Configuration(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        PlanError::Validation(message.into())
    }

    pub fn prediction<S: Into<String>>(message: S) -> Self {
        PlanError::Prediction(message.into())
    }

    pub fn external_service<S: Into<String>>(message: S) -> Self {
        PlanError::ExternalService(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::PlanError;

    #[test]
    fn display_includes_category_and_message() {
        let error = PlanError::configuration("GEMINI_API_KEY is not set");
        let display = format!("{}", error);
        assert!(display.contains("configuration error"));
        assert!(display.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: PlanError = io.into();
        assert!(matches!(error, PlanError::Io(_)));
    }
}
