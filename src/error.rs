use thiserror::Error;

/// Errors reported while validating classification inputs.
///
/// Validation happens up front: once a [`Ring`](crate::Ring) exists and a
/// [`Method`](crate::Method) has been parsed, classification itself cannot
/// fail, and there is no partial-result mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipError {
    /// The method selector does not match any recognized token.
    #[error("unknown point-in-polygon method {0:?}")]
    InvalidMethod(String),

    /// The polygon ring cannot enclose any area.
    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_method_names_the_selector() {
        let err = PipError::InvalidMethod("xyz".to_string());

        assert_eq!(err.to_string(), "unknown point-in-polygon method \"xyz\"");
    }

    #[test]
    fn degenerate_polygon_states_the_reason() {
        let err = PipError::DegeneratePolygon("fewer than 3 vertices");

        assert_eq!(err.to_string(), "degenerate polygon: fewer than 3 vertices");
    }
}
