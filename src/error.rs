// src/error.rs
use thiserror::Error;
use tixi_types::ReturnCode;

/// Canonical name of a status code.
pub fn error_to_string(code: ReturnCode) -> &'static str {
    code.as_str()
}

/// Canonical name of a raw status integer.
///
/// # Panics
///
/// Panics if `raw` is not a defined status code. An unknown code means the
/// caller and the library disagree on the status enumeration.
pub fn raw_error_to_string(raw: i32) -> &'static str {
    match ReturnCode::from_raw(raw) {
        Some(code) => error_to_string(code),
        None => panic!("Invalid ReturnCode: {raw}"),
    }
}

/// The single error type of the accessor layer.
///
/// Carries the status code reported by the backend and a description made
/// of the caller context followed by the code name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TixiError {
    code: ReturnCode,
    message: String,
}

impl TixiError {
    pub fn new(code: ReturnCode) -> Self {
        Self {
            code,
            message: format!("ReturnCode: {}", error_to_string(code)),
        }
    }

    /// Prepends `context` on its own line above the code name.
    pub fn with_message(code: ReturnCode, context: impl AsRef<str>) -> Self {
        Self {
            code,
            message: format!(
                "{}\nReturnCode: {}",
                context.as_ref(),
                error_to_string(code)
            ),
        }
    }

    pub fn code(&self) -> ReturnCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ReturnCode> for TixiError {
    fn from(code: ReturnCode) -> Self {
        TixiError::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_its_documented_name() {
        let expected = [
            "SUCCESS",
            "FAILED",
            "INVALID_XML_NAME",
            "NOT_WELL_FORMED",
            "NOT_SCHEMA_COMPLIANT",
            "NOT_DTD_COMPLIANT",
            "INVALID_HANDLE",
            "INVALID_XPATH",
            "ELEMENT_NOT_FOUND",
            "INDEX_OUT_OF_RANGE",
            "NO_POINT_FOUND",
            "NOT_AN_ELEMENT",
            "ATTRIBUTE_NOT_FOUND",
            "OPEN_FAILED",
            "OPEN_SCHEMA_FAILED",
            "OPEN_DTD_FAILED",
            "CLOSE_FAILED",
            "ALREADY_SAVED",
            "ELEMENT_PATH_NOT_UNIQUE",
            "NO_ELEMENT_NAME",
            "NO_CHILDREN",
            "CHILD_NOT_FOUND",
            "EROROR_CREATE_ROOT_NODE",
            "DEALLOCATION_FAILED",
            "NO_NUMBER",
            "NO_ATTRIBUTE_NAME",
            "STRING_TRUNCATED",
            "NON_MATCHING_NAME",
            "NON_MATCHING_SIZE",
            "MATRIX_DIMENSION_ERROR",
            "COORDINATE_NOT_FOUND",
            "UNKNOWN_STORAGE_MODE",
            "UID_NOT_UNIQUE",
            "UID_DONT_EXISTS",
            "UID_LINK_BROKEN",
        ];
        assert_eq!(expected.len(), ReturnCode::ALL.len());
        for (raw, name) in expected.iter().enumerate() {
            assert_eq!(raw_error_to_string(raw as i32), *name);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid ReturnCode")]
    fn test_unknown_raw_code_panics() {
        raw_error_to_string(35);
    }

    #[test]
    #[should_panic(expected = "Invalid ReturnCode")]
    fn test_negative_raw_code_panics() {
        raw_error_to_string(-1);
    }

    #[test]
    fn test_error_without_context() {
        let err = TixiError::new(ReturnCode::InvalidHandle);
        assert_eq!(err.code(), ReturnCode::InvalidHandle);
        assert_eq!(err.to_string(), "ReturnCode: INVALID_HANDLE");
    }

    #[test]
    fn test_error_with_context() {
        let err = TixiError::with_message(ReturnCode::ElementNotFound, "Error getting element value\nxpath: /a/b");
        assert_eq!(
            err.message(),
            "Error getting element value\nxpath: /a/b\nReturnCode: ELEMENT_NOT_FOUND"
        );
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_from_return_code() {
        let err: TixiError = ReturnCode::NoNumber.into();
        assert_eq!(err, TixiError::new(ReturnCode::NoNumber));
    }
}
