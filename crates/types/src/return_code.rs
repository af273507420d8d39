//! Status codes returned by every call into a TIXI-style document API.
//!
//! The numeric values mirror the C library so raw codes coming over an FFI
//! boundary can be converted with [`ReturnCode::from_raw`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single call into the document API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ReturnCode {
    /// No error occurred
    Success = 0,
    /// Unspecified error
    Failed = 1,
    /// Non XML standard compliant name specified
    InvalidXmlName = 2,
    /// Document is not well formed
    NotWellFormed = 3,
    /// Document is not schema compliant
    NotSchemaCompliant = 4,
    /// Document is not DTD compliant
    NotDtdCompliant = 5,
    /// Document handle is not valid
    InvalidHandle = 6,
    /// XPath expression is not valid
    InvalidXpath = 7,
    /// Element does not exist in document
    ElementNotFound = 8,
    /// Index supplied as argument is not inside the admissible range
    IndexOutOfRange = 9,
    /// No point element found at a given XPath
    NoPointFound = 10,
    /// XPath expression does not point to an XML-element node
    NotAnElement = 11,
    /// Element does not have the attribute
    AttributeNotFound = 12,
    /// Error on opening the file
    OpenFailed = 13,
    /// Error on opening the schema file
    OpenSchemaFailed = 14,
    /// Error on opening the DTD file
    OpenDtdFailed = 15,
    /// Error on closing the file
    CloseFailed = 16,
    /// Trying to modify an already saved document
    AlreadySaved = 17,
    /// Path expression can not be resolved unambiguously
    ElementPathNotUnique = 18,
    /// Element name argument is empty
    NoElementName = 19,
    /// Node has no children
    NoChildren = 20,
    /// Named child is not a child of the element specified
    ChildNotFound = 21,
    /// Error when adding the root node to a new document
    ErrorCreateRootNode = 22,
    /// Deallocation failed while closing a document
    DeallocationFailed = 23,
    /// No number specified
    NoNumber = 24,
    /// No attribute name specified
    NoAttributeName = 25,
    /// String buffer too small to hold the result
    StringTruncated = 26,
    /// Row or column names do not match the names used in the document
    NonMatchingName = 27,
    /// Row or column counts do not match the matrix in the document
    NonMatchingSize = 28,
    /// Row or column count is less than one
    MatrixDimensionError = 29,
    /// Missing coordinate inside a point element
    CoordinateNotFound = 30,
    /// Storage mode is neither row-wise nor column-wise
    UnknownStorageMode = 31,
    /// One or more uIDs are not unique
    UidNotUnique = 32,
    /// A given uID does not exist
    UidDontExists = 33,
    /// A link node has no corresponding uID in the data set
    UidLinkBroken = 34,
}

impl ReturnCode {
    /// Every defined code, in numeric order.
    pub const ALL: [ReturnCode; 35] = [
        ReturnCode::Success,
        ReturnCode::Failed,
        ReturnCode::InvalidXmlName,
        ReturnCode::NotWellFormed,
        ReturnCode::NotSchemaCompliant,
        ReturnCode::NotDtdCompliant,
        ReturnCode::InvalidHandle,
        ReturnCode::InvalidXpath,
        ReturnCode::ElementNotFound,
        ReturnCode::IndexOutOfRange,
        ReturnCode::NoPointFound,
        ReturnCode::NotAnElement,
        ReturnCode::AttributeNotFound,
        ReturnCode::OpenFailed,
        ReturnCode::OpenSchemaFailed,
        ReturnCode::OpenDtdFailed,
        ReturnCode::CloseFailed,
        ReturnCode::AlreadySaved,
        ReturnCode::ElementPathNotUnique,
        ReturnCode::NoElementName,
        ReturnCode::NoChildren,
        ReturnCode::ChildNotFound,
        ReturnCode::ErrorCreateRootNode,
        ReturnCode::DeallocationFailed,
        ReturnCode::NoNumber,
        ReturnCode::NoAttributeName,
        ReturnCode::StringTruncated,
        ReturnCode::NonMatchingName,
        ReturnCode::NonMatchingSize,
        ReturnCode::MatrixDimensionError,
        ReturnCode::CoordinateNotFound,
        ReturnCode::UnknownStorageMode,
        ReturnCode::UidNotUnique,
        ReturnCode::UidDontExists,
        ReturnCode::UidLinkBroken,
    ];

    /// Canonical library name of the code.
    ///
    /// `ErrorCreateRootNode` keeps the library's `EROROR_` spelling so names
    /// match log output of native callers.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReturnCode::Success => "SUCCESS",
            ReturnCode::Failed => "FAILED",
            ReturnCode::InvalidXmlName => "INVALID_XML_NAME",
            ReturnCode::NotWellFormed => "NOT_WELL_FORMED",
            ReturnCode::NotSchemaCompliant => "NOT_SCHEMA_COMPLIANT",
            ReturnCode::NotDtdCompliant => "NOT_DTD_COMPLIANT",
            ReturnCode::InvalidHandle => "INVALID_HANDLE",
            ReturnCode::InvalidXpath => "INVALID_XPATH",
            ReturnCode::ElementNotFound => "ELEMENT_NOT_FOUND",
            ReturnCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ReturnCode::NoPointFound => "NO_POINT_FOUND",
            ReturnCode::NotAnElement => "NOT_AN_ELEMENT",
            ReturnCode::AttributeNotFound => "ATTRIBUTE_NOT_FOUND",
            ReturnCode::OpenFailed => "OPEN_FAILED",
            ReturnCode::OpenSchemaFailed => "OPEN_SCHEMA_FAILED",
            ReturnCode::OpenDtdFailed => "OPEN_DTD_FAILED",
            ReturnCode::CloseFailed => "CLOSE_FAILED",
            ReturnCode::AlreadySaved => "ALREADY_SAVED",
            ReturnCode::ElementPathNotUnique => "ELEMENT_PATH_NOT_UNIQUE",
            ReturnCode::NoElementName => "NO_ELEMENT_NAME",
            ReturnCode::NoChildren => "NO_CHILDREN",
            ReturnCode::ChildNotFound => "CHILD_NOT_FOUND",
            ReturnCode::ErrorCreateRootNode => "EROROR_CREATE_ROOT_NODE",
            ReturnCode::DeallocationFailed => "DEALLOCATION_FAILED",
            ReturnCode::NoNumber => "NO_NUMBER",
            ReturnCode::NoAttributeName => "NO_ATTRIBUTE_NAME",
            ReturnCode::StringTruncated => "STRING_TRUNCATED",
            ReturnCode::NonMatchingName => "NON_MATCHING_NAME",
            ReturnCode::NonMatchingSize => "NON_MATCHING_SIZE",
            ReturnCode::MatrixDimensionError => "MATRIX_DIMENSION_ERROR",
            ReturnCode::CoordinateNotFound => "COORDINATE_NOT_FOUND",
            ReturnCode::UnknownStorageMode => "UNKNOWN_STORAGE_MODE",
            ReturnCode::UidNotUnique => "UID_NOT_UNIQUE",
            ReturnCode::UidDontExists => "UID_DONT_EXISTS",
            ReturnCode::UidLinkBroken => "UID_LINK_BROKEN",
        }
    }

    /// Converts a raw status integer. Returns `None` for values outside the
    /// defined set.
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The raw integer value of the code.
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    pub const fn is_success(self) -> bool {
        matches!(self, ReturnCode::Success)
    }

    /// Lifts a raw status into the `Result` shape used by backends.
    pub fn into_result(self) -> Result<(), ReturnCode> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }
}

impl TryFrom<i32> for ReturnCode {
    type Error = i32;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}

impl From<ReturnCode> for i32 {
    fn from(code: ReturnCode) -> Self {
        code.as_raw()
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ReturnCode {}
