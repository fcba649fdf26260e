//! Defines the `Error` type for projecting chart series out of records.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The error type for projecting the label and value fields
/// out of the records returned by an insights endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The record at `index` has no field with the specified key.
    FieldNotFound {
        /// The key of the missing field.
        field: String,
        /// The position of the record in the response array.
        index: usize,
    },

    /// The label field was found, but it does not hold text.
    LabelNotText {
        /// The key of the label field.
        field: String,
        /// The position of the record in the response array.
        index: usize,
    },

    /// The value field was found, but it does not hold a number.
    ValueNotNumeric {
        /// The key of the value field.
        field: String,
        /// The position of the record in the response array.
        index: usize,
    },
}

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let series_error = "series error:";

        match self {
            SeriesError::FieldNotFound { field, index } => write!(
                f,
                "{series_error} the record at index {index} has no \"{field}\" field"
            ),
            SeriesError::LabelNotText { field, index } => write!(
                f,
                "{series_error} the \"{field}\" field of the record at index {index} does not hold text"
            ),
            SeriesError::ValueNotNumeric { field, index } => write!(
                f,
                "{series_error} the \"{field}\" field of the record at index {index} does not hold a number"
            ),
        }
    }
}

impl Error for SeriesError {}
