/// Error types for loading and validating bike rental data
use thiserror::Error;

/// The input does not match the raw record schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// One or more required columns are absent from the header row
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A field could not be parsed as its schema type
    #[error("line {line}: malformed `{field}` value {value:?}")]
    MalformedField {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// A row breaks `count = casual + registered`
    #[error("line {line}: count {count} != casual {casual} + registered {registered}")]
    CountMismatch {
        line: u64,
        casual: u64,
        registered: u64,
        count: u64,
    },
}

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input does not match the raw record schema
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Dataset holds zero records
    #[error("dataset contains no records")]
    EmptyInput,

    /// Failed to read CSV data
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to open the data file
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_every_column() {
        let err = SchemaError::MissingColumns(vec!["weather".to_string(), "count".to_string()]);
        assert_eq!(err.to_string(), "missing required column(s): weather, count");
    }

    #[test]
    fn malformed_field_message_names_field_and_line() {
        let err = SchemaError::MalformedField {
            line: 4,
            field: "hour",
            value: "25".to_string(),
        };
        assert_eq!(err.to_string(), "line 4: malformed `hour` value \"25\"");
    }
}
