use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No `<number><unit>` pattern anywhere in the input.
    #[error("invalid format: no quantity found in '{input}'")]
    Format { input: String },

    #[error("invalid number value '{literal}'")]
    Number { literal: String },

    #[error("unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("invalid format spec '{spec}' (expected e.g. %.2f, %f, %v or 2)")]
    InvalidFormatSpec { spec: String },
}
