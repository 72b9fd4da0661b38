pub mod bytes;
pub mod error;
pub mod format;
pub mod parse;
pub mod utils;

pub use bytes::{system::ByteUnitSystem, units::Unit};
pub use error::{Error, Result};
pub use format::{
    number::{format_float, format_percent, trim_trailing_zeros},
    resource::{
        format_resource_base1000, format_resource_base1024, format_resource_string,
        format_resource_string_base1000, format_resource_string_base1024, format_resource_to,
        format_resource_to_string,
    },
    spec::FormatSpec,
};
pub use parse::parse_resource;
