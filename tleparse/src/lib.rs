//! Decoder for NORAD two-line element sets

pub use crate::parser::{decode, parse, split_record, FormatError};
pub use tletypes::prelude::*;

pub mod checksum;
pub mod parser;

/// Columns in a data line, including the checksum digit
pub const LINE_LENGTH: usize = 69;

/// Columns of the optional name line that are significant
pub const NAME_LENGTH: usize = 24;
