//! File I/O and validation for the seqwarp pipeline.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{BatchReader, ParsePolicy, SequenceReader};
pub use writer::DistanceWriter;
