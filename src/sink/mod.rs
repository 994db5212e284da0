//! CSV sink
//!
//! Appends accepted records to the output file in arrival order.

mod writer;

pub use writer::{CsvSink, HEADER};

#[cfg(test)]
mod tests;
