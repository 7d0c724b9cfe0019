//! RAM image serialization module
//!
//! This module provides the output seam of the pipeline: a writer trait over
//! assembled RAM images and the four concrete formats the simulation
//! environment consumes (plain dump, readable listing, raw batch line, VHDL
//! testbench).

mod writer;
mod plain_dump;
mod listing;
mod raw_batch;
mod testbench;

pub use writer::RamWriter;
pub use plain_dump::PlainDumpWriter;
pub use listing::ListingWriter;
pub use raw_batch::RawBatchWriter;
pub use testbench::TestbenchWriter;
