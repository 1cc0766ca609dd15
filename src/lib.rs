//! S-record to block RAM initialization data
//!
//! This crate converts object files in the Motorola S-format into textual
//! initialization constraints for Xilinx block RAM, suitable for inclusion
//! in place-and-route constraint files. The conversion runs in three
//! stages: [record]s are decoded from the input text, their payloads are
//! accumulated in a flat memory [image](image::Image), and the completed
//! image is re-packed into per-lane, per-block initialization
//! [pattern]s.

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod error;
pub mod image;
pub mod object;
pub mod pattern;
pub mod record;

mod parsers;


pub use error::ReadError;
pub use image::Image;
pub use record::Record;
