//! Initialization pattern generation
//!
//! The memory image is realized as four parallel byte-wide block memories
//! per 8KB block. Pattern generation walks the completed image and emits
//! one initialization statement per (block, lane, row) coordinate, packing
//! the lane bytes of a row most-significant-word-first.

pub(crate) mod display;

#[cfg(test)]
mod tests;

use std::fmt;
use std::io;

use crate::image::Image;


/// Number of blocks the image is partitioned into
pub const BLOCK_COUNT: usize = 4;

/// Size of one block in bytes
pub const BLOCK_SIZE: usize = 0x2000;

/// Size of one initialization row in bytes
pub const ROW_SIZE: usize = 0x80;

/// Number of byte lanes, i.e. bytes per word
pub const WORD_SIZE: usize = 4;

/// Number of rows in one block
pub const ROWS_PER_BLOCK: usize = BLOCK_SIZE / ROW_SIZE;

/// Number of words in one row
pub const WORDS_PER_ROW: usize = ROW_SIZE / WORD_SIZE;

/// Total number of image bytes covered by all blocks
pub const IMAGE_SIZE: usize = BLOCK_COUNT * BLOCK_SIZE;

/// Byte lanes in their fixed emission order
pub const LANES: [Lane; WORD_SIZE] = [Lane::HH, Lane::HL, Lane::LH, Lane::LL];


/// Byte lane within a word
///
/// Each word of a block is spread over four byte-wide physical memories.
/// The lane selects one of them, i.e. one byte position within the word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lane {
    HH,
    HL,
    LH,
    LL,
}

impl Lane {
    /// Retrieve the byte offset of the lane within a word
    pub fn offset(self) -> usize {
        match self {
            Self::HH => 0,
            Self::HL => 1,
            Self::LH => 2,
            Self::LL => 3,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HH => "HH",
            Self::HL => "HL",
            Self::LH => "LH",
            Self::LL => "LL",
        };
        fmt::Display::fmt(name, f)
    }
}


/// Iterate over the word base addresses of one row, highest word first
///
/// The returned iterator yields the image address of each word's first byte,
/// starting with the row's highest-addressed word and ending with its
/// lowest. This descending order realizes the most-significant-word-first
/// packing of initialization strings.
pub fn row_words_descending(block: usize, row: usize) -> impl Iterator<Item = usize> {
    let base = block*BLOCK_SIZE + row*ROW_SIZE;
    (0..WORDS_PER_ROW).rev().map(move |word| base + word*WORD_SIZE)
}


/// Write the full initialization statement sequence
///
/// One statement is emitted per (block, lane, row) coordinate: blocks in
/// ascending address order, lanes in their fixed order within each block
/// and rows in ascending order within each lane, 1024 statements in total.
pub fn write(image: &Image, out: &mut impl io::Write) -> io::Result<()> {
    coordinates().try_for_each(|(block, lane, row)| {
        writeln!(out, "{}", display::Statement {image, block, lane, row})
    })
}


/// Enumerate all statement coordinates in emission order
fn coordinates() -> impl Iterator<Item = (usize, Lane, usize)> {
    (0..BLOCK_COUNT).flat_map(|block| {
        LANES.iter().flat_map(move |lane| {
            (0..ROWS_PER_BLOCK).map(move |row| (block, *lane, row))
        })
    })
}
