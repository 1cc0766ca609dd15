// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Memory image


use crate::error::ReadError;
use crate::record::Data;


/// Byte-addressable image of the target memory
///
/// An image holds one cell per byte of the target memory. Its capacity is
/// fixed at construction; every cell starts out holding the
/// [unprogrammed](Image::UNPROGRAMMED) sentinel until a decoded record
/// writes it. During decoding the image is mutated cell by cell; once
/// pattern generation begins it is only ever read.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    cells: Vec<u8>,
}

impl Image {
    /// Value held by cells never touched by any record
    pub const UNPROGRAMMED: u8 = 0xFF;

    /// Create a new image with every cell unprogrammed
    pub fn new(capacity: usize) -> Self {
        Self {cells: vec![Self::UNPROGRAMMED; capacity]}
    }

    /// Retrieve the capacity in bytes
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Write a single cell
    ///
    /// Addresses at or beyond the capacity are rejected. In particular, the
    /// address equal to the capacity is rejected rather than silently
    /// discarded.
    pub fn write(&mut self, address: u32, byte: u8) -> Result<(), ReadError> {
        self.cells
            .get_mut(address as usize)
            .map(|cell| *cell = byte)
            .ok_or(ReadError::AddressRange(address))
    }

    /// Read a single cell
    ///
    /// Addresses beyond the capacity read as unprogrammed.
    pub fn read(&self, address: usize) -> u8 {
        self.cells.get(address).copied().unwrap_or(Self::UNPROGRAMMED)
    }

    /// Load a data record's payload into the image
    ///
    /// The payload bytes are written at consecutive addresses, starting at
    /// the record's load address. Loading fails on the first byte falling
    /// outside the image; bytes before it remain written. A record without
    /// payload bytes never fails, regardless of its address.
    pub fn load(&mut self, data: &Data) -> Result<(), ReadError> {
        data.bytes()
            .iter()
            .zip(data.address()..)
            .try_for_each(|(byte, address)| self.write(address, *byte))
    }
}
