//! S-record data model

pub(crate) mod display;
pub(crate) mod parsers;


#[cfg(test)]
use quickcheck::{Arbitrary, Gen};


/// A single record of a Motorola S-format object file
///
/// Each line of an object file holds one record. Only data records carry
/// bytes destined for the memory image; header and record count records are
/// informational and a termination record ends the record stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    /// Header record (S0)
    Header,
    /// Record count record (S5)
    Count,
    /// Data record (S1, S2 or S3)
    Data(Data),
    /// Termination record (S7, S8 or S9)
    Termination,
}

#[cfg(test)]
impl Arbitrary for Record {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => Self::Header,
            1 => Self::Count,
            2 => Self::Data(Arbitrary::arbitrary(g)),
            _ => Self::Termination,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::Data(data) => Box::new(data.shrink().map(Self::Data)),
            _ => Box::new(std::iter::empty()),
        }
    }
}


/// Contents of a data record
///
/// A data record carries zero or more payload bytes to be loaded at
/// consecutive addresses, starting at the record's load address.
#[derive(Clone, Debug, PartialEq)]
pub struct Data {
    kind: AddressKind,
    address: u32,
    bytes: Vec<u8>,
}

impl Data {
    /// Create a new data record
    pub fn new(kind: AddressKind, address: u32, bytes: impl Into<Vec<u8>>) -> Self {
        Self {kind, address, bytes: bytes.into()}
    }

    /// Retrieve the address kind
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Retrieve the load address of the first payload byte
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Retrieve the payload bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Compute the value of the record's byte count field
    ///
    /// The count covers the address bytes, the payload bytes and the
    /// checksum byte.
    pub fn byte_count(&self) -> u8 {
        (self.kind.address_bytes() + self.bytes.len() + 1) as u8
    }

    /// Compute the record's checksum byte
    ///
    /// The checksum is the ones' complement of the least significant byte of
    /// the sum over the byte count field, the address bytes and the payload.
    /// The decoder never verifies it; it exists for formatting records.
    pub fn checksum(&self) -> u8 {
        let address = self.address.to_be_bytes();
        let sum = self.bytes
            .iter()
            .chain(&address[4 - self.kind.address_bytes()..])
            .fold(self.byte_count() as u32, |sum, byte| sum + *byte as u32);
        !(sum as u8)
    }
}

#[cfg(test)]
impl Arbitrary for Data {
    fn arbitrary(g: &mut Gen) -> Self {
        let kind = AddressKind::arbitrary(g);
        let mask = match kind {
            AddressKind::Abs16 => 0x0000_FFFF,
            AddressKind::Abs24 => 0x00FF_FFFF,
            AddressKind::Abs32 => 0xFFFF_FFFF,
        };
        // The byte count field must accomodate the payload
        let mut bytes = Vec::<u8>::arbitrary(g);
        bytes.truncate(0xFF - kind.address_bytes() - 1);
        Self::new(kind, u32::arbitrary(g) & mask, bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let kind = self.kind;
        let address = self.address;
        let res = self.bytes.shrink().map(move |bytes| Self::new(kind, address, bytes));
        Box::new(res)
    }
}


/// Width of a data record's load address
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddressKind {
    /// 16 bit address, carried by S1 records
    Abs16,
    /// 24 bit address, carried by S2 records
    Abs24,
    /// 32 bit address, carried by S3 records
    Abs32,
}

impl AddressKind {
    /// Retrieve the number of address bytes in a record of this kind
    pub fn address_bytes(self) -> usize {
        match self {
            Self::Abs16 => 2,
            Self::Abs24 => 3,
            Self::Abs32 => 4,
        }
    }

    /// Retrieve the record type digit following the start mark
    pub fn type_digit(self) -> char {
        match self {
            Self::Abs16 => '1',
            Self::Abs24 => '2',
            Self::Abs32 => '3',
        }
    }
}

#[cfg(test)]
impl Arbitrary for AddressKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Self::Abs16, Self::Abs24, Self::Abs32]).unwrap()
    }
}
