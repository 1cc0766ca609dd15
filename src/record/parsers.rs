// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Parsers for S-records

use nom::branch::alt;
use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::{map, opt, value};
use nom::error::context;
use nom::multi::count;
use nom::sequence::{pair, preceded};

use crate::parsers::{self, IResult, hex_byte, hex_uint};

use super::{AddressKind, Data, Record};


/// Parse a single S-record line
///
/// The parser consumes any leading whitespace and the fields of the record
/// itself. For header, record count and termination records everything
/// after the type digit is ignored; for data records, characters after the
/// checksum are ignored. A missing checksum is tolerated since its value is
/// never interpreted.
pub fn record(input: &str) -> IResult<Record> {
    preceded(
        pair(multispace0, context("expected start mark 'S'", char('S'))),
        context(
            "unknown record type",
            alt((
                value(Record::Header, char('0')),
                value(Record::Count, char('5')),
                map(preceded(char('1'), |i| data(AddressKind::Abs16, i)), Record::Data),
                map(preceded(char('2'), |i| data(AddressKind::Abs24, i)), Record::Data),
                map(preceded(char('3'), |i| data(AddressKind::Abs32, i)), Record::Data),
                value(Record::Termination, one_of("789")),
            )),
        ),
    )(input)
}


/// Parse the body of a data record, following its type digit
fn data<'i>(kind: AddressKind, input: &'i str) -> IResult<'i, Data> {
    use nom::error::{ErrorKind as EK, ParseError};

    let (input, byte_count) = context("expected byte count", hex_byte)(input)?;

    // The count covers the address bytes, the payload and one checksum byte.
    let payload_len = (byte_count as usize)
        .checked_sub(kind.address_bytes() + 1)
        .ok_or_else(|| nom::Err::Error(parsers::Error::from_error_kind(input, EK::Verify)))?;

    let (input, address) = context(
        "expected load address",
        |i| hex_uint(kind.address_bytes(), i),
    )(input)?;
    let (input, bytes) = context("expected payload", count(hex_byte, payload_len))(input)?;
    let (input, _) = opt(hex_byte)(input)?;

    Ok((input, Data::new(kind, address, bytes)))
}
