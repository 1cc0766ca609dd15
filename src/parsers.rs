//! Parser utilities


use nom::bytes::complete::take_while_m_n;
use nom::combinator::map_res;
use nom::error::context;

/// Result type for our (sub)parsers
pub type IResult<'i, O> = nom::IResult<&'i str, O, Error<'i>>;


/// Error type for our (sub)parsers
pub type Error<'i> = nom::error::VerboseError<&'i str>;


/// Parse a single byte given as two hexadecimal digits
pub fn hex_byte(input: &str) -> IResult<u8> {
    context(
        "expected hexadecimal byte",
        map_res(take_while_m_n(2, 2, is_hex_digit), |s| u8::from_str_radix(s, 16))
    )(input)
}


/// Parse an unsigned integer given as big-endian hexadecimal digits
///
/// The parser consumes exactly two digits per byte of `width`. Widths of up
/// to four bytes are supported.
pub fn hex_uint(width: usize, input: &str) -> IResult<u32> {
    context(
        "expected hexadecimal integer",
        map_res(take_while_m_n(2*width, 2*width, is_hex_digit), |s| u32::from_str_radix(s, 16))
    )(input)
}


/// Check whether the character is a hexadecimal digit
///
/// Unlike `isxdigit` style classification, this predicate does not depend on
/// any locale: only ASCII digits and the letters `a` through `f` in either
/// case are accepted.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
