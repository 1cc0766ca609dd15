// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Error types

use std::error::Error as Error;
use std::fmt;
use std::io;

use crate::parsers;


/// Error occuring while reading an object file
#[derive(Debug)]
pub enum ReadError {
    /// A record failed structural validation
    Syntax(String),
    /// A write address fell outside the memory image
    AddressRange(u32),
    /// The input could not be read
    IO(io::Error),
}

impl From<io::ErrorKind> for ReadError {
    fn from(err: io::ErrorKind) -> Self {
        Self::IO(err.into())
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<String> for ReadError {
    fn from(err: String) -> Self {
        Self::Syntax(err)
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IO(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(err)           => write!(f, "syntax error in object file: {}", err),
            Self::AddressRange(addr)    => write!(f, "address {:#X} out of memory range", addr),
            Self::IO(_)                 => fmt::Display::fmt("IO error", f),
        }
    }
}


/// Convert a `nom::Err` into a `ReadError`
pub(crate) fn convert_error(input: &str, err: nom::Err<parsers::Error>) -> ReadError {
    use nom::error::convert_error;

    match err {
        nom::Err::Incomplete(_) => io::ErrorKind::UnexpectedEof.into(),
        nom::Err::Error(e) | nom::Err::Failure(e) => convert_error(input, e).into(),
    }
}
