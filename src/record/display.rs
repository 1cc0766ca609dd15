// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Display utilties for records

use std::fmt;

use super::{Data, Record};


impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header        => fmt::Display::fmt("S0030000FC", f),
            Self::Count         => fmt::Display::fmt("S5030000FC", f),
            Self::Data(data)    => fmt::Display::fmt(data, f),
            Self::Termination   => fmt::Display::fmt("S9030000FC", f),
        }
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}{:02X}", self.kind().type_digit(), self.byte_count())?;
        write!(f, "{:0width$X}", self.address(), width = 2*self.kind().address_bytes())?;
        self.bytes().iter().try_for_each(|b| write!(f, "{:02X}", b))?;
        write!(f, "{:02X}", self.checksum())
    }
}
