// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Display utilties for initialization statements

use std::fmt;

use crate::image::Image;

use super::Lane;


/// Formatting helper for a single initialization statement
pub(crate) struct Statement<'a> {
    pub image: &'a Image,
    pub block: usize,
    pub lane: Lane,
    pub row: usize,
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INST \"MEMORY/Mram_RAM{}{}\" INIT_{:02X} = ",
            self.block, self.lane, self.row,
        )?;
        super::row_words_descending(self.block, self.row)
            .try_for_each(|word| write!(f, "{:02X}", self.image.read(word + self.lane.offset())))?;
        fmt::Display::fmt(";", f)
    }
}
