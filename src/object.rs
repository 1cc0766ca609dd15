//! Reading of S-format object files


use std::io::BufRead;

use log::{debug, info};

use crate::error::{ReadError, convert_error};
use crate::image::Image;
use crate::record::{Record, parsers};


/// Read an object file into the given image
///
/// Records are decoded line by line and their payloads written to the
/// image. Processing ends at the first termination record; any lines
/// following it are never consumed. Header and record count records carry
/// no payload and are skipped. The first malformed record or out-of-range
/// write aborts the read with an error; there is no partial recovery.
pub fn read(source: impl BufRead, image: &mut Image) -> Result<(), ReadError> {
    let mut records = 0usize;
    let mut total = 0usize;

    for line in source.lines() {
        let line = line?;
        let (_, record) = parsers::record(&line).map_err(|e| convert_error(&line, e))?;
        match record {
            Record::Header | Record::Count => (),
            Record::Data(data) => {
                debug!("{} byte record at {:#06X}", data.bytes().len(), data.address());
                image.load(&data)?;
                records += 1;
                total += data.bytes().len();
            },
            Record::Termination => break,
        }
    }

    info!("loaded {} bytes from {} data records", total, records);
    Ok(())
}
