//! Tests related to pattern generation

use crate::image::Image;
use crate::object;
use crate::tests::Equivalence;

use super::*;


#[quickcheck]
fn byte_placement(address: u16, value: u8) -> Result<Equivalence<String>, String> {
    let address = address as usize % IMAGE_SIZE;

    let mut image = Image::new(IMAGE_SIZE);
    image.write(address as u32, value).map_err(|e| e.to_string())?;

    let block = address / BLOCK_SIZE;
    let offset = address % BLOCK_SIZE;
    let row = offset / ROW_SIZE;
    let word = (offset % ROW_SIZE) / WORD_SIZE;
    let lane = LANES[address % WORD_SIZE];

    let statement = display::Statement {image: &image, block, lane, row}.to_string();
    let hex = statement
        .split(" = ")
        .nth(1)
        .ok_or_else(|| format!("malformed statement: {}", statement))?;

    // Highest word first: the row's lowest word ends up in the last pair
    let pair = WORDS_PER_ROW - 1 - word;
    Ok(Equivalence::of(
        hex[2*pair..2*pair + 2].to_string(),
        format!("{:02X}", value),
    ))
}


#[test]
fn untouched_image_all_sentinel() {
    let image = Image::new(IMAGE_SIZE);

    let mut out = Vec::new();
    write(&image, &mut out).expect("failed to generate patterns");
    let out = String::from_utf8(out).expect("generated patterns are not UTF-8");

    let sentinel = "FF".repeat(WORDS_PER_ROW);
    assert!(out.lines().all(|l| l.contains(&sentinel)));
}


#[test]
fn statement_count_and_order() {
    let image = Image::new(IMAGE_SIZE);

    let mut out = Vec::new();
    write(&image, &mut out).expect("failed to generate patterns");
    let out = String::from_utf8(out).expect("generated patterns are not UTF-8");
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines.len(), BLOCK_COUNT * WORD_SIZE * ROWS_PER_BLOCK);
    assert!(lines[0].starts_with("INST \"MEMORY/Mram_RAM0HH\" INIT_00 = "));
    assert!(lines[0x3F].starts_with("INST \"MEMORY/Mram_RAM0HH\" INIT_3F = "));
    assert!(lines[0x40].starts_with("INST \"MEMORY/Mram_RAM0HL\" INIT_00 = "));
    assert!(lines[0x80].starts_with("INST \"MEMORY/Mram_RAM0LH\" INIT_00 = "));
    assert!(lines[0xC0].starts_with("INST \"MEMORY/Mram_RAM0LL\" INIT_00 = "));
    assert!(lines[0x100].starts_with("INST \"MEMORY/Mram_RAM1HH\" INIT_00 = "));
    assert!(lines[0x3FF].starts_with("INST \"MEMORY/Mram_RAM3LL\" INIT_3F = "));
    assert!(lines.iter().all(|l| l.ends_with(';')));
}


#[test]
fn single_record_placement() {
    // Four bytes loaded at 0x0400, i.e. word 0 of row 8 in block 0
    let source = "S107040001020304EA\nS9030000FC\n";

    let mut image = Image::new(IMAGE_SIZE);
    object::read(source.as_bytes(), &mut image).expect("failed to read object");

    let mut out = Vec::new();
    write(&image, &mut out).expect("failed to generate patterns");
    let out = String::from_utf8(out).expect("generated patterns are not UTF-8");
    let lines: Vec<_> = out.lines().collect();

    let leading = "FF".repeat(WORDS_PER_ROW - 1);
    assert_eq!(
        lines[0x08],
        format!("INST \"MEMORY/Mram_RAM0HH\" INIT_08 = {}01;", leading),
    );
    assert_eq!(
        lines[0x48],
        format!("INST \"MEMORY/Mram_RAM0HL\" INIT_08 = {}02;", leading),
    );
    assert_eq!(
        lines[0x88],
        format!("INST \"MEMORY/Mram_RAM0LH\" INIT_08 = {}03;", leading),
    );
    assert_eq!(
        lines[0xC8],
        format!("INST \"MEMORY/Mram_RAM0LL\" INIT_08 = {}04;", leading),
    );

    // Every other row stays unprogrammed
    let sentinel = "FF".repeat(WORDS_PER_ROW);
    let touched = [0x08, 0x48, 0x88, 0xC8];
    lines
        .iter()
        .enumerate()
        .filter(|(i, _)| !touched.contains(i))
        .for_each(|(_, l)| assert!(l.contains(&sentinel)));
}


#[test]
fn small_image_pads_with_sentinel() {
    // Images smaller than the full geometry read as unprogrammed beyond
    // their capacity
    let mut image = Image::new(0x100);
    image.write(0x00, 0x12).expect("failed to write");

    let statement = display::Statement {
        image: &image,
        block: 3,
        lane: Lane::LL,
        row: 0x3F,
    }.to_string();
    assert!(statement.contains(&"FF".repeat(WORDS_PER_ROW)));
}
