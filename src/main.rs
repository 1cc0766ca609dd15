//! Command line utility generating RAM initialization data from S-format
//! object files

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process;

use log::debug;

use genram::image::Image;
use genram::{object, pattern};


/// Name of the generated constraints file
const OUTPUT_NAME: &str = "ram.dat";


fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let filename = match (args.next(), args.next()) {
        (Some(filename), None) => filename,
        _ => {
            print_usage();
            process::exit(1);
        },
    };

    debug!("reading S-format object file {}", filename);
    let input = match File::open(&filename) {
        Ok(file) => BufReader::new(file),
        Err(err) => {
            eprintln!("ERROR: cannot open {}: {}", filename, err);
            process::exit(2);
        },
    };

    let mut image = Image::new(pattern::IMAGE_SIZE);
    if let Err(err) = object::read(input, &mut image) {
        eprintln!("ERROR: {}", err);
        process::exit(2);
    }

    debug!("writing initialization patterns to {}", OUTPUT_NAME);
    let mut output = match File::create(OUTPUT_NAME) {
        Ok(file) => BufWriter::new(file),
        Err(err) => {
            eprintln!("ERROR: cannot open {}: {}", OUTPUT_NAME, err);
            process::exit(3);
        },
    };

    let res = pattern::write(&image, &mut output).and_then(|_| output.flush());
    if let Err(err) = res {
        eprintln!("ERROR: cannot write {}: {}", OUTPUT_NAME, err);
        process::exit(3);
    }
}


/// Print the usage banner
fn print_usage() {
    println!();
    println!("====================================================");
    println!("==== Generate RAM Initialize Data from S-Format ====");
    println!("====================================================");
    println!("[Command Usage]");
    println!("    genram [filename]");
    println!();
    println!("        [filename] : (Input ) Binary File Name of Motorola S-Format.");
    println!("        ram.dat    : (Output) Constraints Data (Append it to *.ucf.)");
    println!();
}
