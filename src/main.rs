mod psf_reader;
mod file_reader;
mod header_writer;

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::process;

use flate2::read::GzDecoder;

use crate::header_writer::write_header;
use crate::psf_reader::psfreader;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <font.psfu[.gz]>", args[0]);
        process::exit(1);
    }
    let path = &args[1];

    let data = load_font(path).unwrap();

    let font = match psfreader(&data) {
        Ok(font) => font,
        Err(err) => {
            eprintln!("{}: {}", err, path);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    write_header(&font, &mut stdout.lock()).unwrap();
}

fn load_font(path: &str) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    read_font(file, path.ends_with(".gz"))
}

// Compression is keyed off the path suffix alone, never the stream contents.
fn read_font<R: Read>(mut input: R, gzipped: bool) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if gzipped {
        GzDecoder::new(input).read_to_end(&mut data)?;
    } else {
        input.read_to_end(&mut data)?;
    }
    Ok(data)
}
