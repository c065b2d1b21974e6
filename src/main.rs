#![allow(nonstandard_style)]
use std::ffi::OsString;
use std::path::PathBuf;
use clap::Parser;
use crc32::args::*;
use crc32::crc::*;
use crc32::display::*;
use crc32::stream::*;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const exit_success: i32 = 0;
const exit_io: i32 = 1;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    ///Print the checksum in decimal
    #[arg(long, overrides_with = "dec")]
    dec: bool,

    ///Print the checksum in uppercase hex
    #[arg(long, overrides_with = "hex")]
    hex: bool,

    ///Print the checksum in lowercase hex
    #[arg(long, overrides_with = "lowerhex")]
    lowerhex: bool,

    ///Reflected polynomial in hex
    #[arg(long, value_parser = parse_polynomial, default_value = "0xEDB88320")]
    polynomial: u32,

    ///Number of bytes read from the file at a time
    #[arg(long, value_parser = parse_buffer_size, default_value_t = default_buffer_size)]
    buffer_size: usize,

    //File to be hashed
    paths: Vec<PathBuf>,
}

fn main() {
    init_tracing();
    std::process::exit(run(wild::args_os()));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CRC32_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(args: impl IntoIterator<Item = OsString>) -> i32 {
    let args = match Args::try_parse_from(normalize(args)) {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return exit_success;
        }
        Err(e) => {
            debug!(error = %e, "unusable arguments");
            println!("{}", usage());
            return exit_success;
        }
    };

    let (Some(form), [path]) = (Form::select(args.dec, args.hex, args.lowerhex), args.paths.as_slice()) else {
        println!("{}", usage());
        return exit_success;
    };

    let mut crc = Crc32::with_polynomial(args.polynomial);
    match hash_file(&mut crc, path, args.buffer_size) {
        Ok(hash) => {
            info!(path = %path.display(), hash, "hashed file");
            println!("{}", render(path, hash, form));
            exit_success
        }
        Err(e) => {
            error!(error = %e, "hashing failed");
            eprintln!("error: {e}");
            exit_io
        }
    }
}
