use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use crate::hash::HashAlgorithm;

pub const default_buffer_size: usize = 4096;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("buffer size must be at least one byte")]
    InvalidBufferSize,
}

/// Hashes everything `reader` yields, `buffer_size` bytes at a time.
pub fn hash_reader<H, R>(hasher: &mut H, mut reader: R, buffer_size: usize) -> io::Result<H::Output>
where
    H: HashAlgorithm,
    R: Read,
{
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total = 0u64;
    hasher.reset();
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update_all(&buffer[..read]);
        total += read as u64;
    }
    debug!(bytes = total, "stream exhausted");
    Ok(hasher.finalize())
}

pub fn hash_file<H: HashAlgorithm>(hasher: &mut H, path: &Path, buffer_size: usize) -> Result<H::Output, Error> {
    if buffer_size == 0 {
        return Err(Error::InvalidBufferSize);
    }
    let wrap = |source: io::Error| Error::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(wrap)?;
    debug!(path = %path.display(), buffer_size, "hashing file");
    hash_reader(hasher, file, buffer_size).map_err(wrap)
}
