use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("range {offset}+{length} is outside of the {available} supplied bytes")]
    OutOfRange {
        offset: usize,
        length: usize,
        available: usize,
    },
}

/// Incremental hash over a byte sequence.
///
/// Bytes are fed through any number of `update` calls between a `reset` and a
/// `finalize`; how the input is split into calls never changes the result.
pub trait HashAlgorithm {
    type Output: Copy;

    /// Size of the produced hash in bits.
    const HASH_SIZE: usize;

    fn reset(&mut self);

    /// Folds every byte of `bytes` into the running state.
    fn update_all(&mut self, bytes: &[u8]);

    fn finalize(&mut self) -> Self::Output;

    /// Folds `bytes[offset .. offset + length]` into the running state, or
    /// leaves it untouched when the range runs past the end of `bytes`.
    fn update(&mut self, bytes: &[u8], offset: usize, length: usize) -> Result<()> {
        self.update_all(sub_range(bytes, offset, length)?);
        Ok(())
    }

    /// Hashes every chunk of `source` in order, starting from a fresh state.
    fn compute_hash<I>(&mut self, source: I) -> Self::Output
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.reset();
        for chunk in source {
            self.update_all(chunk.as_ref());
        }
        self.finalize()
    }
}

/// Resolves `offset` and `length` against `bytes`, refusing anything past its end.
pub fn sub_range(bytes: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    offset
        .checked_add(length)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(HashError::OutOfRange { offset, length, available: bytes.len() })
}
