use crate::hash::*;

/// Reflected form of the Ethernet/gzip/PNG generator polynomial `0x04C11DB7`.
pub const DEFAULT_POLYNOMIAL: u32 = 0xedb88320;

const initial_state: u32 = u32::MAX;

pub const fn build_table(polynomial: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut e = i as u32;
        let mut bit = 0;
        while bit < 8 {
            if e & 1 == 1 {
                e = (e >> 1) ^ polynomial;
            } else {
                e >>= 1;
            }
            bit += 1;
        }
        table[i] = e;
        i += 1;
    }
    table
}

/// Table-driven CRC32 engine.
///
/// `finalize` only reads the running state, so calling it again without any
/// update in between returns the same checksum. Further updates extend the
/// same input; `reset` starts a new one.
#[derive(Debug, Clone)]
pub struct Crc32 {
    polynomial: u32,
    table: [u32; 256],
    state: u32,
    hash: Option<u32>,
}

impl Crc32 {
    pub fn new() -> Self {
        Self::with_polynomial(DEFAULT_POLYNOMIAL)
    }

    pub fn with_polynomial(polynomial: u32) -> Self {
        Self { polynomial, table: build_table(polynomial), state: initial_state, hash: None }
    }

    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    pub fn table(&self) -> &[u32; 256] {
        &self.table
    }

    /// Checksum published by the last `finalize`, if any since the last reset.
    pub fn hash(&self) -> Option<u32> {
        self.hash
    }

    pub fn hash_bytes(&self) -> Option<[u8; 4]> {
        self.hash.map(u32::to_le_bytes)
    }

    pub fn calculate(&self, bytes: &[u8]) -> u32 {
        !self.fold(initial_state, bytes)
    }

    fn fold(&self, state: u32, bytes: &[u8]) -> u32 {
        bytes.iter().fold(state, |state, byte| {
            (state >> 8) ^ self.table[((state ^ *byte as u32) & 0xff) as usize]
        })
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashAlgorithm for Crc32 {
    type Output = u32;

    const HASH_SIZE: usize = 32;

    fn reset(&mut self) {
        self.state = initial_state;
        self.hash = None;
    }

    fn update_all(&mut self, bytes: &[u8]) {
        self.state = self.fold(self.state, bytes);
    }

    fn finalize(&mut self) -> u32 {
        let hash = !self.state;
        self.hash = Some(hash);
        hash
    }
}
