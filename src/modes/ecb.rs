use crate::cipher::{Block, Cipher};
use crate::error::{BlowfishError, Result};

/// Lazy ECB block producer returned by [`Cipher::encrypt_ecb`] /
/// [`Cipher::decrypt_ecb`]. Every block is encrypted or decrypted
/// independently, with no feedback between blocks.
pub struct EcbIter<'a> {
    cipher: &'a Cipher,
    data: &'a [u8],
    pos: usize,
    op: fn(&Cipher, &[u8]) -> Result<Block>,
}

impl<'a> EcbIter<'a> {
    pub(crate) fn new(
        cipher: &'a Cipher,
        data: &'a [u8],
        op: fn(&Cipher, &[u8]) -> Result<Block>,
    ) -> Result<Self> {
        if data.is_empty() || data.len() % 8 != 0 {
            return Err(BlowfishError::InvalidDataLength(data.len()));
        }
        Ok(EcbIter {
            cipher,
            data,
            pos: 0,
            op,
        })
    }
}

impl<'a> Iterator for EcbIter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let block = &self.data[self.pos..self.pos + 8];
        self.pos += 8;
        Some((self.op)(self.cipher, block).expect("block length already validated").to_vec())
    }
}
