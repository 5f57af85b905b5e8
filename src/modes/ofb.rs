use super::xor_truncated;
use crate::cipher::Cipher;
use crate::error::{BlowfishError, Result};

/// Lazy OFB (output feedback) block producer returned by
/// [`Cipher::encrypt_ofb`] / [`Cipher::decrypt_ofb`]. The keystream never
/// depends on the data, so encryption and decryption are the same function.
pub struct OfbIter<'a> {
    cipher: &'a Cipher,
    data: &'a [u8],
    state: [u8; 8],
    pos: usize,
}

impl<'a> OfbIter<'a> {
    pub(crate) fn new(cipher: &'a Cipher, data: &'a [u8], iv: &[u8]) -> Result<Self> {
        let state: [u8; 8] = iv
            .try_into()
            .map_err(|_| BlowfishError::InvalidIvLength(iv.len()))?;
        Ok(OfbIter {
            cipher,
            data,
            state,
            pos: 0,
        })
    }
}

impl<'a> Iterator for OfbIter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let end = (self.pos + 8).min(self.data.len());
        let chunk = &self.data[self.pos..end];
        self.pos = end;

        let keystream = self.cipher.encrypt_block(&self.state).expect("8-byte block");
        self.state = keystream;

        Some(xor_truncated(chunk, &keystream))
    }
}
