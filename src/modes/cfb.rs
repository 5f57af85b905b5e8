use super::xor_truncated;
use crate::cipher::Cipher;
use crate::error::{BlowfishError, Result};

/// Lazy CFB (8-byte cipher feedback) block producer returned by
/// [`Cipher::encrypt_cfb`] / [`Cipher::decrypt_cfb`]. The encrypt function
/// `E` is used in both directions — this is the defining CFB property.
pub struct CfbIter<'a> {
    cipher: &'a Cipher,
    data: &'a [u8],
    state: [u8; 8],
    pos: usize,
    encrypt: bool,
}

impl<'a> CfbIter<'a> {
    pub(crate) fn new(cipher: &'a Cipher, data: &'a [u8], iv: &[u8], encrypt: bool) -> Result<Self> {
        let state: [u8; 8] = iv
            .try_into()
            .map_err(|_| BlowfishError::InvalidIvLength(iv.len()))?;
        Ok(CfbIter {
            cipher,
            data,
            state,
            pos: 0,
            encrypt,
        })
    }
}

impl<'a> Iterator for CfbIter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let end = (self.pos + 8).min(self.data.len());
        let chunk = &self.data[self.pos..end];
        self.pos = end;

        let keystream = self.cipher.encrypt_block(&self.state).expect("8-byte block");
        let out = xor_truncated(chunk, &keystream);

        // Full blocks feed the shift register; the trailing partial block
        // (if any) is always last, so there is nothing left to feed.
        if chunk.len() == 8 {
            self.state = if self.encrypt {
                out.as_slice().try_into().unwrap()
            } else {
                chunk.try_into().unwrap()
            };
        }

        Some(out)
    }
}
