use super::xor8;
use crate::cipher::Cipher;
use crate::error::{BlowfishError, Result};

/// Lazy CBC block producer returned by [`Cipher::encrypt_cbc`] /
/// [`Cipher::decrypt_cbc`].
pub struct CbcIter<'a> {
    cipher: &'a Cipher,
    data: &'a [u8],
    state: [u8; 8],
    pos: usize,
    encrypt: bool,
}

impl<'a> CbcIter<'a> {
    pub(crate) fn new(cipher: &'a Cipher, data: &'a [u8], iv: &[u8], encrypt: bool) -> Result<Self> {
        if data.is_empty() || data.len() % 8 != 0 {
            return Err(BlowfishError::InvalidDataLength(data.len()));
        }
        let state: [u8; 8] = iv
            .try_into()
            .map_err(|_| BlowfishError::InvalidIvLength(iv.len()))?;
        Ok(CbcIter {
            cipher,
            data,
            state,
            pos: 0,
            encrypt,
        })
    }
}

impl<'a> Iterator for CbcIter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let block = &self.data[self.pos..self.pos + 8];
        self.pos += 8;

        let out = if self.encrypt {
            let mixed = xor8(block, &self.state);
            let ciphertext = self.cipher.encrypt_block(&mixed).expect("8-byte block");
            self.state = ciphertext;
            ciphertext
        } else {
            let decrypted = self.cipher.decrypt_block(block).expect("8-byte block");
            let plaintext = xor8(&decrypted, &self.state);
            self.state.copy_from_slice(block);
            plaintext
        };

        Some(out.to_vec())
    }
}
