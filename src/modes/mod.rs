//! The six streaming modes of operation layered on top of [`crate::Cipher`].
//!
//! Each `encrypt_X`/`decrypt_X` constructor performs every up-front shape
//! check it can (IV length, data length) and hands back an iterator that
//! yields one block's worth of output per `next()` call. ECB, CBC, PCBC,
//! CFB and OFB can only fail at construction time, so their iterators are
//! infallible (`Item = Vec<u8>`) — every shape check already happened
//! before the first block. CTR's external resource is a caller-supplied
//! counter sequence of unbounded length, so it alone can fail mid-stream if
//! that sequence runs dry before the data does; its iterator therefore
//! yields `Item = Result<Vec<u8>, BlowfishError>`.

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
mod pcbc;

pub use cbc::CbcIter;
pub use cfb::CfbIter;
pub use ctr::CtrIter;
pub use ecb::EcbIter;
pub use ofb::OfbIter;
pub use pcbc::PcbcIter;

use crate::cipher::Cipher;
use crate::error::Result;

pub(crate) fn xor8(a: &[u8], b: &[u8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    for i in 0..8 {
        out[i] = a[i] ^ b[i];
    }
    out
}

pub(crate) fn xor_truncated(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    data.iter().zip(keystream).map(|(d, k)| d ^ k).collect()
}

impl Cipher {
    /// Electronic codebook mode. `data` must be a positive multiple of 8
    /// bytes; every block is encrypted independently.
    pub fn encrypt_ecb<'a>(&'a self, data: &'a [u8]) -> Result<EcbIter<'a>> {
        EcbIter::new(self, data, Cipher::encrypt_block)
    }

    /// Inverse of [`Cipher::encrypt_ecb`].
    pub fn decrypt_ecb<'a>(&'a self, data: &'a [u8]) -> Result<EcbIter<'a>> {
        EcbIter::new(self, data, Cipher::decrypt_block)
    }

    /// Cipher block chaining. `data` must be a positive multiple of 8
    /// bytes; `iv` must be exactly 8 bytes.
    pub fn encrypt_cbc<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<CbcIter<'a>> {
        CbcIter::new(self, data, iv, true)
    }

    /// Inverse of [`Cipher::encrypt_cbc`].
    pub fn decrypt_cbc<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<CbcIter<'a>> {
        CbcIter::new(self, data, iv, false)
    }

    /// Plaintext-ciphertext block chaining. Same length constraints as CBC.
    pub fn encrypt_pcbc<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<PcbcIter<'a>> {
        PcbcIter::new(self, data, iv, true)
    }

    /// Inverse of [`Cipher::encrypt_pcbc`].
    pub fn decrypt_pcbc<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<PcbcIter<'a>> {
        PcbcIter::new(self, data, iv, false)
    }

    /// 8-byte cipher feedback. `iv` must be exactly 8 bytes; `data` may be
    /// any length, including one that isn't a multiple of 8 — the final
    /// short block is emitted truncated to its actual length.
    pub fn encrypt_cfb<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<CfbIter<'a>> {
        CfbIter::new(self, data, iv, true)
    }

    /// Inverse of [`Cipher::encrypt_cfb`].
    pub fn decrypt_cfb<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<CfbIter<'a>> {
        CfbIter::new(self, data, iv, false)
    }

    /// Output feedback. `iv` must be exactly 8 bytes; `data` may be any
    /// length. Encryption and decryption are the same function, since the
    /// keystream never depends on the data.
    pub fn encrypt_ofb<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<OfbIter<'a>> {
        OfbIter::new(self, data, iv)
    }

    /// Same function as [`Cipher::encrypt_ofb`].
    pub fn decrypt_ofb<'a>(&'a self, data: &'a [u8], iv: &[u8]) -> Result<OfbIter<'a>> {
        OfbIter::new(self, data, iv)
    }

    /// Counter mode. `data` may be any length. `counters` supplies one
    /// 64-bit counter block per output block; see [`crate::ctr_counter`]
    /// for the canonical nonce-plus-index construction. Encryption and
    /// decryption are the same function.
    pub fn encrypt_ctr<'a, C>(&'a self, data: &'a [u8], counters: C) -> CtrIter<'a, C>
    where
        C: Iterator<Item = u64>,
    {
        CtrIter::new(self, data, counters)
    }

    /// Same function as [`Cipher::encrypt_ctr`].
    pub fn decrypt_ctr<'a, C>(&'a self, data: &'a [u8], counters: C) -> CtrIter<'a, C>
    where
        C: Iterator<Item = u64>,
    {
        CtrIter::new(self, data, counters)
    }
}
