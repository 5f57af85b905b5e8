use super::xor_truncated;
use crate::cipher::Cipher;
use crate::error::{BlowfishError, Result as BfResult};

/// Lazy CTR block producer returned by [`Cipher::encrypt_ctr`] /
/// [`Cipher::decrypt_ctr`].
///
/// Unlike the other five modes, CTR's external resource — the counter
/// sequence — is an arbitrary caller-supplied iterator that can run dry
/// before the data does. That failure can only be observed while
/// streaming, so this iterator yields `Result<Vec<u8>, BlowfishError>`
/// rather than a bare `Vec<u8>`. Once it yields an `Err`, the operation has
/// reached its terminal failed state and every later call returns `None`.
pub struct CtrIter<'a, C: Iterator<Item = u64>> {
    cipher: &'a Cipher,
    data: &'a [u8],
    counters: C,
    pos: usize,
    failed: bool,
}

impl<'a, C: Iterator<Item = u64>> CtrIter<'a, C> {
    pub(crate) fn new(cipher: &'a Cipher, data: &'a [u8], counters: C) -> Self {
        CtrIter {
            cipher,
            data,
            counters,
            pos: 0,
            failed: false,
        }
    }
}

impl<'a, C: Iterator<Item = u64>> Iterator for CtrIter<'a, C> {
    type Item = BfResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }
        let end = (self.pos + 8).min(self.data.len());
        let chunk = &self.data[self.pos..end];

        let Some(counter) = self.counters.next() else {
            self.failed = true;
            return Some(Err(BlowfishError::InvalidDataLength(
                self.data.len() - self.pos,
            )));
        };
        self.pos = end;

        let keystream = self
            .cipher
            .encrypt_block(&counter.to_be_bytes())
            .expect("8-byte block");
        Some(Ok(xor_truncated(chunk, &keystream)))
    }
}
