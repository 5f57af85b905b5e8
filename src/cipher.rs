use crate::consts;
use crate::error::{BlowfishError, Result};

/// One 64-bit block: two big-endian 32-bit halves.
pub type Block = [u8; 8];

/// A fully expanded Blowfish key schedule.
///
/// Construction runs the 521-encryption key-schedule bootstrap once; after
/// that the handle is immutable and may be shared freely across any number
/// of concurrent block or mode operations — each such operation carries its
/// own feedback state and never mutates the handle.
pub struct Cipher {
    pbox: [u32; 18],
    sbox: [[u32; 256]; 4],
}

impl Cipher {
    /// Builds a cipher handle from a 4-to-56-byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() < 4 || key.len() > 56 {
            return Err(BlowfishError::InvalidKeyLength(key.len()));
        }

        let mut cipher = Cipher {
            pbox: consts::PBOX,
            sbox: [consts::SBOX0, consts::SBOX1, consts::SBOX2, consts::SBOX3],
        };
        cipher.key_schedule(key);
        Ok(cipher)
    }

    /// Encrypts one block given as separate 32-bit halves, in place.
    #[inline(always)]
    pub fn encrypt_lr(&self, l: &mut u32, r: &mut u32) {
        for i in (0..16).step_by(2) {
            *l ^= self.pbox[i];
            *r ^= self.f(*l);
            *r ^= self.pbox[i + 1];
            *l ^= self.f(*r);
        }

        *l ^= self.pbox[16];
        *r ^= self.pbox[17];

        std::mem::swap(l, r);
    }

    /// Decrypts one block given as separate 32-bit halves, in place.
    #[inline(always)]
    pub fn decrypt_lr(&self, l: &mut u32, r: &mut u32) {
        for i in (0..16).step_by(2).rev() {
            *l ^= self.pbox[i + 3];
            *r ^= self.f(*l);
            *r ^= self.pbox[i + 2];
            *l ^= self.f(*r);
        }

        *l ^= self.pbox[1];
        *r ^= self.pbox[0];

        std::mem::swap(l, r);
    }

    /// The Blowfish F-function: splits a 32-bit word into four bytes
    /// (most- to least-significant) and combines their S-box lookups as
    /// `((S0[a] + S1[b]) XOR S2[c]) + S3[d]`, all arithmetic mod 2^32.
    #[inline(always)]
    fn f(&self, x: u32) -> u32 {
        let [a, b, c, d] = x.to_be_bytes();
        let a = self.sbox[0][a as usize];
        let b = self.sbox[1][b as usize];
        let c = self.sbox[2][c as usize];
        let d = self.sbox[3][d as usize];
        (a.wrapping_add(b) ^ c).wrapping_add(d)
    }

    /// Encrypts one 8-byte block.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        let (mut l, mut r) = split_block(block)?;
        self.encrypt_lr(&mut l, &mut r);
        Ok(join_block(l, r))
    }

    /// Decrypts one 8-byte block.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        let (mut l, mut r) = split_block(block)?;
        self.decrypt_lr(&mut l, &mut r);
        Ok(join_block(l, r))
    }

    fn key_schedule(&mut self, key: &[u8]) {
        let mut key_bytes = key.iter().copied().cycle();

        for slot in self.pbox.iter_mut() {
            let subkey = (0..4).fold(0u32, |acc, _| {
                (acc << 8) | key_bytes.next().expect("cycle never ends") as u32
            });
            *slot ^= subkey;
        }

        let mut l = 0u32;
        let mut r = 0u32;

        for i in (0..18).step_by(2) {
            self.encrypt_lr(&mut l, &mut r);
            self.pbox[i] = l;
            self.pbox[i + 1] = r;
        }

        for box_idx in 0..4 {
            for j in (0..256).step_by(2) {
                self.encrypt_lr(&mut l, &mut r);
                self.sbox[box_idx][j] = l;
                self.sbox[box_idx][j + 1] = r;
            }
        }
    }
}

fn split_block(block: &[u8]) -> Result<(u32, u32)> {
    let block: &Block = block
        .try_into()
        .map_err(|_| BlowfishError::InvalidBlockLength(block.len()))?;
    let l = u32::from_be_bytes(block[..4].try_into().unwrap());
    let r = u32::from_be_bytes(block[4..].try_into().unwrap());
    Ok((l, r))
}

fn join_block(l: u32, r: u32) -> Block {
    let mut block = [0u8; 8];
    block[..4].copy_from_slice(&l.to_be_bytes());
    block[4..].copy_from_slice(&r.to_be_bytes());
    block
}
