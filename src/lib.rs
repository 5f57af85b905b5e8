//! A self-contained implementation of the Blowfish 64-bit block cipher and
//! the standard block-cipher modes of operation built on top of it: ECB,
//! CBC, PCBC, CFB, OFB and CTR.
//!
//! ```
//! use blowfish_modes::Cipher;
//!
//! let cipher = Cipher::new(b"verysecretpasswd").unwrap();
//! let ciphertext = cipher.encrypt_block(b"abcd1234").unwrap();
//! let plaintext = cipher.decrypt_block(&ciphertext).unwrap();
//! assert_eq!(&plaintext, b"abcd1234");
//! ```
//!
//! The cipher is bit-exact against Bruce Schneier's published test vectors
//! (<https://www.schneier.com/code/vectors.txt>); see the test module in
//! `src/cipher.rs`. It takes no dependencies and makes no claims beyond the
//! algorithm itself: no authenticated encryption, no padding, no key
//! derivation, no constant-time guarantees beyond what Blowfish naturally
//! gives.

mod cipher;
mod consts;
mod counter;
mod error;
mod modes;

pub use cipher::{Block, Cipher};
pub use counter::ctr_counter;
pub use error::{BlowfishError, Result};
pub use modes::{CbcIter, CfbIter, CtrIter, EcbIter, OfbIter, PcbcIter};
