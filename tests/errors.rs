//! Shape-validation failures across the handle and every mode constructor.
//! Every one of these must fail before any output is produced — none of
//! them should panic, and none should yield a partial block.

use blowfish_modes::{BlowfishError, Cipher};

const KEY: &[u8] = b"this ist ein key";

#[test]
fn key_length_out_of_range() {
    assert_eq!(
        Cipher::new(&[0u8; 3]).unwrap_err(),
        BlowfishError::InvalidKeyLength(3)
    );
    assert_eq!(
        Cipher::new(&[0u8; 57]).unwrap_err(),
        BlowfishError::InvalidKeyLength(57)
    );
}

#[test]
fn ecb_rejects_non_multiple_of_block_size() {
    let cipher = Cipher::new(KEY).unwrap();
    assert_eq!(
        cipher.encrypt_ecb(&[0u8; 15]).unwrap_err(),
        BlowfishError::InvalidDataLength(15)
    );
    assert_eq!(
        cipher.decrypt_ecb(&[]).unwrap_err(),
        BlowfishError::InvalidDataLength(0)
    );
}

#[test]
fn cbc_and_pcbc_reject_bad_iv_and_data_length() {
    let cipher = Cipher::new(KEY).unwrap();

    assert_eq!(
        cipher.encrypt_cbc(&[0u8; 16], &[0u8; 7]).unwrap_err(),
        BlowfishError::InvalidIvLength(7)
    );
    assert_eq!(
        cipher.encrypt_cbc(&[0u8; 10], &[0u8; 8]).unwrap_err(),
        BlowfishError::InvalidDataLength(10)
    );
    assert_eq!(
        cipher.encrypt_pcbc(&[0u8; 16], &[0u8; 9]).unwrap_err(),
        BlowfishError::InvalidIvLength(9)
    );
}

#[test]
fn cfb_and_ofb_accept_arbitrary_length_but_still_validate_iv() {
    let cipher = Cipher::new(KEY).unwrap();

    assert!(cipher.encrypt_cfb(&[0u8; 0], &[0u8; 8]).is_ok());
    assert!(cipher.encrypt_cfb(&[0u8; 13], &[0u8; 8]).is_ok());
    assert_eq!(
        cipher.encrypt_cfb(&[0u8; 13], &[0u8; 6]).unwrap_err(),
        BlowfishError::InvalidIvLength(6)
    );

    assert!(cipher.encrypt_ofb(&[0u8; 0], &[0u8; 8]).is_ok());
    assert!(cipher.encrypt_ofb(&[0u8; 13], &[0u8; 8]).is_ok());
    assert_eq!(
        cipher.encrypt_ofb(&[0u8; 13], &[0u8; 6]).unwrap_err(),
        BlowfishError::InvalidIvLength(6)
    );
}

#[test]
fn ctr_accepts_arbitrary_length_and_fails_lazily_on_exhaustion() {
    let cipher = Cipher::new(KEY).unwrap();

    let mut results = cipher.encrypt_ctr(&[0u8; 13], std::iter::empty());
    assert_eq!(
        results.next().unwrap().unwrap_err(),
        BlowfishError::InvalidDataLength(13)
    );
    assert!(results.next().is_none());
}

#[test]
fn block_ops_reject_wrong_length() {
    let cipher = Cipher::new(KEY).unwrap();
    assert_eq!(
        cipher.encrypt_block(&[0u8; 7]).unwrap_err(),
        BlowfishError::InvalidBlockLength(7)
    );
    assert_eq!(
        cipher.decrypt_block(&[0u8; 9]).unwrap_err(),
        BlowfishError::InvalidBlockLength(9)
    );
}
