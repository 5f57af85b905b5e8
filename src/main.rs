use blowfish_modes::Cipher;

fn main() {
    let cipher = Cipher::new(b"verysecretpasswd").unwrap();

    let ciphertext = cipher.encrypt_block(b"abcd1234").unwrap();
    println!("block:  {ciphertext:02x?}");

    let iv = [0u8; 8];
    let message = b"a message that is exactly multiple of 8!";
    let encrypted: Vec<u8> = cipher
        .encrypt_cbc(message, &iv)
        .unwrap()
        .flatten()
        .collect();
    println!("cbc:    {encrypted:02x?}");
}
