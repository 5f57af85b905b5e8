/// Deterministic stand-in for `os.urandom` so the test suite doesn't need a
/// `rand` dependency: a small xorshift64 generator seeded from a fixed
/// constant, good enough to produce non-trivial payloads for round-trip
/// tests without any external randomness source.
pub struct Xorshift64(u64);

impl Xorshift64 {
    pub fn seeded(seed: u64) -> Self {
        Xorshift64(seed | 1)
    }

    pub fn bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            out.extend_from_slice(&self.0.to_le_bytes());
        }
        out.truncate(len);
        out
    }
}
