use sha2::{Digest, Sha256};

pub fn hash_256<T: AsRef<str>>(data: T) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_ref().as_bytes());
    let data = hasher.finalize();
    hex::encode(data)
}

/// Compares two byte strings without short-circuiting on the first mismatch.
pub fn eq_constant_time(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
