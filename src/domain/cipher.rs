//! Authenticated note encryption
//!
//! Notes are sealed with AES-GCM using a fresh random 12-byte nonce per
//! call. The stored form is `base64(nonce || ciphertext || tag)`, so each
//! encrypted value is self-contained and safe to keep in a TEXT column.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{Result, SealnoteError};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Nonce size shared by all supported AES-GCM variants.
const NONCE_LEN: usize = 12;

/// AES-GCM cipher keyed from the raw config key bytes.
/// The key length picks the variant: 16 → AES-128, 24 → AES-192, 32 → AES-256.
pub enum NoteCipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl NoteCipher {
    /// Build a cipher from raw key bytes taken verbatim from the config.
    /// Any unsupported length is a fatal misconfiguration.
    pub fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            16 => Aes128Gcm::new_from_slice(key).map(NoteCipher::Aes128),
            24 => Aes192Gcm::new_from_slice(key).map(NoteCipher::Aes192),
            32 => Aes256Gcm::new_from_slice(key).map(NoteCipher::Aes256),
            n => return Err(SealnoteError::KeyLength(n)),
        }
        .map_err(|_| SealnoteError::KeyLength(key.len()))
    }

    /// Encrypt a plaintext note into its text-safe stored form.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let sealed = match self {
            NoteCipher::Aes128(cipher) => seal(cipher, plaintext.as_bytes())?,
            NoteCipher::Aes192(cipher) => seal(cipher, plaintext.as_bytes())?,
            NoteCipher::Aes256(cipher) => seal(cipher, plaintext.as_bytes())?,
        };
        Ok(BASE64.encode(sealed))
    }

    /// Decrypt a stored note back into plaintext.
    ///
    /// Fails with a typed error on bad base64, truncated input or
    /// authentication failure; no unauthenticated plaintext ever escapes.
    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let sealed = BASE64.decode(encoded).map_err(|_| SealnoteError::Decrypt)?;
        let plaintext = match self {
            NoteCipher::Aes128(cipher) => open(cipher, &sealed)?,
            NoteCipher::Aes192(cipher) => open(cipher, &sealed)?,
            NoteCipher::Aes256(cipher) => open(cipher, &sealed)?,
        };
        Ok(String::from_utf8(plaintext)?)
    }
}

fn seal<C>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + AeadCore<NonceSize = U12>,
{
    let nonce = C::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| SealnoteError::Encrypt)?;
    let mut sealed = nonce.to_vec();
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

fn open<C>(cipher: &C, sealed: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + AeadCore<NonceSize = U12>,
{
    if sealed.len() < NONCE_LEN {
        return Err(SealnoteError::Decrypt);
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| SealnoteError::Decrypt)
}
