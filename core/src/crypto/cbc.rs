// ## 📂 File: `src/crypto/cbc.rs`

//! crypto/cbc.rs
//! AES-128-CBC with PKCS#7 padding.
//!
//! Design notes:
//! - The IV is one AES block, generated from the OS RNG for every call.
//! - Sealed layout is `[iv (16)][ciphertext (16·n)]`; the IV travels in clear.
//! - Never reuse an IV with the same key; callers do not pick IVs.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::IV_LEN_16;
use crate::crypto::key::EncryptionKey;
use crate::crypto::types::CryptoError;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Fresh random IV.
#[inline]
pub fn generate_iv() -> [u8; IV_LEN_16] {
    let mut iv = [0u8; IV_LEN_16];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt `plaintext`, padding the final block.
pub fn encrypt_cbc(key: &EncryptionKey, iv: &[u8; IV_LEN_16], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128CbcEnc::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| CryptoError::InvalidKeyFormat(e.to_string()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt `ciphertext` and strip padding.
pub fn decrypt_cbc(key: &EncryptionKey, iv: &[u8; IV_LEN_16], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| CryptoError::InvalidKeyFormat(e.to_string()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Decryption(format!("bad padding or length ({} ciphertext bytes)", ciphertext.len())))
}

/// `[iv][ciphertext]` with a fresh IV.
pub fn seal(key: &EncryptionKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let iv = generate_iv();
    let ciphertext = encrypt_cbc(key, &iv, plaintext)?;

    let mut out = Vec::with_capacity(IV_LEN_16 + ciphertext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Inverse of `seal`.
pub fn open(key: &EncryptionKey, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < IV_LEN_16 {
        return Err(CryptoError::TruncatedIv { expected: IV_LEN_16, actual: sealed.len() });
    }
    let (iv, ciphertext) = sealed.split_at(IV_LEN_16);
    let mut iv_block = [0u8; IV_LEN_16];
    iv_block.copy_from_slice(iv);
    decrypt_cbc(key, &iv_block, ciphertext)
}
