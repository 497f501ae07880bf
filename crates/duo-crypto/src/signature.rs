//! BIP-340 Schnorr sign/verify/derive over secp256k1.
//!
//! A process-wide secp256k1 context is needed by every signing and
//! verification call; rather than building one per call (expensive)
//! or threading one through every function, this crate uses the
//! `secp256k1` crate's `global-context` feature, which lazily
//! initializes a single `Secp256k1<All>` the first time it is
//! touched and hands out `&'static` references to it thereafter.

use crate::error::CryptoError;
use crate::hash::sha256;
use duo_primitives::{PrivateKey, PublicKey, Signature};
use secp256k1::{rand, Keypair, Message, SecretKey, XOnlyPublicKey};

fn secp() -> &'static secp256k1::Secp256k1<secp256k1::All> {
    secp256k1::SECP256K1
}

/// Generate a new private key from the system CSPRNG.
pub fn generate_private_key() -> PrivateKey {
    let (secret_key, _) = secp().generate_keypair(&mut rand::thread_rng());
    PrivateKey::from_bytes(secret_key.secret_bytes())
}

/// Derive the x-only public key for a private key.
pub fn derive_public_key(private_key: &PrivateKey) -> Result<PublicKey, CryptoError> {
    let secret_key = SecretKey::from_slice(private_key.as_bytes())
        .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
    let keypair = Keypair::from_secret_key(secp(), &secret_key);
    let (x_only, _parity) = keypair.x_only_public_key();
    Ok(PublicKey::from_bytes(x_only.serialize()))
}

/// Sign `msg_bytes` with `private_key`. The signer's input digest is
/// `sha256(msg_bytes)`, not `msg_bytes` itself.
pub fn sign(msg_bytes: &[u8], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
    let secret_key = SecretKey::from_slice(private_key.as_bytes())
        .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
    let keypair = Keypair::from_secret_key(secp(), &secret_key);
    let digest = sha256(msg_bytes);
    let message = Message::from_digest(*digest.as_bytes());
    let sig = secp().sign_schnorr(&message, &keypair);
    Ok(Signature::from_bytes(sig.serialize()))
}

/// Verify that `signature` over `sha256(msg_bytes)` is valid under
/// `public_key`.
pub fn verify(msg_bytes: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(x_only) = XOnlyPublicKey::from_slice(public_key.as_bytes()) else {
        return false;
    };
    let Ok(sig) = secp256k1::schnorr::Signature::from_slice(signature.as_bytes()) else {
        return false;
    };
    let digest = sha256(msg_bytes);
    let message = Message::from_digest(*digest.as_bytes());
    secp().verify_schnorr(&sig, &message, &x_only).is_ok()
}
