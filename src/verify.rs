//! Local verification of wallet-produced signatures.
//!
//! Solana signatures are plain ed25519, so a signature returned by the
//! wallet can be checked against the wallet's public key locally, without
//! another network round trip.

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// The address bytes do not form a valid ed25519 public key.
    #[error("Address is not a valid ed25519 public key: {0}")]
    Key(String),

    /// The signature does not match the message under the given key.
    #[error("Signature does not match the message")]
    Mismatch,
}

/// Verify that `signature` signs `message` under the wallet's `address`.
pub fn verify_wallet_signature(
    address: &Pubkey,
    message: &[u8],
    signature: &Signature,
) -> Result<(), VerifyError> {
    let key = VerifyingKey::from_bytes(&address.to_bytes())
        .map_err(|e| VerifyError::Key(e.to_string()))?;

    let mut signature_bytes = [0u8; 64];
    signature_bytes.copy_from_slice(signature.as_ref());
    let signature = DalekSignature::from_bytes(&signature_bytes);

    key.verify_strict(message, &signature)
        .map_err(|_| VerifyError::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::VERIFICATION_MESSAGE;
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;

    #[test]
    /// A signature produced by the wallet's key verifies against its address.
    fn signature_round_trip_verifies() {
        let keypair = Keypair::new();
        let message = VERIFICATION_MESSAGE.as_bytes();
        let signature = keypair.sign_message(message);

        assert!(verify_wallet_signature(&keypair.pubkey(), message, &signature).is_ok());
    }

    #[test]
    /// Flipping any single bit of the signature must break verification.
    fn tampered_signature_fails() {
        let keypair = Keypair::new();
        let message = VERIFICATION_MESSAGE.as_bytes();
        let signature = keypair.sign_message(message);
        let original: [u8; 64] = signature.as_ref().try_into().unwrap();

        for byte in 0..original.len() {
            for bit in 0..8 {
                let mut tampered = original;
                tampered[byte] ^= 1 << bit;
                let tampered = Signature::from(tampered);
                assert!(
                    verify_wallet_signature(&keypair.pubkey(), message, &tampered).is_err(),
                    "flipping bit {} of byte {} did not break verification",
                    bit,
                    byte
                );
            }
        }
    }

    #[test]
    /// A signature from one wallet must not verify under another address.
    fn wrong_key_fails() {
        let signer = Keypair::new();
        let other = Keypair::new();
        let message = VERIFICATION_MESSAGE.as_bytes();
        let signature = signer.sign_message(message);

        assert!(verify_wallet_signature(&other.pubkey(), message, &signature).is_err());
    }

    #[test]
    /// A signature over one message must not verify over another.
    fn tampered_message_fails() {
        let keypair = Keypair::new();
        let signature = keypair.sign_message(VERIFICATION_MESSAGE.as_bytes());

        assert!(
            verify_wallet_signature(&keypair.pubkey(), b"some other message", &signature).is_err()
        );
    }
}
