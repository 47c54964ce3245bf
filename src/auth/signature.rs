use ed25519_dalek::{Signature, VerifyingKey};
use tracing::{debug, warn};

/// Verify the Ed25519 detached signature on an inbound interaction request.
///
/// Discord signs `timestamp ++ raw_body` (byte concatenation, no separator)
/// and sends the signature in the `x-signature-ed25519` header. This check
/// must run before the body is interpreted as a command; it is the only
/// authentication gate in the service.
///
/// Fails closed: a signature that does not decode to exactly 64 bytes, a
/// public key that does not decode to exactly 32 bytes, or any non-hex
/// input returns `false` rather than an error. Key material is never logged.
pub fn verify_interaction_signature(
    signature_hex: &str,
    timestamp: &str,
    raw_body: &[u8],
    public_key_hex: &str,
) -> bool {
    let Ok(signature_bytes) = hex::decode(signature_hex) else {
        warn!("Interaction signature is not valid hex");
        return false;
    };
    let Ok(signature_array) = <[u8; 64]>::try_from(signature_bytes.as_slice()) else {
        warn!(len = signature_bytes.len(), "Interaction signature has wrong length");
        return false;
    };

    let Ok(key_bytes) = hex::decode(public_key_hex) else {
        warn!("Configured public key is not valid hex");
        return false;
    };
    let Ok(key_array) = <[u8; 32]>::try_from(key_bytes.as_slice()) else {
        warn!(len = key_bytes.len(), "Configured public key has wrong length");
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_array) else {
        warn!("Configured public key is not a valid Ed25519 point");
        return false;
    };

    let signature = Signature::from_bytes(&signature_array);

    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(raw_body);

    let verified = verifying_key.verify_strict(&message, &signature).is_ok();
    debug!(verified, "Interaction signature check completed");
    verified
}
