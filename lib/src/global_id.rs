//! Relay global ID codec.
//!
//! A global ID is standard base64 of `"TypeName:localID"`. It is opaque
//! to clients and lets any entity be refetched through the single
//! `node(id)` query field.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// A global ID the codec could not reverse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlobalIdError {
    #[error("global ID is not valid base64")]
    NotBase64,
    #[error("global ID does not decode to UTF-8 text")]
    NotUtf8,
    #[error("global ID is missing the ':' separator")]
    MissingSeparator,
}

/// Encode a `(type name, local ID)` pair into an opaque global ID.
///
/// Deterministic: the same inputs always produce the same output.
/// Distinct pairs never collide as long as the type name contains no
/// `:` (ours are `Game` and `HidingSpot`).
pub fn encode_global_id(type_name: &str, local_id: &str) -> String {
    STANDARD.encode(format!("{type_name}:{local_id}"))
}

/// Decode a global ID back into its `(type name, local ID)` pair.
pub fn decode_global_id(global_id: &str) -> Result<(String, String), GlobalIdError> {
    let bytes = STANDARD
        .decode(global_id)
        .map_err(|_| GlobalIdError::NotBase64)?;
    let text = String::from_utf8(bytes).map_err(|_| GlobalIdError::NotUtf8)?;
    let (type_name, local_id) = text
        .split_once(':')
        .ok_or(GlobalIdError::MissingSeparator)?;
    Ok((type_name.to_string(), local_id.to_string()))
}
