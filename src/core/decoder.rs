use crate::core::BatchRequest;
use crate::utils::error::{CheckError, Result};

/// Decodes a raw request body. Whitespace-only bodies count as empty.
///
/// Only the first JSON value is read; anything after it is ignored.
pub fn decode_request(body: &[u8]) -> Result<BatchRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CheckError::EmptyBody);
    }

    match serde_json::Deserializer::from_slice(body)
        .into_iter::<BatchRequest>()
        .next()
    {
        Some(request) => request.map_err(CheckError::Decode),
        None => Err(CheckError::EmptyBody),
    }
}
