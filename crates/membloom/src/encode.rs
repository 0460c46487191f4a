//! Default key encoder
//!
//! Keys are turned into bytes with bincode over their serde representation.
//! Bincode output for a given value is deterministic, which the filter's
//! no-false-negative guarantee depends on.

use serde::Serialize;

use crate::error::FilterError;
use crate::ports::KeyEncoder;

/// Encodes any `T: Serialize` key through bincode.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeEncoder;

impl<T: Serialize> KeyEncoder<T> for BincodeEncoder {
    fn encode(&self, key: &T) -> Result<Vec<u8>, FilterError> {
        bincode::serialize(key).map_err(|source| FilterError::Encoding(source.to_string()))
    }
}
