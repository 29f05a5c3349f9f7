use serde_json::Value;

use super::BodySerializer;
use crate::error::{Error, Result};

/// JSON wire format backed by `serde_json`.
///
/// Bodies must be a container (object or array) at the top level; bare
/// scalars are rejected before conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl BodySerializer for JsonSerializer {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            return Err(Error::Encoding(
                "top-level value must be an object or array".to_string(),
            ));
        }
        serde_json::to_vec(value).map_err(|e| Error::Encoding(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        serde_json::from_slice(bytes).map_err(|e| Error::Decoding(e.to_string()))
    }
}
