//! Serialization layer. JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different on-disk format.

use crate::error::{Error, Result};
use crate::ledger::Stock;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter};
use serde_json::Value;

/// Converts ledger snapshots to/from bytes for persistence.
pub trait Serializer {
    /// Encode the ledger to bytes.
    fn serialize(&self, stock: &Stock) -> Result<Vec<u8>>;

    /// Decode and validate bytes back into a ledger.
    fn deserialize(&self, bytes: &[u8]) -> Result<Stock>;
}

/// JSON serializer with optional pretty-printing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// `true` when output is indented.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, stock: &Stock) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(16 * stock.len() + 2);
        if self.pretty {
            let formatter = PrettyFormatter::with_indent(b"  ");
            let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
            stock.serialize(&mut ser)?;
        } else {
            let mut ser = serde_json::Serializer::with_formatter(&mut out, CompactFormatter);
            stock.serialize(&mut ser)?;
        }
        Ok(out)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Stock> {
        let value: Value = serde_json::from_slice(bytes)?;
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(Error::invalid_format(format!(
                    "expected an object at the top level, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut stock = Stock::with_capacity(object.len());
        for (name, qty) in object {
            if name.trim().is_empty() {
                return Err(Error::invalid_format("item names must not be blank"));
            }
            let qty = qty.as_i64().ok_or_else(|| {
                Error::invalid_format(format!(
                    "quantity of {name:?} must be an integer, found {}",
                    json_kind(&qty)
                ))
            })?;
            stock.insert(name, qty);
        }
        Ok(stock)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer out of range",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
