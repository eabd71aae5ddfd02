use std::fmt;

use sky::ConfigError;
use wasm_bindgen::JsValue;

/// Errors raised while wiring the backdrop into the page.
#[derive(Debug)]
pub struct StarfallError(pub String);

impl fmt::Display for StarfallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StarfallError {
    fn from(message: &str) -> Self {
        StarfallError(message.to_string())
    }
}

impl From<JsValue> for StarfallError {
    fn from(value: JsValue) -> Self {
        StarfallError(format!("JsValue: {value:?}"))
    }
}

impl From<serde_json::Error> for StarfallError {
    fn from(error: serde_json::Error) -> Self {
        StarfallError(format!("invalid JSON: {error}"))
    }
}

impl From<ConfigError> for StarfallError {
    fn from(error: ConfigError) -> Self {
        StarfallError(format!("invalid config: {error}"))
    }
}

impl From<StarfallError> for JsValue {
    fn from(error: StarfallError) -> Self {
        JsValue::from_str(&error.0)
    }
}
