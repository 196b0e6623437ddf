use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while wiring the editor into the page.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("canvas element '{0}' not found")]
    CanvasNotFound(String),

    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    #[error("2D canvas context unavailable")]
    NoContext,

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
