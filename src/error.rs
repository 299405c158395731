//! Setup failures.
//!
//! Everything the stage needs from the hosting page is looked up once while
//! mounting. A missing piece aborts the setup: there is no fallback rendering.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no global `window` is available")]
    MissingWindow,
    #[error("the window has no `document`")]
    MissingDocument,
    #[error("no element with id `{id}` exists in the document")]
    MissingCanvas { id: String },
    #[error("element `{id}` is not a <canvas>")]
    NotACanvas { id: String },
    #[error("canvas `{id}` has no containing element")]
    MissingContainer { id: String },
}

#[cfg(target_arch = "wasm32")]
impl From<ConfigurationError> for wasm_bindgen::JsValue {
    fn from(err: ConfigurationError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
