//! Browser entry point.
//!
//! On load the page glue is installed first (it does not depend on the GPU),
//! then the stage takes over the canvas and runs until the page goes away.

pub mod mount;
pub mod reveal;

use wasm_bindgen::prelude::*;

use crate::{
    config::{RevealConfig, StageConfig},
    flow,
    stage::stage_constructor,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Could not initialize logger: {e}").into());
    }

    reveal::install(RevealConfig::default())?;

    let config = StageConfig::default();
    flow::run::<()>(config.clone(), vec![stage_constructor(config)])
        .map_err(|e| js_sys::Error::new(&format!("{e:#}")).into())
}
