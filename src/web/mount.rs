use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::error::ConfigurationError;

pub fn document() -> Result<Document, ConfigurationError> {
    web_sys::window()
        .ok_or(ConfigurationError::MissingWindow)?
        .document()
        .ok_or(ConfigurationError::MissingDocument)
}

/// Looks up the stage canvas and makes it follow the size of its container.
///
/// Both the canvas and its parent element have to exist, otherwise the stage
/// is not set up at all.
pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, ConfigurationError> {
    mount_canvas(document()?.get_element_by_id(id), id)
}

/// Checks that the element found for `id` is a canvas inside a container and
/// stretches it over that container.
pub fn mount_canvas(element: Option<Element>, id: &str) -> Result<HtmlCanvasElement, ConfigurationError> {
    let element = element.ok_or_else(|| ConfigurationError::MissingCanvas { id: id.to_string() })?;
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ConfigurationError::NotACanvas { id: id.to_string() })?;
    if canvas.parent_element().is_none() {
        return Err(ConfigurationError::MissingContainer { id: id.to_string() });
    }

    // winit observes the canvas' CSS size, so stretching it over the
    // container turns container resizes into window resizes.
    let style = canvas.style();
    for (property, value) in [("width", "100%"), ("height", "100%"), ("display", "block")] {
        if style.set_property(property, value).is_err() {
            log::warn!("Could not set {} on #{}", property, id);
        }
    }
    log::info!("Mounted stage on #{}", id);
    Ok(canvas)
}
