#![cfg(target_arch = "wasm32")]

use mage_stage::{
    ConfigurationError,
    web::mount::{find_canvas, mount_canvas},
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("tests run in a browser")
}

#[wasm_bindgen_test]
fn should_fail_when_no_element_has_the_id() {
    let err = find_canvas("no-such-stage").unwrap_err();

    assert_eq!(
        err,
        ConfigurationError::MissingCanvas {
            id: "no-such-stage".to_string()
        }
    );
}

#[wasm_bindgen_test]
fn should_reject_elements_that_are_not_canvases() {
    let document = document();
    let div = document.create_element("div").unwrap();
    div.set_id("stage-div");
    document.body().unwrap().append_child(&div).unwrap();

    let err = find_canvas("stage-div").unwrap_err();
    div.remove();

    assert_eq!(
        err,
        ConfigurationError::NotACanvas {
            id: "stage-div".to_string()
        }
    );
}

#[wasm_bindgen_test]
fn should_reject_canvas_without_container() {
    let canvas = document().create_element("canvas").unwrap();

    let err = mount_canvas(Some(canvas), "loose-canvas").unwrap_err();

    assert_eq!(
        err,
        ConfigurationError::MissingContainer {
            id: "loose-canvas".to_string()
        }
    );
}

#[wasm_bindgen_test]
fn should_stretch_canvas_over_its_container() {
    let document = document();
    let container = document.create_element("div").unwrap();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id("stage-canvas");
    container.append_child(&canvas).unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let mounted: HtmlCanvasElement = find_canvas("stage-canvas").unwrap();
    let style = mounted.style();
    container.remove();

    assert_eq!(style.get_property_value("width").unwrap(), "100%");
    assert_eq!(style.get_property_value("height").unwrap(), "100%");
}

#[wasm_bindgen_test]
fn should_report_setup_failures_as_js_errors() {
    let value: JsValue = ConfigurationError::MissingCanvas {
        id: "mage-canvas".to_string(),
    }
    .into();

    let error = value.dyn_into::<js_sys::Error>().unwrap();

    assert_eq!(
        String::from(error.message()),
        "no element with id `mage-canvas` exists in the document"
    );
}
