//! DOM side of the scroll reveal: observers, timers and anchor links.

use std::{cell::RefCell, rc::Rc};

use instant::Duration;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::{
    config::RevealConfig,
    reveal::{RevealController, anchor_selector},
    web::mount::document,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Bar {
    element: Element,
    fills: Vec<HtmlElement>,
}

/// Wires up every marked item, language bar and in-page anchor of the
/// document.
pub fn install(config: RevealConfig) -> Result<(), JsValue> {
    let document = document()?;
    let controller = Rc::new(RefCell::new(RevealController::new(config.clone())));

    let items = html_elements(&document.query_selector_all(&config.item_selector)?);
    for item in &items {
        let dataset = item.dataset();
        let attr = dataset.get("delay");
        let delay = controller.borrow_mut().add_item(attr.as_deref());
        if attr.is_none() {
            dataset.set("delay", &delay.as_millis().to_string())?;
        }
    }

    let bars: Vec<Bar> = elements(&document.query_selector_all(&config.bar_selector)?)
        .into_iter()
        .map(|element| {
            let fills = html_elements(&element.query_selector_all(&config.fill_selector)?);
            let widths: Vec<Option<String>> =
                fills.iter().map(|fill| fill.dataset().get("width")).collect();
            controller
                .borrow_mut()
                .add_bar(widths.iter().map(|width| width.as_deref()));
            Ok(Bar { element, fills })
        })
        .collect::<Result<_, JsValue>>()?;

    let (item_count, bar_count) = (items.len(), bars.len());
    observe_items(items, controller.clone())?;
    observe_bars(bars, controller)?;
    let anchor_count = intercept_anchors(&document, &config.anchor_selector)?;

    log::info!(
        "Reveal observing {} items, {} language bars and {} anchors",
        item_count,
        bar_count,
        anchor_count
    );
    Ok(())
}

fn observe_items(
    items: Vec<HtmlElement>,
    controller: Rc<RefCell<RevealController>>,
) -> Result<(), JsValue> {
    let (threshold, root_margin, visible_class) = {
        let controller = controller.borrow();
        let config = controller.config();
        (
            config.item_threshold,
            config.item_root_margin.clone(),
            config.visible_class.clone(),
        )
    };
    let targets = items.clone();

    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in intersecting(&entries) {
                let target = entry.target();
                let Some(index) = items.iter().position(|item| {
                    let item: &Element = item;
                    *item == target
                }) else {
                    continue;
                };
                let Some(delay) = controller
                    .borrow_mut()
                    .on_item_visibility(index, entry.intersection_ratio())
                else {
                    continue;
                };
                observer.unobserve(&target);

                let item = items[index].clone();
                let class = visible_class.clone();
                set_timeout(delay, move || {
                    if let Err(e) = item.class_list().add_1(&class) {
                        log::warn!("Could not reveal item: {:?}", e);
                    }
                });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(&root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

fn observe_bars(bars: Vec<Bar>, controller: Rc<RefCell<RevealController>>) -> Result<(), JsValue> {
    let threshold = controller.borrow().config().bar_threshold;
    let targets: Vec<Element> = bars.iter().map(|bar| bar.element.clone()).collect();

    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in intersecting(&entries) {
                let target = entry.target();
                let Some(index) = bars.iter().position(|bar| bar.element == target) else {
                    continue;
                };
                let Some(steps) = controller
                    .borrow_mut()
                    .on_bar_visibility(index, entry.intersection_ratio())
                else {
                    continue;
                };
                observer.unobserve(&target);

                for step in steps {
                    let Some(fill) = bars[index].fills.get(step.index).cloned() else {
                        continue;
                    };
                    set_timeout(step.delay, move || {
                        if let Err(e) = fill.style().set_property("width", &step.width) {
                            log::warn!("Could not fill language bar: {:?}", e);
                        }
                    });
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

/// Replaces the jump of in-page links with a smooth scroll to the target's
/// top. Returns the number of links.
fn intercept_anchors(document: &Document, selector: &str) -> Result<usize, JsValue> {
    let anchors = elements(&document.query_selector_all(selector)?);
    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            match document.query_selector(selector) {
                Ok(Some(target)) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                Ok(None) => {}
                Err(e) => log::warn!("Cannot scroll to {}: {:?}", selector, e),
            }
        });
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(anchors.len())
}

fn intersecting(entries: &js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
}

fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let millis = delay.as_millis().min(i32::MAX as u128) as i32;
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
    {
        log::warn!("Could not schedule reveal: {:?}", e);
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
