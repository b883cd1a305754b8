// crates/mindgaps-app/src/dom.rs
// Thin helpers over web-sys for scrolling, observers and page-level listeners

use leptos::prelude::{document, window};
use mindgaps_core::config::RevealConfig;
use mindgaps_core::nav::{SectionBounds, anchor_scroll_top};
use mindgaps_core::{Result, SiteError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, ErrorEvent, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

pub fn js_error(err: JsValue) -> SiteError {
    SiteError::browser(format!("{:?}", err))
}

fn html_element_by_id(id: &str) -> Result<HtmlElement> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::browser(format!("#{} is not an HTML element", id)))
}

// ============================================================================
// Scrolling
// ============================================================================

/// Smooth-scroll so section `id` sits just below the fixed navbar
pub fn scroll_to_section(id: &str, offset: f64) -> Result<()> {
    let target = html_element_by_id(id)?;
    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(target.offset_top()), offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Same as [`scroll_to_section`], logging instead of failing
pub fn smooth_scroll(id: &str, offset: f64) {
    if let Err(e) = scroll_to_section(id, offset) {
        log::warn!("Smooth scroll to #{} skipped: {}", id, e);
    }
}

/// Current geometry of the given sections; ids missing from the page are skipped
pub fn measure_sections<'a>(ids: &[&'a str]) -> Vec<SectionBounds<'a>> {
    ids.iter()
        .filter_map(|&id| {
            let section = html_element_by_id(id).ok()?;
            Some(SectionBounds {
                id,
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
        })
        .collect()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

// ============================================================================
// Visibility
// ============================================================================

pub fn reveal_options(config: &RevealConfig) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    options
}

/// Call `on_visible` the first time `target` intersects the viewport, then
/// stop observing it
pub fn observe_once(
    target: &Element,
    options: &IntersectionObserverInit,
    on_visible: impl Fn() + 'static,
) -> Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
            .map_err(js_error)?;
    observer.observe(target);
    callback.forget();
    Ok(())
}

// ============================================================================
// Page-level wiring
// ============================================================================

/// Log script faults nothing else caught
pub fn install_error_listener() -> Result<()> {
    let onerror = Closure::wrap(Box::new(move |e: ErrorEvent| {
        log::error!("JavaScript error: {:?}", e.error());
    }) as Box<dyn FnMut(_)>);
    window()
        .add_event_listener_with_callback("error", onerror.as_ref().unchecked_ref())
        .map_err(js_error)?;
    onerror.forget();
    Ok(())
}

fn add_body_class(class: &str) -> Result<()> {
    let body = document()
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;
    body.class_list().add_1(class).map_err(js_error)
}

/// Give `<body>` the `loaded` class once the window has finished loading
pub fn mark_loaded_on_load() -> Result<()> {
    if document().ready_state() == "complete" {
        return add_body_class("loaded");
    }

    let onload = Closure::once(move || {
        if let Err(e) = add_body_class("loaded") {
            log::warn!("Could not mark page loaded: {}", e);
        }
    });
    window()
        .add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())
        .map_err(js_error)?;
    onload.forget();
    Ok(())
}

/// Warm the browser cache for images shown further down the page
pub fn preload_images(urls: &[String]) -> Result<()> {
    for url in urls {
        let image = HtmlImageElement::new().map_err(js_error)?;
        image.set_src(url);
    }
    log::debug!("Preloading {} images", urls.len());
    Ok(())
}
