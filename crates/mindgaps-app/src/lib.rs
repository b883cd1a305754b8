// crates/mindgaps-app/src/lib.rs
// BridgingMindGaps website - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use mindgaps_core::{Result, SiteConfig};
use wasm_bindgen::prelude::*;

mod components;
mod content;
mod dom;
mod pages;
mod scheduler;
mod service_worker;

pub use scheduler::{BrowserScheduler, BrowserTimer};

use components::{NotificationHost, provide_notifier};
use pages::HomePage;

/// Id of the optional `<script type="application/json">` holding site config
const CONFIG_ELEMENT_ID: &str = "site-config";

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    // Initialize logging
    _ = console_log::init_with_level(config.level());
    if config.try_level().is_err() {
        log::warn!("Unknown log level {:?}, using debug", config.log_level);
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring site config: {}", e);
    }

    // A failure here leaves the page usable, just with less behavior attached
    if let Err(e) = init_page(&config) {
        log::error!("Error initializing website: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });

    log::info!("BridgingMindGaps website initialized");
}

fn load_config() -> Result<SiteConfig> {
    match document().get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => SiteConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(SiteConfig::default()),
    }
}

/// Page-level wiring that lives outside the component tree
fn init_page(config: &SiteConfig) -> Result<()> {
    dom::install_error_listener()?;
    dom::mark_loaded_on_load()?;
    dom::preload_images(&config.preload_images)?;
    service_worker::register(&config.service_worker);
    Ok(())
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    let current = provide_notifier(config.notification.ttl());
    provide_context(config);

    view! {
        <Title text="BridgingMindGaps"/>
        <HomePage/>
        <NotificationHost current=current/>
    }
}
