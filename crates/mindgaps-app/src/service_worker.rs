// crates/mindgaps-app/src/service_worker.rs
// Optional background caching agent. Shipped disabled.

use leptos::prelude::window;
use mindgaps_core::config::ServiceWorkerConfig;
use wasm_bindgen_futures::{JsFuture, spawn_local};

pub fn register(config: &ServiceWorkerConfig) {
    if !config.enabled {
        log::debug!("Service worker registration disabled");
        return;
    }

    let promise = window().navigator().service_worker().register(&config.script);
    let script = config.script.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("SW registered: {}", script),
            Err(e) => log::warn!("SW registration failed: {:?}", e),
        }
    });
}
