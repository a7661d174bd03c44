use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::{document, Result};

/// Marks an element as revealed. Adding the class twice is harmless.
pub fn reveal(element: &Element) {
    if let Err(e) = element.class_list().add_1(config::REVEALED_CLASS) {
        warn!("Could not reveal element: {:?}", e);
    }
}

/// Watches every element matching a selector and reveals it once it is
/// sufficiently visible. Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach(selector: &str, threshold: f64) -> Result<Self> {
        let document = document()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            reveal(&entry.target());
                        }
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document.query_selector_all(selector)?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        debug!("Observing {} elements for reveal", observed);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Starts revealing the page's animated elements after the first render.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let observer =
                match RevealObserver::attach(config::REVEAL_SELECTOR, config::REVEAL_THRESHOLD) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Reveal animations disabled: {}", e);
                        None
                    }
                };
            move || drop(observer)
        },
        (),
    );
}
