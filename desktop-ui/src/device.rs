//! Device and viewport classification
//!
//! Windows ask a [`DeviceClassifier`] whether the device is touch-driven and
//! how wide the viewport is. The browser implementation reads `web-sys`;
//! tests and pre-rendering supply a [`StaticDevice`] through [`DeviceContext`].

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::Breakpoints;

pub trait DeviceClassifier {
    fn is_touch_device(&self) -> bool;

    /// Current viewport width in logical pixels.
    fn browser_width(&self) -> u32;

    fn breakpoints(&self) -> Breakpoints {
        Breakpoints::default()
    }
}

/// Reads the live browser window. Outside WASM there is no display surface,
/// so it reports a zero-width pointer device.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDevice {
    pub breakpoints: Breakpoints,
}

impl DeviceClassifier for BrowserDevice {
    fn is_touch_device(&self) -> bool {
        browser::is_touch()
    }

    fn browser_width(&self) -> u32 {
        browser::inner_width()
    }

    fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }
}

/// Fixed classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticDevice {
    pub touch: bool,
    pub width: u32,
    pub breakpoints: Breakpoints,
}

impl StaticDevice {
    pub fn pointer(width: u32) -> Self {
        Self {
            touch: false,
            width,
            breakpoints: Breakpoints::default(),
        }
    }

    pub fn touch(width: u32) -> Self {
        Self {
            touch: true,
            width,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl DeviceClassifier for StaticDevice {
    fn is_touch_device(&self) -> bool {
        self.touch
    }

    fn browser_width(&self) -> u32 {
        self.width
    }

    fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }
}

/// Device classifier shared through Dioxus context
#[derive(Clone)]
pub struct DeviceContext(Rc<dyn DeviceClassifier>);

impl DeviceContext {
    pub fn new(classifier: impl DeviceClassifier + 'static) -> Self {
        Self(Rc::new(classifier))
    }

    pub fn browser() -> Self {
        Self::new(BrowserDevice::default())
    }

    pub fn is_touch_device(&self) -> bool {
        self.0.is_touch_device()
    }

    pub fn browser_width(&self) -> u32 {
        self.0.browser_width()
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.0.breakpoints()
    }
}

/// The nearest provided classifier, or the live browser.
pub fn use_device() -> DeviceContext {
    use_hook(|| try_consume_context::<DeviceContext>().unwrap_or_else(DeviceContext::browser))
}

/// Viewport width that follows window `resize` events for as long as the
/// calling component is mounted.
pub fn use_browser_width(device: &DeviceContext) -> Signal<u32> {
    let initial = device.clone();
    let mut width = use_signal(move || initial.browser_width());

    let device = device.clone();
    use_hook(move || {
        Rc::new(browser::ResizeListener::new(move || {
            width.set(device.browser_width());
        }))
    });

    width
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;

    pub fn is_touch() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let has_touch_events =
            js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        has_touch_events || window.navigator().max_touch_points() > 0
    }

    pub fn inner_width() -> u32 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0) as u32
    }

    /// Window `resize` subscription, removed on drop
    pub struct ResizeListener {
        closure: Closure<dyn FnMut()>,
    }

    impl ResizeListener {
        pub fn new(mut on_resize: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let closure = Closure::<dyn FnMut()>::new(move || on_resize());
            if let Err(e) = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to listen for resize events: {:?}", e);
                return None;
            }
            Some(Self { closure })
        }
    }

    impl Drop for ResizeListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    pub fn is_touch() -> bool {
        false
    }

    pub fn inner_width() -> u32 {
        0
    }

    pub struct ResizeListener;

    impl ResizeListener {
        pub fn new(_on_resize: impl FnMut() + 'static) -> Option<Self> {
            None
        }
    }
}
