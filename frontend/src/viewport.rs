use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::controller::{SectionBounds, Viewport};

const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

/// The browser window as seen by `PageController`.
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Viewport for DomViewport {
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        let element = self.document.get_element_by_id(section_id)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn height(&self) -> f64 {
        match self.window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or(0.0),
            Err(err) => {
                warn!("Could not read window height: {:?}", err);
                0.0
            }
        }
    }

    fn scroll_to(&self, section_id: &str) {
        if let Some(element) = self.document.get_element_by_id(section_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Something window-like that listeners can be added to and removed from.
pub trait ListenerHost {
    type Handler;

    fn add_listener(&self, event: &str, handler: &Self::Handler) -> Result<(), String>;
    fn remove_listener(&self, event: &str, handler: &Self::Handler) -> Result<(), String>;
}

impl ListenerHost for Window {
    type Handler = Closure<dyn FnMut()>;

    fn add_listener(&self, event: &str, handler: &Self::Handler) -> Result<(), String> {
        self.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(|err| format!("{:?}", err))
    }

    fn remove_listener(&self, event: &str, handler: &Self::Handler) -> Result<(), String> {
        self.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(|err| format!("{:?}", err))
    }
}

/// Scroll and resize subscription on a host. Both listeners are removed on drop.
pub struct Subscription<H: ListenerHost> {
    host: H,
    handler: H::Handler,
}

impl<H: ListenerHost> Subscription<H> {
    pub fn new(host: H, handler: H::Handler) -> Self {
        for event in VIEWPORT_EVENTS {
            if let Err(err) = host.add_listener(event, &handler) {
                warn!("Failed to listen for {} events: {}", event, err);
            }
        }
        Self { host, handler }
    }
}

impl<H: ListenerHost> Drop for Subscription<H> {
    fn drop(&mut self) {
        for event in VIEWPORT_EVENTS {
            if let Err(err) = self.host.remove_listener(event, &self.handler) {
                warn!("Failed to stop listening for {} events: {}", event, err);
            }
        }
    }
}

pub type ViewportListener = Subscription<Window>;

impl Subscription<Window> {
    pub fn attach(on_change: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move || on_change()) as Box<dyn FnMut()>);
        Some(Self::new(window, callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeHost {
        calls: Rc<RefCell<Vec<String>>>,
        failing: Option<&'static str>,
    }

    impl ListenerHost for FakeHost {
        type Handler = ();

        fn add_listener(&self, event: &str, _handler: &()) -> Result<(), String> {
            self.calls.borrow_mut().push(format!("add {}", event));
            match self.failing {
                Some(failing) if failing == event => Err("refused".to_string()),
                _ => Ok(()),
            }
        }

        fn remove_listener(&self, event: &str, _handler: &()) -> Result<(), String> {
            self.calls.borrow_mut().push(format!("remove {}", event));
            Ok(())
        }
    }

    #[test]
    fn listens_on_mount_and_releases_on_drop() {
        let host = FakeHost::default();
        let calls = host.calls.clone();

        let subscription = Subscription::new(host, ());
        assert_eq!(*calls.borrow(), ["add scroll", "add resize"]);

        drop(subscription);
        assert_eq!(
            *calls.borrow(),
            ["add scroll", "add resize", "remove scroll", "remove resize"]
        );
    }

    #[test]
    fn failed_registration_still_attempts_the_rest() {
        let host = FakeHost {
            failing: Some("scroll"),
            ..FakeHost::default()
        };
        let calls = host.calls.clone();

        drop(Subscription::new(host, ()));
        assert_eq!(
            *calls.borrow(),
            ["add scroll", "add resize", "remove scroll", "remove resize"]
        );
    }
}
