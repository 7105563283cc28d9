//! Browser glue for display-frame scheduling and viewport measurements.
//!
//! High-frequency DOM notifications (scroll, resize) go through a
//! [`FrameScheduler`]: the first notification of a burst requests an animation
//! frame, later ones only replace the pending value, and the frame callback
//! runs once with the newest value.

use floater_view::scheduler::FrameCoalescer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Fallback viewport when the window cannot be measured (e.g. during tests).
pub const DEFAULT_VIEWPORT: (f64, f64) = (1024.0, 768.0);

/// Coalesces notifications into at most one callback per animation frame.
///
/// Cheaply cloneable; clones share the same pending slot.
pub struct FrameScheduler<T: 'static> {
    coalescer: Rc<RefCell<FrameCoalescer<T>>>,
}

impl<T: 'static> Clone for FrameScheduler<T> {
    fn clone(&self) -> Self {
        Self {
            coalescer: Rc::clone(&self.coalescer),
        }
    }
}

impl<T: 'static> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            coalescer: Rc::new(RefCell::new(FrameCoalescer::new())),
        }
    }

    /// Queue `value`; `on_frame` runs on the next animation frame with the
    /// newest value queued by then. Only the first call of a burst registers
    /// a frame callback, so only its `on_frame` is used.
    pub fn schedule<F>(&self, value: T, on_frame: F)
    where
        F: FnOnce(T) + 'static,
    {
        if !self.coalescer.borrow_mut().notify(value) {
            return;
        }
        let coalescer = Rc::clone(&self.coalescer);
        let flush = move || {
            let latest = coalescer.borrow_mut().take();
            if let Some(value) = latest {
                on_frame(value);
            }
        };
        request_or_flush(flush, |deferred| match web_sys::window() {
            Some(window) => {
                let cb = Closure::once_into_js(deferred);
                window.request_animation_frame(cb.unchecked_ref()).is_ok()
            }
            None => false,
        });
    }

    /// Notifications superseded so far.
    pub fn superseded(&self) -> u64 {
        self.coalescer.borrow().superseded()
    }
}

/// Hand `flush` to `request` for deferred execution. When `request` reports
/// that no frame was scheduled, `flush` runs right away instead, so the
/// pending value is still delivered.
fn request_or_flush<F, R>(flush: F, request: R)
where
    F: FnOnce() + 'static,
    R: FnOnce(Box<dyn FnOnce()>) -> bool,
{
    let slot = Rc::new(RefCell::new(Some(flush)));
    let deferred_slot = Rc::clone(&slot);
    let deferred: Box<dyn FnOnce()> = Box::new(move || {
        let flush = deferred_slot.borrow_mut().take();
        if let Some(flush) = flush {
            flush();
        }
    });
    if !request(deferred) {
        log::warn!("no animation frame available; flushing immediately");
        let flush = slot.borrow_mut().take();
        if let Some(flush) = flush {
            flush();
        }
    }
}

/// Current browser viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Register a window resize handler. The handler receives the new viewport
/// size and lives for the rest of the page.
pub fn on_resize<F>(mut handler: F)
where
    F: FnMut(f64, f64) + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn FnMut()>::new(move || {
        if let Some((width, height)) = viewport_size() {
            handler(width, height);
        }
    });
    if window
        .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to register resize listener");
    }
    cb.forget();
}

/// Current `scrollTop` of the element with the given DOM id.
pub fn scroll_top(element_id: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(element_id)?;
    Some(f64::from(element.scroll_top()))
}

/// Scroll the element with the given DOM id back to the top.
pub fn reset_scroll(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    if let Some(element) = element {
        element.set_scroll_top(0);
    }
}
