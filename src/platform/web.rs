//! Browser keyboard listeners

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{FocusEvent, KeyboardEvent, Window};

use super::KeyTracker;

/// Feed window keydown/keyup events into `tracker`; release all keys on blur
pub fn install_key_listeners(window: &Window, tracker: Rc<RefCell<KeyTracker>>) {
    for (event_name, down) in [("keydown", true), ("keyup", false)] {
        let tracker = Rc::clone(&tracker);
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            let mut t = tracker.borrow_mut();
            let tracked = if down { t.press(&key) } else { t.release(&key) };
            if tracked {
                // Arrow keys would scroll the page otherwise
                event.prevent_default();
            }
        });
        if let Err(e) =
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to listen for {}: {:?}", event_name, e);
        }
        closure.forget();
    }

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
        tracker.borrow_mut().clear();
    });
    if let Err(e) =
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen for blur: {:?}", e);
    }
    closure.forget();
}
