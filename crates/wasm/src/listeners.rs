//! DOM listeners owned by the module rather than by a JavaScript handle.
//!
//! A `#[wasm_bindgen]` handle is freed by `free()` or by the garbage collector
//! once the page drops its last reference. Closures stored inside the handle
//! would die with it, so installed listeners are parked here instead and stay
//! registered until [`release`] is called with their key.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, Window};

thread_local! {
    static INSTALLED: RefCell<HashMap<u32, Listeners>> = RefCell::new(HashMap::new());
    static NEXT_KEY: Cell<u32> = const { Cell::new(0) };
}

/// How a callback is attached to its target.
pub enum Binding {
    Listener {
        target: EventTarget,
        event: &'static str,
    },
    /// The `window.onmessage` property.
    OnMessage(Window),
}

struct Installed {
    binding: Binding,
    callback: js_sys::Function,
    _closure: Box<dyn Any>,
}

/// Callbacks installed together and removed together.
#[derive(Default)]
pub struct Listeners {
    installed: Vec<Installed>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `closure` as an `event` listener on `target`.
    pub fn listen<T>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) -> Result<(), JsValue>
    where
        T: ?Sized + WasmClosure + 'static,
    {
        let callback = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        target.add_event_listener_with_callback(event, &callback)?;
        self.keep(
            Binding::Listener {
                target: target.clone(),
                event,
            },
            callback,
            closure,
        );
        Ok(())
    }

    /// Keeps a closure the caller already attached through `binding`.
    pub fn keep<T>(&mut self, binding: Binding, callback: js_sys::Function, closure: Closure<T>)
    where
        T: ?Sized + WasmClosure + 'static,
    {
        self.installed.push(Installed {
            binding,
            callback,
            _closure: Box::new(closure),
        });
    }

    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    /// Detaches every callback and drops its closure.
    pub fn remove_all(self) {
        for installed in self.installed {
            match installed.binding {
                Binding::Listener { target, event } => {
                    target
                        .remove_event_listener_with_callback(event, &installed.callback)
                        .ok();
                }
                Binding::OnMessage(window) => window.set_onmessage(None),
            }
        }
    }
}

/// Key of a parked listener set. Only [`release`] consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ListenerKey(u32);

/// Parks `listeners` until released.
pub fn register(listeners: Listeners) -> ListenerKey {
    let key = NEXT_KEY.with(|next| {
        let key = next.get();
        next.set(key.wrapping_add(1));
        key
    });
    log::debug!("Registered {} listeners under key {}", listeners.len(), key);
    INSTALLED.with(|installed| installed.borrow_mut().insert(key, listeners));
    ListenerKey(key)
}

/// Detaches and drops the listeners parked under `key`.
pub fn release(key: ListenerKey) {
    let listeners = INSTALLED.with(|installed| installed.borrow_mut().remove(&key.0));
    if let Some(listeners) = listeners {
        log::debug!("Released {} listeners under key {}", listeners.len(), key.0);
        listeners.remove_all();
    }
}
