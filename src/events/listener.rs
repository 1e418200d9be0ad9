use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] could not listen for {}: {:?}", event, e);
                None
            }
        }
    }

    /// Like [`Listener::new`], but only forwards pointer events.
    pub fn pointer(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> Option<Self> {
        Self::new(target, event, move |ev: web::Event| {
            if let Ok(pe) = ev.dyn_into::<web::PointerEvent>() {
                handler(pe);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
