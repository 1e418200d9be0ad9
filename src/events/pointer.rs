use super::Listener;
use crate::constants::PROJECT_ATTR;
use crate::dom;
use crate::input;
use folio_core::MagneticPull;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// DOM element paired with its spring state.
pub struct Magnet {
    pub el: web::HtmlElement,
    pub pull: MagneticPull,
}

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub hover: Rc<RefCell<input::HoverState>>,
    pub project_cards: Vec<web::HtmlElement>,
    pub magnets: Rc<RefCell<Vec<Magnet>>>,
}

pub fn wire_input_handlers(w: InputWiring) -> Vec<Listener> {
    let mut listeners = Vec::new();
    listeners.extend(wire_pointermove(&w));
    listeners.extend(wire_project_hover(&w));
    listeners.extend(wire_magnets(&w));
    log::info!(
        "[events] wired {} listeners ({} project cards, {} magnets)",
        listeners.len(),
        w.project_cards.len(),
        w.magnets.borrow().len()
    );
    listeners
}

fn wire_pointermove(w: &InputWiring) -> Option<Listener> {
    let window = w.window.clone();
    let pointer = w.pointer.clone();
    Listener::pointer(&w.window, "pointermove", move |ev: web::PointerEvent| {
        let (vw, vh) = dom::viewport_size(&window);
        pointer.borrow_mut().ndc = input::pointer_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw as f32,
            vh as f32,
        );
    })
}

fn wire_project_hover(w: &InputWiring) -> Vec<Listener> {
    let mut out = Vec::with_capacity(w.project_cards.len() * 2);
    for card in &w.project_cards {
        let attr = card.get_attribute(PROJECT_ATTR);

        let hover = w.hover.clone();
        let id = attr.clone();
        out.extend(Listener::pointer(card, "pointerenter", move |_ev| {
            hover.borrow_mut().enter(id.as_deref());
            log::debug!("[hover] enter {:?}", id);
        }));

        let hover = w.hover.clone();
        let id = attr;
        out.extend(Listener::pointer(card, "pointerleave", move |_ev| {
            hover.borrow_mut().leave(id.as_deref());
        }));
    }
    out
}

fn wire_magnets(w: &InputWiring) -> Vec<Listener> {
    let count = w.magnets.borrow().len();
    let mut out = Vec::with_capacity(count * 2);
    for i in 0..count {
        let el = w.magnets.borrow()[i].el.clone();

        let magnets = w.magnets.clone();
        let el_move = el.clone();
        out.extend(Listener::pointer(&el, "pointermove", move |ev: web::PointerEvent| {
            let rect = el_move.get_bounding_client_rect();
            let offset = input::offset_from_center(
                ev.client_x() as f32,
                ev.client_y() as f32,
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
            if let Some(m) = magnets.borrow_mut().get_mut(i) {
                m.pull.pointer_moved(offset);
            }
        }));

        let magnets = w.magnets.clone();
        out.extend(Listener::pointer(&el, "pointerleave", move |_ev| {
            if let Some(m) = magnets.borrow_mut().get_mut(i) {
                m.pull.pointer_left();
            }
        }));
    }
    out
}
