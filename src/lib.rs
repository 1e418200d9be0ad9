#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_ID, HERO_TEXT_ID, MAGNETIC_ATTR, MAGNETIC_SELECTOR, ORB_ID, PROJECT_SELECTOR,
    SKILL_ATTR, SKILL_SELECTOR,
};
use folio_core::{Choreography, MagneticPull, SkillFill};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod style;

/// Everything that must be released to tear the page effects down.
struct App {
    _frame_loop: frame::LoopHandle,
    _listeners: Vec<events::Listener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Option<events::Listener> {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    events::Listener::new(window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stops the frame loop and detaches every listener.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        log::info!("folio-web stopping");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let orb = dom::html_element_by_id(&document, ORB_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ORB_ID))?;
    let hero = dom::html_element_by_id(&document, HERO_TEXT_ID);
    if hero.is_none() {
        log::warn!("[init] no #{}; hero fade disabled", HERO_TEXT_ID);
    }

    let mut listeners = Vec::new();
    listeners.extend(wire_canvas_resize(&window, &canvas));

    let choreography = Choreography::new(dom::read_scroll_metrics(&window)).map_err(|e| {
        log::error!("[init] bad choreography tables: {}", e);
        anyhow::anyhow!(e)
    })?;

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let hover = Rc::new(RefCell::new(input::HoverState::default()));
    let magnets = Rc::new(RefCell::new(
        dom::query_all(&document, MAGNETIC_SELECTOR)
            .into_iter()
            .map(|el| {
                let strength =
                    input::magnetic_strength(el.get_attribute(MAGNETIC_ATTR).as_deref());
                events::Magnet {
                    el,
                    pull: MagneticPull::new(strength),
                }
            })
            .collect::<Vec<_>>(),
    ));
    listeners.extend(events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        pointer: pointer.clone(),
        hover: hover.clone(),
        project_cards: dom::query_all(&document, PROJECT_SELECTOR),
        magnets: magnets.clone(),
    }));

    let skills: Vec<frame::SkillBar> = dom::query_all(&document, SKILL_SELECTOR)
        .into_iter()
        .filter_map(|el| match input::skill_level(el.get_attribute(SKILL_ATTR).as_deref()) {
            Some(level) => Some((el, level)),
            None => {
                log::warn!("[init] skipping skill bar with bad {}", SKILL_ATTR);
                None
            }
        })
        .enumerate()
        .map(|(index, (el, level))| frame::SkillBar {
            el,
            fill: SkillFill::new(level, index),
        })
        .collect();

    // The surface borrows the canvas for the life of the page.
    let gpu_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(gpu_canvas, choreography.scene()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[init] WebGPU unavailable, scene disabled: {:?}", e);
            None
        }
    };

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        choreography,
        pointer,
        hover,
        magnets,
        canvas,
        orb,
        hero,
        skills,
        gpu,
        started: now,
        last_instant: now,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    // A second start replaces (and tears down) the previous instance.
    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _frame_loop: frame_loop,
            _listeners: listeners,
        })
    });
    Ok(())
}
