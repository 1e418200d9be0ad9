use crate::dom;
use crate::events::Magnet;
use crate::input;
use crate::render;
use crate::render::surface::{on_surface_error, SurfaceAction};
use crate::style;
use folio_core::{Choreography, FrameInput, FrameOutput, SkillFill};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Skill bar fill element and its spring.
pub struct SkillBar {
    pub el: web::HtmlElement,
    pub fill: SkillFill,
}

// Percent of track width.
const SKILL_SETTLE_EPS: f32 = 0.01;

pub struct FrameContext<'a> {
    pub window: web::Window,
    pub choreography: Choreography,

    pub pointer: Rc<RefCell<input::PointerState>>,
    pub hover: Rc<RefCell<input::HoverState>>,
    pub magnets: Rc<RefCell<Vec<Magnet>>>,

    pub canvas: web::HtmlCanvasElement,
    pub orb: web::HtmlElement,
    pub hero: Option<web::HtmlElement>,
    pub skills: Vec<SkillBar>,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Sampled once; both layers read this frame's value.
        let input = FrameInput {
            scroll: dom::read_scroll_metrics(&self.window),
            pointer: self.pointer.borrow().ndc,
            active: self.hover.borrow().active(),
            dt_sec,
            elapsed_sec: (now - self.started).as_secs_f32(),
        };
        let out = self.choreography.frame(&input);

        self.apply_dom(&out, input.dt_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&out.scene, input.elapsed_sec) {
                match on_surface_error(&e) {
                    SurfaceAction::Reconfigure => {
                        log::warn!("[frame] surface {:?}; reconfiguring", e);
                        g.reconfigure();
                    }
                    SurfaceAction::Skip => {}
                    SurfaceAction::Report => log::error!("[frame] render error: {:?}", e),
                }
            }
        }
    }

    fn apply_dom(&mut self, out: &FrameOutput, dt_sec: f32) {
        let (left, top, transform) = style::orb_style(&out.orb);
        dom::set_style(&self.orb, "left", &left);
        dom::set_style(&self.orb, "top", &top);
        dom::set_style(&self.orb, "transform", &transform);

        if let Some(hero) = &self.hero {
            let (opacity, transform) = style::hero_style(&out.hero);
            dom::set_style(hero, "opacity", &opacity);
            dom::set_style(hero, "transform", &transform);
        }

        for m in self.magnets.borrow_mut().iter_mut() {
            let offset = m.pull.update(dt_sec);
            dom::set_style(&m.el, "transform", &style::magnetic_transform(offset));
        }

        let (_, viewport_h) = dom::viewport_size(&self.window);
        for bar in self.skills.iter_mut() {
            if !bar.fill.revealed() {
                let r = bar.el.get_bounding_client_rect();
                if input::in_viewport(r.top() as f32, r.bottom() as f32, viewport_h as f32) {
                    bar.fill.reveal();
                }
            }
            if bar.fill.is_settled(SKILL_SETTLE_EPS) {
                continue;
            }
            let width = bar.fill.update(dt_sec);
            dom::set_style(&bar.el, "width", &style::skill_width(width));
        }
    }
}

/// Keeps the animation-frame loop alive. Dropping it stops the loop: the
/// pending frame is cancelled and any frame already queued sees the cleared
/// flag and returns without evaluating.
pub struct LoopHandle {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.alive.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference so it and the context are freed.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let alive = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    let tick_weak = Rc::downgrade(&tick);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(tick) = tick_weak.upgrade() {
            raf_tick.set(request_frame(&tick));
        }
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    LoopHandle {
        alive,
        raf_id,
        tick,
    }
}
