//! Browser front end: canvas rendering, DOM overlays and key bindings.
//!
//! Everything here is presentation. The adapter owns an [`Engine`], turns key
//! presses into engine commands, and reacts to the drained events with purely
//! cosmetic effects that decay once per animation frame.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::catalog::Catalog;
use crate::engine::{Engine, Event, GameMode};
use crate::grid::{Cell, CellKind, Dimension, GRID_SIZE};
use crate::story::{Lang, Story};

const TILE: f64 = 50.0;
const BOARD_PX: u32 = (GRID_SIZE as u32) * 50;

// --- Themes -------------------------------------------------------------------

struct Theme {
    ambient: &'static str,
    path: &'static str,
    wall: &'static str,
    player: &'static str,
}

fn theme(dim: Dimension) -> &'static Theme {
    const HUMAN: Theme = Theme {
        ambient: "#111",
        path: "#3a3a3a",
        wall: "#505050",
        player: "#fff",
    };
    const HEAVEN: Theme = Theme {
        ambient: "#002f6c",
        path: "#b3e5fc",
        wall: "#81d4fa",
        player: "#ffd700",
    };
    const HELL: Theme = Theme {
        ambient: "#1a0000",
        path: "#4a0000",
        wall: "#b71c1c",
        player: "#ff3d00",
    };
    match dim {
        Dimension::Human => &HUMAN,
        Dimension::Heaven => &HEAVEN,
        Dimension::Hell => &HELL,
    }
}

// --- Cosmetic effects ---------------------------------------------------------

/// Frame-decayed cosmetic state. Fed by engine events, advanced by `tick`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Effects {
    /// Remaining frames of the post-switch contrast flash.
    pub flash_frames: u32,
    /// Screen-shake magnitude in pixels.
    pub shake: f64,
}

impl Effects {
    const FLASH_FRAMES: u32 = 6;
    const DEATH_SHAKE: f64 = 14.0;
    const BUMP_SHAKE: f64 = 2.0;
    const SHAKE_DECAY: f64 = 0.85;

    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::DimensionSwitched(_) => self.flash_frames = Self::FLASH_FRAMES,
            Event::Died(_) => self.shake = Self::DEATH_SHAKE,
            Event::Blocked => self.shake = self.shake.max(Self::BUMP_SHAKE),
            Event::LevelStarted(_) | Event::LevelAdvanced(_) => *self = Effects::default(),
            _ => {}
        }
    }

    pub fn tick(&mut self) {
        self.flash_frames = self.flash_frames.saturating_sub(1);
        self.shake *= Self::SHAKE_DECAY;
        if self.shake < 0.25 {
            self.shake = 0.0;
        }
    }

    /// Offset to draw the board at this frame; alternates sign per frame.
    fn shake_offset(&self, now: f64) -> (f64, f64) {
        if self.shake == 0.0 {
            return (0.0, 0.0);
        }
        let phase = now / 16.0;
        (phase.sin() * self.shake, (phase * 1.3).cos() * self.shake)
    }
}

// --- Adapter state ------------------------------------------------------------

struct WebState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    engine: Engine,
    story: &'static Story,
    effects: Effects,
}

thread_local! {
    static WEB_STATE: std::cell::RefCell<Option<WebState>> = const { std::cell::RefCell::new(None) };
}

#[wasm_bindgen]
pub fn start_web_mode() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let lang = win
        .navigator()
        .language()
        .map(|tag| Lang::from_tag(&tag))
        .unwrap_or_default();
    let catalog = Catalog::builtin(lang).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let story = lang.story();

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("rp-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("rp-canvas");
        c.set_width(BOARD_PX + 40);
        c.set_height(BOARD_PX + 40);
        c.set_attribute("style", "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); border:2px solid #222; z-index:20;").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    ensure_overlay(&doc, "rp-level", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45;")?;
    ensure_overlay(&doc, "rp-controls", "position:fixed; bottom:10px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:13px; color:#aaa; z-index:45;")?;
    ensure_overlay(&doc, "rp-dialog", "position:fixed; bottom:60px; left:50%; transform:translateX(-50%); width:520px; padding:12px 16px; background:rgba(0,0,0,0.85); border:1px solid #666; border-radius:6px; color:#fff; font-size:15px; white-space:pre-line; z-index:50; display:none;")?;
    ensure_overlay(&doc, "rp-screen", "position:fixed; inset:0; display:flex; align-items:center; justify-content:center; text-align:center; white-space:pre-line; padding:40px; background:rgba(0,0,0,0.88); color:#eee; font-size:16px; z-index:60;")?;

    WEB_STATE.with(|s| {
        s.replace(Some(WebState {
            canvas: canvas.clone(),
            ctx,
            engine: Engine::new(catalog),
            story,
            effects: Effects::default(),
        }))
    });

    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            WEB_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    on_key(state, &evt.key());
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_web_loop();
    Ok(())
}

fn ensure_overlay(doc: &Document, id: &str, style: &str) -> Result<(), JsValue> {
    if doc.get_element_by_id(id).is_some() {
        return Ok(());
    }
    if let Some(body) = doc.body() {
        let div = doc.create_element("div")?;
        div.set_id(id);
        div.set_attribute("style", style).ok();
        body.append_child(&div)?;
    }
    Ok(())
}

/// Key bindings. Out-of-phase keys are forwarded anyway; the engine ignores them.
fn on_key(state: &mut WebState, key: &str) {
    let engine = &mut state.engine;
    match (engine.mode(), key.to_lowercase().as_str()) {
        (GameMode::Start, "enter" | " ") => engine.begin(),
        (GameMode::Dialog, "enter" | " ") => engine.advance_dialog(),
        (GameMode::GameOver, "enter" | " " | "r") => engine.restart_level(),
        (GameMode::Victory, "enter" | " ") => engine.start_level(0),
        (_, "w" | "arrowup") => engine.step_by(0, -1),
        (_, "s" | "arrowdown") => engine.step_by(0, 1),
        (_, "a" | "arrowleft") => engine.step_by(-1, 0),
        (_, "d" | "arrowright") => engine.step_by(1, 0),
        (_, "1") => engine.switch_dimension(Dimension::Human),
        (_, "2") => engine.switch_dimension(Dimension::Heaven),
        (_, "3") => engine.switch_dimension(Dimension::Hell),
        (GameMode::Playing, "r") => engine.restart_level(),
        _ => return,
    }
    for event in engine.drain_events() {
        state.effects.apply(&event);
    }
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_web_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        WEB_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                web_tick(state, ts);
            }
        });
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// --- Tick & Rendering ---------------------------------------------------------

fn web_tick(state: &mut WebState, now: f64) {
    state.effects.tick();
    render(state, now);
    update_overlays(state);
}

fn render(state: &WebState, now: f64) {
    let ctx = &state.ctx;
    let engine = &state.engine;
    let player = engine.player();
    let th = theme(player.dimension);
    let (w, h) = (state.canvas.width() as f64, state.canvas.height() as f64);

    ctx.set_fill_style_str(th.ambient);
    ctx.fill_rect(0.0, 0.0, w, h);
    if engine.mode() == GameMode::Start {
        return;
    }

    let filter = if state.effects.flash_frames > 0 {
        "contrast(1.5) brightness(1.2)"
    } else {
        "none"
    };
    state
        .canvas
        .set_attribute("style", &format!("position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); border:2px solid #222; z-index:20; filter:{filter};"))
        .ok();

    let (sx, sy) = state.effects.shake_offset(now);
    let ox = 20.0 + sx;
    let oy = 20.0 + sy;
    let level = engine.level();
    let map = level.map(player.dimension);

    for (cell, kind) in map.cells() {
        let (px, py) = (ox + cell.x as f64 * TILE, oy + cell.y as f64 * TILE);
        ctx.set_fill_style_str(if kind == CellKind::Wall { th.wall } else { th.path });
        ctx.fill_rect(px, py, TILE, TILE);
        ctx.set_stroke_style_str("rgba(0,0,0,0.1)");
        ctx.stroke_rect(px, py, TILE, TILE);

        if kind != CellKind::Wall && level.trigger(cell).is_some() && !engine.is_collected(cell) {
            ctx.set_fill_style_str("#FFD700");
            ctx.begin_path();
            ctx.move_to(px + 25.0, py + 10.0);
            ctx.line_to(px + 15.0, py + 40.0);
            ctx.line_to(px + 35.0, py + 40.0);
            ctx.fill();
        }
    }

    draw_marker(ctx, ox, oy, level.start, "#00ff00");
    draw_marker(ctx, ox, oy, level.end, "#ffffff");

    let (px, py) = (ox + player.cell.x as f64 * TILE, oy + player.cell.y as f64 * TILE);
    ctx.set_fill_style_str(th.player);
    ctx.fill_rect(px + 15.0, py + 15.0, 20.0, 25.0);

    if engine.mode() == GameMode::GameOver {
        ctx.set_stroke_style_str("red");
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.move_to(px, py);
        ctx.line_to(px + TILE, py + TILE);
        ctx.move_to(px + TILE, py);
        ctx.line_to(px, py + TILE);
        ctx.stroke();
        ctx.set_line_width(1.0);
    }
}

fn draw_marker(ctx: &CanvasRenderingContext2d, ox: f64, oy: f64, cell: Cell, color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(3.0);
    ctx.stroke_rect(
        ox + cell.x as f64 * TILE + 8.0,
        oy + cell.y as f64 * TILE + 8.0,
        TILE - 16.0,
        TILE - 16.0,
    );
    ctx.set_line_width(1.0);
}

fn update_overlays(state: &WebState) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let engine = &state.engine;
    let story = state.story;

    if let Some(el) = doc.get_element_by_id("rp-level") {
        el.set_text_content(Some(&engine.level().name.to_uppercase()));
    }
    if let Some(el) = doc.get_element_by_id("rp-controls") {
        el.set_text_content(Some(story.controls));
    }
    if let Some(el) = doc.get_element_by_id("rp-dialog") {
        match engine.dialog() {
            Some(d) => {
                el.set_text_content(Some(&format!("{}\n{}", d.text, story.next_hint)));
                set_display(&el, "block");
            }
            None => set_display(&el, "none"),
        }
    }
    if let Some(el) = doc.get_element_by_id("rp-screen") {
        let screen = match engine.mode() {
            GameMode::Start => Some(format!(
                "{}\n\n{}\n\n[{}]",
                story.title, story.description, story.start_button
            )),
            GameMode::GameOver => Some(format!(
                "{}\n\n{}\n\n[{}]",
                story.game_over_title, story.death_overlap, story.retry_button
            )),
            GameMode::Victory => Some(format!(
                "{}\n\n{}",
                story.victory_title,
                story.victory_text.join("\n\n")
            )),
            GameMode::Playing | GameMode::Dialog => None,
        };
        match screen {
            Some(text) => {
                el.set_text_content(Some(&text));
                set_display(&el, "flex");
            }
            None => set_display(&el, "none"),
        }
    }
}

/// `display` is a CSS display value; `"none"` hides the overlay.
fn set_display(el: &web_sys::Element, display: &str) {
    if let Ok(html) = el.clone().dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DeathReason;

    #[test]
    fn test_switch_flash_expires_after_fixed_frames() {
        let mut fx = Effects::default();
        fx.apply(&Event::DimensionSwitched(Dimension::Heaven));
        for _ in 0..Effects::FLASH_FRAMES - 1 {
            fx.tick();
        }
        assert_eq!(fx.flash_frames, 1);
        fx.tick();
        fx.tick();
        assert_eq!(fx.flash_frames, 0);
    }

    #[test]
    fn test_death_shake_decays_to_rest() {
        let mut fx = Effects::default();
        fx.apply(&Event::Died(DeathReason::SpatialOverlap));
        assert_eq!(fx.shake, Effects::DEATH_SHAKE);
        let mut last = fx.shake;
        for _ in 0..100 {
            fx.tick();
            assert!(fx.shake <= last);
            last = fx.shake;
        }
        assert_eq!(fx.shake, 0.0);
        assert_eq!(fx.shake_offset(123.0), (0.0, 0.0));
    }

    #[test]
    fn test_bump_does_not_shrink_death_shake() {
        let mut fx = Effects::default();
        fx.apply(&Event::Died(DeathReason::SpatialOverlap));
        fx.apply(&Event::Blocked);
        assert_eq!(fx.shake, Effects::DEATH_SHAKE);
    }

    #[test]
    fn test_level_change_clears_effects() {
        let mut fx = Effects::default();
        fx.apply(&Event::Died(DeathReason::SpatialOverlap));
        fx.apply(&Event::DimensionSwitched(Dimension::Hell));
        fx.apply(&Event::LevelStarted(0));
        assert_eq!(fx, Effects::default());
    }
}
