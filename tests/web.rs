// Browser smoke tests; only built for wasm32 (`wasm-pack test --headless`).
#![cfg(target_arch = "wasm32")]

use romantic_pursuit::{Catalog, Dimension, Engine, GameMode, Lang};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn builtin_catalog_validates_in_wasm() {
    let catalog = Catalog::builtin(Lang::Zh).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[wasm_bindgen_test]
fn engine_runs_in_wasm() {
    let mut engine = Engine::new(Catalog::builtin(Lang::En).unwrap());
    engine.begin();
    engine.advance_dialog();
    engine.switch_dimension(Dimension::Hell);
    assert_eq!(engine.mode(), GameMode::Playing);
    assert_eq!(engine.player().dimension, Dimension::Human);
}

#[wasm_bindgen_test]
fn dialog_overlay_keeps_line_breaks() {
    romantic_pursuit::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let style = doc
        .get_element_by_id("rp-dialog")
        .and_then(|el| el.get_attribute("style"))
        .unwrap();
    assert!(style.contains("white-space:pre-line"));
}
