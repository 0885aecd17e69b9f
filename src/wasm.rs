use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::verify::verify;

/// Check the diagram in `text` and return the printed report.
#[wasm_bindgen]
pub fn check(text: &str) -> String {
    verify(text.lines()).to_string()
}

/// Check the diagram in `text` and return only its problems, one string each.
#[wasm_bindgen]
pub fn problems(text: &str) -> Array {
    verify(text.lines())
        .problems()
        .iter()
        .map(|problem| JsValue::from(problem.to_string()))
        .collect()
}
