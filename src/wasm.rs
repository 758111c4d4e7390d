//! JavaScript bindings, enabled by the `wasm` feature.

use js_sys::Error;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::input::parse_board;
use crate::report::render;

/// Solve puzzle text and return the report text, or a JavaScript `Error` describing why the input was rejected.
#[wasm_bindgen(js_name = solvePuzzle)]
pub fn solve_puzzle(input: &str) -> Result<String, Error> {
    let board = parse_board(input).map_err(|e| Error::new(&e.to_string()))?;
    Ok(render(&board.solve()))
}

/// Render the poisoned (`#`) and edible (`.`) cells of puzzle text, one line per row.
#[wasm_bindgen(js_name = renderBoard)]
pub fn render_board(input: &str) -> Result<String, Error> {
    parse_board(input)
        .map(|board| board.to_string())
        .map_err(|e| Error::new(&e.to_string()))
}
