//! Python bindings for the match-3 board engine.
//!
//! # Quick Start
//!
//! ```python
//! import match3_engine as m3
//!
//! engine = m3.BoardEngine(field_size=8, moves=20, tile_types=5, seed=42)
//! engine.start()
//!
//! a, b = engine.hint()
//! result = engine.request_swap(a, b)
//!
//! board = engine.grid_numpy()   # (rows, columns) uint8 array
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// match3_engine: board resolution engine for match-3 games.
#[pymodule]
fn match3_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPosition>()?;
    m.add_class::<PySwapResult>()?;
    m.add_class::<PySelectOutcome>()?;
    m.add_class::<PyBoardEngine>()?;

    Ok(())
}
