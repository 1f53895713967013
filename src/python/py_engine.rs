//! Engine bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, Position};
use crate::engine::{BoardEngine, BoardEvent};

use super::py_core::{to_py_err, PyPosition, PySelectOutcome, PySwapResult};

/// Python wrapper for BoardEngine.
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    inner: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create an idle engine.
    ///
    /// # Arguments
    /// - field_size: Board edge length (3-255)
    /// - moves: Move budget per game
    /// - tile_types: Number of distinct tile types (3-32)
    /// - seed: RNG seed for deterministic games
    /// - regenerate_after: Failed reshuffles before the board is refilled
    #[new]
    #[pyo3(signature = (
        field_size = 15,
        moves = 30,
        tile_types = 5,
        seed = 42,
        regenerate_after = 32
    ))]
    fn new(
        field_size: usize,
        moves: u32,
        tile_types: u8,
        seed: u64,
        regenerate_after: u32,
    ) -> PyResult<Self> {
        let config = EngineConfig::default()
            .with_field_size(field_size)
            .with_moves(moves)
            .with_tile_types(tile_types)
            .with_seed(seed)
            .with_regenerate_after(regenerate_after);
        let inner = BoardEngine::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Start a game on a random board. Returns the points scored by the
    /// initial cascade.
    fn start(&mut self) -> u64 {
        self.inner.start().score_delta
    }

    /// Start a game on an explicit board given as `columns[c][r]`.
    fn start_with_grid(&mut self, columns: Vec<Vec<u8>>) -> PyResult<u64> {
        self.inner
            .start_with_grid(&columns)
            .map(|r| r.score_delta)
            .map_err(to_py_err)
    }

    fn stop(&mut self) {
        self.inner.stop();
    }

    /// Swap two adjacent cells.
    fn request_swap(&mut self, a: PyPosition, b: PyPosition) -> PySwapResult {
        PySwapResult(self.inner.request_swap(a.0, b.0))
    }

    /// Click a cell in the two-click selection flow.
    fn select(&mut self, column: usize, row: usize) -> PySelectOutcome {
        PySelectOutcome(self.inner.select(Position::new(column, row)))
    }

    /// One swap that would score, if any.
    fn hint(&self) -> Option<(PyPosition, PyPosition)> {
        self.inner.hint().map(|(a, b)| (PyPosition(a), PyPosition(b)))
    }

    fn has_possible_moves(&self) -> bool {
        self.inner.has_possible_moves()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.inner.score()
    }

    #[getter]
    fn moves_remaining(&self) -> u32 {
        self.inner.moves_remaining()
    }

    #[getter]
    fn state(&self) -> String {
        self.inner.state().to_string()
    }

    #[getter]
    fn selection(&self) -> Option<PyPosition> {
        self.inner.selection().map(PyPosition)
    }

    /// Board as a (rows, columns) uint8 array of tile types.
    fn grid_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let grid = self
            .inner
            .grid()
            .ok_or_else(|| PyValueError::new_err("Game has not been started"))?;
        let n = grid.size();

        let mut flat = Vec::with_capacity(grid.len());
        for row in 0..n {
            flat.extend(grid.row(row).map(|tile| tile.kind.raw()));
        }

        PyArray1::from_vec_bound(py, flat)
            .reshape([n, n])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Drain the event queue, returning each event's kind in order.
    fn drain_events(&mut self) -> Vec<&'static str> {
        self.inner
            .drain_events()
            .iter()
            .map(|event| match event {
                BoardEvent::Filled { .. } => "filled",
                BoardEvent::Swapped { .. } => "swapped",
                BoardEvent::SwapReverted { .. } => "swap_reverted",
                BoardEvent::Cascade(_) => "cascade",
                BoardEvent::Reshuffled { .. } => "reshuffled",
                BoardEvent::Regenerated { .. } => "regenerated",
                BoardEvent::Cleared => "cleared",
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardEngine(state={}, score={}, moves_remaining={})",
            self.inner.state(),
            self.inner.score(),
            self.inner.moves_remaining()
        )
    }
}
