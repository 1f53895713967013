//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Position;
use crate::engine::{SelectOutcome, SwapResult};
use crate::error::EngineError;

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Position.
#[pyclass(name = "Position")]
#[derive(Clone, Copy, Debug)]
pub struct PyPosition(pub Position);

#[pymethods]
impl PyPosition {
    #[new]
    fn new(column: usize, row: usize) -> Self {
        Self(Position::new(column, row))
    }

    #[getter]
    fn column(&self) -> usize {
        self.0.column
    }

    #[getter]
    fn row(&self) -> usize {
        self.0.row
    }

    /// True when the two cells share an edge.
    fn is_adjacent(&self, other: &Self) -> bool {
        self.0.is_adjacent(other.0)
    }

    fn __repr__(&self) -> String {
        format!("Position(column={}, row={})", self.0.column, self.0.row)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.column as u64) << 32) | self.0.row as u64
    }
}

/// Python wrapper for SwapResult.
#[pyclass(name = "SwapResult")]
#[derive(Clone, Copy, Debug)]
pub struct PySwapResult(pub SwapResult);

#[pymethods]
impl PySwapResult {
    /// "rejected", "no_effect" or "resolved".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            SwapResult::Rejected(_) => "rejected",
            SwapResult::NoEffect => "no_effect",
            SwapResult::Resolved { .. } => "resolved",
        }
    }

    /// Rejection reason, if the swap was rejected.
    #[getter]
    fn error(&self) -> Option<String> {
        match self.0 {
            SwapResult::Rejected(err) => Some(err.to_string()),
            _ => None,
        }
    }

    #[getter]
    fn score_delta(&self) -> u64 {
        match self.0 {
            SwapResult::Resolved { score_delta, .. } => score_delta,
            _ => 0,
        }
    }

    #[getter]
    fn cascade_steps(&self) -> usize {
        match self.0 {
            SwapResult::Resolved { cascade_steps, .. } => cascade_steps,
            _ => 0,
        }
    }

    #[getter]
    fn reshuffled(&self) -> bool {
        matches!(self.0, SwapResult::Resolved { reshuffled: true, .. })
    }

    fn is_resolved(&self) -> bool {
        self.0.is_resolved()
    }

    fn __repr__(&self) -> String {
        format!("SwapResult({:?})", self.0)
    }
}

/// Python wrapper for SelectOutcome.
#[pyclass(name = "SelectOutcome")]
#[derive(Clone, Copy, Debug)]
pub struct PySelectOutcome(pub SelectOutcome);

#[pymethods]
impl PySelectOutcome {
    /// "ignored", "selected", "deselected" or "swapped".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            SelectOutcome::Ignored => "ignored",
            SelectOutcome::Selected(_) => "selected",
            SelectOutcome::Deselected(_) => "deselected",
            SelectOutcome::Swapped(_) => "swapped",
        }
    }

    /// Cell that was selected or dropped, if any.
    #[getter]
    fn position(&self) -> Option<PyPosition> {
        match self.0 {
            SelectOutcome::Selected(pos) | SelectOutcome::Deselected(pos) => {
                Some(PyPosition(pos))
            }
            _ => None,
        }
    }

    /// Swap result when the click completed a swap.
    #[getter]
    fn swap(&self) -> Option<PySwapResult> {
        match self.0 {
            SelectOutcome::Swapped(result) => Some(PySwapResult(result)),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("SelectOutcome({:?})", self.0)
    }
}
