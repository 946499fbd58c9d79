//! Presentation surface: the per-element display state the scheduler drives.
//!
//! The scheduler writes values and tints straight into the surface on every
//! dispatch instead of rebuilding the view from the backing array. The
//! backing array is only copied in again ([`PresentationSurface::resync`])
//! when a new session starts.

use crate::error::SurfaceError;
use crate::events::Tint;

/// Mutable view over a fixed-size row of displayed elements.
pub trait PresentationSurface {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value(&self, index: usize) -> Result<i64, SurfaceError>;

    fn set_value(&mut self, index: usize, value: i64) -> Result<(), SurfaceError>;

    fn tint(&self, index: usize) -> Result<Option<Tint>, SurfaceError>;

    /// `None` removes any tint.
    fn set_tint(&mut self, index: usize, tint: Option<Tint>) -> Result<(), SurfaceError>;

    /// Replace every element with `values` and drop all tints.
    fn resync(&mut self, values: &[i64]);
}

/// What one box on screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: i64,
    pub tint: Option<Tint>,
}

impl Cell {
    pub fn new(value: i64) -> Self {
        Self { value, tint: None }
    }
}

/// In-memory surface rendered by [`crate::ui::ArrayView`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArraySurface {
    cells: Vec<Cell>,
}

impl ArraySurface {
    pub fn new(values: &[i64]) -> Self {
        Self {
            cells: values.iter().copied().map(Cell::new).collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Displayed values in order.
    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|cell| cell.value).collect()
    }

    /// Indices that currently carry any tint.
    pub fn tinted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.tint.is_some())
            .map(|(index, _)| index)
            .collect()
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell, SurfaceError> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(SurfaceError::OutOfRange { index, len })
    }

    fn cell(&self, index: usize) -> Result<&Cell, SurfaceError> {
        self.cells.get(index).ok_or(SurfaceError::OutOfRange {
            index,
            len: self.cells.len(),
        })
    }
}

impl PresentationSurface for ArraySurface {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn value(&self, index: usize) -> Result<i64, SurfaceError> {
        self.cell(index).map(|cell| cell.value)
    }

    fn set_value(&mut self, index: usize, value: i64) -> Result<(), SurfaceError> {
        self.cell_mut(index)?.value = value;
        Ok(())
    }

    fn tint(&self, index: usize) -> Result<Option<Tint>, SurfaceError> {
        self.cell(index).map(|cell| cell.tint)
    }

    fn set_tint(&mut self, index: usize, tint: Option<Tint>) -> Result<(), SurfaceError> {
        self.cell_mut(index)?.tint = tint;
        Ok(())
    }

    fn resync(&mut self, values: &[i64]) {
        self.cells.clear();
        self.cells.extend(values.iter().copied().map(Cell::new));
    }
}
