//! Sensor window shape validation
//!
//! Turns the untyped `sensor_data` rows into a rectangular
//! (time_steps x num_features) matrix before any numeric work happens.

use ndarray::{Array2, ArrayView2};
use serde_json::Value;
use thiserror::Error;

/// Minimum number of time steps a window must carry
pub const MIN_TIMESTEPS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("sensor_data must be a 2D numeric array.")]
    NotTwoDimensional,

    #[error("sensor_data must include at least 2 timesteps.")]
    TooFewTimesteps,
}

/// Validated sensor window
#[derive(Debug, Clone, PartialEq)]
pub struct SensorMatrix(Array2<f64>);

impl SensorMatrix {
    /// Parse raw JSON rows into a rectangular numeric matrix
    pub fn from_rows(rows: &[Value]) -> Result<Self, ShapeError> {
        let width = match rows.first() {
            Some(Value::Array(first)) => first.len(),
            _ => return Err(ShapeError::NotTwoDimensional),
        };

        let mut flat = Vec::with_capacity(rows.len() * width);
        for row in rows {
            let cells = match row {
                Value::Array(cells) if cells.len() == width => cells,
                _ => return Err(ShapeError::NotTwoDimensional),
            };
            for cell in cells {
                // Booleans and nested arrays are not numbers
                let v = cell.as_f64().ok_or(ShapeError::NotTwoDimensional)?;
                flat.push(v);
            }
        }

        if rows.len() < MIN_TIMESTEPS {
            return Err(ShapeError::TooFewTimesteps);
        }

        Array2::from_shape_vec((rows.len(), width), flat)
            .map(Self)
            .map_err(|_| ShapeError::NotTwoDimensional)
    }

    pub fn time_steps(&self) -> usize {
        self.0.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.0.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.0.view()
    }
}
