use chrono::{DateTime, Utc};
use ndarray::{s, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{
    data::historical::Candle,
    error::{EnvError, Result},
};

/// Row-indexed matrix of named feature columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFrame {
    pub index: Vec<DateTime<Utc>>,
    pub columns: Vec<String>,
    pub values: Array2<f64>,
}

impl FeatureFrame {
    pub fn new(index: Vec<DateTime<Utc>>, columns: Vec<String>, values: Array2<f64>) -> Result<Self> {
        let frame = Self { index, columns, values };
        frame.validate()?;
        Ok(frame)
    }

    /// Frames read from disk skip `new`, so shape is checked again before use.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.values.dim();
        if rows != self.index.len() {
            return Err(EnvError::FrameShape(format!(
                "{rows} value rows but {} index entries",
                self.index.len()
            )));
        }
        if cols != self.columns.len() {
            return Err(EnvError::FrameShape(format!(
                "{cols} value columns but {} column names",
                self.columns.len()
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Rows `start..end`. Out of range bounds panic like slice indexing.
    pub fn slice_rows(&self, start: usize, end: usize) -> FeatureFrame {
        FeatureFrame {
            index: self.index[start..end].to_vec(),
            columns: self.columns.clone(),
            values: self.values.slice(s![start..end, ..]).to_owned(),
        }
    }

    /// Column-wise concatenation of constant-valued columns. The row index is untouched.
    pub fn append_columns(&self, columns: &[(&str, f64)]) -> FeatureFrame {
        let (rows, width) = self.values.dim();
        let mut values = Array2::<f64>::zeros((rows, width + columns.len()));
        values.slice_mut(s![.., ..width]).assign(&self.values);

        let mut names = self.columns.clone();
        for (offset, (name, value)) in columns.iter().enumerate() {
            values.column_mut(width + offset).fill(*value);
            names.push(name.to_string());
        }

        FeatureFrame {
            index: self.index.clone(),
            columns: names,
            values,
        }
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let position = self.columns.iter().position(|column| column == name)?;
        Some(self.values.column(position))
    }

    /// Small demo feature set for driving the environment without an external pipeline:
    /// close percent change, high-low range relative to close, log volume.
    pub fn from_candles(candles: &[Candle]) -> FeatureFrame {
        let mut values = Array2::<f64>::zeros((candles.len(), 3));

        for (row, candle) in candles.iter().enumerate() {
            let pct_change = match row.checked_sub(1).map(|previous| candles[previous].close) {
                Some(previous) if previous != 0.0 => candle.close / previous - 1.0,
                _ => 0.0,
            };
            let range = if candle.close != 0.0 {
                (candle.high - candle.low) / candle.close
            } else {
                0.0
            };

            values[[row, 0]] = pct_change;
            values[[row, 1]] = range;
            values[[row, 2]] = candle.volume.max(0.0).ln_1p();
        }

        FeatureFrame {
            index: candles.iter().map(|candle| candle.date).collect(),
            columns: vec![
                "%-pct_change".to_string(),
                "%-range".to_string(),
                "%-log_volume".to_string(),
            ],
            values,
        }
    }
}
