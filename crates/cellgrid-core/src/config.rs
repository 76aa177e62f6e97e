use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Grid configuration, supplied once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of data rows
    pub rows: usize,
    /// Number of data columns
    pub cols: usize,
    /// Leading rows styled as frozen
    #[serde(default)]
    pub freeze_rows: usize,
    /// Leading columns styled as frozen
    #[serde(default)]
    pub freeze_cols: usize,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            freeze_rows: 0,
            freeze_cols: 0,
        }
    }

    pub fn with_frozen(mut self, freeze_rows: usize, freeze_cols: usize) -> Self {
        self.freeze_rows = freeze_rows;
        self.freeze_cols = freeze_cols;
        self
    }

    /// Parse and validate a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Both dimensions must be positive. Freeze margins may exceed the grid;
    /// they only control styling.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(GridError::InvalidConfig(
                "rows must be greater than zero".to_string(),
            ));
        }
        if self.cols == 0 {
            return Err(GridError::InvalidConfig(
                "cols must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_frozen_row(&self, row: usize) -> bool {
        row < self.freeze_rows
    }

    pub fn is_frozen_col(&self, col: usize) -> bool {
        col < self.freeze_cols
    }
}
