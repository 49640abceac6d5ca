//! Board configuration

use crate::error::EngineError;
use crate::geometry::MAX_BOX;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, SPAWN_GUARD_ROWS};

/// Narrowest board that still fits the widest bounding box
pub const MIN_COLUMNS: usize = MAX_BOX;

/// Shortest board that fits a spawn box below the spawn guard rows
pub const MIN_ROWS: usize = MAX_BOX + SPAWN_GUARD_ROWS;

/// Largest row or column count; board coordinates are `i32`
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Grid dimensions, fixed for the life of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    rows: usize,
    columns: usize,
}

impl BoardConfig {
    /// Validate dimensions; the cell count must also fit in a `usize`
    pub fn new(rows: usize, columns: usize) -> Result<Self, EngineError> {
        let in_range = (MIN_ROWS..=MAX_DIMENSION).contains(&rows)
            && (MIN_COLUMNS..=MAX_DIMENSION).contains(&columns)
            && rows.checked_mul(columns).is_some();
        if !in_range {
            return Err(EngineError::InvalidDimensions {
                rows,
                columns,
                min_rows: MIN_ROWS,
                min_columns: MIN_COLUMNS,
            });
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = BoardConfig::default();
        assert_eq!(config.rows(), 20);
        assert_eq!(config.columns(), 10);
        assert_eq!(config.cell_count(), 200);
    }

    #[test]
    fn test_rejects_tiny_boards() {
        assert!(BoardConfig::new(MIN_ROWS, MIN_COLUMNS).is_ok());
        assert!(matches!(
            BoardConfig::new(MIN_ROWS - 1, 10),
            Err(EngineError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            BoardConfig::new(20, MIN_COLUMNS - 1),
            Err(EngineError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_boards() {
        assert!(BoardConfig::new(MAX_DIMENSION + 1, 10).is_err());
        assert!(BoardConfig::new(20, MAX_DIMENSION + 1).is_err());
        assert!(matches!(
            BoardConfig::new(usize::MAX, usize::MAX),
            Err(EngineError::InvalidDimensions { .. })
        ));
    }
}
