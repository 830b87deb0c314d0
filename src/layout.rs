use std::mem;

use thiserror::Error;

/// Number of hex digits in the offset field. The offset counter is a `u32`,
/// so every offset fits in eight digits; the field never grows or shrinks.
pub const OFFSET_FIELD_WIDTH: usize = mem::size_of::<u32>() * 2;

/// Column grid of the hex panel. Created once from the command line (or from
/// `Default`) and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGeometry {
    /// Bytes grouped together before a column break.
    pub bytes_per_column: usize,
    /// Number of columns per line.
    pub column_count: usize,
    /// Spaces between columns, and on both sides of the hex panel.
    pub column_spacing: usize,
    /// Spaces between adjacent byte pairs within a column.
    pub byte_spacing: usize,
}

impl ColumnGeometry {
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_column * self.column_count
    }
}

impl Default for ColumnGeometry {
    fn default() -> Self {
        ColumnGeometry {
            bytes_per_column: 5,
            column_count: 4,
            column_spacing: 2,
            byte_spacing: 1,
        }
    }
}

/// Fixed per-line widths derived from a `ColumnGeometry`. Computed once per
/// run; every emitted line has exactly `total_line_width` characters before
/// the newline, the final partial line included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDimensions {
    pub offset_field_width: usize,
    pub total_line_width: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("bytes per column must be greater than zero")]
    ZeroBytesPerColumn,
    #[error("column count must be greater than zero")]
    ZeroColumnCount,
}

/// Derives the line widths for `geometry`. Pure; rejects degenerate
/// geometries before any rendering can start.
pub fn compute_dimensions(geometry: &ColumnGeometry) -> Result<LineDimensions, ConfigurationError> {
    if geometry.bytes_per_column == 0 {
        return Err(ConfigurationError::ZeroBytesPerColumn);
    }
    if geometry.column_count == 0 {
        return Err(ConfigurationError::ZeroColumnCount);
    }

    let bytes_per_line = geometry.bytes_per_line();
    let total_line_width = OFFSET_FIELD_WIDTH
        + geometry.column_spacing
        + bytes_per_line * 2
        + (geometry.column_count - 1) * geometry.column_spacing
        + (geometry.bytes_per_column - 1) * geometry.column_count * geometry.byte_spacing
        + geometry.column_spacing
        + bytes_per_line;

    Ok(LineDimensions {
        offset_field_width: OFFSET_FIELD_WIDTH,
        total_line_width,
    })
}
