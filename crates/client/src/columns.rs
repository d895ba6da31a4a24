//! Column descriptor sets: the declarative mapping from entity fields
//! to table cells. The table renderer itself is a collaborator outside
//! this crate; what it receives is rows of resolved `Cell`s keyed by
//! the record's canonical id.

use thiserror::Error;

use contracts::shared::badge::StatusBadge;
use contracts::shared::date_format::{format_date_opt, format_datetime_opt};
use contracts::shared::PLACEHOLDER;

use crate::resource::RestResource;

/// One resolved table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Badge(StatusBadge),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Cell::Text(PLACEHOLDER.to_string())
        } else {
            Cell::Text(value)
        }
    }

    /// Absent fields render the placeholder, never `null` or `NaN`.
    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(text) => Cell::text(text),
            None => Cell::Text(PLACEHOLDER.to_string()),
        }
    }

    pub fn opt_display<V: std::fmt::Display>(value: Option<V>) -> Self {
        match value {
            Some(v) => Cell::text(v.to_string()),
            None => Cell::Text(PLACEHOLDER.to_string()),
        }
    }

    pub fn date(value: Option<&str>) -> Self {
        Cell::Text(format_date_opt(value))
    }

    pub fn datetime(value: Option<&str>) -> Self {
        Cell::Text(format_datetime_opt(value))
    }

    pub fn badge(badge: StatusBadge) -> Self {
        Cell::Badge(badge)
    }

    /// Display text of the cell (badge label for badges).
    pub fn display(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Badge(badge) => &badge.label,
        }
    }
}

/// How one field of `T` is labeled and rendered.
///
/// `render` must be pure; a renderer that panics is a defect in the
/// descriptor, not in the table.
pub struct ColumnDescriptor<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub render: fn(&T) -> Cell,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("duplicate column key: {0}")]
    DuplicateKey(&'static str),
    #[error("record without an id cannot be rendered")]
    MissingRowId,
}

/// Validated, ordered set of column descriptors for one entity.
pub struct ColumnSet<T> {
    columns: Vec<ColumnDescriptor<T>>,
}

impl<T> ColumnSet<T> {
    /// Keys must be unique within the set.
    pub fn new(columns: Vec<ColumnDescriptor<T>>) -> Result<Self, ColumnError> {
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|c| c.key == column.key) {
                return Err(ColumnError::DuplicateKey(column.key));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One row ready for the table renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Render-identity key; guaranteed non-empty.
    pub id: String,
    pub cells: Vec<Cell>,
}

/// Resolve every row through the descriptor set.
///
/// A record whose canonical id is empty is rejected: an empty-string
/// render key would collide across rows and corrupt list
/// reconciliation downstream.
pub fn render_rows<T: RestResource>(
    rows: &[T],
    columns: &ColumnSet<T>,
) -> Result<Vec<RenderedRow>, ColumnError> {
    let mut rendered = Vec::with_capacity(rows.len());
    for row in rows {
        let id = row.record_id();
        if id.is_empty() {
            return Err(ColumnError::MissingRowId);
        }
        let cells = columns
            .columns()
            .iter()
            .map(|column| (column.render)(row))
            .collect();
        rendered.push(RenderedRow {
            id: id.to_string(),
            cells,
        });
    }
    Ok(rendered)
}
