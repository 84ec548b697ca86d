use crate::{DataType, Error, Result, Value};
use std::{collections::VecDeque, sync::Arc};

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice aligned by index with the names.
pub type Row = Box<[Value]>;

/// A stateful cursor over query-result rows, advanced and read one row at a
/// time. Supplied by the database-client layer; this crate only consumes it.
///
/// One exclusive owner per traversal: nothing here supports concurrent reads
/// of the same cursor. `close` must be idempotent and callable from any
/// failure-cleanup path mid-traversal.
pub trait RowSource {
    /// Column labels of the row shape, stable for the whole traversal.
    fn columns(&self) -> &[String];

    /// Move to the next row. `Ok(false)` when the source is exhausted, which
    /// is a normal condition, not an error.
    fn advance(&mut self) -> Result<bool>;

    /// Read the column at `index` (0-based) from the current row. SQL NULL is
    /// returned as a typed empty [`Value`], never as an error. `expected` is a
    /// hint for drivers that decode lazily; sources holding already-typed
    /// values may ignore it.
    fn read_column(&mut self, index: usize, expected: &DataType) -> Result<Value>;

    /// Release the underlying resources. Idempotent.
    fn close(&mut self) -> Result<()>;
}

/// In-memory [`RowSource`] over pre-built rows.
///
/// Used by the test suites and handy as a stub wherever a real cursor is not
/// available. Rows are yielded in insertion order.
#[derive(Debug, Clone)]
pub struct VecRowSource {
    labels: RowNames,
    rows: VecDeque<Row>,
    current: Option<Row>,
    closed: bool,
}

impl VecRowSource {
    pub fn new<L, S>(labels: L, rows: Vec<Row>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            rows: rows.into(),
            current: None,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl RowSource for VecRowSource {
    fn columns(&self) -> &[String] {
        &self.labels
    }

    fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Err(Error::msg("The row source is closed"));
        }
        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn read_column(&mut self, index: usize, _expected: &DataType) -> Result<Value> {
        let row = self
            .current
            .as_ref()
            .ok_or_else(|| Error::msg("No current row, call advance() first"))?;
        row.get(index)
            .cloned()
            .ok_or_else(|| Error::msg(format!("Column index {index} is out of range")))
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.current = None;
        self.rows.clear();
        Ok(())
    }
}
