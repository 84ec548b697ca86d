use crate::{Context, IncorrectResultSize, Mapped, Result, RowMapper, RowSource};
use futures::stream::Stream;
use std::iter;

/// Single-pass, forward-only traversal over a [`RowSource`], mapping each row
/// through a [`RowMapper`].
///
/// The tricky part is `has_next`: it may prefetch a row internally but never
/// advances the externally observable position, so it can be called any number
/// of times before `next_row`. Once the source is drained `next_row` keeps
/// returning `Ok(None)`.
///
/// Every terminal operation closes the source on every exit path, and `Drop`
/// closes it when the iterator is abandoned mid-traversal.
pub struct ResultIterator<S: RowSource, T: Mapped + 'static> {
    source: S,
    mapper: RowMapper<T>,
    prefetched: Option<T>,
    finished: bool,
    closed: bool,
    current_index: i64,
}

impl<S: RowSource, T: Mapped + 'static> ResultIterator<S, T> {
    pub fn new(source: S, mapper: RowMapper<T>) -> Self {
        Self {
            source,
            mapper,
            prefetched: None,
            finished: false,
            closed: false,
            current_index: -1,
        }
    }

    fn read_next(&mut self) -> Result<Option<T>> {
        if self.source.advance().context("Database read error")? {
            self.mapper.map_row(&mut self.source).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Whether another row is available. Idempotent, does not consume.
    pub fn has_next(&mut self) -> Result<bool> {
        if self.prefetched.is_some() {
            return Ok(true);
        }
        if self.finished {
            return Ok(false);
        }
        match self.read_next()? {
            Some(row) => {
                self.prefetched = Some(row);
                Ok(true)
            }
            None => {
                self.finished = true;
                Ok(false)
            }
        }
    }

    /// The next mapped row, `Ok(None)` once the source is drained, stably.
    pub fn next_row(&mut self) -> Result<Option<T>> {
        let row = match self.prefetched.take() {
            Some(row) => row,
            None => {
                if self.finished {
                    return Ok(None);
                }
                match self.read_next()? {
                    Some(row) => row,
                    None => {
                        self.finished = true;
                        return Ok(None);
                    }
                }
            }
        };
        self.current_index += 1;
        Ok(Some(row))
    }

    /// Index of the last row handed out, `-1` before the first.
    pub fn current_index(&self) -> i64 {
        self.current_index
    }

    /// Close the underlying source. Idempotent; failures are logged, not
    /// raised, so this is always safe from a cleanup path.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            if let Err(error) = self.source.close() {
                log::warn!("Failed to close the row source: {error:#}");
            }
        }
    }

    /// The first row's mapped object, `None` when empty. Closes the source.
    pub fn first(mut self) -> Result<Option<T>> {
        let result = self.next_row();
        self.close();
        result
    }

    /// The sole row's mapped object, `None` when empty. A second row raises
    /// [`IncorrectResultSize`]. Closes the source.
    pub fn unique(mut self) -> Result<Option<T>> {
        let result = (|| {
            let first = self.next_row()?;
            if first.is_some() && self.next_row()?.is_some() {
                return Err(IncorrectResultSize {
                    expected: 1,
                    actual: 2,
                }
                .into());
            }
            Ok(first)
        })();
        self.close();
        result
    }

    /// Drain the remaining rows, preserving fetch order. Closes the source.
    pub fn list(self) -> Result<Vec<T>> {
        let mut rows = Vec::new();
        self.collect_into(&mut rows)?;
        Ok(rows)
    }

    /// Drain the remaining rows into `out`. Closes the source.
    pub fn collect_into<C: Extend<T>>(mut self, out: &mut C) -> Result<()> {
        let result = (|| {
            while let Some(row) = self.next_row()? {
                out.extend(iter::once(row));
            }
            Ok(())
        })();
        self.close();
        result
    }

    /// Feed the remaining rows to `consumer`. Closes the source.
    pub fn consume(mut self, mut consumer: impl FnMut(T)) -> Result<()> {
        let result = (|| {
            while let Some(row) = self.next_row()? {
                consumer(row);
            }
            Ok(())
        })();
        self.close();
        result
    }

    /// Adapt into a [`Stream`]. The source is closed when the stream is
    /// dropped, like any other exit path.
    pub fn stream(self) -> impl Stream<Item = Result<T>> {
        futures::stream::iter(self)
    }
}

impl<S: RowSource, T: Mapped + 'static> Iterator for ResultIterator<S, T> {
    type Item = Result<T>;

    /// Errors are yielded once, after which the iterator fuses.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => None,
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<S: RowSource, T: Mapped + 'static> Drop for ResultIterator<S, T> {
    fn drop(&mut self) {
        self.close();
    }
}
