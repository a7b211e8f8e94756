//! Sink trait and implementations for view output

use std::fmt::Display;
use std::io::Write;
use std::marker::PhantomData;

use crate::error::Result;

/// A sink that consumes the items produced by a view
pub trait Sink {
    /// The type of items this sink consumes
    type Item;

    /// Consume one item
    fn consume(&mut self, item: Self::Item) -> Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A sink that collects items in memory
#[derive(Debug, Clone)]
pub struct CollectingSink<T> {
    /// The collected items
    items: Vec<T>,

    /// Maximum number of items to collect
    max_items: Option<usize>,
}

impl<T> CollectingSink<T> {
    /// Create a new collecting sink with no limit
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_items: None,
        }
    }

    /// Create a new collecting sink that keeps at most `max_items`
    pub fn with_capacity(max_items: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_items),
            max_items: Some(max_items),
        }
    }

    /// Get the collected items
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take ownership of the collected items
    pub fn take_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for CollectingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sink for CollectingSink<T> {
    type Item = T;

    fn consume(&mut self, item: T) -> Result<()> {
        if self.max_items.map_or(true, |max| self.items.len() < max) {
            self.items.push(item);
        }
        Ok(())
    }
}

/// A sink that writes each item on its own line
pub struct WriterSink<W, T> {
    writer: W,
    _item: PhantomData<fn(T)>,
}

impl<W: Write, T> WriterSink<W, T> {
    /// Create a sink over any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            _item: PhantomData,
        }
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write, T: Display> Sink for WriterSink<W, T> {
    type Item = T;

    fn consume(&mut self, item: T) -> Result<()> {
        writeln!(self.writer, "{item}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// A sink that hands every item to a closure
pub struct CallbackSink<F, T> {
    callback: F,
    _item: PhantomData<fn(T)>,
}

impl<F, T> CallbackSink<F, T>
where
    F: FnMut(T) -> Result<()>,
{
    /// Create a sink from a per-item callback
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            _item: PhantomData,
        }
    }
}

impl<F, T> Sink for CallbackSink<F, T>
where
    F: FnMut(T) -> Result<()>,
{
    type Item = T;

    fn consume(&mut self, item: T) -> Result<()> {
        (self.callback)(item)
    }
}

impl<K: Sink + ?Sized> Sink for &mut K {
    type Item = K::Item;

    fn consume(&mut self, item: Self::Item) -> Result<()> {
        (**self).consume(item)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_collecting_sink_cap() {
        let mut sink = CollectingSink::with_capacity(2);
        for item in 1..=5 {
            sink.consume(item).unwrap();
        }
        assert_eq!(sink.take_items(), vec![1, 2]);
    }

    #[test]
    fn test_writer_sink_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.consume(1).unwrap();
        sink.consume(4).unwrap();
        sink.flush().unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "1\n4\n");
    }

    #[test]
    fn test_callback_sink_propagates_errors() {
        let mut seen = Vec::new();
        let mut sink = CallbackSink::new(|item: i32| {
            if item > 2 {
                return Err(Error::Sink(format!("refusing {item}")));
            }
            seen.push(item);
            Ok(())
        });
        sink.consume(1).unwrap();
        assert!(matches!(sink.consume(3), Err(Error::Sink(_))));
        drop(sink);
        assert_eq!(seen, vec![1]);
    }
}
