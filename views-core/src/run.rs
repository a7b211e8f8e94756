//! Draining views into sinks

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::sink::Sink;
use crate::view::View;

/// Configuration for draining a view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many items; required to drain infinite views
    pub limit: Option<usize>,

    /// Flush the sink after every item instead of once at the end
    pub flush_each: bool,
}

impl RunConfig {
    /// Config that stops after `limit` items
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Statistics from draining a view
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Number of items handed to the sink
    pub items_emitted: u64,

    /// Whether the run stopped at the configured limit
    ///
    /// The loop never pulls past the limit, so a view that runs out exactly
    /// at the limit also reports `true`.
    pub limit_reached: bool,

    /// Total time spent pulling and consuming
    pub elapsed: Duration,
}

/// Pull every item from `view` into `sink`, honoring the configured limit
///
/// Stopping early never touches the source, so it is always safe to drain
/// part of a view and drop the rest.
pub fn run<I, K>(view: View<I>, sink: &mut K, config: &RunConfig) -> Result<RunStats>
where
    I: Iterator,
    K: Sink<Item = I::Item> + ?Sized,
{
    debug!(plan = %view.describe(), limit = ?config.limit, "running view");

    let start = Instant::now();
    let mut items_emitted = 0u64;
    let mut limit_reached = false;
    let mut remaining = config.limit;
    let mut view = view;

    loop {
        if remaining == Some(0) {
            limit_reached = true;
            break;
        }
        let Some(item) = view.next() else {
            break;
        };

        sink.consume(item)?;
        if config.flush_each {
            sink.flush()?;
        }

        items_emitted += 1;
        remaining = remaining.map(|left| left - 1);
    }

    sink.flush()?;

    let stats = RunStats {
        items_emitted,
        limit_reached,
        elapsed: start.elapsed(),
    };
    debug!(
        items = stats.items_emitted,
        limit_reached = stats.limit_reached,
        elapsed = ?stats.elapsed,
        "view drained"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sink::{CallbackSink, CollectingSink, WriterSink};
    use crate::view::{iota_from, view};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn test_run_finite_view() {
        init_tracing();
        let mut sink = CollectingSink::new();
        let squares = view(vec![1, 2, 3]).map(|x| x * x);
        let stats = run(squares, &mut sink, &RunConfig::default()).unwrap();
        assert_eq!(stats.items_emitted, 3);
        assert!(!stats.limit_reached);
        assert_eq!(sink.items(), &[1, 4, 9]);
    }

    #[test]
    fn test_run_bounds_infinite_view() {
        init_tracing();
        let mut sink = CollectingSink::new();
        let stats = run(iota_from(1u64), &mut sink, &RunConfig::with_limit(4)).unwrap();
        assert_eq!(stats.items_emitted, 4);
        assert!(stats.limit_reached);
        assert_eq!(sink.take_items(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_limit_reached_means_stopped_at_limit() {
        let mut pulled = 0;
        let counted = view(vec![1, 2, 3]).map(|x| {
            pulled += 1;
            x
        });
        let mut sink = CollectingSink::new();
        let stats = run(counted, &mut sink, &RunConfig::with_limit(3)).unwrap();
        assert!(stats.limit_reached);
        assert_eq!(pulled, 3);

        let stats = run(view(vec![1, 2]), &mut sink, &RunConfig::with_limit(3)).unwrap();
        assert!(!stats.limit_reached);
        assert_eq!(stats.items_emitted, 2);

        let empty: Vec<i32> = Vec::new();
        let stats = run(view(empty), &mut sink, &RunConfig::with_limit(0)).unwrap();
        assert!(stats.limit_reached);
        assert_eq!(stats.items_emitted, 0);
    }

    #[test]
    fn test_run_flush_each_writes_lines() {
        let config = RunConfig {
            limit: None,
            flush_each: true,
        };
        let mut sink = WriterSink::new(Vec::new());
        run(view(["a", "b"]), &mut sink, &config).unwrap();
        assert_eq!(sink.into_inner(), b"a\nb\n");
    }

    #[test]
    fn test_run_stops_on_sink_error() {
        let mut seen = 0;
        let mut sink = CallbackSink::new(|item: i32| {
            seen += 1;
            if item == 2 {
                Err(Error::Sink("full".into()))
            } else {
                Ok(())
            }
        });
        let result = run(view(vec![1, 2, 3]), &mut sink, &RunConfig::default());
        assert!(matches!(result, Err(Error::Sink(_))));
        drop(sink);
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(config, RunConfig::with_limit(5));
    }
}
