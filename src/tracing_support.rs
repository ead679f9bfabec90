//! Subscriber setup and per-span timing.
//!
//! The graph algorithms open `tracing` spans (`validate`, `kruskal`,
//! `dijkstra`).  When the `tracing` feature is enabled this module can install
//! a subscriber that totals the wall time and call count of each span name on
//! the current thread, and optionally logs events to stderr.  When it is
//! disabled the same functions exist as no-ops.

use std::time::Duration;

/// Accumulated time and number of closed spans for one span name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanTiming {
    pub total: Duration,
    pub count: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::{Once, OnceLock},
        time::Instant,
    };

    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{
        Layer, Registry, fmt,
        layer::{Context, Layered, SubscriberExt},
        registry::LookupSpan,
        reload,
        util::SubscriberInitExt,
    };

    use super::SpanTiming;

    thread_local! {
        static TIMINGS: RefCell<BTreeMap<&'static str, SpanTiming>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    static INIT: Once = Once::new();
    static LOG_LEVEL: OnceLock<reload::Handle<LevelFilter, Layered<TimingLayer, Registry>>> =
        OnceLock::new();

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    TIMINGS.with(|timings| {
                        let mut timings = timings.borrow_mut();
                        let entry = timings.entry(name).or_default();
                        entry.total += elapsed;
                        entry.count += 1;
                    });
                }
            }
        }
    }

    /// Installs the global subscriber: span timings plus an event logger to
    /// stderr that starts switched off.  Does nothing after the first call, or
    /// if another subscriber is already installed.
    pub fn init_tracing() {
        INIT.call_once(|| {
            let (filter, handle) = reload::Layer::new(LevelFilter::OFF);
            let installed = Registry::default()
                .with(TimingLayer)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_filter(filter),
                )
                .try_init();
            if installed.is_ok() {
                let _ = LOG_LEVEL.set(handle);
            }
        });
    }

    /// Logs events at `level` or above to stderr, installing the subscriber
    /// first if needed.  May be called at any time, and again to change the
    /// level.
    pub fn init_logging(level: LevelFilter) {
        init_tracing();
        if let Some(handle) = LOG_LEVEL.get() {
            let _ = handle.reload(level);
        }
    }

    /// The current stderr log level, or `None` if this module's subscriber
    /// is not the one installed.
    pub fn log_level() -> Option<LevelFilter> {
        LOG_LEVEL.get()?.clone_current()
    }

    /// Span timings collected on this thread, by span name.
    pub fn method_timings() -> Vec<(&'static str, SpanTiming)> {
        TIMINGS.with(|timings| {
            timings
                .borrow()
                .iter()
                .map(|(name, timing)| (*name, *timing))
                .collect()
        })
    }

    pub fn reset_method_timings() {
        init_tracing();
        TIMINGS.with(|timings| timings.borrow_mut().clear());
    }

    /// Prints this thread's span timings to stderr, slowest first.
    #[doc(hidden)]
    pub fn dump_method_timings() {
        let mut entries = method_timings();
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        eprintln!("span timings (desc):");
        for (name, timing) in entries {
            eprintln!("  {name}: {:?} ({}x)", timing.total, timing.count);
        }
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use tracing::level_filters::LevelFilter;

    use super::SpanTiming;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn init_logging(_level: LevelFilter) {
        // No-op when tracing is disabled
    }

    pub fn log_level() -> Option<LevelFilter> {
        None
    }

    pub fn method_timings() -> Vec<(&'static str, SpanTiming)> {
        Vec::new()
    }

    pub fn reset_method_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

/// Convenience lookup of one span's timing on this thread.
pub fn timing_of(name: &str) -> Option<SpanTiming> {
    method_timings()
        .into_iter()
        .find_map(|(span, timing)| (span == name).then_some(timing))
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;
    use crate::{Edge, Graph};

    #[test]
    fn test_algorithm_spans_are_timed() {
        reset_method_timings();
        let graph = Graph::new(
            3,
            [
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 1.0),
                Edge::new(0, 2, 3.0),
            ],
        )
        .unwrap();
        graph.kruskal();
        graph.kruskal();
        graph.dijkstra(0).unwrap();

        // Another test may have installed its own subscriber first, in which
        // case nothing is recorded here.
        if let Some(kruskal) = timing_of("kruskal") {
            assert_eq!(kruskal.count, 2);
            assert_eq!(timing_of("dijkstra").map(|t| t.count), Some(1));
            assert_eq!(timing_of("validate").map(|t| t.count), Some(1));
        }
        reset_method_timings();
        assert_eq!(timing_of("kruskal"), None);
    }

    #[test]
    fn test_logging_level_applies_after_timing_setup() {
        init_tracing();
        let Some(initial) = log_level() else {
            return;
        };
        init_logging(LevelFilter::ERROR);
        assert_eq!(log_level(), Some(LevelFilter::ERROR));
        init_logging(initial);
        assert_eq!(log_level(), Some(initial));
    }
}
