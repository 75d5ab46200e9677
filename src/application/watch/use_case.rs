//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, trace, warn};

use crate::application::merge::MergeUseCase;
use crate::domain::ports::FileSystem;
use crate::error::{ConcatError, ConcatResult};

use super::debounce::LeadingEdgeDebouncer;
use super::event::{WatchEvent, WatchOptions};

/// Watch Use Case
///
/// Re-runs the merge whenever the base file is written, with a leading-edge
/// debounce. This is the main entry point for `concat-config --watch`.
pub struct WatchUseCase<FS: FileSystem> {
    options: WatchOptions,
    merge: MergeUseCase<FS>,
}

impl<FS: FileSystem> WatchUseCase<FS> {
    /// Create a new WatchUseCase
    pub fn new(options: WatchOptions, fs: FS) -> Self {
        Self {
            options,
            merge: MergeUseCase::new(fs),
        }
    }

    /// Start watching (blocking)
    ///
    /// Subscribes to the base file, then blocks until `running` is cleared.
    /// The initial merge is the caller's job. Failing to set up the watcher
    /// and failing to merge are both returned as errors; errors reported by
    /// the notification backend are only reported through `on_event`.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> ConcatResult<()>
    where
        F: Fn(WatchEvent),
    {
        let base = self.options.base().to_path_buf();
        let setup_error = |e: notify::Error| ConcatError::WatchSetup {
            path: base.clone(),
            message: e.to_string(),
        };

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(setup_error)?;

        watcher
            .watch(&base, RecursiveMode::NonRecursive)
            .map_err(setup_error)?;

        info!(base = %base.display(), "watching base file");
        on_event(WatchEvent::WatchStarted {
            base: base.display().to_string(),
            targets: self
                .options
                .merge
                .targets
                .iter()
                .map(|t| t.display().to_string())
                .collect(),
        });

        let mut debouncer = LeadingEdgeDebouncer::new(self.options.debounce);
        let result = run_event_loop(
            &rx,
            &running,
            &mut debouncer,
            self.options.poll_interval,
            || self.merge_once(&on_event),
            &on_event,
        );

        drop(watcher);
        on_event(WatchEvent::Shutdown);
        result
    }

    fn merge_once(&self, on_event: &impl Fn(WatchEvent)) -> ConcatResult<()> {
        match self.merge.execute(&self.options.merge) {
            Ok(result) => {
                on_event(WatchEvent::MergeComplete {
                    targets: result.targets.len(),
                    changed: result.changed_count(),
                });
                Ok(())
            }
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }
}

/// Whether a notification counts as a write to the file's contents
pub fn is_write_event(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any)
    )
}

/// Consume notifications until `running` is cleared or the sender goes away.
///
/// Every write event goes through `debouncer`; `action` runs for those that
/// open a new window. The window is re-armed after `action` returns, so a
/// slow merge does not eat into the quiet period.
pub fn run_event_loop<A, F>(
    rx: &Receiver<notify::Result<Event>>,
    running: &AtomicBool,
    debouncer: &mut LeadingEdgeDebouncer,
    poll_interval: Duration,
    mut action: A,
    on_event: &F,
) -> ConcatResult<()>
where
    A: FnMut() -> ConcatResult<()>,
    F: Fn(WatchEvent),
{
    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(poll_interval) {
            Ok(Ok(event)) => {
                if !is_write_event(&event) {
                    trace!(kind = ?event.kind, "ignoring non-write event");
                    continue;
                }

                if debouncer.is_open(Instant::now()) {
                    debug!("write inside debounce window, suppressed");
                } else {
                    let path = event
                        .paths
                        .first()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    on_event(WatchEvent::BaseChanged { path });
                    action()?;
                }
                debouncer.arm(Instant::now());
            }
            Ok(Err(err)) => {
                warn!(error = %err, "file watcher reported an error");
                on_event(WatchEvent::Error {
                    message: err.to_string(),
                });
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                debug!("watcher channel closed");
                break;
            }
        }
    }

    Ok(())
}
