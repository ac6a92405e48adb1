//! The animated gopher and its background render loop.
//!
//! A [`Gopher`] owns three pieces of shared state:
//!
//! - the [`Appearance`] behind a reader/writer lock, written by the setters and
//!   snapshotted by the render thread once per frame
//! - the output writer behind a mutex, so frames and the final "done" line never
//!   interleave
//! - the lifecycle (active render thread plus its stop channel)
//!
//! `stop` sends the stop signal and writes the final line while holding the output
//! lock, and the render thread checks for the signal under that same lock before every
//! frame. Once `stop` returns, nothing else reaches the writer.

use crate::activity::Activity;
use crate::appearance::Appearance;
use crate::color::Color;
use crate::frame::{self, Frame, MASCOT};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

type SharedOutput = Arc<Mutex<Box<dyn Write + Send>>>;

/// A command-line gopher that animates on a background thread until stopped.
///
/// All methods take `&self`, so a gopher can be shared across threads (for example in
/// an `Arc`) and stopped from a different thread than the one that started it.
pub struct Gopher {
    appearance: Arc<RwLock<Appearance>>,
    output: SharedOutput,
    lifecycle: Mutex<Lifecycle>,
}

#[derive(Default)]
struct Lifecycle {
    active: Option<RenderHandle>,
    /// Threads that were signalled to stop but not joined yet
    retired: Vec<JoinHandle<()>>,
}

struct RenderHandle {
    stop_tx: SyncSender<()>,
    thread: JoinHandle<()>,
}

impl Gopher {
    /// Create a stopped gopher with default appearance, drawing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a stopped gopher with default appearance, drawing to `writer`.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            appearance: Arc::new(RwLock::new(Appearance::default())),
            output: Arc::new(Mutex::new(Box::new(writer))),
            lifecycle: Mutex::new(Lifecycle::default()),
        }
    }

    /// Replace the whole appearance.
    pub fn with_appearance(self, appearance: Appearance) -> Self {
        *self.appearance.write() = appearance;
        self
    }

    /// Start animating. Does nothing if the gopher is already running.
    pub fn start(&self) {
        let mut lifecycle = self.lifecycle.lock();
        if lifecycle.active.is_some() {
            return;
        }

        for thread in lifecycle.retired.drain(..) {
            if thread.join().is_err() {
                log::warn!("previous render thread panicked");
            }
        }

        let (stop_tx, stop_rx) = mpsc::sync_channel(1);
        let worker = RenderWorker {
            appearance: Arc::clone(&self.appearance),
            output: Arc::clone(&self.output),
            stop_rx,
        };

        match std::thread::Builder::new()
            .name("gopher-render".to_string())
            .spawn(move || worker.run())
        {
            Ok(thread) => lifecycle.active = Some(RenderHandle { stop_tx, thread }),
            Err(err) => log::warn!("failed to spawn render thread: {}", err),
        }
    }

    /// Stop animating and write the final "done" line.
    ///
    /// Does nothing if the gopher is not running. Never waits for the render thread;
    /// it is joined on the next `start` or when the gopher is dropped.
    pub fn stop(&self) {
        let mut lifecycle = self.lifecycle.lock();
        let Some(handle) = lifecycle.active.take() else {
            return;
        };

        {
            let mut output = self.output.lock();
            // Fresh capacity-1 channel with a single send, so this never blocks. A
            // disconnected receiver means the thread is already gone.
            let _ = handle.stop_tx.try_send(());
            if let Err(err) = frame::write_done(&mut *output).and_then(|()| output.flush()) {
                log::warn!("failed to write final gopher line: {}", err);
            }
        }

        lifecycle.retired.push(handle.thread);
    }

    /// Whether a render thread is currently animating.
    pub fn is_running(&self) -> bool {
        self.lifecycle.lock().active.is_some()
    }

    /// Change the pause between frames, starting with the next wait.
    pub fn set_delay(&self, delay: Duration) {
        self.appearance.write().delay = delay;
    }

    /// Switch the glyph set drawn from the next frame on.
    pub fn set_activity(&self, activity: Activity) {
        self.appearance.write().activity = activity;
    }

    /// Change the SGR color of the gopher.
    pub fn set_color(&self, color: Color) {
        self.appearance.write().color = color;
    }

    /// Text drawn before the gopher.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.appearance.write().prefix = prefix.into();
    }

    /// Text drawn after the gopher.
    pub fn set_suffix(&self, suffix: impl Into<String>) {
        self.appearance.write().suffix = suffix.into();
    }

    /// Current pause between frames.
    pub fn delay(&self) -> Duration {
        self.appearance.read().delay
    }

    /// Current activity.
    pub fn activity(&self) -> Activity {
        self.appearance.read().activity
    }

    /// Current color.
    pub fn color(&self) -> Color {
        self.appearance.read().color
    }

    /// Current prefix text.
    pub fn prefix(&self) -> String {
        self.appearance.read().prefix.clone()
    }

    /// Current suffix text.
    pub fn suffix(&self) -> String {
        self.appearance.read().suffix.clone()
    }

    /// Snapshot of the current appearance.
    pub fn appearance(&self) -> Appearance {
        self.appearance.read().clone()
    }
}

impl Default for Gopher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Gopher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASCOT)
    }
}

impl fmt::Debug for Gopher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One lock at a time: holding the appearance guard while taking the lifecycle
        // lock would invert the order used by `stop` and the render thread.
        let running = self.is_running();
        let appearance = self.appearance();
        f.debug_struct("Gopher")
            .field("appearance", &appearance)
            .field("running", &running)
            .finish_non_exhaustive()
    }
}

impl Drop for Gopher {
    fn drop(&mut self) {
        self.stop();
        for thread in self.lifecycle.get_mut().retired.drain(..) {
            if thread.join().is_err() {
                log::warn!("render thread panicked");
            }
        }
    }
}

/// State owned by the render thread for one run.
struct RenderWorker {
    appearance: Arc<RwLock<Appearance>>,
    output: SharedOutput,
    stop_rx: Receiver<()>,
}

impl RenderWorker {
    fn run(self) {
        log::debug!("render loop started");

        let mut tick: usize = 0;
        let mut last_width: Option<usize> = None;
        let mut write_failed = false;

        loop {
            let delay = {
                let mut output = self.output.lock();
                match self.stop_rx.try_recv() {
                    Ok(()) | Err(TryRecvError::Disconnected) => break,
                    Err(TryRecvError::Empty) => {}
                }

                let appearance = self.appearance.read().clone();
                let frame = Frame::new(&appearance, tick);
                let columns = last_width.unwrap_or_else(|| frame.width());

                if let Err(err) = draw(&mut **output, &frame, columns) {
                    if write_failed {
                        log::debug!("gopher frame write failed again: {}", err);
                    } else {
                        log::warn!("gopher frame write failed: {}", err);
                        write_failed = true;
                    }
                }
                last_width = Some(frame.width());

                appearance.delay
            };

            // Sleep outside of every lock; a stop signal cuts the wait short.
            match self.stop_rx.recv_timeout(delay) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => tick = tick.wrapping_add(1),
            }
        }

        log::debug!("render loop stopped");
    }
}

fn draw(output: &mut dyn Write, frame: &Frame<'_>, columns: usize) -> io::Result<()> {
    frame::write_clear(output, columns)?;
    frame.write_to(output)?;
    output.flush()
}
