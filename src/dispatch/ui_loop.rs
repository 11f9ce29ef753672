// SPDX-License-Identifier: MPL-2.0
//! UI-owning event loops and the handles used to marshal work onto them.
//!
//! A [`UiLoop`] is bound to the thread that created it. Other threads hold
//! a [`UiHandle`] and use [`UiHandle::invoke`] to run a closure on that
//! thread and block until it returns. [`UiThread`] spawns a dedicated thread
//! that owns a loop for its whole life.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle, ThreadId};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::error::{Error, MarshalError, Result};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Commands accepted by a UI loop.
enum LoopCommand {
    /// Run a task on the loop thread.
    Run(Task),
    /// Leave [`UiLoop::run`].
    Stop,
}

/// Cloneable, thread-safe handle to a [`UiLoop`].
#[derive(Clone)]
pub struct UiHandle {
    command_tx: Sender<LoopCommand>,
    owner: ThreadId,
    running: Arc<AtomicBool>,
}

impl std::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle")
            .field("owner", &self.owner)
            .field("running", &self.is_running())
            .finish()
    }
}

impl UiHandle {
    /// Returns the id of the thread that owns the loop.
    #[must_use]
    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    /// Returns true when called from the loop's owning thread.
    #[must_use]
    pub fn is_current_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Returns true until the loop has been stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Runs `f` on the owning thread and waits for its result.
    ///
    /// Called from the owning thread itself, `f` runs inline. Tasks from
    /// different threads run in the order the loop receives them.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::Disconnected`] if the loop no longer accepts
    /// work, or [`MarshalError::NoReply`] if the task panicked or was
    /// discarded before running.
    pub fn invoke<R, F>(&self, f: F) -> std::result::Result<R, MarshalError>
    where
        R: Send + 'static,
        F: FnOnce() -> R + Send + 'static,
    {
        if self.is_current_thread() {
            return Ok(f());
        }
        if !self.is_running() {
            return Err(MarshalError::Disconnected);
        }

        let (reply_tx, reply_rx) = bounded::<R>(1);
        let task: Task = Box::new(move || {
            // The caller may have given up waiting; nothing to do then.
            let _ = reply_tx.send(f());
        });

        self.command_tx
            .send(LoopCommand::Run(task))
            .map_err(|_| MarshalError::Disconnected)?;

        reply_rx.recv().map_err(|_| MarshalError::NoReply)
    }

    /// Asks the loop to leave [`UiLoop::run`]. Tasks still queued are
    /// discarded and their callers receive [`MarshalError::NoReply`].
    pub fn shutdown(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            let _ = self.command_tx.send(LoopCommand::Stop);
        }
    }
}

/// Work queue owned by the UI thread.
pub struct UiLoop {
    command_rx: Receiver<LoopCommand>,
    handle: UiHandle,
}

impl Default for UiLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl UiLoop {
    /// Creates a loop owned by the calling thread.
    #[must_use]
    pub fn new() -> Self {
        let (command_tx, command_rx) = unbounded();
        Self {
            command_rx,
            handle: UiHandle {
                command_tx,
                owner: thread::current().id(),
                running: Arc::new(AtomicBool::new(true)),
            },
        }
    }

    /// Creates a handle for marshaling work onto this loop.
    #[must_use]
    pub fn handle(&self) -> UiHandle {
        self.handle.clone()
    }

    /// Runs tasks until [`UiHandle::shutdown`] is called.
    pub fn run(&self) {
        while let Ok(command) = self.command_rx.recv() {
            match command {
                LoopCommand::Run(task) => Self::run_task(task),
                LoopCommand::Stop => break,
            }
        }
        self.discard_pending();
    }

    /// Runs every task queued so far without blocking.
    ///
    /// Meant for an application that drives its own event loop and drains
    /// marshaled work on each tick. Returns the number of tasks run.
    pub fn process_pending(&self) -> usize {
        let mut ran = 0;
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                LoopCommand::Run(task) => {
                    Self::run_task(task);
                    ran += 1;
                }
                LoopCommand::Stop => {
                    self.discard_pending();
                    break;
                }
            }
        }
        ran
    }

    fn run_task(task: Task) {
        if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
            tracing::error!("UI task panicked; its caller receives no result");
        }
    }

    fn discard_pending(&self) {
        let mut dropped = 0usize;
        while let Ok(command) = self.command_rx.try_recv() {
            if let LoopCommand::Run(task) = command {
                drop(task);
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, "discarded UI tasks queued after shutdown");
        }
    }
}

/// A dedicated thread running a [`UiLoop`].
///
/// The loop is stopped and the thread joined on drop.
pub struct UiThread {
    handle: UiHandle,
    thread_handle: Option<JoinHandle<()>>,
}

impl UiThread {
    /// Spawns a named thread that owns a new UI loop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the thread cannot be spawned, or
    /// [`Error::Marshal`] if it exits before publishing its handle.
    pub fn spawn(name: &str) -> Result<Self> {
        let (handle_tx, handle_rx) = bounded::<UiHandle>(1);

        let thread_handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let ui_loop = UiLoop::new();
                if handle_tx.send(ui_loop.handle()).is_ok() {
                    ui_loop.run();
                }
            })?;

        let handle = handle_rx
            .recv()
            .map_err(|_| Error::Marshal(MarshalError::NoReply))?;

        tracing::debug!(thread = name, "UI thread started");

        Ok(Self {
            handle,
            thread_handle: Some(thread_handle),
        })
    }

    #[must_use]
    pub fn handle(&self) -> UiHandle {
        self.handle.clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Stops the loop and waits for the thread to finish.
    pub fn stop(&mut self) {
        self.handle.shutdown();
        if let Some(thread_handle) = self.thread_handle.take() {
            let _ = thread_handle.join();
        }
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        self.stop();
    }
}
