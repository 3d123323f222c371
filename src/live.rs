//! Exclusive access to the output device and in-place redrawing.
//!
//! Only one live display may run against a device at a time. Acquiring the
//! guard never blocks: a second display fails immediately with
//! [`ExclusivityError::AlreadyActive`].

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::ansi::{ControlCode, EraseMode};
use crate::console::Console;
use crate::render::Renderable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExclusivityError {
    #[error("Another live display is already running on this console")]
    AlreadyActive,
}

/// Shared flag marking an output device as taken. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct Exclusivity {
    active: Arc<AtomicBool>,
}

impl Exclusivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the device, or fail at once if someone else holds it.
    pub fn try_acquire(&self) -> Result<ExclusiveGuard, ExclusivityError> {
        match self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                debug!("Acquired exclusive console access");
                Ok(ExclusiveGuard {
                    active: Arc::clone(&self.active),
                })
            }
            Err(_) => {
                warn!("Refused concurrent live display");
                Err(ExclusivityError::AlreadyActive)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Run `f` while holding the device.
    pub fn run_exclusive<T>(&self, f: impl FnOnce() -> T) -> Result<T, ExclusivityError> {
        let _guard = self.try_acquire()?;
        Ok(f())
    }
}

/// Releases the device when dropped.
#[derive(Debug)]
pub struct ExclusiveGuard {
    active: Arc<AtomicBool>,
}

impl Drop for ExclusiveGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        debug!("Released exclusive console access");
    }
}

/// A region of the console that is redrawn in place on every update.
pub struct LiveDisplay<'c, W: Write> {
    console: &'c mut Console<W>,
    height: usize,
    _guard: ExclusiveGuard,
}

impl<'c, W: Write> LiveDisplay<'c, W> {
    pub fn start(console: &'c mut Console<W>) -> crate::Result<Self> {
        let guard = console.exclusivity().try_acquire()?;
        console.control(ControlCode::HideCursor)?;
        Ok(Self {
            console,
            height: 0,
            _guard: guard,
        })
    }

    /// Replace the previous frame with `renderable`.
    pub fn update(&mut self, renderable: &dyn Renderable) -> crate::Result<()> {
        if self.height > 0 {
            self.console.control(ControlCode::CursorColumn(1))?;
            if self.height > 1 {
                let up = u16::try_from(self.height - 1).unwrap_or(u16::MAX);
                self.console.control(ControlCode::CursorUp(up))?;
            }
            self.console
                .control(ControlCode::EraseInDisplay(EraseMode::ToEnd))?;
        }
        self.height = self.console.write(renderable)?;
        self.console.flush()?;
        Ok(())
    }

    /// Lines occupied by the last frame.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Leave the last frame on screen and release the console.
    pub fn finish(self) -> crate::Result<()> {
        if self.height > 0 {
            self.console.line_break()?;
        }
        self.console.control(ControlCode::ShowCursor)?;
        self.console.flush()?;
        Ok(())
    }
}
