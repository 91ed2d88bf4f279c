//! Frame loop
//!
//! One frame: sample the clock, poll input into commands, apply them, run
//! `update`, hand the snapshot to the renderer. The halt flag is only checked
//! between frames.

use crate::clock::{FrameClock, TimeSource};
use crate::sim::{Command, RoundSummary, Session, Snapshot};

/// The presentation layer: window, input, drawing
pub trait Presentation {
    /// Translate raw input since the last frame into commands.
    /// `snapshot` is the state the player was looking at.
    fn poll(&mut self, snapshot: &Snapshot, now: f64) -> Vec<Command>;

    /// Draw the end-of-update state
    fn render(&mut self, snapshot: &Snapshot, now: f64);

    /// Called on the frame a round finishes
    fn round_over(&mut self, _summary: &RoundSummary) {}
}

/// Owns the session and clock and steps them together
pub struct FrameDriver<T: TimeSource> {
    pub session: Session,
    source: T,
    clock: FrameClock,
    snapshot: Snapshot,
    frames: u64,
}

impl<T: TimeSource> FrameDriver<T> {
    pub fn new(session: Session, source: T) -> Self {
        let snapshot = session.snapshot();
        Self {
            session,
            source,
            clock: FrameClock::new(),
            snapshot,
            frames: 0,
        }
    }

    /// Most recent end-of-frame snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run a single frame. Returns `false` once the session has halted.
    pub fn run_frame(&mut self, presentation: &mut impl Presentation) -> bool {
        if self.session.is_halted() {
            return false;
        }

        let (dt, now) = self.clock.tick(&mut self.source);
        for command in presentation.poll(&self.snapshot, now) {
            self.session.apply(command);
        }

        if let Some(summary) = self.session.update(dt, now) {
            presentation.round_over(&summary);
        }

        self.snapshot = self.session.snapshot();
        presentation.render(&self.snapshot, now);
        self.frames += 1;
        true
    }

    /// Run frames until the session halts or `max_frames` is reached
    pub fn run(&mut self, presentation: &mut impl Presentation, max_frames: Option<u64>) {
        while max_frames.is_none_or(|max| self.frames < max) && self.run_frame(presentation) {}
        log::info!("Frame loop stopped after {} frames", self.frames);
    }
}
