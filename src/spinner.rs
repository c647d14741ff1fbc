//! Animated loading indicator used for the dropdown's loading and busy states.
//!
//! The spinner follows the standard bubbletea-rs animation pattern: each
//! instance has a unique id, and animation frames advance when the model
//! receives a [`TickMsg`] carrying that id. The tag field guards against
//! duplicated tick chains speeding the animation up.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_dropdown::spinner::{Model, MINI_DOT};
//!
//! let spinner = Model::new().with_spinner(MINI_DOT.clone());
//! let frame = spinner.view();
//! assert!(!frame.is_empty());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and timing for a spinner.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames; smaller is faster.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a spinner definition from frames and a frame delay.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

/// Basic line spinner: `| / - \`.
pub static LINE: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        ["|", "/", "-", "\\"].iter().map(|s| s.to_string()).collect(),
        Duration::from_millis(100),
    )
});

/// Braille dot pattern spinner.
pub static DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        Duration::from_millis(100),
    )
});

/// Smaller braille dot pattern, suited to inline display next to an input.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        Duration::from_millis(80),
    )
});

/// Message advancing a spinner's animation by one frame.
///
/// Routed by `id` so that multiple spinners in one application do not
/// advance each other.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Instance the tick is addressed to. Zero addresses any instance.
    pub id: i64,
    /// Sequence tag preventing duplicated tick chains.
    pub tag: i64,
}

/// Spinner model holding the current frame and routing identity.
#[derive(Debug)]
pub struct Model {
    /// Spinner settings to use.
    pub spinner: Spinner,
    /// Style applied to the rendered frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a spinner with the LINE animation and no styling.
    pub fn new() -> Self {
        Self {
            spinner: LINE.clone(),
            style: Style::new(),
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// Sets the animation definition.
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self
    }

    /// Sets the render style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Returns this instance's routing id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Builds the tick message the next scheduled command will deliver.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next animation frame.
    ///
    /// Returns a command that delivers a [`TickMsg`] for this instance
    /// after the configured frame delay. Call once to start the animation;
    /// [`update`](Self::update) keeps the chain going.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.spinner.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Advances the animation when a matching tick message arrives.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;

        // Reject ticks addressed to other spinners.
        if tick_msg.id > 0 && tick_msg.id != self.id {
            return None;
        }
        // Reject stale ticks from a superseded chain.
        if tick_msg.tag > 0 && tick_msg.tag != self.tag {
            return None;
        }

        self.frame = (self.frame + 1) % self.spinner.frames.len().max(1);
        self.tag += 1;
        Some(self.tick())
    }

    /// Renders the current frame with styling applied.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Model::new();
        let b = Model::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn tick_advances_frame() {
        let mut spinner = Model::new();
        let first = spinner.view();
        let msg: Msg = Box::new(spinner.tick_msg());
        let cmd = spinner.update(&msg);
        assert!(cmd.is_some());
        assert_ne!(spinner.view(), first);
    }

    #[test]
    fn rejects_ticks_for_other_instances() {
        let mut spinner = Model::new();
        let other = Model::new();
        let msg: Msg = Box::new(other.tick_msg());
        assert!(spinner.update(&msg).is_none());
    }

    #[test]
    fn rejects_stale_tags() {
        let mut spinner = Model::new();
        let stale: Msg = Box::new(TickMsg {
            id: spinner.id(),
            tag: 99,
        });
        assert!(spinner.update(&stale).is_none());
    }

    #[test]
    fn frames_wrap_around() {
        let mut spinner = Model::new().with_spinner(LINE.clone());
        for _ in 0..LINE.frames.len() {
            let msg: Msg = Box::new(spinner.tick_msg());
            spinner.update(&msg);
        }
        assert_eq!(spinner.view(), LINE.frames[0]);
    }
}
