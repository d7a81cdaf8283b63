//! Frame/overlay scheduling engine.
//!
//! Holds an ordered set of frames (pages that slide in and out) and
//! overlays (drawn on top of every frame, every tick). Each call to
//! [`UiEngine::update`] checks whether a tick is due at the target frame
//! rate; if so it advances the animation state, repaints, and reports the
//! time budget left before the next tick so the caller can sleep.
//!
//! The engine never reads a clock: the caller passes a millisecond
//! timestamp, which keeps the whole thing deterministic under test.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::Pixel;

use crate::config::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_DURATION_MS, TARGET_FPS, TRANSITION_DURATION_MS,
};
use crate::net::NetSnapshot;

/// One page of displayed content.
///
/// Everything a frame draws must be positioned relative to `offset` so
/// slide transitions move the whole page.
pub trait Frame<D: DrawTarget<Color = BinaryColor>> {
    fn draw(&self, display: &mut D, net: &NetSnapshot, offset: Point) -> Result<(), D::Error>;
}

/// Content drawn on top of whichever frame is active, every tick,
/// at fixed positions.
pub trait Overlay<D: DrawTarget<Color = BinaryColor>> {
    fn draw(&self, display: &mut D, net: &NetSnapshot) -> Result<(), D::Error>;
}

/// Outcome of one [`UiEngine::update`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Whether the display buffer was repainted and needs a flush.
    pub rendered: bool,
    /// Milliseconds left before the next tick is due.
    pub budget_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlideDir {
    /// Incoming frame slides in from the right (next).
    Forward,
    /// Incoming frame slides in from the left (previous).
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Animation {
    /// Active frame shown at rest.
    Fixed,
    /// Slide in progress toward `to`, `tick` of `transition_ticks` done.
    Sliding { to: usize, dir: SlideDir, tick: u32 },
}

/// Paged-display engine: frame selection, slide animation, overlays,
/// auto-advance and per-tick time budgeting.
pub struct UiEngine<'a, D: DrawTarget<Color = BinaryColor>> {
    frames: &'a [&'a dyn Frame<D>],
    overlays: &'a [&'a dyn Overlay<D>],
    current: usize,
    anim: Animation,
    auto_advance: bool,
    ticks_on_frame: u32,
    update_interval_ms: u64,
    transition_ticks: u32,
    frame_ticks: u32,
    last_tick_ms: Option<u64>,
}

impl<'a, D: DrawTarget<Color = BinaryColor>> UiEngine<'a, D> {
    /// Create an engine over the given frame and overlay sets, at the
    /// default target frame rate. Auto-advance starts disabled.
    pub fn new(frames: &'a [&'a dyn Frame<D>], overlays: &'a [&'a dyn Overlay<D>]) -> Self {
        let mut engine = Self {
            frames,
            overlays,
            current: 0,
            anim: Animation::Fixed,
            auto_advance: false,
            ticks_on_frame: 0,
            update_interval_ms: 0,
            transition_ticks: 1,
            frame_ticks: 1,
            last_tick_ms: None,
        };
        engine.set_target_fps(TARGET_FPS);
        engine
    }

    /// Set the target frame rate. Transition and dwell durations stay
    /// fixed in wall time, so their tick counts are recomputed.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.update_interval_ms = (1000 / u64::from(fps.max(1))).max(1);
        self.transition_ticks = (TRANSITION_DURATION_MS / self.update_interval_ms).max(1) as u32;
        self.frame_ticks = (FRAME_DURATION_MS / self.update_interval_ms).max(1) as u32;
    }

    /// Index of the frame currently at rest, or the one being left
    /// during a slide.
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Index of the frame a slide is heading to; the current frame
    /// when at rest.
    pub fn target_frame(&self) -> usize {
        match self.anim {
            Animation::Fixed => self.current,
            Animation::Sliding { to, .. } => to,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.anim, Animation::Sliding { .. })
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Enable or disable automatic frame advance after the dwell time.
    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    /// Begin a slide to the next frame (cyclic). Ignored while a
    /// transition is already running.
    pub fn next_frame(&mut self) {
        let to = (self.current + 1) % self.frames.len().max(1);
        self.begin_slide(to, SlideDir::Forward);
    }

    /// Begin a slide to the previous frame (cyclic). Ignored while a
    /// transition is already running.
    pub fn previous_frame(&mut self) {
        let len = self.frames.len().max(1);
        let to = (self.current + len - 1) % len;
        self.begin_slide(to, SlideDir::Backward);
    }

    fn begin_slide(&mut self, to: usize, dir: SlideDir) {
        if self.is_transitioning() || to == self.current {
            return;
        }
        self.anim = Animation::Sliding { to, dir, tick: 0 };
        self.ticks_on_frame = 0;
    }

    /// Run one scheduling step at timestamp `now_ms`.
    ///
    /// Repaints at most once per update interval; between due ticks it is
    /// cheap and only recomputes the remaining budget. The budget does not
    /// account for the render time of the call itself.
    pub fn update(
        &mut self,
        display: &mut D,
        net: &NetSnapshot,
        now_ms: u64,
    ) -> Result<Tick, D::Error> {
        let due = match self.last_tick_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.update_interval_ms,
        };

        if due {
            self.advance();
            self.render(display, net)?;
            self.last_tick_ms = Some(now_ms);
        }

        let last = self.last_tick_ms.unwrap_or(now_ms);
        let elapsed = now_ms.saturating_sub(last);
        Ok(Tick {
            rendered: due,
            budget_ms: self.update_interval_ms.saturating_sub(elapsed),
        })
    }

    /// Advance the animation state by one tick.
    fn advance(&mut self) {
        match self.anim {
            Animation::Fixed => {
                if self.auto_advance && self.frames.len() > 1 {
                    self.ticks_on_frame = self.ticks_on_frame.saturating_add(1);
                    if self.ticks_on_frame >= self.frame_ticks {
                        self.next_frame();
                    }
                }
            }
            Animation::Sliding { to, dir, tick } => {
                let tick = tick + 1;
                if tick >= self.transition_ticks {
                    self.current = to;
                    self.anim = Animation::Fixed;
                    self.ticks_on_frame = 0;
                } else {
                    self.anim = Animation::Sliding { to, dir, tick };
                }
            }
        }
    }

    fn render(&self, display: &mut D, net: &NetSnapshot) -> Result<(), D::Error> {
        display.clear(BinaryColor::Off)?;

        match self.anim {
            Animation::Fixed => {
                self.frames[self.current].draw(display, net, Point::zero())?;
            }
            Animation::Sliding { to, dir, tick } => {
                let width = DISPLAY_WIDTH as i32;
                let shift = width * tick as i32 / self.transition_ticks as i32;
                let (out_x, in_x) = match dir {
                    SlideDir::Forward => (-shift, width - shift),
                    SlideDir::Backward => (shift, shift - width),
                };
                self.frames[self.current].draw(display, net, Point::new(out_x, 0))?;
                self.frames[to].draw(display, net, Point::new(in_x, 0))?;
            }
        }

        for overlay in self.overlays {
            overlay.draw(display, net)?;
        }

        self.draw_indicator(display)
    }

    /// One dot per frame, centered along the bottom edge; the frame a
    /// slide is heading to counts as active.
    fn draw_indicator(&self, display: &mut D) -> Result<(), D::Error> {
        let count = self.frames.len() as i32;
        if count < 2 {
            return Ok(());
        }

        const SPACING: i32 = 8;
        let left = (DISPLAY_WIDTH as i32 - count * SPACING) / 2;
        let bottom = DISPLAY_HEIGHT as i32;
        let active = self.target_frame();

        for i in 0..count {
            let x = left + i * SPACING + SPACING / 2;
            if i as usize == active {
                Rectangle::new(Point::new(x - 1, bottom - 3), Size::new(3, 3))
                    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(display)?;
            } else {
                Pixel(Point::new(x, bottom - 2), BinaryColor::On).draw(display)?;
            }
        }
        Ok(())
    }
}
