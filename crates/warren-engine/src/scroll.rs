//! A horizontally scrolling background layer.
//!
//! Two things move independently here. The frame content steps through a
//! flat list of frames on a timer. The horizontal position is a pure
//! function of time since mount, read from a registered scroll profile. The
//! two are never synchronised and drift against each other freely.

use std::{cell::RefCell, rc::Rc, sync::Arc, time::Duration};

use warren_core::{Direction, Frame, FrameSet, Presentation};

use crate::{
    EngineError, EngineResult, TickCounter,
    keyframes::{KeyframeRegistry, ScrollProfile, ScrollSheet},
    render::TiledWidget,
    scheduler::{Scheduler, TaskHandle, TaskId},
};

/// Default time between content frames.
pub const DEFAULT_SCROLL_FRAME_RATE: Duration = Duration::from_millis(150);

/// Default time for one full scroll loop.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_secs(20);

/// Blank columns between repeated tiles.
pub const TILE_GAP: usize = 4;

/// Options for [`ScrollLayer::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub frame_rate: Duration,
    pub scroll_duration: Duration,
    pub direction: Direction,
    pub presentation: Presentation,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_SCROLL_FRAME_RATE,
            scroll_duration: DEFAULT_SCROLL_DURATION,
            direction: Direction::Forward,
            presentation: Presentation::default(),
        }
    }
}

#[derive(Debug)]
struct Content {
    frames: FrameSet,
    index: usize,
    ticks: TickCounter,
}

impl Content {
    fn tick(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
        self.ticks.bump();
    }
}

/// A mounted scroll layer. Dropping it cancels its content timer; the
/// registered scroll profiles stay in the registry.
#[derive(Debug)]
pub struct ScrollLayer {
    content: Rc<RefCell<Content>>,
    sheet: Arc<ScrollSheet>,
    direction: Direction,
    scroll_duration: Duration,
    started_at: Duration,
    /// Added to the time since `started_at`, in nanoseconds below one loop.
    phase_shift: u128,
    presentation: Presentation,
    span: usize,
    task: TaskHandle,
}

impl ScrollLayer {
    /// Start the content timer on `scheduler` and begin scrolling from the
    /// scheduler's current time. Registers the scroll sheet in `registry` if
    /// it is not there yet.
    pub fn mount(
        scheduler: &mut Scheduler,
        registry: &KeyframeRegistry,
        frames: FrameSet,
        options: ScrollOptions,
    ) -> EngineResult<Self> {
        if options.frame_rate.is_zero() {
            return Err(EngineError::NonPositiveDuration { what: "frame rate" });
        }
        if options.scroll_duration.is_zero() {
            return Err(EngineError::NonPositiveDuration {
                what: "scroll duration",
            });
        }

        let sheet = registry.scroll_sheet();
        let span = frames.width() + TILE_GAP;
        let content = Rc::new(RefCell::new(Content {
            frames,
            index: 0,
            ticks: TickCounter::default(),
        }));

        let weak = Rc::downgrade(&content);
        let task = scheduler.every(options.frame_rate, move || {
            if let Some(content) = weak.upgrade() {
                content.borrow_mut().tick();
            }
        })?;

        tracing::debug!(
            direction = %options.direction,
            frames = content.borrow().frames.len(),
            scroll_secs = options.scroll_duration.as_secs_f64(),
            "scroll layer mounted"
        );

        Ok(Self {
            content,
            sheet,
            direction: options.direction,
            scroll_duration: options.scroll_duration,
            started_at: scheduler.now(),
            phase_shift: 0,
            presentation: options.presentation,
            span,
            task,
        })
    }

    /// Index of the frame currently on display.
    pub fn frame_index(&self) -> usize {
        self.content.borrow().index
    }

    /// The frame currently on display.
    pub fn current_frame(&self) -> Frame {
        let content = self.content.borrow();
        content.frames[content.index].clone()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The registered profile driving this layer's position.
    pub fn profile(&self) -> &ScrollProfile {
        self.sheet.profile(self.direction)
    }

    pub fn scroll_duration(&self) -> Duration {
        self.scroll_duration
    }

    /// Tile pitch in columns: widest frame plus a gap.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Nanoseconds into the current scroll loop at `now`.
    fn loop_position(&self, now: Duration) -> u128 {
        let elapsed = now.saturating_sub(self.started_at).as_nanos();
        (elapsed + self.phase_shift) % self.scroll_duration.as_nanos()
    }

    /// Progress through the current scroll loop at `now`, in `0.0..1.0`.
    pub fn phase_at(&self, now: Duration) -> f64 {
        self.loop_position(now) as f64 / self.scroll_duration.as_nanos() as f64
    }

    /// Source column shown at the left edge at `now`.
    pub fn offset_at(&self, now: Duration) -> usize {
        self.profile().offset(self.phase_at(now), self.span)
    }

    /// Restart the scroll loop from its first position at `now`. Content
    /// cycling is unaffected.
    pub fn restart(&mut self, now: Duration) {
        self.started_at = now;
        self.phase_shift = 0;
    }

    /// Switch to the other scroll profile at `now` without a jump: the
    /// content stays where it is and starts moving the other way. Content
    /// cycling is unaffected.
    pub fn set_direction(&mut self, direction: Direction, now: Duration) {
        if direction == self.direction {
            return;
        }
        // The profiles are mirror images, so position p in one shows the
        // same offset as position (period - p) in the other.
        let period = self.scroll_duration.as_nanos();
        let mirrored = (period - self.loop_position(now)) % period;
        let elapsed = now.saturating_sub(self.started_at).as_nanos() % period;
        self.phase_shift = (mirrored + period - elapsed) % period;
        self.direction = direction;
        tracing::debug!(%direction, "scroll direction changed");
    }

    /// Ticks applied so far.
    pub fn mutations(&self) -> u64 {
        self.content.borrow().ticks.get()
    }

    /// A counter that outlives the layer, for observing ticks after unmount.
    pub fn tick_counter(&self) -> TickCounter {
        self.content.borrow().ticks.clone()
    }

    pub fn task_id(&self) -> TaskId {
        self.task.id()
    }

    /// Widget drawing the current frame tiled across the area at `now`.
    pub fn widget(&self, now: Duration) -> TiledWidget {
        self.underlay_widget(self.current_frame(), now)
    }

    /// Widget tiling another `frame` at this layer's span and offset, so it
    /// moves in step with the layer. Draw it before [`ScrollLayer::widget`].
    pub fn underlay_widget(&self, frame: Frame, now: Duration) -> TiledWidget {
        TiledWidget::new(frame, self.span, self.offset_at(now), self.presentation.style())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    use super::*;
    use crate::keyframes::SCROLL_SHEET_ID;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn xy() -> FrameSet {
        FrameSet::new(["X", "Y"]).unwrap()
    }

    fn mount(
        sched: &mut Scheduler,
        registry: &KeyframeRegistry,
        options: ScrollOptions,
    ) -> ScrollLayer {
        ScrollLayer::mount(sched, registry, xy(), options).unwrap()
    }

    #[test]
    fn test_content_cycles_every_frame_rate() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = mount(&mut sched, &registry, ScrollOptions::default());

        let mut shown = vec![layer.current_frame().to_string()];
        for _ in 0..5 {
            sched.advance_by(ms(150));
            shown.push(layer.current_frame().to_string());
        }
        assert_eq!(shown, vec!["X", "Y", "X", "Y", "X", "Y"]);
        assert_eq!(layer.mutations(), 5);
    }

    #[test]
    fn test_profile_matches_direction() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = mount(&mut sched, &registry, ScrollOptions::default());
        assert_eq!(layer.direction(), Direction::Forward);
        assert_eq!(layer.profile().direction(), Direction::Forward);
        assert_eq!(layer.scroll_duration(), Duration::from_secs(20));

        let reverse = mount(
            &mut sched,
            &registry,
            ScrollOptions {
                direction: Direction::Reverse,
                ..Default::default()
            },
        );
        assert_eq!(reverse.profile().direction(), Direction::Reverse);
    }

    #[test]
    fn test_position_loops_over_duration() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = mount(&mut sched, &registry, ScrollOptions::default());

        assert_eq!(layer.phase_at(Duration::ZERO), 0.0);
        assert_eq!(layer.phase_at(Duration::from_secs(5)), 0.25);
        assert_eq!(layer.phase_at(Duration::from_secs(10)), 0.5);
        assert_eq!(layer.phase_at(Duration::from_secs(20)), 0.0);
        assert_eq!(layer.phase_at(Duration::from_secs(25)), 0.25);
    }

    #[test]
    fn test_position_ignores_content_ticks() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = mount(&mut sched, &registry, ScrollOptions::default());

        let at = Duration::from_secs(7);
        let before = layer.offset_at(at);
        sched.advance_to(ms(3000));
        assert_eq!(layer.offset_at(at), before);
    }

    #[test]
    fn test_mounting_many_registers_once() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layers: Vec<ScrollLayer> = (0..8)
            .map(|i| {
                let direction = if i % 2 == 0 {
                    Direction::Forward
                } else {
                    Direction::Reverse
                };
                mount(
                    &mut sched,
                    &registry,
                    ScrollOptions {
                        direction,
                        ..Default::default()
                    },
                )
            })
            .collect();

        assert_eq!(layers.len(), 8);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(SCROLL_SHEET_ID));
        drop(layers);
        // the sheet is process state, not per layer
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_no_mutation_after_unmount() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = mount(&mut sched, &registry, ScrollOptions::default());
        sched.advance_by(ms(450));

        let counter = layer.tick_counter();
        let id = layer.task_id();
        assert_eq!(counter.get(), 3);

        drop(layer);
        assert!(sched.force_fire(id));
        sched.advance_by(ms(1500));
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_rejects_zero_durations() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let zero_rate = ScrollOptions {
            frame_rate: Duration::ZERO,
            ..Default::default()
        };
        let zero_scroll = ScrollOptions {
            scroll_duration: Duration::ZERO,
            ..Default::default()
        };
        for options in [zero_rate, zero_scroll] {
            assert!(matches!(
                ScrollLayer::mount(&mut sched, &registry, xy(), options),
                Err(EngineError::NonPositiveDuration { .. })
            ));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_restart_resets_position_only() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let mut layer = mount(&mut sched, &registry, ScrollOptions::default());
        sched.advance_to(Duration::from_secs(3));
        let index = layer.frame_index();

        layer.restart(sched.now());
        assert_eq!(layer.phase_at(sched.now()), 0.0);
        assert_eq!(layer.frame_index(), index);
    }

    #[test]
    fn test_widget_scrolls_left() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let frames = FrameSet::new(["abcd"]).unwrap();
        let layer = ScrollLayer::mount(
            &mut sched,
            &registry,
            frames,
            ScrollOptions {
                // one column per second across an 8 column span
                scroll_duration: Duration::from_secs(8),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(layer.span(), 8);

        let render = |now| {
            let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
            layer.widget(now).render(buf.area, &mut buf);
            (0..10).map(|x| buf[(x, 0)].symbol()).collect::<String>()
        };
        assert_eq!(render(Duration::ZERO), "abcd    ab");
        assert_eq!(render(Duration::from_secs(1)), "bcd    abc");
    }

    fn abcd_layer(
        sched: &mut Scheduler,
        registry: &KeyframeRegistry,
        direction: Direction,
    ) -> ScrollLayer {
        ScrollLayer::mount(
            sched,
            registry,
            FrameSet::new(["abcd"]).unwrap(),
            ScrollOptions {
                scroll_duration: Duration::from_secs(8),
                direction,
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn row(widget: TiledWidget, width: u16, height: u16) -> Vec<String> {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        widget.render(buf.area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_widget_scrolls_right_in_reverse() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = abcd_layer(&mut sched, &registry, Direction::Reverse);

        assert_eq!(row(layer.widget(Duration::ZERO), 10, 1), vec!["abcd    ab"]);
        assert_eq!(
            row(layer.widget(Duration::from_secs(1)), 10, 1),
            vec![" abcd    a"]
        );
        assert_eq!(
            row(layer.widget(Duration::from_secs(2)), 10, 1),
            vec!["  abcd    "]
        );
    }

    #[test]
    fn test_set_direction_keeps_position() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let mut layer = abcd_layer(&mut sched, &registry, Direction::Forward);

        let turn = Duration::from_secs(3);
        sched.advance_to(turn);
        let index = layer.frame_index();
        assert_eq!(layer.offset_at(turn), 3);

        layer.set_direction(Direction::Reverse, turn);
        assert_eq!(layer.direction(), Direction::Reverse);
        assert_eq!(layer.profile().direction(), Direction::Reverse);
        assert_eq!(layer.offset_at(turn), 3);
        assert_eq!(layer.frame_index(), index);

        // now moving right: the offset counts down
        assert_eq!(layer.offset_at(Duration::from_secs(4)), 2);
        assert_eq!(layer.offset_at(Duration::from_secs(6)), 0);
        assert_eq!(layer.offset_at(Duration::from_secs(7)), 7);

        layer.set_direction(Direction::Forward, Duration::from_secs(7));
        assert_eq!(layer.offset_at(Duration::from_secs(7)), 7);
        assert_eq!(layer.offset_at(Duration::from_secs(8)), 0);
    }

    #[test]
    fn test_underlay_follows_layer_offset() {
        let mut sched = Scheduler::new();
        let registry = KeyframeRegistry::new();
        let layer = abcd_layer(&mut sched, &registry, Direction::Forward);
        let ground = Frame::from("01234567");

        assert_eq!(
            row(layer.underlay_widget(ground.clone(), Duration::ZERO), 10, 2),
            vec!["          ", "0123456701"]
        );
        assert_eq!(
            row(layer.underlay_widget(ground, Duration::from_secs(1)), 10, 2),
            vec!["          ", "1234567012"]
        );
    }
}
