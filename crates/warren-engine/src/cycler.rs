//! Frame cycling across an ordered list of frame sets.
//!
//! Every tick shows the next frame of the active set. When a set runs out,
//! playback wraps to the first frame of the next set, and after the last set
//! back to the first one. Switching sets of different sizes this way gives a
//! zoom or depth effect without any scaling.

use std::{cell::RefCell, rc::Rc, time::Duration};

use warren_core::{Frame, FrameSet, Presentation};

use crate::{
    EngineError, EngineResult, TickCounter,
    render::SpriteWidget,
    scheduler::{Scheduler, TaskHandle, TaskId},
};

/// Default time between frames.
pub const DEFAULT_CYCLER_FRAME_RATE: Duration = Duration::from_millis(200);

/// Position of playback within a list of frame sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationState {
    pub set_index: usize,
    pub frame_index: usize,
}

impl AnimationState {
    /// Step one frame forward, moving to the next set once the active one is
    /// exhausted. Both indices change together.
    pub fn advance(&mut self, sets: &[FrameSet]) {
        let next = self.frame_index + 1;
        if next >= sets[self.set_index].len() {
            self.frame_index = 0;
            self.set_index = (self.set_index + 1) % sets.len();
        } else {
            self.frame_index = next;
        }
    }
}

/// Options for [`FrameCycler::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerOptions {
    pub frame_rate: Duration,
    pub presentation: Presentation,
}

impl Default for CyclerOptions {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_CYCLER_FRAME_RATE,
            presentation: Presentation::default(),
        }
    }
}

#[derive(Debug)]
struct Playback {
    sets: Vec<FrameSet>,
    state: AnimationState,
    ticks: TickCounter,
}

impl Playback {
    fn tick(&mut self) {
        let before = self.state.set_index;
        self.state.advance(&self.sets);
        self.ticks.bump();
        if self.state.set_index != before {
            tracing::trace!(
                set = self.state.set_index,
                label = self.sets[self.state.set_index].label(),
                "switched frame set"
            );
        }
    }
}

/// A mounted frame cycler. Dropping it cancels its timer.
#[derive(Debug)]
pub struct FrameCycler {
    playback: Rc<RefCell<Playback>>,
    frame_rate: Duration,
    presentation: Presentation,
    task: TaskHandle,
}

impl FrameCycler {
    /// Start cycling `sets` on `scheduler`, beginning at the first frame of
    /// the first set.
    pub fn mount(
        scheduler: &mut Scheduler,
        sets: Vec<FrameSet>,
        options: CyclerOptions,
    ) -> EngineResult<Self> {
        if sets.is_empty() {
            return Err(EngineError::NoFrameSets);
        }
        if options.frame_rate.is_zero() {
            return Err(EngineError::NonPositiveDuration { what: "frame rate" });
        }

        let playback = Rc::new(RefCell::new(Playback {
            sets,
            state: AnimationState::default(),
            ticks: TickCounter::default(),
        }));

        let weak = Rc::downgrade(&playback);
        let task = scheduler.every(options.frame_rate, move || {
            if let Some(playback) = weak.upgrade() {
                playback.borrow_mut().tick();
            }
        })?;

        tracing::debug!(
            sets = playback.borrow().sets.len(),
            frame_rate_ms = options.frame_rate.as_millis() as u64,
            "frame cycler mounted"
        );

        Ok(Self {
            playback,
            frame_rate: options.frame_rate,
            presentation: options.presentation,
            task,
        })
    }

    pub fn state(&self) -> AnimationState {
        self.playback.borrow().state
    }

    pub fn frame_rate(&self) -> Duration {
        self.frame_rate
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// The frame currently on display.
    pub fn current_frame(&self) -> Frame {
        let playback = self.playback.borrow();
        let AnimationState {
            set_index,
            frame_index,
        } = playback.state;
        playback.sets[set_index][frame_index].clone()
    }

    /// Swap in a new list of sets. Playback keeps its position when that
    /// position exists in the new sets, and starts over otherwise.
    pub fn replace_sets(&self, sets: Vec<FrameSet>) -> EngineResult<()> {
        if sets.is_empty() {
            return Err(EngineError::NoFrameSets);
        }
        let mut playback = self.playback.borrow_mut();
        let AnimationState {
            set_index,
            frame_index,
        } = playback.state;
        let fits = sets
            .get(set_index)
            .is_some_and(|set| frame_index < set.len());
        if !fits {
            playback.state = AnimationState::default();
        }
        playback.sets = sets;
        Ok(())
    }

    /// Label and length of the active set.
    pub fn current_set_info(&self) -> (Option<String>, usize) {
        let playback = self.playback.borrow();
        let set = &playback.sets[playback.state.set_index];
        (set.label().map(str::to_string), set.len())
    }

    /// Ticks applied so far.
    pub fn mutations(&self) -> u64 {
        self.playback.borrow().ticks.get()
    }

    /// A counter that outlives the cycler, for observing ticks after unmount.
    pub fn tick_counter(&self) -> TickCounter {
        self.playback.borrow().ticks.clone()
    }

    /// Id of the underlying recurring task.
    pub fn task_id(&self) -> TaskId {
        self.task.id()
    }

    /// Widget drawing the current frame.
    pub fn widget(&self) -> SpriteWidget {
        SpriteWidget::new(self.current_frame(), self.presentation.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sets(table: &[&[&str]]) -> Vec<FrameSet> {
        table
            .iter()
            .map(|frames| FrameSet::new(frames.iter().copied()).unwrap())
            .collect()
    }

    fn mount(sched: &mut Scheduler, table: &[&[&str]]) -> FrameCycler {
        FrameCycler::mount(sched, sets(table), CyclerOptions::default()).unwrap()
    }

    fn tick(sched: &mut Scheduler) {
        sched.advance_by(DEFAULT_CYCLER_FRAME_RATE);
    }

    #[test]
    fn test_displays_sets_in_order() {
        let mut sched = Scheduler::new();
        let cycler = mount(&mut sched, &[&["A", "B"], &["C", "D", "E"]]);

        let mut shown = vec![cycler.current_frame().to_string()];
        for _ in 0..7 {
            tick(&mut sched);
            shown.push(cycler.current_frame().to_string());
        }
        assert_eq!(shown, vec!["A", "B", "C", "D", "E", "A", "B", "C"]);
    }

    #[test]
    fn test_index_rules_hold_every_tick() {
        let table: &[&[&str]] = &[&["a", "b", "c"], &["d"], &["e", "f"]];
        let sets = sets(table);
        let mut sched = Scheduler::new();
        let cycler =
            FrameCycler::mount(&mut sched, sets.clone(), CyclerOptions::default()).unwrap();

        for _ in 0..50 {
            let before = cycler.state();
            tick(&mut sched);
            let after = cycler.state();

            let len = sets[before.set_index].len();
            if before.frame_index + 1 < len {
                assert_eq!(after.set_index, before.set_index);
                assert_eq!(after.frame_index, before.frame_index + 1);
            } else {
                assert_eq!(after.set_index, (before.set_index + 1) % sets.len());
                assert_eq!(after.frame_index, 0);
            }
            assert!(after.frame_index < sets[after.set_index].len());
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let table: &[&[&str]] = &[&["1", "2", "3", "4"], &["5", "6"], &["7", "8", "9"]];
        let total: usize = table.iter().map(|s| s.len()).sum();
        let mut sched = Scheduler::new();
        let cycler = mount(&mut sched, table);

        for step in 1..=total {
            tick(&mut sched);
            if step < total {
                assert_ne!(cycler.state(), AnimationState::default());
            }
        }
        assert_eq!(cycler.state(), AnimationState::default());
        assert_eq!(cycler.mutations(), total as u64);
    }

    #[test]
    fn test_single_frame_never_moves() {
        let mut sched = Scheduler::new();
        let cycler = mount(&mut sched, &[&["only"]]);
        for _ in 0..25 {
            tick(&mut sched);
            assert_eq!(cycler.state(), AnimationState::default());
        }
        assert_eq!(cycler.mutations(), 25);
    }

    #[test]
    fn test_frame_rate_paces_ticks() {
        let mut sched = Scheduler::new();
        let cycler = FrameCycler::mount(
            &mut sched,
            sets(&[&["A", "B", "C"]]),
            CyclerOptions {
                frame_rate: Duration::from_millis(50),
                ..Default::default()
            },
        )
        .unwrap();
        sched.advance_to(Duration::from_millis(49));
        assert_eq!(cycler.current_frame().as_str(), "A");
        sched.advance_to(Duration::from_millis(100));
        assert_eq!(cycler.current_frame().as_str(), "C");
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut sched = Scheduler::new();
        assert!(matches!(
            FrameCycler::mount(&mut sched, Vec::new(), CyclerOptions::default()),
            Err(EngineError::NoFrameSets)
        ));
        assert!(matches!(
            FrameCycler::mount(
                &mut sched,
                sets(&[&["A"]]),
                CyclerOptions {
                    frame_rate: Duration::ZERO,
                    ..Default::default()
                }
            ),
            Err(EngineError::NonPositiveDuration { .. })
        ));
        assert_eq!(sched.live_tasks(), 0);
    }

    #[test]
    fn test_no_mutation_after_unmount() {
        let mut sched = Scheduler::new();
        let cycler = mount(&mut sched, &[&["A", "B"]]);
        tick(&mut sched);
        tick(&mut sched);

        let counter = cycler.tick_counter();
        let id = cycler.task_id();
        assert_eq!(counter.get(), 2);

        drop(cycler);
        // the task is cancelled but not yet pruned; fire it as a leaked timer
        assert!(sched.force_fire(id));
        assert_eq!(counter.get(), 2);

        sched.advance_by(Duration::from_secs(10));
        assert_eq!(counter.get(), 2);
        assert_eq!(sched.live_tasks(), 0);
    }

    #[test]
    fn test_set_info_follows_playback() {
        let mut sched = Scheduler::new();
        let cycler = FrameCycler::mount(
            &mut sched,
            vec![
                FrameSet::labelled("far", ["a"]).unwrap(),
                FrameSet::labelled("close", ["b", "c"]).unwrap(),
            ],
            CyclerOptions::default(),
        )
        .unwrap();
        assert_eq!(cycler.current_set_info(), (Some("far".to_string()), 1));
        tick(&mut sched);
        assert_eq!(cycler.current_set_info(), (Some("close".to_string()), 2));
    }

    #[test]
    fn test_replace_sets_keeps_position() {
        let mut sched = Scheduler::new();
        let cycler = mount(&mut sched, &[&["a1", "a2", "a3"]]);
        tick(&mut sched);
        tick(&mut sched);

        cycler.replace_sets(sets(&[&["b1", "b2", "b3"]])).unwrap();
        assert_eq!(cycler.current_frame().as_str(), "b3");
        tick(&mut sched);
        assert_eq!(cycler.current_frame().as_str(), "b1");

        tick(&mut sched);
        cycler.replace_sets(sets(&[&["c1"]])).unwrap();
        assert_eq!(cycler.state(), AnimationState::default());

        assert!(matches!(
            cycler.replace_sets(Vec::new()),
            Err(EngineError::NoFrameSets)
        ));
        assert_eq!(cycler.current_frame().as_str(), "c1");
    }
}
