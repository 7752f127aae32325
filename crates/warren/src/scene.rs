//! Assembling the layers of a scene.

use std::time::Duration;

use color_eyre::eyre::WrapErr;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use warren_config::Config;
use warren_core::{Direction, Frame, FrameSet, SceneKind};
use warren_engine::{
    CyclerOptions, EngineResult, FrameCycler, KeyframeRegistry, Scheduler, ScrollLayer,
    ScrollOptions, load_frame_set, load_frame_sets,
};

/// Everything needed to (re)build a scene.
#[derive(Debug, Clone)]
pub struct SceneSpec {
    pub kind: SceneKind,
    pub cycler: CyclerOptions,
    pub scroll: ScrollOptions,
    /// Replaces the built-in foreground sets.
    pub custom_sets: Option<Vec<FrameSet>>,
    /// Replaces the built-in forest.
    pub custom_scroll: Option<FrameSet>,
}

impl SceneSpec {
    /// Resolve timings, presentation and frame files from `config`.
    pub fn from_config(config: &Config) -> color_eyre::Result<Self> {
        let presentation = config.presentation()?;

        let custom_sets = if config.frame_sets.is_empty() {
            None
        } else {
            let sets = load_frame_sets(config.frame_sets.as_slice())
                .wrap_err("failed to load frame sets")?;
            Some(sets)
        };
        let custom_scroll = config
            .scroll_frames
            .as_deref()
            .map(load_frame_set)
            .transpose()
            .wrap_err("failed to load scroll frames")?;

        Ok(Self {
            kind: config.scene,
            cycler: CyclerOptions {
                frame_rate: config.cycler_frame_rate(),
                presentation,
            },
            scroll: ScrollOptions {
                frame_rate: config.scroll_frame_rate(),
                scroll_duration: config.scroll_duration(),
                direction: config.direction,
                presentation,
            },
            custom_sets,
            custom_scroll,
        })
    }
}

/// A mounted scene: an optional scrolling background with its ground strip,
/// under a frame cycler.
#[derive(Debug)]
pub struct Scene {
    background: Option<ScrollLayer>,
    ground: Option<Frame>,
    foreground: FrameCycler,
    direction: Direction,
    /// The foreground is the built-in bunny and turns with the scene.
    turns_bunny: bool,
}

impl Scene {
    /// Mount every layer of `spec` scrolling in `direction`.
    pub fn mount(
        scheduler: &mut Scheduler,
        registry: &KeyframeRegistry,
        spec: &SceneSpec,
        direction: Direction,
    ) -> EngineResult<Self> {
        let background = match spec.kind {
            SceneKind::Scroller => {
                let frames = match &spec.custom_scroll {
                    Some(frames) => frames.clone(),
                    None => warren_art::forest()?,
                };
                let options = ScrollOptions {
                    direction,
                    ..spec.scroll
                };
                Some(ScrollLayer::mount(scheduler, registry, frames, options)?)
            }
            SceneKind::Zoom => None,
        };
        let ground = background.as_ref().map(|bg| warren_art::ground(bg.span()));

        let sets = match (&spec.custom_sets, spec.kind) {
            (Some(sets), _) => sets.clone(),
            (None, SceneKind::Scroller) => vec![warren_art::bunny(direction)?],
            (None, SceneKind::Zoom) => warren_art::tree_zoom()?,
        };
        let foreground = FrameCycler::mount(scheduler, sets, spec.cycler)?;

        tracing::info!(scene = %spec.kind, %direction, "scene mounted");
        Ok(Self {
            background,
            ground,
            foreground,
            direction,
            turns_bunny: spec.kind == SceneKind::Scroller && spec.custom_sets.is_none(),
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn background(&self) -> Option<&ScrollLayer> {
        self.background.as_ref()
    }

    #[cfg(test)]
    pub fn foreground(&self) -> &FrameCycler {
        &self.foreground
    }

    /// Turn the scene to scroll in `direction` at `now`. The background keeps
    /// its position and starts moving the other way; the bunny keeps its hop
    /// frame and faces the new way. Scenes without a background ignore this.
    /// Returns whether anything changed.
    pub fn face(&mut self, direction: Direction, now: Duration) -> EngineResult<bool> {
        if self.direction == direction {
            return Ok(false);
        }
        let Some(background) = &mut self.background else {
            return Ok(false);
        };
        background.set_direction(direction, now);
        if self.turns_bunny {
            self.foreground.replace_sets(vec![warren_art::bunny(direction)?])?;
        }
        self.direction = direction;
        Ok(true)
    }

    /// Restart the background scroll from its first position.
    pub fn restart_scroll(&mut self, now: Duration) {
        if let Some(background) = &mut self.background {
            background.restart(now);
            tracing::debug!("scroll restarted");
        }
    }

    /// `Size: <label> | Frame: i/n | 'q' to quit`, with a 1-based frame.
    pub fn status_line(&self) -> String {
        let (label, len) = self.foreground.current_set_info();
        let frame = self.foreground.state().frame_index + 1;
        format!(
            "Size: {:8} | Frame: {frame}/{len} | 'q' to quit",
            label.as_deref().unwrap_or("-")
        )
    }

    /// Draw the ground, the background over it, then the foreground on top.
    pub fn render(&self, area: Rect, buf: &mut Buffer, now: Duration) {
        if let Some(background) = &self.background {
            if let Some(ground) = &self.ground {
                background.underlay_widget(ground.clone(), now).render(area, buf);
            }
            background.widget(now).render(area, buf);
        }
        self.foreground.widget().render(area, buf);
    }
}
