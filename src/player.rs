//! Navigation state machine for the host presentation: current slide, aspect
//! ratio, viewport, and the animation key that gates slide entry animations.

use crate::{
    core::{AspectRatio, DisplayMode, Viewport},
    story::{Slide, Story},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
}

#[derive(Clone, Debug)]
pub struct Player {
    story: Story,
    current: usize,
    ratio: AspectRatio,
    viewport: Viewport,
    animation_key: u64,
}

impl Player {
    pub fn new(story: Story, ratio: AspectRatio, viewport: Viewport) -> Self {
        Self {
            story,
            current: 0,
            ratio,
            viewport,
            animation_key: 0,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.story.slides[self.current]
    }

    /// Monotone counter that changes only when the slide *kind* changes.
    /// Same-kind transitions (attack-flow stage to stage) keep the key so the
    /// scene does not replay its entry animation.
    pub fn animation_key(&self) -> u64 {
        self.animation_key
    }

    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    pub fn set_ratio(&mut self, ratio: AspectRatio) {
        self.ratio = ratio;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Which renderer the attack-flow slides should mount right now.
    pub fn display_mode(&self) -> DisplayMode {
        self.viewport.display_mode(self.ratio)
    }

    /// Move to `index` if it is in range; out-of-range requests are ignored
    /// rather than clamped, matching button-disabled behavior at the ends.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.story.slides.len() || index == self.current {
            return false;
        }
        if self.story.slides[self.current].kind() != self.story.slides[index].kind() {
            self.animation_key += 1;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.goto(self.current + 1)
    }

    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(prev) => self.goto(prev),
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowRight | Key::Space => self.next(),
            Key::ArrowLeft => self.prev(),
        }
    }

    /// Completion fraction for the progress bar, in (0,1].
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.story.slides.len() as f64
    }
}
