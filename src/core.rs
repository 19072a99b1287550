pub use kurbo::{Point, Vec2};

/// Number of fixed phases in the attack narrative.
pub const STAGE_COUNT: usize = 5;

/// Number of nodes in the infection chain (one more than the stage count).
pub const NODE_COUNT: usize = STAGE_COUNT + 1;

/// Index of one of the five attack phases, always in `0..STAGE_COUNT`.
///
/// Construction clamps instead of failing: the renderers are display-only and
/// must never index out of bounds on a bad caller value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct StageIndex(u8);

impl<'de> serde::Deserialize<'de> for StageIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Clamp here too, so a hand-edited story file cannot smuggle an
        // out-of-range stage past the constructor.
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl StageIndex {
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, STAGE_COUNT as i64 - 1) as u8)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Chain node the infection departs from on this stage.
    pub fn source_node(self) -> usize {
        self.index()
    }

    /// Chain node the infection arrives at on this stage.
    pub fn target_node(self) -> usize {
        self.index() + 1
    }

    /// One-based "N/5" ordinal for badges.
    pub fn ordinal(self) -> usize {
        self.index() + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Portrait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DisplayMode {
    Wide,
    Vertical,
    Compact,
}

/// Host viewport, used only to pick a display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Widescreen viewports narrower than this fall back to the compact
    /// renderer.
    pub const COMPACT_WIDTH: u32 = 500;

    pub fn display_mode(self, ratio: AspectRatio) -> DisplayMode {
        match ratio {
            AspectRatio::Portrait => DisplayMode::Vertical,
            AspectRatio::Widescreen if self.width < Self::COMPACT_WIDTH => DisplayMode::Compact,
            AspectRatio::Widescreen => DisplayMode::Wide,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Wide | DisplayMode::Compact => Self {
                width: 1280,
                height: 720,
            },
            DisplayMode::Vertical => Self {
                width: 405,
                height: 720,
            },
        }
    }
}
