#![forbid(unsafe_code)]

pub mod background;
pub mod compact;
pub mod core;
pub mod driver;
pub mod error;
pub mod icons;
pub mod player;
pub mod render_png;
pub mod render_svg;
pub mod scene;
pub mod stages;
pub mod story;
pub mod ticker;
pub mod vertical;
pub mod wide;

pub use crate::core::{AspectRatio, Canvas, DisplayMode, StageIndex, Viewport};
pub use driver::{VerticalDriver, WideDriver};
pub use error::{StageflowError, StageflowResult};
pub use player::Player;
pub use stages::{LinkState, NodeRole, StageMetadata, metadata_for};
pub use story::{Slide, Story};
pub use ticker::Ticker;
pub use vertical::VerticalStage;
pub use wide::WideStage;
