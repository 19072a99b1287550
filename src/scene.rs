//! Declarative scene descriptions emitted by the stage renderers.
//!
//! The state machines in `wide`, `vertical`, and `compact` produce these
//! structures; `render_svg` turns them into documents. Keeping the seam here
//! makes every animation property assertable without touching markup.

use kurbo::Point;

use crate::{
    core::STAGE_COUNT,
    icons::NodeIcon,
    stages::{LinkState, NodeRole},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StageHeader {
    /// One-based stage ordinal, 1..=5.
    pub ordinal: usize,
    pub total: usize,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeVisual {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NodeIcon,
    pub position: Point,
    pub role: NodeRole,
    /// Infection just arrived; draw expanding ripple rings.
    pub ripple: bool,
    /// Passive scanning indicator on the target before the ripple fires.
    pub scanning: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinkVisual {
    pub from: Point,
    pub to: Point,
    pub state: LinkState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PacketVisual {
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrailVisual {
    pub position: Point,
    /// 1.0 for a fresh point, fading toward 0 with age.
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentState {
    Complete,
    Active,
    Pending,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProgressSegment {
    pub state: SegmentState,
    /// Fill fraction in [0,1]; completed segments are full, pending empty.
    pub fill: f64,
}

/// Everything the wide renderer shows for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WideScene {
    pub header: StageHeader,
    pub nodes: Vec<NodeVisual>,
    pub links: Vec<LinkVisual>,
    pub packet: Option<PacketVisual>,
    pub trail: Vec<TrailVisual>,
    pub segments: Vec<ProgressSegment>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VerticalNode {
    pub label: &'static str,
    pub icon: NodeIcon,
    pub badge: &'static str,
}

/// Everything the vertical renderer shows for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VerticalScene {
    pub header: StageHeader,
    /// Icons of nodes infected on earlier stages, in chain order.
    pub infected_chain: Vec<NodeIcon>,
    pub source: VerticalNode,
    pub target: VerticalNode,
    /// Vertical offsets of the three stream packets, each in [0,1).
    pub packet_offsets: [f64; 3],
    pub segments: Vec<ProgressSegment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DotState {
    Done,
    Current,
    Pending,
}

/// Static iconographic summary for constrained viewports.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompactScene {
    pub badge: String,
    pub icon: NodeIcon,
    pub title: &'static str,
    /// "A → B" label for the active edge.
    pub flow_label: String,
    pub dots: [DotState; STAGE_COUNT],
}
