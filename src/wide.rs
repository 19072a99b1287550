//! Wide (16:9) attack-flow renderer: full interpolated path animation over
//! the six-node chain, with a decaying packet trail and a one-shot infection
//! ripple on arrival.
//!
//! `WideStage` is a pure state machine. The host (`driver::WideDriver`) runs
//! two independent tickers against it: `progress_tick` every 25 ms and
//! `trail_tick` every 50 ms. Both transitions are deterministic, so tests
//! drive them directly without timers.

use std::collections::VecDeque;

use kurbo::Point;

use crate::{
    core::{STAGE_COUNT, StageIndex},
    scene::{
        LinkVisual, NodeVisual, PacketVisual, ProgressSegment, SegmentState, StageHeader,
        TrailVisual, WideScene,
    },
    stages::{LinkState, NodeRole, chain_nodes, metadata_for, node},
};

/// Progress gained per progress tick.
pub const PROGRESS_STEP: f64 = 0.012;
/// Progress ticker period.
pub const PROGRESS_PERIOD_MS: u64 = 25;
/// Trail ticker period, deliberately slower than the progress ticker.
pub const TRAIL_PERIOD_MS: u64 = 50;
/// Progress at which the infection ripple latches.
pub const RIPPLE_THRESHOLD: f64 = 0.95;
/// Progress at which the packet is treated as arrived and hidden.
pub const ARRIVAL_THRESHOLD: f64 = 0.98;
/// Trail points are evicted once their age reaches this many trail ticks.
pub const TRAIL_MAX_AGE: u32 = 8;

/// One past packet position in the fading comet trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Point,
    pub age: u32,
}

#[derive(Clone, Debug)]
pub struct WideStage {
    stage: StageIndex,
    progress: f64,
    ripple: bool,
    trail: VecDeque<TrailPoint>,
}

impl WideStage {
    pub fn new(stage: StageIndex) -> Self {
        Self {
            stage,
            progress: 0.0,
            ripple: false,
            trail: VecDeque::new(),
        }
    }

    pub fn stage(&self) -> StageIndex {
        self.stage
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn ripple_fired(&self) -> bool {
        self.ripple
    }

    pub fn trail(&self) -> impl Iterator<Item = &TrailPoint> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Switch stages. A no-op when the stage is unchanged; otherwise all
    /// per-stage animation state starts over.
    pub fn set_stage(&mut self, stage: StageIndex) {
        if stage != self.stage {
            self.stage = stage;
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.ripple = false;
        self.trail.clear();
    }

    /// Advance the packet along the active edge, clamped at completion.
    /// Latches the ripple the first time progress crosses the threshold.
    pub fn progress_tick(&mut self) {
        let next = (self.progress + PROGRESS_STEP).min(1.0);
        if next >= RIPPLE_THRESHOLD && self.progress < RIPPLE_THRESHOLD {
            self.ripple = true;
        }
        self.progress = next;
    }

    /// Age the trail, evict expired points, and record the current packet
    /// position while the packet is still in flight.
    pub fn trail_tick(&mut self) {
        for p in &mut self.trail {
            p.age += 1;
        }
        self.trail.retain(|p| p.age < TRAIL_MAX_AGE);
        if self.progress < ARRIVAL_THRESHOLD {
            self.trail.push_back(TrailPoint {
                position: self.interpolated_position(),
                age: 0,
            });
        }
    }

    fn interpolated_position(&self) -> Point {
        let meta = metadata_for(self.stage);
        let from = node(meta.source).position();
        let to = node(meta.target).position();
        from.lerp(to, self.progress)
    }

    /// Current packet marker position, or `None` once arrived.
    pub fn packet_position(&self) -> Option<Point> {
        (self.progress < ARRIVAL_THRESHOLD).then(|| self.interpolated_position())
    }

    pub fn scene(&self) -> WideScene {
        let meta = metadata_for(self.stage);
        let s = self.stage.index();

        let nodes = chain_nodes()
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let role = NodeRole::of(i, self.stage);
                let is_target = role == NodeRole::Target;
                NodeVisual {
                    id: spec.id,
                    label: spec.label,
                    icon: spec.icon,
                    position: spec.position(),
                    role,
                    ripple: is_target && self.ripple,
                    scanning: is_target && !self.ripple,
                }
            })
            .collect();

        let links = (0..STAGE_COUNT)
            .map(|i| LinkVisual {
                from: node(i).position(),
                to: node(i + 1).position(),
                state: LinkState::of(i, self.stage),
            })
            .collect();

        let trail = self
            .trail
            .iter()
            .map(|p| TrailVisual {
                position: p.position,
                opacity: 1.0 - f64::from(p.age) / f64::from(TRAIL_MAX_AGE),
                scale: 1.0 - f64::from(p.age) / 10.0,
            })
            .collect();

        let segments = (0..STAGE_COUNT)
            .map(|i| {
                let (state, fill) = match i.cmp(&s) {
                    std::cmp::Ordering::Less => (SegmentState::Complete, 1.0),
                    std::cmp::Ordering::Equal => (SegmentState::Active, self.progress),
                    std::cmp::Ordering::Greater => (SegmentState::Pending, 0.0),
                };
                ProgressSegment { state, fill }
            })
            .collect();

        WideScene {
            header: StageHeader {
                ordinal: self.stage.ordinal(),
                total: STAGE_COUNT,
                title: meta.title,
                description: meta.description,
            },
            nodes,
            links,
            packet: self.packet_position().map(|position| PacketVisual { position }),
            trail,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotone_and_clamped() {
        let mut stage = WideStage::new(StageIndex::new(1));
        let mut prev = 0.0;
        for _ in 0..200 {
            stage.progress_tick();
            assert!(stage.progress() >= prev);
            assert!(stage.progress() <= 1.0);
            prev = stage.progress();
        }
        assert_eq!(stage.progress(), 1.0);
    }

    #[test]
    fn stage_change_resets_everything() {
        for (from, to) in [(0, 1), (4, 0)] {
            let mut stage = WideStage::new(StageIndex::new(from));
            for _ in 0..40 {
                stage.progress_tick();
                stage.trail_tick();
            }
            assert!(stage.progress() > 0.0);
            assert!(stage.trail_len() > 0);

            stage.set_stage(StageIndex::new(to));
            assert_eq!(stage.progress(), 0.0);
            assert_eq!(stage.trail_len(), 0);
            assert!(!stage.ripple_fired());
        }
    }

    #[test]
    fn same_stage_is_a_noop() {
        let mut stage = WideStage::new(StageIndex::new(2));
        for _ in 0..30 {
            stage.progress_tick();
            stage.trail_tick();
        }
        let progress = stage.progress();
        let trail = stage.trail_len();
        stage.set_stage(StageIndex::new(2));
        assert_eq!(stage.progress(), progress);
        assert_eq!(stage.trail_len(), trail);
    }

    #[test]
    fn ripple_latches_exactly_once() {
        let mut stage = WideStage::new(StageIndex::new(0));
        let mut transitions = 0;
        let mut prev = stage.ripple_fired();
        for _ in 0..120 {
            stage.progress_tick();
            if stage.ripple_fired() != prev {
                transitions += 1;
                prev = stage.ripple_fired();
                // First tick where the threshold is reached.
                assert!(stage.progress() >= RIPPLE_THRESHOLD);
                assert!(stage.progress() < RIPPLE_THRESHOLD + PROGRESS_STEP);
            }
        }
        assert_eq!(transitions, 1);
        assert!(stage.ripple_fired());
    }

    #[test]
    fn trail_point_lives_exactly_max_age_ticks() {
        let mut stage = WideStage::new(StageIndex::new(3));
        stage.trail_tick();
        assert_eq!(stage.trail_len(), 1);
        let inserted = stage.trail().next().unwrap().position;

        // Progress never advances here, so only ages distinguish the points.
        for tick in 1..TRAIL_MAX_AGE {
            stage.trail_tick();
            assert!(
                stage.trail().any(|p| p.position == inserted && p.age == tick),
                "point should survive tick {tick}"
            );
        }
        stage.trail_tick();
        assert!(stage.trail().all(|p| p.age < TRAIL_MAX_AGE));
        assert!(!stage.trail().any(|p| p.age >= TRAIL_MAX_AGE));
    }

    #[test]
    fn packet_hides_on_arrival() {
        let mut stage = WideStage::new(StageIndex::new(2));
        assert!(stage.packet_position().is_some());
        for _ in 0..120 {
            stage.progress_tick();
        }
        assert_eq!(stage.packet_position(), None);
        assert!(stage.scene().packet.is_none());
    }

    #[test]
    fn packet_interpolates_between_edge_endpoints() {
        let mut stage = WideStage::new(StageIndex::new(0));
        let from = node(0).position();
        let to = node(1).position();

        let start = stage.packet_position().unwrap();
        assert!((start.x - from.x).abs() < 1e-9);
        assert!((start.y - from.y).abs() < 1e-9);

        for _ in 0..50 {
            stage.progress_tick();
        }
        let mid = stage.packet_position().unwrap();
        let t = stage.progress();
        assert!((mid.x - (from.x + (to.x - from.x) * t)).abs() < 1e-9);
        assert!((mid.y - (from.y + (to.y - from.y) * t)).abs() < 1e-9);
    }

    #[test]
    fn scene_reflects_ripple_and_scanning() {
        let mut stage = WideStage::new(StageIndex::new(1));
        let scene = stage.scene();
        let target = &scene.nodes[2];
        assert_eq!(target.role, NodeRole::Target);
        assert!(target.scanning);
        assert!(!target.ripple);

        for _ in 0..90 {
            stage.progress_tick();
        }
        let scene = stage.scene();
        let target = &scene.nodes[2];
        assert!(target.ripple);
        assert!(!target.scanning);
    }

    #[test]
    fn end_to_end_stage_two_traversal() {
        let mut stage = WideStage::new(StageIndex::new(2));
        // Interleave as the drivers do: one trail tick per two progress ticks.
        for tick in 1..=80 {
            stage.progress_tick();
            if tick % 2 == 0 {
                stage.trail_tick();
            }
        }
        // 80 * 0.012 = 0.96 >= 0.95
        assert!(stage.ripple_fired());
        assert_eq!(stage.trail_len(), TRAIL_MAX_AGE as usize);
        let ages: Vec<u32> = stage.trail().map(|p| p.age).collect();
        let mut sorted = ages.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..TRAIL_MAX_AGE).collect::<Vec<_>>());
    }
}
