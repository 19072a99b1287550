//! Vertical (9:16) attack-flow renderer: a two-node source/target view with a
//! continuous packet stream cycling down the channel between them.
//!
//! Unlike the wide renderer's one-shot traversal, the stream phase wraps
//! modulo 1 forever; the stage only changes which two nodes frame the channel.

use crate::{
    core::{STAGE_COUNT, StageIndex},
    scene::{ProgressSegment, SegmentState, StageHeader, VerticalNode, VerticalScene},
    stages::{chain_nodes, metadata_for},
};

/// Phase gained per tick.
pub const STREAM_STEP: f64 = 0.02;
/// Stream ticker period.
pub const STREAM_PERIOD_MS: u64 = 30;
/// Fixed phase offsets of the three concurrently visible packets.
pub const PACKET_OFFSETS: [f64; 3] = [0.0, 0.3, 0.6];

#[derive(Clone, Debug)]
pub struct VerticalStage {
    stage: StageIndex,
    stream_phase: f64,
}

impl VerticalStage {
    pub fn new(stage: StageIndex) -> Self {
        Self {
            stage,
            stream_phase: 0.0,
        }
    }

    pub fn stage(&self) -> StageIndex {
        self.stage
    }

    pub fn stream_phase(&self) -> f64 {
        self.stream_phase
    }

    pub fn set_stage(&mut self, stage: StageIndex) {
        if stage != self.stage {
            self.stage = stage;
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.stream_phase = 0.0;
    }

    /// Advance the stream, wrapping in [0,1).
    pub fn tick(&mut self) {
        self.stream_phase = (self.stream_phase + STREAM_STEP) % 1.0;
    }

    /// Offsets of the three packets along the channel, evenly spaced by
    /// construction.
    pub fn packet_offsets(&self) -> [f64; 3] {
        PACKET_OFFSETS.map(|off| (self.stream_phase + off) % 1.0)
    }

    pub fn scene(&self) -> VerticalScene {
        let meta = metadata_for(self.stage);
        let nodes = chain_nodes();
        let source = &nodes[meta.source];
        let target = &nodes[meta.target];

        let infected_chain = nodes[..self.stage.index()]
            .iter()
            .map(|n| n.icon)
            .collect();

        let segments = (0..STAGE_COUNT)
            .map(|i| {
                let (state, fill) = match i.cmp(&self.stage.index()) {
                    std::cmp::Ordering::Less => (SegmentState::Complete, 1.0),
                    std::cmp::Ordering::Equal => (SegmentState::Active, 1.0),
                    std::cmp::Ordering::Greater => (SegmentState::Pending, 0.0),
                };
                ProgressSegment { state, fill }
            })
            .collect();

        VerticalScene {
            header: StageHeader {
                ordinal: self.stage.ordinal(),
                total: STAGE_COUNT,
                title: meta.title,
                description: meta.description,
            },
            infected_chain,
            source: VerticalNode {
                label: source.label,
                icon: source.icon,
                badge: "INFECTED",
            },
            target: VerticalNode {
                label: target.label,
                icon: target.icon,
                badge: "TARGETING",
            },
            packet_offsets: self.packet_offsets(),
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_phase_wraps_without_reaching_one() {
        let mut stage = VerticalStage::new(StageIndex::new(0));
        for _ in 0..1000 {
            stage.tick();
            assert!(stage.stream_phase() < 1.0);
            assert!(stage.stream_phase() >= 0.0);
        }
    }

    #[test]
    fn wrap_crosses_one_cleanly() {
        let mut stage = VerticalStage::new(StageIndex::new(0));
        stage.stream_phase = 0.99;
        stage.tick();
        assert!((stage.stream_phase() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn packets_stay_evenly_spaced() {
        let mut stage = VerticalStage::new(StageIndex::new(3));
        for _ in 0..137 {
            stage.tick();
        }
        let p = stage.stream_phase();
        let offsets = stage.packet_offsets();
        assert!((offsets[0] - p).abs() < 1e-9);
        assert!((offsets[1] - (p + 0.3) % 1.0).abs() < 1e-9);
        assert!((offsets[2] - (p + 0.6) % 1.0).abs() < 1e-9);
        for off in offsets {
            assert!((0.0..1.0).contains(&off));
        }
    }

    #[test]
    fn stage_change_resets_phase() {
        let mut stage = VerticalStage::new(StageIndex::new(1));
        for _ in 0..7 {
            stage.tick();
        }
        assert!(stage.stream_phase() > 0.0);
        stage.set_stage(StageIndex::new(2));
        assert_eq!(stage.stream_phase(), 0.0);

        // Unchanged stage keeps the phase.
        stage.tick();
        let phase = stage.stream_phase();
        stage.set_stage(StageIndex::new(2));
        assert_eq!(stage.stream_phase(), phase);
    }

    #[test]
    fn infected_chain_lists_prior_nodes_only() {
        let stage = VerticalStage::new(StageIndex::new(0));
        assert!(stage.scene().infected_chain.is_empty());

        let stage = VerticalStage::new(StageIndex::new(3));
        let scene = stage.scene();
        assert_eq!(scene.infected_chain.len(), 3);
        assert_eq!(scene.source.label, "SCADA");
        assert_eq!(scene.target.label, "PLC");
    }
}
