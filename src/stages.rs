use kurbo::Point;

use crate::{
    core::{NODE_COUNT, STAGE_COUNT, StageIndex},
    icons::NodeIcon,
};

/// Narrative text and edge endpoints for one attack stage.
///
/// This table is the single source of truth for all three renderers; edge
/// endpoints derived anywhere else would let the variants drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub source: usize,
    pub target: usize,
}

const STAGES: [StageMetadata; STAGE_COUNT] = [
    StageMetadata {
        title: "USB INSERTION",
        description: "Infected USB planted by contractor",
        source: 0,
        target: 1,
    },
    StageMetadata {
        title: "INITIAL INFECTION",
        description: "Worm exploits Windows zero-days",
        source: 1,
        target: 2,
    },
    StageMetadata {
        title: "NETWORK SPREAD",
        description: "Propagates via shared drives",
        source: 2,
        target: 3,
    },
    StageMetadata {
        title: "SCADA COMPROMISE",
        description: "Targets WinCC/Step 7 software",
        source: 3,
        target: 4,
    },
    StageMetadata {
        title: "PAYLOAD DELIVERY",
        description: "Malicious code injected into PLCs",
        source: 4,
        target: 5,
    },
];

/// Pure lookup, total over every `StageIndex`.
pub fn metadata_for(stage: StageIndex) -> &'static StageMetadata {
    &STAGES[stage.index()]
}

/// One node of the infection chain, with its fixed position in the wide
/// layout's normalized 0..100 square.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NodeSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NodeIcon,
    pub x: f64,
    pub y: f64,
}

impl NodeSpec {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

const NODES: [NodeSpec; NODE_COUNT] = [
    NodeSpec {
        id: "usb",
        label: "USB",
        icon: NodeIcon::Usb,
        x: 10.0,
        y: 75.0,
    },
    NodeSpec {
        id: "laptop",
        label: "PC",
        icon: NodeIcon::Pc,
        x: 27.0,
        y: 30.0,
    },
    NodeSpec {
        id: "network",
        label: "NETWORK",
        icon: NodeIcon::Network,
        x: 44.0,
        y: 75.0,
    },
    NodeSpec {
        id: "scada",
        label: "SCADA",
        icon: NodeIcon::Scada,
        x: 61.0,
        y: 30.0,
    },
    NodeSpec {
        id: "plc",
        label: "PLC",
        icon: NodeIcon::Plc,
        x: 78.0,
        y: 75.0,
    },
    NodeSpec {
        id: "centrifuge",
        label: "TARGET",
        icon: NodeIcon::Target,
        x: 93.0,
        y: 30.0,
    },
];

pub fn chain_nodes() -> &'static [NodeSpec; NODE_COUNT] {
    &NODES
}

pub fn node(index: usize) -> &'static NodeSpec {
    &NODES[index.min(NODE_COUNT - 1)]
}

/// Completion state of chain link `i` (node i -> node i+1) for a given stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Completed,
    Active,
    Pending,
}

impl LinkState {
    pub fn of(link: usize, stage: StageIndex) -> Self {
        let s = stage.index();
        if link < s {
            Self::Completed
        } else if link == s {
            Self::Active
        } else {
            Self::Pending
        }
    }
}

/// Role of chain node `i` for a given stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Not yet reached by the infection.
    Dormant,
    /// Infected and currently transmitting.
    Source,
    /// Infected on an earlier stage.
    Infected,
    /// Being infected right now.
    Target,
}

impl NodeRole {
    pub fn of(node: usize, stage: StageIndex) -> Self {
        let s = stage.index();
        if node == s {
            Self::Source
        } else if node == s + 1 {
            Self::Target
        } else if node < s {
            Self::Infected
        } else {
            Self::Dormant
        }
    }

    pub fn is_infected(self) -> bool {
        matches!(self, Self::Source | Self::Infected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_targets_follow_sources() {
        for s in 0..STAGE_COUNT as i64 {
            let meta = metadata_for(StageIndex::new(s));
            assert_eq!(meta.target, meta.source + 1);
            assert_eq!(meta.source, s as usize);
        }
    }

    #[test]
    fn metadata_is_total_under_clamping() {
        assert_eq!(metadata_for(StageIndex::new(-1)).title, "USB INSERTION");
        assert_eq!(metadata_for(StageIndex::new(42)).title, "PAYLOAD DELIVERY");
    }

    #[test]
    fn link_state_partition_is_exact() {
        for s in 0..STAGE_COUNT as i64 {
            let stage = StageIndex::new(s);
            for link in 0..STAGE_COUNT {
                let state = LinkState::of(link, stage);
                let expected = match link.cmp(&stage.index()) {
                    std::cmp::Ordering::Less => LinkState::Completed,
                    std::cmp::Ordering::Equal => LinkState::Active,
                    std::cmp::Ordering::Greater => LinkState::Pending,
                };
                assert_eq!(state, expected, "link {link} at stage {s}");
            }
        }
    }

    #[test]
    fn node_roles_track_the_stage() {
        let stage = StageIndex::new(2);
        assert_eq!(NodeRole::of(0, stage), NodeRole::Infected);
        assert_eq!(NodeRole::of(1, stage), NodeRole::Infected);
        assert_eq!(NodeRole::of(2, stage), NodeRole::Source);
        assert_eq!(NodeRole::of(3, stage), NodeRole::Target);
        assert_eq!(NodeRole::of(4, stage), NodeRole::Dormant);
        assert_eq!(NodeRole::of(5, stage), NodeRole::Dormant);
        assert!(NodeRole::of(2, stage).is_infected());
        assert!(!NodeRole::of(3, stage).is_infected());
    }

    #[test]
    fn node_positions_are_static_and_in_range() {
        for n in chain_nodes() {
            assert!((0.0..=100.0).contains(&n.x));
            assert!((0.0..=100.0).contains(&n.y));
        }
        assert_eq!(node(0).label, "USB");
        assert_eq!(node(99).label, "TARGET");
    }
}
