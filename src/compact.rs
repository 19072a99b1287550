//! Compact attack-flow renderer for small widescreen viewports: a static
//! summary with no animation loop, cheap enough to rebuild on every redraw.

use crate::{
    core::{STAGE_COUNT, StageIndex},
    scene::{CompactScene, DotState},
    stages::{chain_nodes, metadata_for},
};

pub fn compact_scene(stage: StageIndex) -> CompactScene {
    let meta = metadata_for(stage);
    let nodes = chain_nodes();
    let source = &nodes[meta.source];
    let target = &nodes[meta.target];

    let mut dots = [DotState::Pending; STAGE_COUNT];
    for (i, dot) in dots.iter_mut().enumerate() {
        *dot = match i.cmp(&stage.index()) {
            std::cmp::Ordering::Less => DotState::Done,
            std::cmp::Ordering::Equal => DotState::Current,
            std::cmp::Ordering::Greater => DotState::Pending,
        };
    }

    CompactScene {
        badge: format!("STAGE {}/{}", stage.ordinal(), STAGE_COUNT),
        icon: source.icon,
        title: meta.title,
        flow_label: format!("{} \u{2192} {}", source.label, target.label),
        dots,
    }
}
