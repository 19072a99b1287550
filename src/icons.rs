//! Vector glyphs for the six chain nodes, in the story's cyber palette.
//!
//! Each fragment is body markup for a 64x64 viewBox; `render_svg` wraps it in
//! a positioned `<g>` with the appropriate scale.

pub const CLEAN_COLOR: &str = "#00f0ff";
pub const INFECTED_COLOR: &str = "#ff3366";
pub const ACCENT_COLOR: &str = "#a855f7";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeIcon {
    Usb,
    Pc,
    Network,
    Scada,
    Plc,
    Target,
}

impl NodeIcon {
    /// 64x64 icon body with the stroke color substituted in.
    pub fn svg_fragment(self, color: &str) -> String {
        match self {
            Self::Usb => format!(
                r##"<rect x="16" y="12" width="32" height="44" rx="4" stroke="{c}" stroke-width="2" fill="{c}" fill-opacity="0.15"/><rect x="22" y="2" width="6" height="14" rx="1" fill="{c}" opacity="0.8"/><rect x="36" y="2" width="6" height="14" rx="1" fill="{c}" opacity="0.8"/><path d="M24 28h16M24 36h12M28 36v8M36 28v12" stroke="{c}" stroke-width="1.5" fill="none" opacity="0.6"/>"##,
                c = color
            ),
            Self::Pc => format!(
                r##"<rect x="8" y="8" width="48" height="32" rx="3" stroke="{c}" stroke-width="2" fill="{c}" fill-opacity="0.1"/><rect x="12" y="12" width="40" height="24" fill="#0a0a0f"/><rect x="16" y="26" width="20" height="2" fill="{c}" opacity="0.3"/><rect x="16" y="30" width="14" height="2" fill="{c}" opacity="0.2"/><path d="M4 44h56l-4 12H8z" stroke="{c}" stroke-width="2" fill="{c}" fill-opacity="0.15"/>"##,
                c = color
            ),
            Self::Network => format!(
                r##"<circle cx="32" cy="32" r="10" stroke="{c}" stroke-width="2" fill="{c}" fill-opacity="0.15"/><g stroke="{c}" stroke-width="1.5" opacity="0.7"><line x1="32" y1="32" x2="54" y2="32"/><line x1="32" y1="32" x2="43" y2="13"/><line x1="32" y1="32" x2="21" y2="13"/><line x1="32" y1="32" x2="10" y2="32"/><line x1="32" y1="32" x2="21" y2="51"/><line x1="32" y1="32" x2="43" y2="51"/></g><g fill="{c}"><circle cx="54" cy="32" r="3"/><circle cx="43" cy="13" r="3"/><circle cx="21" cy="13" r="3"/><circle cx="10" cy="32" r="3"/><circle cx="21" cy="51" r="3"/><circle cx="43" cy="51" r="3"/></g>"##,
                c = color
            ),
            Self::Scada => format!(
                r##"<rect x="6" y="10" width="52" height="36" rx="2" stroke="{c}" stroke-width="2" fill="{c}" fill-opacity="0.1"/><polyline points="10,36 20,36 24,20 30,42 36,28 42,34 54,34" stroke="{c}" stroke-width="2" fill="none"/><rect x="24" y="50" width="16" height="4" fill="{c}" opacity="0.6"/><rect x="18" y="56" width="28" height="3" fill="{c}" opacity="0.4"/>"##,
                c = color
            ),
            Self::Plc => format!(
                r##"<circle cx="32" cy="32" r="16" stroke="{c}" stroke-width="3" fill="none"/><circle cx="32" cy="32" r="6" fill="{c}" fill-opacity="0.5"/><g stroke="{c}" stroke-width="4"><line x1="32" y1="8" x2="32" y2="16"/><line x1="32" y1="48" x2="32" y2="56"/><line x1="8" y1="32" x2="16" y2="32"/><line x1="48" y1="32" x2="56" y2="32"/><line x1="15" y1="15" x2="21" y2="21"/><line x1="43" y1="43" x2="49" y2="49"/><line x1="15" y1="49" x2="21" y2="43"/><line x1="43" y1="21" x2="49" y2="15"/></g>"##,
                c = color
            ),
            Self::Target => format!(
                r##"<circle cx="32" cy="32" r="22" stroke="{c}" stroke-width="2" fill="none"/><circle cx="32" cy="32" r="7" fill="{c}" fill-opacity="0.6"/><g stroke="{c}" stroke-width="5" fill="none"><path d="M32 14a18 18 0 0 1 15.6 9" opacity="0.8"/><path d="M47.6 41a18 18 0 0 1-31.2 0" opacity="0.8"/><path d="M16.4 23a18 18 0 0 1 15.6-9" opacity="0.8"/></g>"##,
                c = color
            ),
        }
    }
}
