//! Slide-to-SVG document rendering.
//!
//! Every slide kind renders to a complete standalone SVG document at a fixed
//! canvas size per display mode. Attack-flow slides are sampled
//! deterministically: the stage state machines are advanced `tick` steps of
//! the progress clock (trail and stream clocks derived from their period
//! ratios), so frame N is reproducible without any timers.

use std::fmt::Write as _;

use kurbo::Point;

use crate::{
    background::ParticleField,
    compact::compact_scene,
    core::{Canvas, DisplayMode, StageIndex},
    icons::{ACCENT_COLOR, CLEAN_COLOR, INFECTED_COLOR, NodeIcon},
    scene::{CompactScene, DotState, SegmentState, VerticalScene, WideScene},
    stages::{LinkState, NodeRole},
    story::{CodeLineKind, Slide, SpanStyle, TextSpan},
    vertical::VerticalStage,
    wide::{PROGRESS_PERIOD_MS, TRAIL_PERIOD_MS, WideStage},
};

const BACKGROUND: &str = "#0a0a0f";
const TEXT_COLOR: &str = "#e8e8f0";
const MUTED_COLOR: &str = "#8888a0";
const FONT: &str = "Inter, 'Helvetica Neue', Arial, sans-serif";
const MONO_FONT: &str = "'JetBrains Mono', 'Fira Code', monospace";

/// Fixed seed for the decorative backdrop so frames are reproducible.
const BACKDROP_SEED: u64 = 0x5717_B0DE;

pub fn svg_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn span_color(style: SpanStyle) -> &'static str {
    match style {
        SpanStyle::Plain => TEXT_COLOR,
        SpanStyle::Highlight => CLEAN_COLOR,
        SpanStyle::HighlightRed => INFECTED_COLOR,
        SpanStyle::HighlightPurple => ACCENT_COLOR,
    }
}

/// Render one slide at one animation tick to a complete SVG document.
pub fn render_slide(slide: &Slide, mode: DisplayMode, tick: u64) -> String {
    let canvas = Canvas::for_mode(mode);
    let mut body = String::new();
    backdrop(&mut body, canvas, tick);

    match slide {
        Slide::Title { title, subtitle } => title_slide(&mut body, canvas, title, subtitle),
        Slide::Text { content, subtext } => text_slide(&mut body, canvas, content, subtext),
        Slide::BigNumber { number, label } => big_number(&mut body, canvas, number, label),
        Slide::Stats { items } => stats_grid(&mut body, canvas, items),
        Slide::AttackTree { root, phases } => attack_tree(&mut body, canvas, root, phases),
        Slide::Network {
            title,
            nodes,
            connections: _,
        } => network_flow(&mut body, canvas, title, nodes),
        Slide::AttackFlow { stage } => attack_flow(&mut body, canvas, mode, *stage, tick),
        Slide::Timeline { title, events } => timeline(&mut body, canvas, title, events),
        Slide::Code { title, lines } => code_block(&mut body, canvas, title, lines),
    }

    document(canvas, &body)
}

fn document(canvas: Canvas, body: &str) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" "#,
            r#"viewBox="0 0 {w} {h}">"#,
            r#"<defs><filter id="glow" x="-50%" y="-50%" width="200%" height="200%">"#,
            r#"<feGaussianBlur stdDeviation="3" result="blur"/>"#,
            r#"<feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
            r#"</filter></defs>"#,
            r#"<rect width="{w}" height="{h}" fill="{bg}"/>{body}</svg>"#
        ),
        w = canvas.width,
        h = canvas.height,
        bg = BACKGROUND,
        body = body
    )
}

fn backdrop(out: &mut String, canvas: Canvas, tick: u64) {
    let mut field = ParticleField::new(canvas.width, canvas.height, BACKDROP_SEED);
    for _ in 0..tick.min(2_000) {
        field.step();
    }
    for link in field.links() {
        let _ = write!(
            out,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{CLEAN_COLOR}" stroke-width="0.5" opacity="{:.3}"/>"#,
            link.from.x, link.from.y, link.to.x, link.to.y, link.opacity
        );
    }
    for p in field.positions() {
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="1.5" fill="{CLEAN_COLOR}" opacity="0.5"/>"#,
            p.x, p.y
        );
    }
}

fn centered_text(
    out: &mut String,
    canvas: Canvas,
    y: f64,
    size: f64,
    color: &str,
    weight: &str,
    text: &str,
) {
    let _ = write!(
        out,
        r#"<text x="{cx}" y="{y:.1}" font-family="{FONT}" font-size="{size}" font-weight="{weight}" fill="{color}" text-anchor="middle">{text}</text>"#,
        cx = canvas.width / 2,
        text = svg_escape(text)
    );
}

fn title_slide(out: &mut String, canvas: Canvas, title: &str, subtitle: &str) {
    let cy = f64::from(canvas.height) / 2.0;
    centered_text(out, canvas, cy - 12.0, 84.0, TEXT_COLOR, "800", title);
    centered_text(out, canvas, cy + 48.0, 24.0, MUTED_COLOR, "400", subtitle);
}

fn text_slide(out: &mut String, canvas: Canvas, content: &[TextSpan], subtext: &str) {
    let cy = f64::from(canvas.height) / 2.0;
    let _ = write!(
        out,
        r#"<text x="{cx}" y="{y:.1}" font-family="{FONT}" font-size="44" font-weight="700" fill="{TEXT_COLOR}" text-anchor="middle">"#,
        cx = canvas.width / 2,
        y = cy - 10.0
    );
    for span in content {
        let _ = write!(
            out,
            r#"<tspan fill="{}">{}</tspan>"#,
            span_color(span.style),
            svg_escape(&span.text)
        );
    }
    out.push_str("</text>");
    if !subtext.is_empty() {
        centered_text(out, canvas, cy + 46.0, 22.0, MUTED_COLOR, "400", subtext);
    }
}

fn big_number(out: &mut String, canvas: Canvas, number: &str, label: &str) {
    let cy = f64::from(canvas.height) / 2.0;
    centered_text(out, canvas, cy, 140.0, INFECTED_COLOR, "800", number);
    centered_text(out, canvas, cy + 60.0, 24.0, MUTED_COLOR, "400", label);
}

fn stats_grid(out: &mut String, canvas: Canvas, items: &[crate::story::StatItem]) {
    let n = items.len().max(1);
    let card_w = 260.0;
    let gap = 40.0;
    let total = n as f64 * card_w + (n - 1) as f64 * gap;
    let x0 = (f64::from(canvas.width) - total) / 2.0;
    let y0 = f64::from(canvas.height) / 2.0 - 90.0;
    for (i, item) in items.iter().enumerate() {
        let x = x0 + i as f64 * (card_w + gap);
        let _ = write!(
            out,
            r#"<rect x="{x:.1}" y="{y0:.1}" width="{card_w}" height="180" rx="8" fill="{CLEAN_COLOR}" fill-opacity="0.05" stroke="{CLEAN_COLOR}" stroke-opacity="0.3"/>"#
        );
        let cx = x + card_w / 2.0;
        let _ = write!(
            out,
            r#"<text x="{cx:.1}" y="{y:.1}" font-family="{FONT}" font-size="64" font-weight="800" fill="{CLEAN_COLOR}" text-anchor="middle">{}</text>"#,
            svg_escape(&item.value),
            y = y0 + 90.0
        );
        let _ = write!(
            out,
            r#"<text x="{cx:.1}" y="{y:.1}" font-family="{FONT}" font-size="18" fill="{MUTED_COLOR}" text-anchor="middle">{}</text>"#,
            svg_escape(&item.label),
            y = y0 + 140.0
        );
    }
}

fn attack_tree(out: &mut String, canvas: Canvas, root: &str, phases: &[Vec<String>]) {
    let cx = f64::from(canvas.width) / 2.0;
    let mut y = 120.0;
    let _ = write!(
        out,
        r#"<rect x="{:.1}" y="{y:.1}" width="220" height="48" rx="6" fill="{INFECTED_COLOR}" fill-opacity="0.15" stroke="{INFECTED_COLOR}"/>"#,
        cx - 110.0
    );
    let _ = write!(
        out,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="{FONT}" font-size="20" font-weight="700" fill="{TEXT_COLOR}" text-anchor="middle">{}</text>"#,
        y + 31.0,
        svg_escape(root)
    );
    y += 48.0;
    for phase in phases {
        let _ = write!(
            out,
            r#"<line x1="{cx:.1}" y1="{y:.1}" x2="{cx:.1}" y2="{:.1}" stroke="{MUTED_COLOR}" stroke-width="2"/>"#,
            y + 36.0
        );
        y += 36.0;
        let n = phase.len().max(1);
        let node_w = 200.0;
        let gap = 24.0;
        let total = n as f64 * node_w + (n - 1) as f64 * gap;
        let x0 = cx - total / 2.0;
        for (i, label) in phase.iter().enumerate() {
            let x = x0 + i as f64 * (node_w + gap);
            let _ = write!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{node_w}" height="44" rx="6" fill="{CLEAN_COLOR}" fill-opacity="0.07" stroke="{CLEAN_COLOR}" stroke-opacity="0.5"/>"#
            );
            let _ = write!(
                out,
                r#"<text x="{:.1}" y="{:.1}" font-family="{FONT}" font-size="16" fill="{TEXT_COLOR}" text-anchor="middle">{}</text>"#,
                x + node_w / 2.0,
                y + 28.0,
                svg_escape(label)
            );
        }
        y += 44.0;
    }
}

fn network_flow(out: &mut String, canvas: Canvas, title: &str, nodes: &[crate::story::NetworkNode]) {
    centered_text(out, canvas, 110.0, 28.0, MUTED_COLOR, "600", title);
    let n = nodes.len().max(1);
    let node_w = 150.0;
    let arrow_w = 60.0;
    let total = n as f64 * node_w + (n - 1) as f64 * arrow_w;
    let x0 = (f64::from(canvas.width) - total) / 2.0;
    let cy = f64::from(canvas.height) / 2.0;
    for (i, node) in nodes.iter().enumerate() {
        let x = x0 + i as f64 * (node_w + arrow_w);
        let color = if node.infected {
            INFECTED_COLOR
        } else {
            CLEAN_COLOR
        };
        let _ = write!(
            out,
            r#"<rect x="{x:.1}" y="{:.1}" width="{node_w}" height="64" rx="8" fill="{color}" fill-opacity="0.1" stroke="{color}" stroke-width="2"/>"#,
            cy - 32.0
        );
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-family="{FONT}" font-size="20" font-weight="700" fill="{color}" text-anchor="middle">{}</text>"#,
            x + node_w / 2.0,
            cy + 7.0,
            svg_escape(&node.label)
        );
        if i + 1 < n {
            let ax = x + node_w + arrow_w / 2.0;
            let _ = write!(
                out,
                r#"<text x="{ax:.1}" y="{:.1}" font-family="{FONT}" font-size="26" fill="{MUTED_COLOR}" text-anchor="middle">&#8594;</text>"#,
                cy + 9.0
            );
        }
    }
}

fn timeline(out: &mut String, canvas: Canvas, title: &str, events: &[crate::story::TimelineEvent]) {
    centered_text(out, canvas, 100.0, 28.0, MUTED_COLOR, "600", title);
    let mut y = 170.0;
    let x = f64::from(canvas.width) / 2.0 - 320.0;
    for event in events {
        let _ = write!(
            out,
            r#"<text x="{x:.1}" y="{y:.1}" font-family="{FONT}" font-size="22" font-weight="800" fill="{CLEAN_COLOR}">{}</text>"#,
            svg_escape(&event.year)
        );
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{y:.1}" font-family="{FONT}" font-size="19" fill="{TEXT_COLOR}">{}</text>"#,
            x + 110.0,
            svg_escape(&event.text)
        );
        y += 52.0;
    }
}

fn code_block(out: &mut String, canvas: Canvas, title: &str, lines: &[crate::story::CodeLine]) {
    centered_text(out, canvas, 90.0, 26.0, MUTED_COLOR, "600", title);
    let w = 760.0;
    let x = (f64::from(canvas.width) - w) / 2.0;
    let h = 60.0 + lines.len() as f64 * 28.0;
    let _ = write!(
        out,
        r##"<rect x="{x:.1}" y="130" width="{w}" height="{h:.1}" rx="8" fill="#05050a" stroke="{CLEAN_COLOR}" stroke-opacity="0.25"/>"##
    );
    let mut y = 170.0;
    for line in lines {
        let color = match line.kind {
            CodeLineKind::Comment => MUTED_COLOR,
            CodeLineKind::Code => "#7ee787",
        };
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{y:.1}" font-family="{MONO_FONT}" font-size="17" fill="{color}" xml:space="preserve">{}</text>"#,
            x + 28.0,
            svg_escape(&line.text)
        );
        y += 28.0;
    }
}

/// Sample the right renderer at `tick` ticks of its own clock and draw it.
fn attack_flow(out: &mut String, canvas: Canvas, mode: DisplayMode, stage: StageIndex, tick: u64) {
    match mode {
        DisplayMode::Wide => {
            let mut state = WideStage::new(stage);
            // The trail clock runs at half the progress clock rate.
            let trail_every = TRAIL_PERIOD_MS / PROGRESS_PERIOD_MS;
            for t in 1..=tick {
                state.progress_tick();
                if t % trail_every == 0 {
                    state.trail_tick();
                }
            }
            wide_scene_svg(out, canvas, &state.scene());
        }
        DisplayMode::Vertical => {
            let mut state = VerticalStage::new(stage);
            for _ in 0..tick {
                state.tick();
            }
            vertical_scene_svg(out, canvas, &state.scene());
        }
        DisplayMode::Compact => compact_scene_svg(out, canvas, &compact_scene(stage)),
    }
}

/// Map a normalized 0..100 diagram point into the wide canvas diagram area.
fn diagram_point(canvas: Canvas, p: Point) -> Point {
    let x0 = 80.0;
    let y0 = 150.0;
    let w = f64::from(canvas.width) - 160.0;
    let h = f64::from(canvas.height) - 310.0;
    Point::new(x0 + p.x / 100.0 * w, y0 + p.y / 100.0 * h)
}

fn stage_header(out: &mut String, canvas: Canvas, scene_ordinal: usize, total: usize, title: &str, desc: &str) {
    let cx = canvas.width / 2;
    let _ = write!(
        out,
        r#"<text x="{cx}" y="64" font-family="{MONO_FONT}" font-size="20" fill="{INFECTED_COLOR}" text-anchor="middle">0{scene_ordinal} / 0{total}</text>"#
    );
    centered_text(out, canvas, 104.0, 34.0, TEXT_COLOR, "800", title);
    centered_text(out, canvas, 134.0, 18.0, MUTED_COLOR, "400", desc);
}

fn node_palette(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Source | NodeRole::Infected => INFECTED_COLOR,
        NodeRole::Target => CLEAN_COLOR,
        NodeRole::Dormant => MUTED_COLOR,
    }
}

fn icon_group(out: &mut String, icon: NodeIcon, color: &str, center: Point, size: f64) {
    let scale = size / 64.0;
    let _ = write!(
        out,
        r#"<g transform="translate({:.1} {:.1}) scale({scale:.3})">{}</g>"#,
        center.x - size / 2.0,
        center.y - size / 2.0,
        icon.svg_fragment(color)
    );
}

fn wide_scene_svg(out: &mut String, canvas: Canvas, scene: &WideScene) {
    stage_header(
        out,
        canvas,
        scene.header.ordinal,
        scene.header.total,
        scene.header.title,
        scene.header.description,
    );

    // Faint cyber grid behind the diagram.
    for i in 1..5 {
        let p = diagram_point(canvas, Point::new(i as f64 * 20.0, 0.0));
        let q = diagram_point(canvas, Point::new(i as f64 * 20.0, 100.0));
        let _ = write!(
            out,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{CLEAN_COLOR}" stroke-width="0.6" opacity="0.08"/>"#,
            p.x, p.y, q.x, q.y
        );
        let p = diagram_point(canvas, Point::new(0.0, i as f64 * 20.0));
        let q = diagram_point(canvas, Point::new(100.0, i as f64 * 20.0));
        let _ = write!(
            out,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{CLEAN_COLOR}" stroke-width="0.6" opacity="0.08"/>"#,
            p.x, p.y, q.x, q.y
        );
    }

    for link in &scene.links {
        let a = diagram_point(canvas, link.from);
        let b = diagram_point(canvas, link.to);
        let (color, width, opacity, dash, glow) = match link.state {
            LinkState::Completed => (INFECTED_COLOR, 2.5, 0.8, "", ""),
            LinkState::Active => (INFECTED_COLOR, 3.0, 1.0, r#" stroke-dasharray="10 6""#, r#" filter="url(#glow)""#),
            LinkState::Pending => (MUTED_COLOR, 1.5, 0.3, r#" stroke-dasharray="2 6""#, ""),
        };
        let _ = write!(
            out,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{color}" stroke-width="{width}" opacity="{opacity}"{dash}{glow}/>"#,
            a.x, a.y, b.x, b.y
        );
    }

    for t in &scene.trail {
        let p = diagram_point(canvas, t.position);
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.2}" fill="{INFECTED_COLOR}" opacity="{:.3}"/>"#,
            p.x,
            p.y,
            6.0 * t.scale,
            t.opacity
        );
    }

    if let Some(packet) = &scene.packet {
        let p = diagram_point(canvas, packet.position);
        let _ = write!(
            out,
            concat!(
                r#"<g filter="url(#glow)">"#,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="8" fill="{red}"/>"#,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="13" fill="none" stroke="{red}" stroke-width="1.5" opacity="0.6"/>"#,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="18" fill="none" stroke="{red}" stroke-width="1" opacity="0.3"/>"#,
                "</g>"
            ),
            x = p.x,
            y = p.y,
            red = INFECTED_COLOR
        );
    }

    for node in &scene.nodes {
        let p = diagram_point(canvas, node.position);
        let color = node_palette(node.role);
        if node.ripple {
            for (r, op) in [(34.0, 0.6), (46.0, 0.35), (58.0, 0.15)] {
                let _ = write!(
                    out,
                    r#"<circle cx="{:.1}" cy="{:.1}" r="{r}" fill="none" stroke="{INFECTED_COLOR}" stroke-width="2" opacity="{op}"/>"#,
                    p.x, p.y
                );
            }
        } else if node.scanning {
            let _ = write!(
                out,
                r#"<circle cx="{:.1}" cy="{:.1}" r="36" fill="none" stroke="{CLEAN_COLOR}" stroke-width="1.5" stroke-dasharray="6 8" opacity="0.5"/>"#,
                p.x, p.y
            );
        }
        if node.role.is_infected() {
            let _ = write!(
                out,
                r#"<circle cx="{:.1}" cy="{:.1}" r="30" fill="{INFECTED_COLOR}" opacity="0.12"/>"#,
                p.x, p.y
            );
        }
        icon_group(out, node.icon, color, p, 44.0);
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-family="{FONT}" font-size="14" font-weight="700" fill="{color}" text-anchor="middle">{}</text>"#,
            p.x,
            p.y + 40.0,
            node.label
        );
    }

    progress_bar(out, canvas, &scene.segments, f64::from(canvas.height) - 70.0);
}

fn progress_bar(out: &mut String, canvas: Canvas, segments: &[crate::scene::ProgressSegment], y: f64) {
    let n = segments.len().max(1);
    let gap = 8.0;
    let total_w = f64::from(canvas.width) * 0.6;
    let seg_w = (total_w - (n - 1) as f64 * gap) / n as f64;
    let x0 = (f64::from(canvas.width) - total_w) / 2.0;
    for (i, seg) in segments.iter().enumerate() {
        let x = x0 + i as f64 * (seg_w + gap);
        let _ = write!(
            out,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{seg_w:.1}" height="6" rx="3" fill="{MUTED_COLOR}" opacity="0.25"/>"#
        );
        if seg.fill > 0.0 {
            let color = match seg.state {
                SegmentState::Active => INFECTED_COLOR,
                _ => CLEAN_COLOR,
            };
            let _ = write!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="6" rx="3" fill="{color}"/>"#,
                seg_w * seg.fill
            );
        }
    }
}

fn vertical_scene_svg(out: &mut String, canvas: Canvas, scene: &VerticalScene) {
    let cx = f64::from(canvas.width) / 2.0;
    stage_header(
        out,
        canvas,
        scene.header.ordinal,
        scene.header.total,
        scene.header.title,
        scene.header.description,
    );

    // Previously infected nodes as a compact strip.
    if !scene.infected_chain.is_empty() {
        let n = scene.infected_chain.len();
        let step = 44.0;
        let x0 = cx - (n - 1) as f64 * step / 2.0;
        for (i, icon) in scene.infected_chain.iter().enumerate() {
            let p = Point::new(x0 + i as f64 * step, 172.0);
            icon_group(out, *icon, INFECTED_COLOR, p, 24.0);
            if i + 1 < n {
                let _ = write!(
                    out,
                    r#"<text x="{:.1}" y="178" font-family="{FONT}" font-size="13" fill="{MUTED_COLOR}" text-anchor="middle">&#8594;</text>"#,
                    p.x + step / 2.0
                );
            }
        }
    }

    let src = Point::new(cx, 248.0);
    let dst = Point::new(cx, 528.0);
    let channel_top = src.y + 46.0;
    let channel_len = dst.y - 46.0 - channel_top;

    // Stream channel with three phased packets.
    let _ = write!(
        out,
        r#"<line x1="{cx:.1}" y1="{:.1}" x2="{cx:.1}" y2="{:.1}" stroke="{INFECTED_COLOR}" stroke-width="2" opacity="0.35"/>"#,
        channel_top,
        channel_top + channel_len
    );
    for off in scene.packet_offsets {
        let y = channel_top + off * channel_len;
        let _ = write!(
            out,
            r#"<circle cx="{cx:.1}" cy="{y:.1}" r="5" fill="{INFECTED_COLOR}" filter="url(#glow)"/>"#
        );
    }
    let _ = write!(
        out,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="{FONT}" font-size="14" fill="{INFECTED_COLOR}" text-anchor="middle">&#9660;</text>"#,
        channel_top + channel_len + 18.0
    );

    for (node, p, badge_color) in [
        (&scene.source, src, INFECTED_COLOR),
        (&scene.target, dst, CLEAN_COLOR),
    ] {
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="38" fill="{badge_color}" opacity="0.08"/>"#,
            p.x, p.y
        );
        icon_group(out, node.icon, badge_color, p, 40.0);
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-family="{FONT}" font-size="15" font-weight="700" fill="{TEXT_COLOR}" text-anchor="middle">{}</text>"#,
            p.x,
            p.y + 58.0,
            node.label
        );
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-family="{MONO_FONT}" font-size="11" fill="{badge_color}" text-anchor="middle">{}</text>"#,
            p.x,
            p.y + 76.0,
            node.badge
        );
    }

    progress_bar(out, canvas, &scene.segments, f64::from(canvas.height) - 48.0);
}

fn compact_scene_svg(out: &mut String, canvas: Canvas, scene: &CompactScene) {
    let cx = f64::from(canvas.width) / 2.0;
    let cy = f64::from(canvas.height) / 2.0;
    let _ = write!(
        out,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="{MONO_FONT}" font-size="18" fill="{INFECTED_COLOR}" text-anchor="middle">{}</text>"#,
        cy - 140.0,
        svg_escape(&scene.badge)
    );
    icon_group(out, scene.icon, CLEAN_COLOR, Point::new(cx, cy - 60.0), 72.0);
    centered_text(out, canvas, cy + 24.0, 34.0, TEXT_COLOR, "800", scene.title);
    centered_text(out, canvas, cy + 62.0, 20.0, MUTED_COLOR, "400", &scene.flow_label);

    let n = scene.dots.len();
    let step = 26.0;
    let x0 = cx - (n - 1) as f64 * step / 2.0;
    for (i, dot) in scene.dots.iter().enumerate() {
        let (r, color, opacity) = match dot {
            DotState::Current => (6.0, INFECTED_COLOR, 1.0),
            DotState::Done => (4.5, CLEAN_COLOR, 0.9),
            DotState::Pending => (4.0, MUTED_COLOR, 0.35),
        };
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="{r}" fill="{color}" opacity="{opacity}"/>"#,
            x0 + i as f64 * step,
            cy + 110.0
        );
    }
}
