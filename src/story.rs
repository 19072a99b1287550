//! The slide dataset: a story is an ordered sequence of typed slides.
//!
//! The JSON shape keeps the original dataset's `"type"`-tagged, camelCase
//! form, so existing story files load unchanged. Rich text is modeled as
//! typed spans rather than embedded markup.

use crate::{
    core::StageIndex,
    error::{StageflowError, StageflowResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Story {
    pub title: String,
    pub subtitle: String,
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Slide {
    Title {
        title: String,
        subtitle: String,
    },
    Text {
        content: Vec<TextSpan>,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        subtext: String,
    },
    BigNumber {
        number: String,
        label: String,
    },
    Stats {
        items: Vec<StatItem>,
    },
    AttackTree {
        root: String,
        phases: Vec<Vec<String>>,
    },
    Network {
        title: String,
        nodes: Vec<NetworkNode>,
        connections: Vec<NetworkConnection>,
    },
    AttackFlow {
        stage: StageIndex,
    },
    Timeline {
        title: String,
        events: Vec<TimelineEvent>,
    },
    Code {
        title: String,
        lines: Vec<CodeLine>,
    },
}

impl Slide {
    /// Slide kind discriminant; slides of the same kind keep their entry
    /// animation when navigating between them.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Text { .. } => "text",
            Self::BigNumber { .. } => "bigNumber",
            Self::Stats { .. } => "stats",
            Self::AttackTree { .. } => "attackTree",
            Self::Network { .. } => "network",
            Self::AttackFlow { .. } => "attackFlow",
            Self::Timeline { .. } => "timeline",
            Self::Code { .. } => "code",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(default)]
    pub style: SpanStyle,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanStyle {
    #[default]
    Plain,
    Highlight,
    HighlightRed,
    HighlightPurple,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub infected: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkConnection {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub attack: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeLine {
    pub text: String,
    #[serde(default)]
    pub kind: CodeLineKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLineKind {
    #[default]
    Code,
    Comment,
}

impl Story {
    pub fn validate(&self) -> StageflowResult<()> {
        if self.slides.is_empty() {
            return Err(StageflowError::validation("story has no slides"));
        }
        for (i, slide) in self.slides.iter().enumerate() {
            match slide {
                Slide::Text { content, .. } if content.is_empty() => {
                    return Err(StageflowError::validation(format!(
                        "slide {i}: text slide has no spans"
                    )));
                }
                Slide::Stats { items } if items.is_empty() => {
                    return Err(StageflowError::validation(format!(
                        "slide {i}: stats slide has no items"
                    )));
                }
                Slide::Network {
                    nodes, connections, ..
                } => {
                    for conn in connections {
                        for end in [&conn.from, &conn.to] {
                            if !nodes.iter().any(|n| &n.id == end) {
                                return Err(StageflowError::validation(format!(
                                    "slide {i}: connection references missing node '{end}'"
                                )));
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// The built-in Stuxnet story.
    pub fn stuxnet() -> Self {
        use SpanStyle::*;

        let text = |spans: Vec<TextSpan>, subtext: &str| Slide::Text {
            content: spans,
            subtext: subtext.to_string(),
        };

        Self {
            title: "Stuxnet".into(),
            subtitle: "The World's First Cyber Weapon".into(),
            slides: vec![
                text(
                    vec![
                        TextSpan::plain("Someone just "),
                        TextSpan::styled("blew up", HighlightRed),
                        TextSpan::plain(" a nuclear facility"),
                    ],
                    "Without firing a single shot.",
                ),
                Slide::BigNumber {
                    number: "1,000".into(),
                    label: "centrifuges \u{2014} destroyed".into(),
                },
                text(
                    vec![
                        TextSpan::plain("Iran's "),
                        TextSpan::styled("nuclear program", HighlightRed),
                    ],
                    "was under attack. They had no idea.",
                ),
                text(
                    vec![
                        TextSpan::plain("The weapon? "),
                        TextSpan::styled("A USB stick.", Highlight),
                    ],
                    "",
                ),
                Slide::Network {
                    title: "It spread like a virus".into(),
                    nodes: vec![
                        NetworkNode {
                            id: "usb".into(),
                            label: "USB".into(),
                            x: 8.0,
                            y: 50.0,
                            infected: false,
                        },
                        NetworkNode {
                            id: "pc".into(),
                            label: "PC".into(),
                            x: 30.0,
                            y: 30.0,
                            infected: true,
                        },
                        NetworkNode {
                            id: "scada".into(),
                            label: "SCADA".into(),
                            x: 52.0,
                            y: 50.0,
                            infected: true,
                        },
                        NetworkNode {
                            id: "plc".into(),
                            label: "PLC".into(),
                            x: 74.0,
                            y: 30.0,
                            infected: true,
                        },
                        NetworkNode {
                            id: "centrifuge".into(),
                            label: "Target".into(),
                            x: 92.0,
                            y: 50.0,
                            infected: true,
                        },
                    ],
                    connections: vec![
                        NetworkConnection {
                            from: "usb".into(),
                            to: "pc".into(),
                            attack: true,
                        },
                        NetworkConnection {
                            from: "pc".into(),
                            to: "scada".into(),
                            attack: true,
                        },
                        NetworkConnection {
                            from: "scada".into(),
                            to: "plc".into(),
                            attack: true,
                        },
                        NetworkConnection {
                            from: "plc".into(),
                            to: "centrifuge".into(),
                            attack: true,
                        },
                    ],
                },
                Slide::AttackFlow {
                    stage: StageIndex::new(0),
                },
                Slide::AttackFlow {
                    stage: StageIndex::new(1),
                },
                Slide::AttackFlow {
                    stage: StageIndex::new(2),
                },
                Slide::AttackFlow {
                    stage: StageIndex::new(3),
                },
                Slide::AttackFlow {
                    stage: StageIndex::new(4),
                },
                text(
                    vec![
                        TextSpan::plain("It made centrifuges "),
                        TextSpan::styled("tear themselves apart", HighlightRed),
                    ],
                    "While screens showed: \"All systems normal.\"",
                ),
                Slide::Stats {
                    items: vec![
                        StatItem {
                            value: "5".into(),
                            label: "Zero-Days Used".into(),
                        },
                        StatItem {
                            value: "14".into(),
                            label: "Months Hidden".into(),
                        },
                    ],
                },
                text(vec![TextSpan::plain("This wasn't hackers.")], ""),
                text(
                    vec![
                        TextSpan::plain("This was "),
                        TextSpan::styled("governments.", Highlight),
                    ],
                    "USA + Israel. Codename: Olympic Games.",
                ),
                text(
                    vec![
                        TextSpan::styled("Code", HighlightPurple),
                        TextSpan::plain(" became a "),
                        TextSpan::styled("weapon of war.", HighlightRed),
                    ],
                    "And nothing was ever the same.",
                ),
                Slide::Title {
                    title: "STUXNET".into(),
                    subtitle: "The world's first cyber weapon \u{2022} 2010".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::STAGE_COUNT;

    #[test]
    fn builtin_story_validates() {
        let story = Story::stuxnet();
        story.validate().unwrap();
        assert_eq!(story.slides.len(), 14);
    }

    #[test]
    fn attack_flow_slides_cover_all_stages() {
        let story = Story::stuxnet();
        let stages: Vec<usize> = story
            .slides
            .iter()
            .filter_map(|s| match s {
                Slide::AttackFlow { stage } => Some(stage.index()),
                _ => None,
            })
            .collect();
        assert_eq!(stages, vec![0, 1, 2, 3, 4]);
        assert_eq!(stages.len(), STAGE_COUNT);
    }

    #[test]
    fn json_shape_matches_the_original_dataset() {
        let story = Story::stuxnet();
        let json = serde_json::to_value(&story).unwrap();
        assert_eq!(json["slides"][5]["type"], "attackFlow");
        assert_eq!(json["slides"][1]["type"], "bigNumber");
        assert_eq!(json["slides"][4]["nodes"][0]["id"], "usb");

        let back: Story = serde_json::from_value(json).unwrap();
        assert_eq!(back, story);
    }

    #[test]
    fn validation_rejects_dangling_connection() {
        let story = Story {
            title: "t".into(),
            subtitle: "s".into(),
            slides: vec![Slide::Network {
                title: "n".into(),
                nodes: vec![],
                connections: vec![NetworkConnection {
                    from: "a".into(),
                    to: "b".into(),
                    attack: false,
                }],
            }],
        };
        assert!(story.validate().is_err());
    }
}
