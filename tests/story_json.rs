use stageflow::{DisplayMode, Slide, StageIndex, Story, render_svg::render_slide};

#[test]
fn story_file_loads_validates_and_renders() {
    let s = include_str!("data/attack_story.json");
    let story: Story = serde_json::from_str(s).unwrap();
    story.validate().unwrap();
    assert_eq!(story.slides.len(), 4);

    match &story.slides[1] {
        Slide::AttackFlow { stage } => assert_eq!(*stage, StageIndex::new(3)),
        other => panic!("expected attackFlow, got {}", other.kind()),
    }

    for slide in &story.slides {
        let svg = render_slide(slide, DisplayMode::Wide, 12);
        assert!(svg.contains("</svg>"));
    }
}

#[test]
fn stage_indices_clamp_on_deserialization_bounds() {
    // A hand-edited story with an out-of-range stage must not be able to
    // crash the renderers; the index clamps at the type boundary.
    let raw = r#"{ "type": "attackFlow", "stage": 9 }"#;
    let slide: Slide = serde_json::from_str(raw).unwrap();
    match slide {
        Slide::AttackFlow { stage } => assert_eq!(stage.index(), 4),
        _ => unreachable!(),
    }
}

#[test]
fn builtin_story_round_trips_through_json() {
    let story = Story::stuxnet();
    let json = serde_json::to_string(&story).unwrap();
    let back: Story = serde_json::from_str(&json).unwrap();
    assert_eq!(back, story);
}
