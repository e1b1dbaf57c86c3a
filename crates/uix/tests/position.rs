use anyhow::Result;
use dom::{Document, LayoutBox};
use uix::position::{PositionConfig, position};
use uix::{Error, Placement};

fn page() -> (Document, dom::NodeId, dom::NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let tip = doc.append_element(root, "div");
    doc.set_attr(tip, "id", "tip");
    doc.set_layout_box(tip, LayoutBox::new(0.0, 0.0, 30.0, 10.0));
    let target = doc.append_element(root, "button");
    doc.set_attr(target, "id", "anchor");
    doc.set_layout_box(target, LayoutBox::new(100.0, 200.0, 50.0, 20.0));
    (doc, tip, target)
}

#[test]
fn bottom_left_sits_under_the_targets_left_edge() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut doc, tip, _) = page();
    position(
        &mut doc,
        &PositionConfig::new("#tip", "#anchor", Placement::BottomLeft),
    )?;
    assert_eq!(doc.css(tip, "position"), Some("absolute"));
    assert_eq!(doc.css_px(tip, "left"), Some(100.0));
    // Target bottom edge is 220, gapped by the default 1px offset.
    assert_eq!(doc.css_px(tip, "bottom"), Some(219.0));
    Ok(())
}

#[test]
fn centered_placements_split_the_width_difference() -> Result<()> {
    let (mut doc, tip, _) = page();
    position(
        &mut doc,
        &PositionConfig::new("#tip", "#anchor", Placement::TopCenter),
    )?;
    // Target center x is 125; the 30px tip starts 15px left of it.
    assert_eq!(doc.css_px(tip, "left"), Some(110.0));
    assert_eq!(doc.css_px(tip, "bottom"), Some(199.0));
    Ok(())
}

#[test]
fn right_top_hangs_off_the_targets_right_edge() -> Result<()> {
    let (mut doc, tip, _) = page();
    let mut config = PositionConfig::new("#tip", "#anchor", Placement::RightTop);
    config.offset = 4.0;
    position(&mut doc, &config)?;
    assert_eq!(doc.css_px(tip, "right"), Some(154.0));
    assert_eq!(doc.css_px(tip, "top"), Some(200.0));
    Ok(())
}

#[test]
fn missing_elements_are_a_silent_no_op() -> Result<()> {
    let (mut doc, tip, _) = page();
    position(
        &mut doc,
        &PositionConfig::new("#tip", "#gone", Placement::BottomLeft),
    )?;
    assert_eq!(doc.css(tip, "position"), None);
    Ok(())
}

#[test]
fn placement_codes_parse_strictly() {
    assert_eq!("bl".parse::<Placement>().ok(), Some(Placement::BottomLeft));
    assert!(matches!(
        "xx".parse::<Placement>(),
        Err(Error::UnknownPlacement(_))
    ));
}
