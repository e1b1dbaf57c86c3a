use anyhow::Result;
use dom::{Document, LayoutBox};
use std::time::Duration;
use uix::Error;
use uix::widgets::{
    AutoHideConfig, AutoHideTrigger, HideMode, LazyloadConfig, PlaceholderConfig,
    SmoothScrollConfig, init_autohide, init_lazyload, init_placeholder, init_smoothscroll,
};

#[test]
fn smoothscroll_animates_to_numeric_and_selector_targets() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, "nav");
    doc.set_attr(container, "id", "menu");
    let numeric = doc.append_element(container, "a");
    doc.set_attr(numeric, "data-scroll", "250");
    let anchored = doc.append_element(container, "a");
    doc.set_attr(anchored, "data-scroll", "#intro");
    let bare = doc.append_element(container, "a");

    let section = doc.append_element(root, "div");
    doc.set_attr(section, "id", "intro");
    doc.set_layout_box(section, LayoutBox::new(0.0, 480.0, 800.0, 300.0));

    init_smoothscroll(&mut doc, "#menu", &SmoothScrollConfig::default())?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    doc.dispatch(numeric, "click");
    doc.advance(Duration::from_millis(400));
    assert_eq!(doc.scroll_top(), 250.0);

    doc.dispatch(anchored, "click");
    doc.advance(Duration::from_millis(400));
    assert_eq!(doc.scroll_top(), 480.0);

    // No target scrolls back to the top.
    doc.dispatch(bare, "click");
    doc.advance(Duration::from_millis(400));
    assert_eq!(doc.scroll_top(), 0.0);
    Ok(())
}

#[test]
fn autohide_delay_trigger_hides_after_the_wait() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let panel = doc.append_element(root, "div");
    doc.set_attr(panel, "id", "notice");

    let config = AutoHideConfig {
        trigger: AutoHideTrigger::Delay(100),
        ..AutoHideConfig::default()
    };
    init_autohide(&mut doc, "#notice", &config)?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    // Nothing happens until the signal arrives.
    doc.advance(Duration::from_millis(500));
    assert!(doc.is_visible(panel));

    doc.dispatch(panel, "autohide");
    assert!(doc.is_visible(panel));
    doc.advance(Duration::from_millis(150));
    assert!(!doc.is_visible(panel));
    Ok(())
}

#[test]
fn autohide_dispose_cancels_a_pending_hide() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let panel = doc.append_element(root, "div");
    doc.set_attr(panel, "id", "notice");

    let config = AutoHideConfig {
        trigger: AutoHideTrigger::Delay(100),
        ..AutoHideConfig::default()
    };
    let handle = init_autohide(&mut doc, "#notice", &config)?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    doc.dispatch(panel, "autohide");
    handle.dispose(&mut doc);
    doc.advance(Duration::from_millis(500));
    assert!(doc.is_visible(panel));
    Ok(())
}

#[test]
fn autohide_selector_trigger_hides_on_that_elements_click() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let panel = doc.append_element(root, "div");
    doc.set_attr(panel, "id", "notice");
    let closer = doc.append_element(root, "button");
    doc.set_attr(closer, "id", "closer");

    let config = AutoHideConfig {
        trigger: AutoHideTrigger::Selector("#closer".into()),
        ..AutoHideConfig::default()
    };
    init_autohide(&mut doc, "#notice", &config)?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    // Clicks before the signal are inert.
    doc.dispatch(closer, "click");
    assert!(doc.is_visible(panel));

    doc.dispatch(panel, "autohide");
    doc.dispatch(closer, "click");
    assert!(!doc.is_visible(panel));
    Ok(())
}

#[test]
fn autohide_rejects_a_malformed_trigger_selector() {
    let mut doc = Document::new();
    let config = AutoHideConfig {
        trigger: AutoHideTrigger::Selector("%%".into()),
        ..AutoHideConfig::default()
    };
    assert!(matches!(
        init_autohide(&mut doc, "body", &config),
        Err(Error::Selector(_))
    ));
}

#[test]
fn placeholder_focus_mode_swaps_the_hint_in_and_out() -> Result<()> {
    let mut doc = Document::new();
    doc.set_supports_placeholder(false);
    let root = doc.root();
    let field = doc.append_element(root, "input");
    doc.set_attr(field, "id", "search");
    doc.set_attr(field, "placeholder", "Search…");

    init_placeholder(&mut doc, "#search", &PlaceholderConfig::default())?
        .ok_or_else(|| anyhow::anyhow!("field not found"))?;
    assert_eq!(doc.value(field), "Search…");
    assert_eq!(doc.css(field, "color"), Some("#999"));

    doc.dispatch(field, "focus");
    assert_eq!(doc.value(field), "");
    assert_eq!(doc.css(field, "color"), Some("#000"));

    // Blurring an untouched field brings the hint back.
    doc.dispatch(field, "blur");
    assert_eq!(doc.value(field), "Search…");
    assert_eq!(doc.css(field, "color"), Some("#999"));

    // Typed content survives the blur.
    doc.dispatch(field, "focus");
    doc.set_value(field, "rust");
    doc.dispatch(field, "blur");
    assert_eq!(doc.value(field), "rust");
    Ok(())
}

#[test]
fn placeholder_change_mode_strips_the_hint_on_first_input() -> Result<()> {
    let mut doc = Document::new();
    doc.set_supports_placeholder(false);
    let root = doc.root();
    let field = doc.append_element(root, "input");
    doc.set_attr(field, "id", "q");
    doc.set_attr(field, "placeholder", "Type here");

    let config = PlaceholderConfig {
        hide: HideMode::Change,
    };
    init_placeholder(&mut doc, "#q", &config)?
        .ok_or_else(|| anyhow::anyhow!("field not found"))?;
    assert_eq!(doc.value(field), "Type here");

    // The first keystroke lands after the hint text; the handler strips
    // the hint prefix and keeps the typed remainder.
    doc.set_value(field, "Type herex");
    doc.dispatch(field, "keyup");
    assert_eq!(doc.value(field), "x");
    assert_eq!(doc.css(field, "color"), Some("#000"));

    doc.set_value(field, "xy");
    doc.dispatch(field, "keyup");
    assert_eq!(doc.value(field), "xy");

    // Emptying the field restores the hint.
    doc.set_value(field, "");
    doc.dispatch(field, "keyup");
    assert_eq!(doc.value(field), "Type here");
    assert_eq!(doc.css(field, "color"), Some("#999"));
    Ok(())
}

#[test]
fn placeholder_is_inert_with_native_support() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let field = doc.append_element(root, "input");
    doc.set_attr(field, "id", "q");
    doc.set_attr(field, "placeholder", "Type here");

    assert!(init_placeholder(&mut doc, "#q", &PlaceholderConfig::default())?.is_none());
    assert_eq!(doc.value(field), "");
    Ok(())
}

#[test]
fn lazyload_assigns_sources_as_images_scroll_into_view() -> Result<()> {
    let mut doc = Document::new();
    doc.set_viewport_height(600.0);
    let root = doc.root();

    let near = doc.append_element(root, "img");
    doc.set_attr(near, "class", "lazy");
    doc.set_attr(near, "data-src", "near.png");
    doc.set_layout_box(near, LayoutBox::new(0.0, 100.0, 80.0, 60.0));

    let far = doc.append_element(root, "img");
    doc.set_attr(far, "class", "lazy");
    doc.set_attr(far, "data-src", "far.png");
    doc.set_layout_box(far, LayoutBox::new(0.0, 900.0, 80.0, 60.0));

    init_lazyload(&mut doc, &LazyloadConfig::default())?
        .ok_or_else(|| anyhow::anyhow!("no candidates"))?;

    // Above-the-fold images load without any scrolling.
    assert_eq!(doc.attr(near, "src"), Some("near.png"));
    assert_eq!(doc.attr(far, "src"), None);

    // A loaded image leaves the candidate set for good.
    doc.set_attr(near, "data-src", "changed.png");

    doc.set_scroll_top(400.0);
    assert_eq!(doc.attr(far, "src"), Some("far.png"));
    assert_eq!(doc.attr(near, "src"), Some("near.png"));
    Ok(())
}

#[test]
fn lazyload_without_candidates_is_a_no_op() -> Result<()> {
    let mut doc = Document::new();
    assert!(init_lazyload(&mut doc, &LazyloadConfig::default())?.is_none());
    Ok(())
}
