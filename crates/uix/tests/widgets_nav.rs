use anyhow::Result;
use dom::{Document, LayoutBox, NodeId};
use uix::widgets::{
    DropdownConfig, SelectConfig, TabConfig, init_dropdown, init_select, init_tab,
};

fn tab_page(doc: &mut Document) -> (Vec<NodeId>, Vec<NodeId>) {
    let root = doc.root();
    let container = doc.append_element(root, "div");
    doc.set_attr(container, "class", "tabs");
    let nav = doc.append_element(container, "ul");
    doc.set_attr(nav, "class", "tab__nav");

    let mut toggles = Vec::new();
    let mut sheets = Vec::new();
    for index in 0..3 {
        toggles.push(doc.append_element(nav, "a"));
        let sheet = doc.append_element(container, "div");
        doc.set_attr(sheet, "class", "tab__sheet");
        if index > 0 {
            doc.hide(sheet);
        }
        sheets.push(sheet);
    }
    (toggles, sheets)
}

#[test]
fn tab_activation_is_exclusive() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = Document::new();
    let (toggles, sheets) = tab_page(&mut doc);
    let handle = init_tab(&mut doc, ".tabs", &TabConfig::default())?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    doc.dispatch(toggles[1], "click");
    assert!(doc.has_class(toggles[1], "current"));
    assert!(!doc.has_class(toggles[0], "current"));
    assert!(doc.is_visible(sheets[1]));
    assert!(!doc.is_visible(sheets[0]));
    assert!(!doc.is_visible(sheets[2]));

    // Switching again moves both the class and the visible sheet.
    doc.dispatch(toggles[2], "click");
    assert!(!doc.has_class(toggles[1], "current"));
    assert!(doc.has_class(toggles[2], "current"));
    assert!(doc.is_visible(sheets[2]));
    assert!(!doc.is_visible(sheets[1]));

    handle.dispose(&mut doc);
    doc.dispatch(toggles[0], "click");
    assert!(!doc.has_class(toggles[0], "current"));
    Ok(())
}

#[test]
fn tab_missing_container_is_a_no_op() -> Result<()> {
    let mut doc = Document::new();
    assert!(init_tab(&mut doc, ".absent", &TabConfig::default())?.is_none());
    assert!(init_tab(&mut doc, "%%", &TabConfig::default()).is_err());
    Ok(())
}

#[test]
fn dropdown_positions_then_toggles_its_panel() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, "div");
    doc.set_attr(container, "class", "dropdown");
    doc.set_layout_box(container, LayoutBox::new(0.0, 0.0, 120.0, 30.0));
    let trigger = doc.append_element(container, "a");
    doc.set_attr(trigger, "class", "dropdown__trigger");
    let content = doc.append_element(container, "div");
    doc.set_attr(content, "class", "dropdown__content");
    doc.hide(content);

    init_dropdown(&mut doc, ".dropdown", &DropdownConfig::default())?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    // Pre-positioned under the container at bind time.
    assert_eq!(doc.css_px(content, "width"), Some(118.0));
    assert_eq!(doc.css_px(content, "top"), Some(35.0));

    doc.dispatch(trigger, "click");
    assert!(doc.is_visible(content));
    doc.dispatch(trigger, "click");
    assert!(!doc.is_visible(content));
    Ok(())
}

#[test]
fn select_seeds_its_value_and_copies_the_picked_option() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, "div");
    doc.set_attr(container, "class", "select");
    doc.set_layout_box(container, LayoutBox::new(0.0, 0.0, 200.0, 40.0));

    let toggle = doc.append_element(container, "a");
    doc.set_attr(toggle, "class", "select__trigger");
    let value_node = doc.append_element(toggle, "p");
    doc.set_attr(value_node, "data-placeholder", "Pick one");

    let content = doc.append_element(container, "ul");
    doc.set_attr(content, "class", "select__content");
    doc.hide(content);
    let option = doc.append_element(content, "a");
    doc.set_text(option, "Second choice");
    doc.set_attr(option, "data-val", "2");

    init_select(&mut doc, ".select", &SelectConfig::default())?
        .ok_or_else(|| anyhow::anyhow!("container not found"))?;

    // Empty value node starts from its placeholder text.
    assert_eq!(doc.text(value_node), "Pick one");
    assert_eq!(doc.css_px(content, "top"), Some(40.0));

    doc.dispatch(toggle, "click");
    assert!(doc.is_visible(content));
    assert!(doc.has_class(toggle, "active"));

    doc.dispatch(option, "click");
    assert_eq!(doc.text(value_node), "Second choice");
    assert_eq!(doc.attr(value_node, "data-val"), Some("2"));
    assert!(!doc.is_visible(content));
    assert!(!doc.has_class(toggle, "active"));
    Ok(())
}
