//! Custom select widget.

use super::{WidgetHandle, resolve};
use crate::Error;
use dom::{Document, NodeId};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    #[serde(rename = "toggle")]
    pub toggle_selector: String,
    #[serde(rename = "content")]
    pub content_selector: String,
    pub trigger: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".select__trigger".into(),
            content_selector: ".select__content".into(),
            trigger: "click".into(),
        }
    }
}

pub fn init_select(
    doc: &mut Document,
    container: &str,
    config: &SelectConfig,
) -> Result<Option<WidgetHandle>, Error> {
    match resolve(doc, container)? {
        Some(node) => init_select_at(doc, node, config),
        None => Ok(None),
    }
}

/// The toggle shows/hides the option panel and carries an `active` class
/// while open. Picking an option (a delegated `a` click inside the
/// panel) copies its label and `data-val` into the value node — the
/// toggle's first `p` child — then closes the panel. An initially empty
/// value node is seeded from its `data-placeholder`.
pub fn init_select_at(
    doc: &mut Document,
    container: NodeId,
    config: &SelectConfig,
) -> Result<Option<WidgetHandle>, Error> {
    let Some(toggle) = doc.query_within(container, &config.toggle_selector)?.into_iter().next()
    else {
        return Ok(None);
    };
    let Some(content) = doc
        .query_within(container, &config.content_selector)?
        .into_iter()
        .next()
    else {
        return Ok(None);
    };
    let Some(value_node) = doc.child_elements_by_tag(toggle, "p").into_iter().next() else {
        return Ok(None);
    };

    if doc.text(value_node).is_empty() {
        let placeholder = doc.data(value_node, "placeholder").unwrap_or("").to_string();
        doc.set_text(value_node, &placeholder);
    }
    doc.set_css_px(content, "width", doc.width(container) - 2.0);
    doc.set_css_px(content, "top", doc.height(container));

    let handle = WidgetHandle::new();
    let id = doc.add_listener(toggle, &config.trigger, move |doc, _| {
        doc.toggle(content);
        doc.toggle_class(toggle, "active");
    });
    handle.track_listener(id);

    let options = selectors::parse_selector_list("a")?;
    let id = doc.add_delegated_listener(content, &options, "click", move |doc, ctx| {
        let label = doc.text(ctx.current);
        let value = doc.data(ctx.current, "val").unwrap_or("").to_string();
        doc.set_text(value_node, &label);
        doc.set_attr(value_node, "data-val", &value);
        doc.hide(content);
        doc.remove_class(toggle, "active");
    });
    handle.track_listener(id);

    Ok(Some(handle))
}
