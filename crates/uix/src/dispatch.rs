//! Declarative widget initialization.
//!
//! Markup contract: any element carrying `data-uix="<type>"` is
//! auto-initialized once the page load signal fires, with the element
//! itself as the widget container. Optional JSON in `data-params` is
//! merged over the widget's defaults. Recognized types: `tab`,
//! `dropdown`, `select`, `smoothscroll`, `placeholder`, and `dialog`
//! (which binds a click opening the dialog stub). Unrecognized types
//! are ignored; malformed parameters are logged and skip the element.

use crate::widgets::{
    DialogConfig, DropdownConfig, LazyloadConfig, PlaceholderConfig, SelectConfig,
    SmoothScrollConfig, TabConfig, init_dropdown_at, init_lazyload, init_placeholder_at,
    init_select_at, init_smoothscroll_at, init_tab_at, open_dialog,
};
use crate::{Error, LoadQueue, UixConfig};
use dom::{Document, NodeId};
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Wire up the load queue and schedule the widget scan behind the load
/// signal. Returns the queue so hosts can defer their own tasks too.
pub fn install(doc: &mut Document) -> LoadQueue {
    install_with(doc, &UixConfig::default())
}

/// [`install`] with explicit runtime configuration.
pub fn install_with(doc: &mut Document, config: &UixConfig) -> LoadQueue {
    config.apply(doc);
    let queue = LoadQueue::install(doc);
    let lazyload = LazyloadConfig {
        throttle_ms: config.lazyload_throttle_ms,
        ..LazyloadConfig::default()
    };
    queue.push(doc, move |doc| scan(doc, &lazyload));
    queue
}

/// Scan the document for marked elements and initialize each; then
/// unconditionally start lazyload.
fn scan(doc: &mut Document, lazyload: &LazyloadConfig) {
    let marked = doc.query("[data-uix]").unwrap_or_default();
    for node in marked {
        let kind = doc.attr(node, "data-uix").unwrap_or("").to_string();
        let params = doc.data(node, "params").map(str::to_string);
        if let Err(error) = dispatch_one(doc, node, &kind, params.as_deref()) {
            warn!("skipping {kind:?} widget: {error}");
        }
    }
    if let Err(error) = init_lazyload(doc, lazyload) {
        warn!("lazyload failed to start: {error}");
    }
}

fn dispatch_one(
    doc: &mut Document,
    node: NodeId,
    kind: &str,
    params: Option<&str>,
) -> Result<(), Error> {
    match kind {
        "tab" => {
            let config: TabConfig = parse_params(params)?;
            init_tab_at(doc, node, &config)?;
        }
        "dropdown" => {
            let config: DropdownConfig = parse_params(params)?;
            init_dropdown_at(doc, node, &config)?;
        }
        "select" => {
            let config: SelectConfig = parse_params(params)?;
            init_select_at(doc, node, &config)?;
        }
        "smoothscroll" => {
            let config: SmoothScrollConfig = parse_params(params)?;
            init_smoothscroll_at(doc, node, &config)?;
        }
        "placeholder" => {
            let config: PlaceholderConfig = parse_params(params)?;
            init_placeholder_at(doc, node, &config)?;
        }
        "dialog" => {
            let config: DialogConfig = parse_params(params)?;
            doc.add_listener(node, "click", move |doc, _| open_dialog(doc, &config));
        }
        other => debug!("ignoring unrecognized widget type {other:?}"),
    }
    Ok(())
}

fn parse_params<T>(params: Option<&str>) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    match params {
        None => Ok(T::default()),
        Some(raw) => Ok(serde_json::from_str(raw)?),
    }
}
