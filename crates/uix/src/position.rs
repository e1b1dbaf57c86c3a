//! Relative positioning of one element against another.
//!
//! Twelve placement codes name a side and an alignment along it:
//! `t`/`r`/`b`/`l` for the side of the target, then `l`/`c`/`r` or
//! `t`/`c`/`b` for the alignment. The computation is a one-shot snapshot
//! of both boxes at call time; nothing re-positions on resize.

use crate::Error;
use dom::Document;
use serde::Deserialize;
use std::str::FromStr;

/// One of the twelve placement codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Placement {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tc")]
    TopCenter,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "rt")]
    RightTop,
    #[serde(rename = "rc")]
    RightCenter,
    #[serde(rename = "rb")]
    RightBottom,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bc")]
    BottomCenter,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "lb")]
    LeftBottom,
    #[serde(rename = "lc")]
    LeftCenter,
    #[serde(rename = "lt")]
    LeftTop,
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        Ok(match input {
            "tl" => Self::TopLeft,
            "tc" => Self::TopCenter,
            "tr" => Self::TopRight,
            "rt" => Self::RightTop,
            "rc" => Self::RightCenter,
            "rb" => Self::RightBottom,
            "br" => Self::BottomRight,
            "bc" => Self::BottomCenter,
            "bl" => Self::BottomLeft,
            "lb" => Self::LeftBottom,
            "lc" => Self::LeftCenter,
            "lt" => Self::LeftTop,
            other => return Err(Error::UnknownPlacement(other.into())),
        })
    }
}

/// Configuration for [`position`].
#[derive(Debug, Clone)]
pub struct PositionConfig {
    /// Selector of the element to position.
    pub self_selector: String,
    /// Selector of the element to position against.
    pub target_selector: String,
    pub placement: Placement,
    /// Gap between the two boxes, in pixels.
    pub offset: f64,
}

impl PositionConfig {
    pub fn new(self_selector: &str, target_selector: &str, placement: Placement) -> Self {
        Self {
            self_selector: self_selector.into(),
            target_selector: target_selector.into(),
            placement,
            offset: 1.0,
        }
    }
}

/// Apply absolute CSS coordinates so the configured element sits adjacent
/// to its target on the named side, gapped by the offset. Missing
/// elements are a silent no-op; the element is forced to absolute
/// positioning if it is not already.
pub fn position(doc: &mut Document, config: &PositionConfig) -> Result<(), Error> {
    let Some(node) = doc.query_first(&config.self_selector)? else {
        return Ok(());
    };
    let Some(target) = doc.query_first(&config.target_selector)? else {
        return Ok(());
    };

    let target_box = doc.layout_box(target);
    let self_box = doc.layout_box(node);
    let offset = config.offset;
    let (top, left) = (target_box.y, target_box.x);
    let (width, height) = (target_box.width, target_box.height);
    let bottom = target_box.bottom();

    if doc.css(node, "position") != Some("absolute") {
        doc.set_css(node, "position", "absolute");
    }

    match config.placement {
        Placement::TopLeft => {
            doc.set_css_px(node, "left", left);
            doc.set_css_px(node, "bottom", top - offset);
        }
        Placement::TopCenter => {
            doc.set_css_px(node, "left", left + width / 2.0 - self_box.width / 2.0);
            doc.set_css_px(node, "bottom", top - offset);
        }
        Placement::TopRight => {
            doc.set_css_px(node, "right", left + width);
            doc.set_css_px(node, "bottom", top - offset);
        }
        Placement::RightTop => {
            doc.set_css_px(node, "right", left + width + offset);
            doc.set_css_px(node, "top", top);
        }
        Placement::RightCenter => {
            doc.set_css_px(node, "right", left + width + offset);
            doc.set_css_px(node, "top", top + height / 2.0 - self_box.height / 2.0);
        }
        Placement::RightBottom => {
            doc.set_css_px(node, "right", left + width + offset);
            doc.set_css_px(node, "bottom", bottom);
        }
        Placement::BottomRight => {
            doc.set_css_px(node, "right", left + width);
            doc.set_css_px(node, "top", bottom - offset);
        }
        Placement::BottomCenter => {
            doc.set_css_px(node, "left", left + width / 2.0 - self_box.width / 2.0);
            doc.set_css_px(node, "bottom", bottom - offset);
        }
        Placement::BottomLeft => {
            doc.set_css_px(node, "left", left);
            doc.set_css_px(node, "bottom", bottom - offset);
        }
        Placement::LeftBottom => {
            doc.set_css_px(node, "right", left - offset);
            doc.set_css_px(node, "bottom", bottom);
        }
        Placement::LeftCenter => {
            doc.set_css_px(node, "right", left - offset);
            doc.set_css_px(node, "top", top + height / 2.0 - self_box.height / 2.0);
        }
        Placement::LeftTop => {
            doc.set_css_px(node, "right", left - offset);
            doc.set_css_px(node, "top", top);
        }
    }
    Ok(())
}
