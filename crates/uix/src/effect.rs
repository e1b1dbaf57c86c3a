//! Reveal/hide effect strategies.
//!
//! The visual transition styles the widgets select by configuration:
//! instant show, opacity fade, and height slide. Each is a strategy with
//! a uniform reveal/conceal/toggle capability; unknown names are parse
//! errors, not silent fallbacks.

use crate::Error;
use dom::{Document, NodeId};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// The visual transition applied when changing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Instant visibility change.
    #[default]
    Show,
    /// Opacity transition.
    Fade,
    /// Height transition.
    Slide,
}

impl FromStr for Effect {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        match input {
            "show" => Ok(Self::Show),
            "fade" => Ok(Self::Fade),
            "slide" => Ok(Self::Slide),
            other => Err(Error::UnknownEffect(other.into())),
        }
    }
}

impl Effect {
    /// Make `node` visible using this effect.
    pub fn reveal(self, doc: &mut Document, node: NodeId, speed: Speed) {
        match self {
            Self::Show => doc.show(node),
            Self::Fade => {
                doc.set_css_px(node, "opacity", 0.0);
                doc.show(node);
                doc.animate_css(node, "opacity", 1.0, speed.duration(), dom::Easing::Swing);
            }
            Self::Slide => {
                let full = doc.height(node);
                doc.set_css_px(node, "height", 0.0);
                doc.show(node);
                doc.animate_css(node, "height", full, speed.duration(), dom::Easing::Swing);
            }
        }
    }

    /// Hide `node` using this effect.
    pub fn conceal(self, doc: &mut Document, node: NodeId, speed: Speed) {
        match self {
            Self::Show => doc.hide(node),
            Self::Fade => {
                doc.animate_css_with(
                    node,
                    "opacity",
                    0.0,
                    speed.duration(),
                    dom::Easing::Swing,
                    move |doc| {
                        doc.hide(node);
                        doc.set_css_px(node, "opacity", 1.0);
                    },
                );
            }
            Self::Slide => {
                let full = doc.height(node);
                doc.animate_css_with(
                    node,
                    "height",
                    0.0,
                    speed.duration(),
                    dom::Easing::Swing,
                    move |doc| {
                        doc.hide(node);
                        doc.set_css_px(node, "height", full);
                    },
                );
            }
        }
    }

    /// Flip `node`'s visibility using this effect.
    pub fn toggle(self, doc: &mut Document, node: NodeId, speed: Speed) {
        if doc.is_visible(node) {
            self.conceal(doc, node, speed);
        } else {
            self.reveal(doc, node, speed);
        }
    }
}

/// Transition duration, with the conventional named speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Fast,
    Normal,
    Slow,
    Ms(u64),
}

impl Default for Speed {
    fn default() -> Self {
        Self::Normal
    }
}

impl Speed {
    pub fn duration(self) -> Duration {
        Duration::from_millis(match self {
            Self::Fast => 200,
            Self::Normal => 400,
            Self::Slow => 600,
            Self::Ms(ms) => ms,
        })
    }
}

impl FromStr for Speed {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        match input {
            "fast" => Ok(Self::Fast),
            "normal" => Ok(Self::Normal),
            "slow" => Ok(Self::Slow),
            other => other
                .parse::<u64>()
                .map(Self::Ms)
                .map_err(|_| Error::UnknownEffect(other.into())),
        }
    }
}

impl<'de> Deserialize<'de> for Speed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Millis(u64),
            Name(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Millis(ms) => Ok(Self::Ms(ms)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Interpolation curve for scroll and property animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    Linear,
    #[default]
    Swing,
}

impl From<Easing> for dom::Easing {
    fn from(easing: Easing) -> Self {
        match easing {
            Easing::Linear => Self::Linear,
            Easing::Swing => Self::Swing,
        }
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        match input {
            "linear" => Ok(Self::Linear),
            "swing" => Ok(Self::Swing),
            other => Err(Error::UnknownEasing(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_errors() {
        assert!(matches!(
            "wipe".parse::<Effect>(),
            Err(Error::UnknownEffect(_))
        ));
        assert!(matches!(
            "bounce".parse::<Easing>(),
            Err(Error::UnknownEasing(_))
        ));
        assert_eq!("fade".parse::<Effect>().unwrap(), Effect::Fade);
        assert_eq!("250".parse::<Speed>().unwrap(), Speed::Ms(250));
    }

    #[test]
    fn fade_conceal_hides_at_the_end() {
        let mut doc = Document::new();
        let root = doc.root();
        let node = doc.append_element(root, "div");
        doc.set_css_px(node, "opacity", 1.0);

        Effect::Fade.conceal(&mut doc, node, Speed::Fast);
        assert!(doc.is_visible(node), "hidden before the fade finished");
        doc.advance(Duration::from_millis(250));
        assert!(!doc.is_visible(node));
        // Opacity restored so the next reveal starts from a clean slate.
        assert_eq!(doc.css_px(node, "opacity"), Some(1.0));
    }

    #[test]
    fn slide_reveal_restores_full_height() {
        let mut doc = Document::new();
        let root = doc.root();
        let node = doc.append_element(root, "div");
        doc.set_layout_box(node, dom::LayoutBox::new(0.0, 0.0, 100.0, 64.0));
        doc.hide(node);

        Effect::Slide.reveal(&mut doc, node, Speed::Fast);
        assert!(doc.is_visible(node));
        doc.advance(Duration::from_millis(250));
        assert_eq!(doc.css_px(node, "height"), Some(64.0));
    }
}
