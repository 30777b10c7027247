//! Corner anchors keeping a floating window positioned relative to one
//! corner of its parent area across parent resizes.
//!
//! Each anchored variant stores an offset from its corner, not an absolute
//! position. That is the invariant that lets an anchored window stay put
//! when the parent resizes: the offset is constant, the absolute rect is
//! recomputed from it.
use serde::{Deserialize, Serialize};

use crate::models::{Size, WindowRect};
use crate::{CoreError, Result};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WindowAnchor {
    #[default]
    NoAnchor,
    TopLeftConst {
        left: i32,
        top: i32,
    },
    TopRightConst {
        right: i32,
        top: i32,
    },
    BottomLeftConst {
        left: i32,
        bottom: i32,
    },
    BottomRightConst {
        right: i32,
        bottom: i32,
    },
}

impl WindowAnchor {
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        !matches!(self, Self::NoAnchor)
    }

    /// Compute the absolute rect of a window of size `sub` so that its
    /// anchored corner keeps the stored offset inside `main`. Returns `None`
    /// for `NoAnchor`, in which case the caller must leave the rect alone.
    #[must_use]
    pub fn apply_anchor(&self, main: Size, sub: Size) -> Option<WindowRect> {
        match *self {
            Self::NoAnchor => None,
            Self::TopLeftConst { left, top } => {
                Some(WindowRect::new(left, top, sub.width, sub.height))
            }
            Self::TopRightConst { right, top } => Some(WindowRect::new(
                main.width - right - sub.width,
                top,
                sub.width,
                sub.height,
            )),
            Self::BottomLeftConst { left, bottom } => Some(WindowRect::new(
                left,
                main.height - bottom - sub.height,
                sub.width,
                sub.height,
            )),
            Self::BottomRightConst { right, bottom } => Some(WindowRect::new(
                main.width - right - sub.width,
                main.height - bottom - sub.height,
                sub.width,
                sub.height,
            )),
        }
    }

    /// Re-derive the stored offset from the window's new rect, keeping the
    /// same corner. Called after a manual move/resize so that future parent
    /// resizes honor the new position.
    #[must_use]
    pub fn update_for_window_rect(&self, main: Size, rect: WindowRect) -> Self {
        match self {
            Self::NoAnchor => Self::NoAnchor,
            Self::TopLeftConst { .. } => Self::TopLeftConst {
                left: rect.left(),
                top: rect.top(),
            },
            Self::TopRightConst { .. } => Self::TopRightConst {
                right: main.width - rect.right(),
                top: rect.top(),
            },
            Self::BottomLeftConst { .. } => Self::BottomLeftConst {
                left: rect.left(),
                bottom: main.height - rect.bottom(),
            },
            Self::BottomRightConst { .. } => Self::BottomRightConst {
                right: main.width - rect.right(),
                bottom: main.height - rect.bottom(),
            },
        }
    }

    /// Encode as a tagged record, e.g. `{"type": "top-left-const", ...}`.
    pub fn to_record(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a tagged record. Fails fast with the offending discriminator
    /// named in the error.
    pub fn from_record(record: &serde_json::Value) -> Result<Self> {
        let tag = record
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| CoreError::InvalidAnchor("<missing>".to_string()))?;
        match tag {
            "no-anchor" | "top-left-const" | "top-right-const" | "bottom-left-const"
            | "bottom-right-const" => Ok(serde_json::from_value(record.clone())?),
            other => Err(CoreError::InvalidAnchor(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MAIN: Size = Size::new(800, 600);

    #[test]
    fn no_anchor_applies_to_nothing() {
        assert_eq!(WindowAnchor::NoAnchor.apply_anchor(MAIN, Size::new(100, 100)), None);
    }

    #[test]
    fn anchors_survive_parent_resize() {
        let rect = WindowRect::new(650, 500, 100, 50);
        let anchor = WindowAnchor::BottomRightConst { right: 0, bottom: 0 }
            .update_for_window_rect(MAIN, rect);
        assert_eq!(anchor, WindowAnchor::BottomRightConst { right: 50, bottom: 50 });

        // grow the parent: the window keeps its distance to the corner
        let grown = Size::new(1000, 900);
        let moved = anchor.apply_anchor(grown, rect.size()).unwrap();
        assert_eq!(moved, WindowRect::new(850, 800, 100, 50));
    }

    #[test]
    fn apply_then_update_round_trips_for_every_corner() {
        let rect = WindowRect::new(120, 80, 200, 150);
        let anchors = [
            WindowAnchor::TopLeftConst { left: 0, top: 0 },
            WindowAnchor::TopRightConst { right: 0, top: 0 },
            WindowAnchor::BottomLeftConst { left: 0, bottom: 0 },
            WindowAnchor::BottomRightConst { right: 0, bottom: 0 },
        ];
        for corner in anchors {
            let anchor = corner.update_for_window_rect(MAIN, rect);
            let applied = anchor.apply_anchor(MAIN, rect.size()).unwrap();
            assert_eq!(applied, rect, "{anchor:?}");
            // and the offset is stable under re-derivation
            assert_eq!(anchor.update_for_window_rect(MAIN, applied), anchor);
        }
    }

    #[test]
    fn record_codec_round_trips() {
        let anchor = WindowAnchor::TopRightConst { right: 12, top: 34 };
        let record = anchor.to_record().unwrap();
        assert_eq!(record["type"], "top-right-const");
        assert_eq!(WindowAnchor::from_record(&record).unwrap(), anchor);

        let none = WindowAnchor::NoAnchor.to_record().unwrap();
        assert_eq!(WindowAnchor::from_record(&none).unwrap(), WindowAnchor::NoAnchor);
    }

    #[test]
    fn decode_names_the_bad_discriminator() {
        let err = WindowAnchor::from_record(&json!({"type": "center-const"})).unwrap_err();
        assert!(err.to_string().contains("center-const"), "{err}");
    }
}
