//! Message contracts between the editors and the host.
//!
//! The host feeds [`HostToEditor`] lines in and receives [`EditorToHost`]
//! lines out, one JSON object per line. Both use the
//! `#[serde(tag = "type", content = "data")]` layout.

use serde::{Deserialize, Serialize};

use easel_core::{ColorStop, ControlPoint, CursorHint, PointerEvent};

/// Which widget a message concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Curve,
    Gradient,
}

/// Messages from the editors to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorToHost {
    /// Curve output changed through interaction.
    CurveChanged {
        /// Fixed-length sampled curve.
        values: Vec<f32>,
    },

    /// Gradient output changed through interaction.
    GradientChanged {
        /// Ordered stop list.
        stops: Vec<ColorStop>,
    },

    /// Cursor the host should show for a widget.
    Cursor { widget: Widget, cursor: CursorHint },

    /// A script line could not be applied.
    Error {
        /// Error description.
        message: String,
    },
}

/// Messages from the host to the editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostToEditor {
    /// Surface-wide pointer event.
    Pointer { event: PointerEvent },

    /// Replace the curve's control points (preset application, silent).
    SetPoints { points: Vec<ControlPoint> },

    /// Replace the gradient's stops (preset application, silent).
    SetStops { stops: Vec<ColorStop> },

    /// Rebuild the curve from a previously exported array (silent).
    FromSampledArray { values: Vec<f32> },

    /// Recolour the gradient stop last pressed.
    SetSelectedColor { color: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{HexColor, PointerButton};

    #[test]
    fn test_host_message_layout() {
        let line = r#"{"type":"Pointer","data":{"event":{"kind":"ButtonDown","button":"Primary","x":10.0,"y":20.0}}}"#;
        let msg: HostToEditor = serde_json::from_str(line).unwrap();
        assert_eq!(
            msg,
            HostToEditor::Pointer {
                event: PointerEvent::ButtonDown {
                    button: PointerButton::Primary,
                    x: 10.0,
                    y: 20.0,
                },
            }
        );
    }

    #[test]
    fn test_gradient_changed_layout() {
        let msg = EditorToHost::GradientChanged {
            stops: vec![ColorStop::new(0.0, HexColor::BLACK)],
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r##"{"type":"GradientChanged","data":{"stops":[{"pos":0.0,"color":"#000000"}]}}"##
        );
    }
}
