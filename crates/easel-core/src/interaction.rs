//! Pointer-driven editing shared by curves and gradients.
//!
//! [`Editor`] is a small state machine over any [`EditTarget`]:
//!
//! ```text
//!   Idle ──primary down on element──────────────▶ Dragging
//!   Idle ──primary down on empty space (insert)─▶ Dragging
//!   Dragging ──move──▶ Dragging   (move + notify)
//!   Dragging ──release anywhere──▶ Idle
//!   Idle ──secondary down on element──▶ Idle      (delete + notify)
//!   Idle ──move──▶ Idle           (hover only, never notifies)
//! ```
//!
//! Every successful mutation re-samples the model and invokes the change
//! listener exactly once, synchronously. Programmatic setters replace the
//! model without notifying.

use glam::Vec2;

use crate::color::HexColor;
use crate::config::EditorConfig;
use crate::curve::{ControlPoint, CurveModel};
use crate::error::EaselError;
use crate::gradient::{ColorStop, GradientModel};
use crate::input::{CursorHint, PointerButton, Viewport};
use crate::sequence::ElementId;

/// Hit radius for curve points, Euclidean in normalized `(x, y)`.
pub const CURVE_HIT_RADIUS: f32 = 0.04;
/// Hit radius for gradient stops, along the normalized x axis only.
pub const GRADIENT_HIT_RADIUS: f32 = 0.03;

// ── Model seam ───────────────────────────────────────────────────

/// What the interaction engine needs from an editable model.
pub trait EditTarget {
    /// Snapshot handed to the change listener.
    type Output;

    /// Hit radius in normalized units.
    const HIT_RADIUS: f32;

    fn element_count(&self) -> usize;

    /// Stable id of the element at `index`.
    fn element_id(&self, index: usize) -> Option<ElementId>;

    /// Current index of the element with `id`.
    fn index_of(&self, id: ElementId) -> Option<usize>;

    /// Distance from `at` to the element at `index` under this model's
    /// metric, or `None` when `index` is out of range.
    fn hit_distance(&self, index: usize, at: Vec2) -> Option<f32>;

    /// Insert a new element at a normalized position and return its index.
    fn insert_at(&mut self, at: Vec2) -> usize;

    /// Move the element at `index` towards `at`, returning its new index.
    fn move_to(&mut self, index: usize, at: Vec2) -> Option<usize>;

    /// Delete the element at `index` if the model allows it.
    fn delete(&mut self, index: usize) -> bool;

    /// Current exported output.
    fn output(&self) -> Self::Output;
}

/// Curves export a fixed-length sample array; the length is carried by the
/// editor configuration, so the model seam samples with that count.
pub struct SampledCurve {
    pub curve: CurveModel,
    pub samples: usize,
}

impl EditTarget for SampledCurve {
    type Output = Vec<f32>;

    const HIT_RADIUS: f32 = CURVE_HIT_RADIUS;

    fn element_count(&self) -> usize {
        self.curve.len()
    }

    fn element_id(&self, index: usize) -> Option<ElementId> {
        self.curve.element_id(index)
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.curve.index_of(id)
    }

    fn hit_distance(&self, index: usize, at: Vec2) -> Option<f32> {
        let p = self.curve.point(index)?;
        Some(Vec2::new(p.x, p.y).distance(at))
    }

    fn insert_at(&mut self, at: Vec2) -> usize {
        self.curve.insert_point(at.x, at.y)
    }

    fn move_to(&mut self, index: usize, at: Vec2) -> Option<usize> {
        self.curve.move_point(index, at.x, at.y)
    }

    fn delete(&mut self, index: usize) -> bool {
        self.curve.delete_point(index)
    }

    fn output(&self) -> Vec<f32> {
        self.curve.sampled_values(self.samples)
    }
}

impl EditTarget for GradientModel {
    type Output = Vec<ColorStop>;

    const HIT_RADIUS: f32 = GRADIENT_HIT_RADIUS;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn element_id(&self, index: usize) -> Option<ElementId> {
        GradientModel::element_id(self, index)
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        GradientModel::index_of(self, id)
    }

    fn hit_distance(&self, index: usize, at: Vec2) -> Option<f32> {
        Some((self.stop(index)?.pos - at.x).abs())
    }

    fn insert_at(&mut self, at: Vec2) -> usize {
        self.insert_stop(at.x)
    }

    fn move_to(&mut self, index: usize, at: Vec2) -> Option<usize> {
        self.move_stop(index, at.x)
    }

    fn delete(&mut self, index: usize) -> bool {
        self.delete_stop(index)
    }

    fn output(&self) -> Vec<ColorStop> {
        self.stops()
    }
}

/// Index of the element nearest to `at` within the model's hit radius.
pub fn hit_test<M: EditTarget>(model: &M, at: Vec2) -> Option<usize> {
    (0..model.element_count())
        .filter_map(|i| model.hit_distance(i, at).map(|d| (i, d)))
        .filter(|&(_, d)| d <= M::HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

// ── Collaborators ────────────────────────────────────────────────

/// Receives the exported output after every mutation.
///
/// Runs inline with pointer handling (including every move of a drag), so
/// implementations must not block.
pub trait ChangeListener<O> {
    fn on_change(&mut self, output: &O);
}

impl<O, F: FnMut(&O)> ChangeListener<O> for F {
    fn on_change(&mut self, output: &O) {
        self(output)
    }
}

/// Transient interaction state visible to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hover: Option<usize>,
    pub dragging: Option<usize>,
    pub selected: Option<usize>,
    pub cursor: CursorHint,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}

/// Draws a widget on demand.
pub trait RenderSurface<M> {
    fn redraw(&mut self, model: &M, state: &InteractionState, view: &WidgetView);
}

/// Cosmetic and geometric context for drawing a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetView {
    pub viewport: Viewport,
    pub accent: HexColor,
}

/// Surface that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl<M> RenderSurface<M> for NullSurface {
    fn redraw(&mut self, _model: &M, _state: &InteractionState, _view: &WidgetView) {}
}

// ── Editor ───────────────────────────────────────────────────────

/// One interactive widget: a model plus its interaction state.
pub struct Editor<M: EditTarget> {
    model: M,
    state: InteractionState,
    view: WidgetView,
    listener: Option<Box<dyn ChangeListener<M::Output>>>,
    surface: Box<dyn RenderSurface<M>>,
}

pub type CurveEditor = Editor<SampledCurve>;
pub type GradientEditor = Editor<GradientModel>;

impl<M: EditTarget> Editor<M> {
    fn with_model(model: M, config: &EditorConfig) -> Self {
        Self {
            model,
            state: InteractionState::default(),
            view: WidgetView {
                viewport: config.viewport(),
                accent: config.accent,
            },
            listener: None,
            surface: Box::new(NullSurface),
        }
    }

    /// Register the change listener, replacing any previous one.
    pub fn on_change(mut self, listener: impl ChangeListener<M::Output> + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Attach a render surface and draw once.
    pub fn with_surface(mut self, surface: impl RenderSurface<M> + 'static) -> Self {
        self.surface = Box::new(surface);
        self.redraw();
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.view.viewport
    }

    pub fn output(&self) -> M::Output {
        self.model.output()
    }

    pub fn redraw(&mut self) {
        self.surface.redraw(&self.model, &self.state, &self.view);
    }

    /// Recompute the output, notify once, and redraw.
    fn commit(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let output = self.model.output();
            listener.on_change(&output);
        }
        self.redraw();
    }

    /// Apply a model edit, keeping `hover`, `dragging` and `selected` on the
    /// same elements across the re-sort. Indices of removed elements clear.
    fn edit<R>(&mut self, apply: impl FnOnce(&mut M) -> R) -> R {
        let tracked = [self.state.hover, self.state.dragging, self.state.selected]
            .map(|index| index.and_then(|i| self.model.element_id(i)));
        let result = apply(&mut self.model);
        let [hover, dragging, selected] =
            tracked.map(|id| id.and_then(|id| self.model.index_of(id)));
        self.state.hover = hover;
        self.state.dragging = dragging;
        self.state.selected = selected;
        self.refresh_cursor();
        result
    }

    fn refresh_cursor(&mut self) {
        self.state.cursor = if self.state.dragging.is_some() {
            CursorHint::Grabbing
        } else if self.state.hover.is_some() {
            CursorHint::Grab
        } else {
            CursorHint::Crosshair
        };
    }

    fn reset_transient(&mut self) {
        self.state = InteractionState::default();
    }

    // ── Pointer handling (surface pixel coordinates) ─────────────

    /// Handle a button press over the widget.
    pub fn pointer_down(&mut self, button: PointerButton, surface_pos: Vec2) {
        let at = self.view.viewport.normalize(surface_pos);
        match button {
            PointerButton::Primary => self.press_primary(at),
            PointerButton::Secondary => self.press_secondary(at),
            PointerButton::Middle => {}
        }
    }

    /// Handle pointer movement. While dragging this moves the dragged
    /// element; otherwise it only updates the hover highlight.
    pub fn pointer_move(&mut self, surface_pos: Vec2) {
        let at = self.view.viewport.normalize(surface_pos);
        match self.state.dragging {
            Some(index) => self.drag_to(index, at),
            None => self.hover_at(Some(at)),
        }
    }

    /// Pointer left the widget without a drag in progress.
    pub fn pointer_leave(&mut self) {
        if self.state.dragging.is_none() {
            self.hover_at(None);
        }
    }

    /// A button was released anywhere on the input surface.
    pub fn pointer_release(&mut self) {
        if self.state.dragging.take().is_some() {
            tracing::trace!("drag ended");
            self.refresh_cursor();
            self.redraw();
        }
    }

    fn press_primary(&mut self, at: Vec2) {
        if self.state.dragging.is_some() {
            return;
        }
        let index = match hit_test(&self.model, at) {
            Some(index) => index,
            None => {
                let index = self.edit(|model| model.insert_at(at));
                self.commit();
                index
            }
        };
        tracing::trace!(index, "drag started");
        self.state.dragging = Some(index);
        self.state.selected = Some(index);
        self.state.hover = Some(index);
        self.refresh_cursor();
        self.redraw();
    }

    fn press_secondary(&mut self, at: Vec2) {
        if self.state.dragging.is_some() {
            return;
        }
        let Some(index) = hit_test(&self.model, at) else {
            return;
        };
        self.delete(index);
    }

    fn drag_to(&mut self, index: usize, at: Vec2) {
        if self.edit(|model| model.move_to(index, at)).is_some() {
            self.state.hover = self.state.dragging;
            self.commit();
        } else {
            tracing::warn!(index, "dragged element vanished; ending drag");
            self.state.dragging = None;
            self.refresh_cursor();
        }
    }

    fn hover_at(&mut self, at: Option<Vec2>) {
        let hover = at.and_then(|at| hit_test(&self.model, at));
        if hover != self.state.hover {
            self.state.hover = hover;
            self.refresh_cursor();
            self.redraw();
        }
    }

    // ── Direct edits ─────────────────────────────────────────────

    /// Delete the element at `index`. Endpoints and minimum-count
    /// violations are ignored without notifying.
    pub fn delete(&mut self, index: usize) -> bool {
        if !self.edit(|model| model.delete(index)) {
            return false;
        }
        self.commit();
        true
    }
}

impl Editor<SampledCurve> {
    /// Curve editor from configuration. Starts at the configured default
    /// points.
    pub fn curve(config: &EditorConfig) -> Self {
        let model = SampledCurve {
            curve: CurveModel::new(config.default_points.iter().copied()),
            samples: config.samples,
        };
        Self::with_model(model, config)
    }

    pub fn points(&self) -> Vec<ControlPoint> {
        self.model.curve.points()
    }

    pub fn sampled_values(&self) -> Vec<f32> {
        self.model.output()
    }

    pub fn insert_point(&mut self, x: f32, y: f32) -> usize {
        let index = self.edit(|model| model.curve.insert_point(x, y));
        self.commit();
        index
    }

    pub fn move_point(&mut self, index: usize, x: f32, y: f32) -> Option<usize> {
        let moved = self.edit(|model| model.curve.move_point(index, x, y))?;
        self.commit();
        Some(moved)
    }

    pub fn delete_point(&mut self, index: usize) -> bool {
        self.delete(index)
    }

    /// Replace the points without notifying the listener.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = ControlPoint>) {
        self.model.curve.set_points(points);
        self.reset_transient();
        self.redraw();
    }

    /// Rebuild points from a sampled array without notifying the listener.
    pub fn from_sampled_array(&mut self, values: &[f32]) -> Result<(), EaselError> {
        self.model.curve.from_sampled_array(values)?;
        self.reset_transient();
        self.redraw();
        Ok(())
    }
}

impl Editor<GradientModel> {
    /// Gradient editor from configuration. Starts at the configured default
    /// stops.
    pub fn gradient(config: &EditorConfig) -> Self {
        let model = GradientModel::new(config.default_stops.iter().copied());
        Self::with_model(model, config)
    }

    pub fn stops(&self) -> Vec<ColorStop> {
        self.model.stops()
    }

    pub fn insert_stop(&mut self, pos: f32) -> usize {
        let index = self.edit(|model| model.insert_stop(pos));
        self.commit();
        index
    }

    pub fn move_stop(&mut self, index: usize, pos: f32) -> Option<usize> {
        let moved = self.edit(|model| model.move_stop(index, pos))?;
        self.commit();
        Some(moved)
    }

    pub fn delete_stop(&mut self, index: usize) -> bool {
        self.delete(index)
    }

    pub fn set_stop_color(&mut self, index: usize, color: HexColor) -> Result<(), EaselError> {
        self.model.set_stop_color(index, color)?;
        self.commit();
        Ok(())
    }

    /// Recolour the stop last pressed by the pointer.
    ///
    /// Returns `Ok(false)` when no stop is selected.
    pub fn set_selected_color(&mut self, color: HexColor) -> Result<bool, EaselError> {
        let Some(index) = self.state.selected else {
            return Ok(false);
        };
        self.set_stop_color(index, color)?;
        Ok(true)
    }

    /// Replace the stops without notifying the listener.
    pub fn set_stops(&mut self, stops: impl IntoIterator<Item = ColorStop>) {
        self.model.set_stops(stops);
        self.reset_transient();
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log<T> = Rc<RefCell<Vec<T>>>;

    fn curve_editor() -> (CurveEditor, Log<Vec<f32>>) {
        let log: Log<Vec<f32>> = Rc::default();
        let sink = Rc::clone(&log);
        let editor = CurveEditor::curve(&EditorConfig::curve())
            .on_change(move |values: &Vec<f32>| sink.borrow_mut().push(values.clone()));
        (editor, log)
    }

    fn gradient_editor() -> (GradientEditor, Log<Vec<ColorStop>>) {
        let log: Log<Vec<ColorStop>> = Rc::default();
        let sink = Rc::clone(&log);
        let editor = GradientEditor::gradient(&EditorConfig::gradient())
            .on_change(move |stops: &Vec<ColorStop>| sink.borrow_mut().push(stops.clone()));
        (editor, log)
    }

    /// Surface position of a normalized point in the editor's viewport.
    fn px<M: EditTarget>(editor: &Editor<M>, x: f32, y: f32) -> Vec2 {
        editor.viewport().denormalize(Vec2::new(x, y))
    }

    #[test]
    fn test_hit_test_picks_nearest_within_radius() {
        let model = SampledCurve {
            curve: CurveModel::new([
                ControlPoint::new(0.0, 0.0),
                ControlPoint::new(0.5, 0.5),
                ControlPoint::new(0.53, 0.5),
                ControlPoint::new(1.0, 1.0),
            ]),
            samples: 8,
        };
        assert_eq!(hit_test(&model, Vec2::new(0.52, 0.5)), Some(2));
        assert_eq!(hit_test(&model, Vec2::new(0.5, 0.52)), Some(1));
        assert_eq!(hit_test(&model, Vec2::new(0.5, 0.6)), None);
    }

    #[test]
    fn test_gradient_hit_test_ignores_y() {
        let model = GradientModel::default();
        assert_eq!(hit_test(&model, Vec2::new(0.02, 0.9)), Some(0));
        assert_eq!(hit_test(&model, Vec2::new(0.98, 0.0)), Some(1));
        assert_eq!(hit_test(&model, Vec2::new(0.5, 0.5)), None);
    }

    #[test]
    fn test_press_on_point_starts_drag_without_notify() {
        let (mut editor, log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.5, 0.5));
        assert_eq!(editor.state().dragging, Some(2));
        assert_eq!(editor.state().cursor, CursorHint::Grabbing);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_press_on_empty_inserts_then_drags() {
        let (mut editor, log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.3, 0.7));
        assert_eq!(editor.points().len(), 6);
        assert_eq!(log.borrow().len(), 1);
        let index = editor.state().dragging.unwrap();
        let p = editor.points()[index];
        assert!((p.x - 0.3).abs() < 1e-3 && (p.y - 0.7).abs() < 1e-3);

        editor.pointer_move(px(&editor, 0.35, 0.6));
        assert_eq!(log.borrow().len(), 2);
        editor.pointer_release();
        assert_eq!(editor.state().dragging, None);
    }

    #[test]
    fn test_drag_reresolves_index_across_neighbours() {
        let (mut editor, log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.25, 0.25));
        assert_eq!(editor.state().dragging, Some(1));

        editor.pointer_move(px(&editor, 0.6, 0.1));
        assert_eq!(editor.state().dragging, Some(2));
        editor.pointer_move(px(&editor, 0.9, 0.1));
        assert_eq!(editor.state().dragging, Some(3));

        let points = editor.points();
        assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
        assert!((points[3].x - 0.9).abs() < 1e-3);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_drag_endpoint_keeps_x() {
        let (mut editor, _log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.0, 0.0));
        editor.pointer_move(px(&editor, 0.4, 0.8));
        let first = editor.points()[0];
        assert_eq!(first.x, 0.0);
        assert!((first.y - 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_hover_updates_state_without_notify() {
        let (mut editor, log) = curve_editor();
        editor.pointer_move(px(&editor, 0.75, 0.75));
        assert_eq!(editor.state().hover, Some(3));
        assert_eq!(editor.state().cursor, CursorHint::Grab);
        editor.pointer_move(px(&editor, 0.6, 0.2));
        assert_eq!(editor.state().hover, None);
        assert_eq!(editor.state().cursor, CursorHint::Crosshair);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_secondary_deletes_interior_only() {
        let (mut editor, log) = curve_editor();
        editor.pointer_down(PointerButton::Secondary, px(&editor, 0.0, 0.0));
        assert_eq!(editor.points().len(), 5);
        assert!(log.borrow().is_empty());

        editor.pointer_down(PointerButton::Secondary, px(&editor, 0.5, 0.5));
        assert_eq!(editor.points().len(), 4);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(editor.state().dragging, None);
    }

    #[test]
    fn test_secondary_on_empty_space_does_nothing() {
        let (mut editor, log) = curve_editor();
        editor.pointer_down(PointerButton::Secondary, px(&editor, 0.5, 0.1));
        assert_eq!(editor.points().len(), 5);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_programmatic_setters_do_not_notify() {
        let (mut editor, log) = curve_editor();
        editor.set_points([ControlPoint::new(1.0, 1.0), ControlPoint::new(0.0, 0.0)]);
        editor.from_sampled_array(&[0.0, 0.5, 1.0]).unwrap();
        assert!(log.borrow().is_empty());
        assert_eq!(editor.points().len(), 3);

        let (mut gradient, glog) = gradient_editor();
        gradient.set_stops([ColorStop::new(0.0, HexColor::WHITE), ColorStop::new(1.0, HexColor::BLACK)]);
        assert!(glog.borrow().is_empty());
    }

    #[test]
    fn test_set_points_resets_drag() {
        let (mut editor, _log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.5, 0.5));
        editor.set_points(crate::curve::default_points());
        assert_eq!(*editor.state(), InteractionState::default());
    }

    #[test]
    fn test_curve_output_uses_configured_samples() {
        let config = EditorConfig {
            samples: 10,
            ..EditorConfig::curve()
        };
        let log: Log<Vec<f32>> = Rc::default();
        let sink = Rc::clone(&log);
        let mut editor =
            CurveEditor::curve(&config).on_change(move |v: &Vec<f32>| sink.borrow_mut().push(v.clone()));
        editor.insert_point(0.4, 0.9);
        assert_eq!(log.borrow()[0].len(), 10);
    }

    #[test]
    fn test_gradient_press_inserts_with_current_color() {
        let (mut editor, log) = gradient_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.5, 0.5));
        let stops = editor.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[1].color.to_string(), "#7f7f7f");
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0], stops);
    }

    #[test]
    fn test_gradient_selected_color() {
        let (mut editor, log) = gradient_editor();
        assert!(!editor.set_selected_color(HexColor::WHITE).unwrap());

        editor.pointer_down(PointerButton::Primary, px(&editor, 0.0, 0.5));
        editor.pointer_release();
        assert_eq!(editor.state().selected, Some(0));
        assert!(editor.set_selected_color(HexColor::new(255, 0, 0)).unwrap());
        assert_eq!(editor.stops()[0].color, HexColor::new(255, 0, 0));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_gradient_delete_endpoint_rejected() {
        let (mut editor, log) = gradient_editor();
        editor.insert_stop(0.5);
        assert_eq!(editor.stops().len(), 3);
        assert!(!editor.delete_stop(0));
        assert_eq!(editor.stops().len(), 3);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_direct_insert_keeps_selection_on_same_stop() {
        let (mut editor, _log) = gradient_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.5, 0.5));
        editor.pointer_release();
        assert_eq!(editor.state().selected, Some(1));

        editor.insert_stop(0.2);
        assert_eq!(editor.state().selected, Some(2));
        assert!(editor.set_selected_color(HexColor::new(255, 0, 0)).unwrap());

        let stops = editor.stops();
        assert!((stops[2].pos - 0.5).abs() < 1e-3);
        assert_eq!(stops[2].color, HexColor::new(255, 0, 0));
        assert_ne!(stops[1].color, HexColor::new(255, 0, 0));
    }

    #[test]
    fn test_direct_move_keeps_drag_on_grabbed_point() {
        let (mut editor, _log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.25, 0.25));
        assert_eq!(editor.state().dragging, Some(1));

        // Another point crosses the grabbed one.
        editor.move_point(2, 0.1, 0.5);
        assert_eq!(editor.state().dragging, Some(2));

        editor.pointer_move(px(&editor, 0.3, 0.9));
        let points = editor.points();
        assert!((points[1].x - 0.1).abs() < 1e-3 && (points[1].y - 0.5).abs() < 1e-3);
        assert!((points[2].x - 0.3).abs() < 1e-3 && (points[2].y - 0.9).abs() < 1e-3);
        assert!(points.iter().all(|p| p.x != 0.25));
    }

    #[test]
    fn test_delete_clears_indices_of_removed_element() {
        let (mut editor, _log) = gradient_editor();
        editor.insert_stop(0.3);
        editor.insert_stop(0.6);
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.6, 0.5));
        editor.pointer_release();
        assert_eq!(editor.state().selected, Some(2));

        assert!(editor.delete_stop(1));
        assert_eq!(editor.state().selected, Some(1));
        assert!(editor.delete_stop(1));
        assert_eq!(editor.state().selected, None);
    }

    #[test]
    fn test_press_during_drag_is_ignored() {
        let (mut editor, log) = curve_editor();
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.5, 0.5));
        assert_eq!(editor.state().dragging, Some(2));

        editor.pointer_down(PointerButton::Secondary, px(&editor, 0.5, 0.5));
        editor.pointer_down(PointerButton::Primary, px(&editor, 0.1, 0.9));
        assert_eq!(editor.points().len(), 5);
        assert_eq!(editor.state().dragging, Some(2));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_exactly_one_notification_per_mutation() {
        let (mut editor, log) = gradient_editor();
        editor.insert_stop(0.4);
        editor.move_stop(1, 0.6);
        editor.set_stop_color(1, HexColor::WHITE).unwrap();
        editor.delete_stop(1);
        assert_eq!(log.borrow().len(), 4);
        assert!(editor.move_stop(9, 0.5).is_none());
        assert_eq!(log.borrow().len(), 4);
    }
}
