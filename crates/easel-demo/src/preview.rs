//! Software render surface that rasterizes widgets into RGB images.
//!
//! Each redraw repaints the whole widget; the latest frame is kept in a
//! shared slot so the host can save it once the session ends.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use easel_core::interaction::SampledCurve;
use easel_core::{
    CurveLut, GradientLut, GradientModel, HexColor, InteractionState, RenderSurface, WidgetView,
};
use glam::Vec2;
use image::{Rgb, RgbImage};

use crate::error::DemoError;

const BG: Rgb<u8> = Rgb([24, 24, 24]);
const GRID: Rgb<u8> = Rgb([48, 48, 48]);
const HANDLE_OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);
const HANDLE_ACTIVE: Rgb<u8> = Rgb([255, 255, 255]);
const HANDLE_RADIUS: i32 = 3;
/// Texel count of the dumped gradient table.
const GRADIENT_LUT_SIZE: usize = 256;

/// Shared slot holding the last rendered frame.
pub type Frame = Rc<RefCell<Option<RgbImage>>>;

/// Render surface writing into a [`Frame`].
pub struct PreviewSurface {
    frame: Frame,
}

impl PreviewSurface {
    pub fn new() -> (Self, Frame) {
        let frame: Frame = Rc::default();
        (
            Self {
                frame: Rc::clone(&frame),
            },
            frame,
        )
    }

    fn canvas(view: &WidgetView) -> RgbImage {
        let size = view.viewport.size.max(Vec2::ONE);
        RgbImage::from_pixel(size.x as u32, size.y as u32, BG)
    }

    fn store(&mut self, image: RgbImage) {
        *self.frame.borrow_mut() = Some(image);
    }
}

fn rgb(color: HexColor) -> Rgb<u8> {
    Rgb(color.channels())
}

/// Widget-local pixel position of a normalized point.
fn local(view: &WidgetView, normalized: Vec2) -> (i32, i32) {
    let p = view.viewport.denormalize(normalized) - view.viewport.origin;
    (p.x.round() as i32, p.y.round() as i32)
}

fn put(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_handle(image: &mut RgbImage, (cx, cy): (i32, i32), fill: Rgb<u8>) {
    for dy in -HANDLE_RADIUS..=HANDLE_RADIUS {
        for dx in -HANDLE_RADIUS..=HANDLE_RADIUS {
            let edge = dx.abs() == HANDLE_RADIUS || dy.abs() == HANDLE_RADIUS;
            put(image, cx + dx, cy + dy, if edge { HANDLE_OUTLINE } else { fill });
        }
    }
}

fn handle_fill(index: usize, state: &InteractionState, accent: Rgb<u8>) -> Rgb<u8> {
    if state.dragging == Some(index) || state.hover == Some(index) {
        HANDLE_ACTIVE
    } else {
        accent
    }
}

impl RenderSurface<SampledCurve> for PreviewSurface {
    fn redraw(&mut self, model: &SampledCurve, state: &InteractionState, view: &WidgetView) {
        let mut image = Self::canvas(view);
        let accent = rgb(view.accent);

        for step in 0..=4 {
            let v = step as f32 / 4.0;
            let (x, _) = local(view, Vec2::new(v, 0.0));
            let (_, y) = local(view, Vec2::new(0.0, v));
            for i in 0..image.height() as i32 {
                put(&mut image, x, i, GRID);
            }
            for i in 0..image.width() as i32 {
                put(&mut image, i, y, GRID);
            }
        }

        // One trace sample per plot column.
        let (left, _) = local(view, Vec2::ZERO);
        let (right, _) = local(view, Vec2::ONE);
        let columns = (right - left).max(1);
        for col in 0..=columns {
            let t = col as f32 / columns as f32;
            let (x, y) = local(view, Vec2::new(t, model.curve.evaluate_at(t)));
            put(&mut image, x, y, accent);
        }

        for (i, p) in model.curve.points().iter().enumerate() {
            let fill = handle_fill(i, state, accent);
            draw_handle(&mut image, local(view, Vec2::new(p.x, p.y)), fill);
        }
        self.store(image);
    }
}

impl RenderSurface<GradientModel> for PreviewSurface {
    fn redraw(&mut self, model: &GradientModel, state: &InteractionState, view: &WidgetView) {
        let mut image = Self::canvas(view);
        let accent = rgb(view.accent);

        let (left, top) = local(view, Vec2::new(0.0, 1.0));
        let (right, bottom) = local(view, Vec2::new(1.0, 0.0));
        let columns = (right - left).max(1);
        for col in 0..=columns {
            let color = rgb(model.evaluate_color_at(col as f32 / columns as f32));
            for y in top..=bottom {
                put(&mut image, left + col, y, color);
            }
        }

        for (i, stop) in model.stops().iter().enumerate() {
            let fill = handle_fill(i, state, accent);
            draw_handle(&mut image, local(view, Vec2::new(stop.pos, 0.0)), fill);
        }
        self.store(image);
    }
}

/// Save the frame, if one was rendered, as `<dir>/<name>.png`.
pub fn save(frame: &Frame, dir: &Path, name: &str) -> Result<(), DemoError> {
    let Some(image) = frame.borrow().clone() else {
        tracing::warn!(name, "no frame rendered; skipping preview");
        return Ok(());
    };
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.png"));
    image.save(&path)?;
    tracing::info!(path = %path.display(), "wrote preview");
    Ok(())
}

/// Write the renderer lookup tables as raw bytes next to the previews.
///
/// `curve.lut` holds `samples` native-endian `f32` values and
/// `gradient.lut` holds RGBA8 texels.
pub fn save_luts(
    curve: &SampledCurve,
    gradient: &GradientModel,
    dir: &Path,
) -> Result<(), DemoError> {
    std::fs::create_dir_all(dir)?;
    let curve_lut = CurveLut::bake(&curve.curve, curve.samples);
    let gradient_lut = GradientLut::bake(gradient, GRADIENT_LUT_SIZE);
    for (name, bytes) in [
        ("curve.lut", curve_lut.as_bytes()),
        ("gradient.lut", gradient_lut.as_bytes()),
    ] {
        let path = dir.join(name);
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), len = bytes.len(), "wrote lookup table");
    }
    Ok(())
}
