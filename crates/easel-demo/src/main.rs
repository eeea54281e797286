//! Easel demo: headless curve and gradient editors driven by a JSON-lines
//! script.
//!
//! Reads [`ipc::HostToEditor`] messages (one per line) from `EASEL_SCRIPT` or
//! stdin, routes them into the editors, and writes [`ipc::EditorToHost`]
//! messages to stdout. Logs go to stderr.

mod config;
mod error;
mod ipc;
mod logging;
mod preview;

use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::rc::Rc;

use easel_core::{
    ColorStop, CursorHint, CurveEditor, GradientEditor, HexColor, InputSurface, SharedTarget,
};

use crate::config::{AppConfig, WidgetConfigs};
use crate::error::DemoError;
use crate::ipc::{EditorToHost, HostToEditor, Widget};
use crate::logging::{LoggingConfig, init_logging};
use crate::preview::{Frame, PreviewSurface};

type Outbox = Rc<RefCell<Vec<EditorToHost>>>;

/// Both editors, the surface routing pointer input to them, and the
/// messages queued for the host.
struct Host {
    surface: InputSurface,
    curve: Rc<RefCell<CurveEditor>>,
    gradient: Rc<RefCell<GradientEditor>>,
    outbox: Outbox,
    cursors: (CursorHint, CursorHint),
    frames: (Frame, Frame),
}

impl Host {
    fn new(configs: &WidgetConfigs) -> Self {
        let outbox: Outbox = Rc::default();

        let (curve_surface, curve_frame) = PreviewSurface::new();
        let sink = Rc::clone(&outbox);
        let curve = CurveEditor::curve(&configs.curve)
            .with_surface(curve_surface)
            .on_change(move |values: &Vec<f32>| {
                sink.borrow_mut().push(EditorToHost::CurveChanged {
                    values: values.clone(),
                });
            });

        let (gradient_surface, gradient_frame) = PreviewSurface::new();
        let sink = Rc::clone(&outbox);
        let gradient = GradientEditor::gradient(&configs.gradient)
            .with_surface(gradient_surface)
            .on_change(move |stops: &Vec<ColorStop>| {
                sink.borrow_mut().push(EditorToHost::GradientChanged {
                    stops: stops.clone(),
                });
            });

        let curve = Rc::new(RefCell::new(curve));
        let gradient = Rc::new(RefCell::new(gradient));
        let mut surface = InputSurface::new();
        let target: SharedTarget = curve.clone();
        surface.subscribe(&target);
        let target: SharedTarget = gradient.clone();
        surface.subscribe(&target);

        Self {
            surface,
            curve,
            gradient,
            outbox,
            cursors: (CursorHint::default(), CursorHint::default()),
            frames: (curve_frame, gradient_frame),
        }
    }

    fn apply(&mut self, message: HostToEditor) -> Result<(), DemoError> {
        match message {
            HostToEditor::Pointer { event } => self.surface.dispatch(event),
            HostToEditor::SetPoints { points } => self.curve.borrow_mut().set_points(points),
            HostToEditor::SetStops { stops } => self.gradient.borrow_mut().set_stops(stops),
            HostToEditor::FromSampledArray { values } => {
                self.curve.borrow_mut().from_sampled_array(&values)?;
            }
            HostToEditor::SetSelectedColor { color } => {
                let color: HexColor = color.parse()?;
                if !self.gradient.borrow_mut().set_selected_color(color)? {
                    tracing::debug!("no gradient stop selected; colour ignored");
                }
            }
        }
        self.queue_cursor_changes();
        Ok(())
    }

    fn queue_cursor_changes(&mut self) {
        let curve = self.curve.borrow().state().cursor;
        let gradient = self.gradient.borrow().state().cursor;
        let mut outbox = self.outbox.borrow_mut();
        if curve != self.cursors.0 {
            outbox.push(EditorToHost::Cursor {
                widget: Widget::Curve,
                cursor: curve,
            });
        }
        if gradient != self.cursors.1 {
            outbox.push(EditorToHost::Cursor {
                widget: Widget::Gradient,
                cursor: gradient,
            });
        }
        self.cursors = (curve, gradient);
    }

    fn report(&mut self, err: &DemoError) {
        tracing::warn!(%err, "script line rejected");
        self.outbox.borrow_mut().push(EditorToHost::Error {
            message: err.to_string(),
        });
    }

    fn flush(&mut self, out: &mut impl Write) -> Result<(), DemoError> {
        for message in self.outbox.borrow_mut().drain(..) {
            serde_json::to_writer(&mut *out, &message)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn parse_line(number: usize, line: &str) -> Result<HostToEditor, DemoError> {
    serde_json::from_str(line).map_err(|source| DemoError::Script {
        line: number,
        source,
    })
}

fn run(app: &AppConfig) -> Result<(), DemoError> {
    let configs = WidgetConfigs::load(app.config_path.as_deref())?;
    let mut host = Host::new(&configs);

    let input: Box<dyn BufRead> = match &app.script_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "replaying pointer script");
            Box::new(BufReader::new(std::fs::File::open(path)?))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = parse_line(index + 1, &line).and_then(|msg| host.apply(msg)) {
            host.report(&err);
        }
        host.flush(&mut out)?;
    }

    if let Some(dir) = &app.preview_dir {
        preview::save(&host.frames.0, dir, "curve")?;
        preview::save(&host.frames.1, dir, "gradient")?;
        preview::save_luts(host.curve.borrow().model(), host.gradient.borrow().model(), dir)?;
    }
    Ok(())
}

fn main() {
    let app = AppConfig::default();
    init_logging(LoggingConfig {
        filter: app.log_filter.clone(),
    });

    tracing::debug!(?app, "starting easel demo");
    if let Err(err) = run(&app) {
        tracing::error!(%err, "easel demo failed");
        std::process::exit(1);
    }
}
