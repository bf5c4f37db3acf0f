pub mod scene;

pub use scene::{GelScene, PlotBand, PlotWell, Rect, RulerTick};

use gel_core::{BasePairs, FragmentSet, GelGeometry, ParseLengthsError};
use mobility_engine::GelRun;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use mobility_engine::{default_band_styles, render_summary_text, BandStyle};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Run configuration accepted over the JS boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub samples: Vec<BasePairs>,
    #[serde(default)]
    pub control: Option<BasePairs>,
}

impl RunRequest {
    /// Re-validate and compute; JS callers get the same validation messages
    /// as the form.
    pub fn into_run(self) -> Result<GelRun, ParseLengthsError> {
        let set = FragmentSet::new(self.samples, self.control)?;
        Ok(GelRun::compute(&set, GelGeometry::default()))
    }
}

// ---------- canvas backend (browser only) ------------------------------------

/// Abstraction over the concrete 2D drawing surface.
#[cfg(target_arch = "wasm32")]
trait RendererBackend {
    fn begin_frame(&mut self, width: f64, height: f64, clear_color: &str);
    fn fill_rect(&mut self, rect: &Rect, color: &str);
    fn stroke_rect(&mut self, rect: &Rect, color: &str, line_width: f64);
    fn draw_segments(&mut self, segments: &[(f64, f64, f64, f64)], color: &str, width: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str);
}

#[cfg(target_arch = "wasm32")]
struct CanvasBackend {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasBackend {
    fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

#[cfg(target_arch = "wasm32")]
impl RendererBackend for CanvasBackend {
    fn begin_frame(&mut self, width: f64, height: f64, clear_color: &str) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.ctx.set_fill_style_str(clear_color);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn stroke_rect(&mut self, rect: &Rect, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn draw_segments(&mut self, segments: &[(f64, f64, f64, f64)], color: &str, width: f64) {
        if segments.is_empty() {
            return;
        }
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(width);
        for (x1, y1, x2, y2) in segments {
            ctx.begin_path();
            ctx.move_to(*x1, *y1);
            ctx.line_to(*x2, *y2);
            ctx.stroke();
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x, y).unwrap_or_default();
    }
}

#[cfg(target_arch = "wasm32")]
const BODY_FONT: &str = "12px 'Inter', sans-serif";
#[cfg(target_arch = "wasm32")]
const BOLD_FONT: &str = "600 12px 'Inter', sans-serif";
#[cfg(target_arch = "wasm32")]
const TITLE_FONT: &str = "600 14px 'Inter', sans-serif";

#[cfg(target_arch = "wasm32")]
fn draw_scene(backend: &mut dyn RendererBackend, s: &GelScene) {
    backend.begin_frame(s.width, s.height, scene::BACKGROUND);

    backend.fill_rect(&s.gel_rect, scene::GEL_FILL);
    backend.stroke_rect(&s.gel_rect, scene::GEL_EDGE, 1.5);

    backend.fill_text(&s.title, s.gel_rect.x, s.title_y, scene::TEXT, TITLE_FONT);

    // Well/max row captions in the left margin.
    backend.fill_text(&s.well_caption, 8.0, s.well_row_y + 4.0, scene::MUTED, BODY_FONT);
    backend.fill_text(&s.max_caption, 8.0, s.max_row_y + 4.0, scene::MUTED, BODY_FONT);

    for well in &s.wells {
        backend.fill_rect(&well.rect, scene::WELL_FILL);
        backend.stroke_rect(&well.rect, &well.edge, 1.5);
        backend.fill_text(&well.label, well.label_x, well.label_y, scene::TEXT, BODY_FONT);
    }

    for band in &s.bands {
        backend.fill_rect(&band.rect, &band.fill);
        backend.stroke_rect(&band.rect, &band.edge, 1.0);
        let font = if band.emphasized { BOLD_FONT } else { BODY_FONT };
        backend.fill_text(&band.label_bp, band.label_x, band.label_y, scene::ANNOTATION, font);
        backend.fill_text(
            &band.label_cm,
            band.label_x,
            band.label_y + 12.0,
            scene::ANNOTATION,
            font,
        );
    }

    // Measurement ruler along the right edge.
    let mut segments = vec![(s.ruler_x, s.well_row_y, s.ruler_x, s.max_row_y)];
    for tick in &s.ruler_ticks {
        segments.push((s.ruler_x, tick.y, s.ruler_x + 8.0, tick.y));
    }
    backend.draw_segments(&segments, scene::MUTED, 1.5);
    for tick in &s.ruler_ticks {
        backend.fill_text(&tick.label, s.ruler_x + 12.0, tick.y + 4.0, scene::MUTED, BODY_FONT);
    }
}

// ---------- JS handle ---------------------------------------------------------

#[cfg(target_arch = "wasm32")]
struct GelHandleInner {
    backend: CanvasBackend,
    run: Option<GelRun>,
    styles: Vec<BandStyle>,
    destroyed: bool,
}

#[cfg(target_arch = "wasm32")]
impl GelHandleInner {
    fn render(&mut self) {
        if self.destroyed {
            return;
        }
        let width = self.backend.canvas.width() as f64;
        let height = self.backend.canvas.height() as f64;
        match &self.run {
            Some(run) => {
                let scene = GelScene::build(run, &self.styles, width, height);
                draw_scene(&mut self.backend, &scene);
            }
            None => self.backend.begin_frame(width, height, scene::BACKGROUND),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn resize_canvas_to_parent(canvas: &HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(rect.width().max(1.0) as u32);
    canvas.set_height(rect.height().max(1.0) as u32);
}

/// Public gel handle for JS hosts: looks up a canvas by id, accepts runs,
/// and redraws on demand.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct GelHandle {
    inner: Rc<RefCell<GelHandleInner>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GelHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GelHandle, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let element = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas not found"))?;
        let canvas: HtmlCanvasElement = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        resize_canvas_to_parent(&canvas);

        let inner = Rc::new(RefCell::new(GelHandleInner {
            backend: CanvasBackend::new(canvas, ctx),
            run: None,
            styles: Vec::new(),
            destroyed: false,
        }));

        // Track the rendered cell size across layout shifts.
        {
            let inner_clone = inner.clone();
            let resize_cb = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let mut inner = inner_clone.borrow_mut();
                if inner.destroyed {
                    return;
                }
                resize_canvas_to_parent(&inner.backend.canvas);
                inner.render();
            }));
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;
            resize_cb.forget();
        }

        Ok(GelHandle { inner })
    }

    /// Install a computed run (serialized `GelRun`) and redraw.
    pub fn set_run_json(&self, json: &str) -> Result<(), JsValue> {
        let run: GelRun =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut inner = self.inner.borrow_mut();
        inner.styles = default_band_styles(&run);
        inner.run = Some(run);
        inner.render();
        Ok(())
    }

    /// Parse the two input fields, compute, and redraw. Returns the
    /// user-facing validation message on bad input.
    pub fn load_lengths(&self, samples: &str, control: &str) -> Result<(), JsValue> {
        let request = RunRequest {
            samples: gel_core::parse_lengths(samples)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            control: gel_core::parse_control(control)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
        };
        let run = request
            .into_run()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut inner = self.inner.borrow_mut();
        inner.styles = default_band_styles(&run);
        inner.run = Some(run);
        inner.render();
        Ok(())
    }

    /// Text summary of the current run, empty before the first run.
    pub fn summary_text(&self) -> String {
        self.inner
            .borrow()
            .run
            .as_ref()
            .map(render_summary_text)
            .unwrap_or_default()
    }

    /// Drop the current run and clear the surface.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.run = None;
        inner.styles.clear();
        inner.render();
    }

    /// Resize and redraw (call from the host on container changes).
    pub fn resize(&self, width: f64, height: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.backend.canvas.set_width(width.max(1.0) as u32);
        inner.backend.canvas.set_height(height.max(1.0) as u32);
        inner.render();
    }

    pub fn destroy(&self) {
        self.inner.borrow_mut().destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_request_round_trips_and_validates() {
        let req: RunRequest = serde_json::from_str(r#"{"samples":[100,250],"control":500}"#).unwrap();
        let run = req.into_run().unwrap();
        assert_eq!(run.lane_count(), 3);
        assert!(run.control().is_some());

        let no_control: RunRequest = serde_json::from_str(r#"{"samples":[100]}"#).unwrap();
        assert!(no_control.into_run().unwrap().control().is_none());
    }

    #[test]
    fn run_request_rejects_bad_batches() {
        let empty = RunRequest {
            samples: Vec::new(),
            control: None,
        };
        assert!(empty.into_run().is_err());

        let zero = RunRequest {
            samples: vec![100, 0],
            control: None,
        };
        assert!(zero.into_run().is_err());
    }
}
