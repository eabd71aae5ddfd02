use std::f64::consts::TAU;

use sky::{Color, ColorStop, Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{error::StarfallError, window};

/// CSS color string for `color` at `alpha`.
pub fn rgba(color: Color, alpha: f64) -> String {
    let Color(r, g, b) = color;
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// The full-window canvas the sky is painted on.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, StarfallError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(StarfallError::from("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StarfallError::from("2d context has an unexpected type"))?;

        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Matches the canvas to the window's inner size.
    pub fn fit_window(&self) -> Result<(), JsValue> {
        let width = window().inner_width()?.as_f64().unwrap_or_default();
        let height = window().inner_height()?.as_f64().unwrap_or_default();

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn disc(&self, center: (f64, f64), radius: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center.0, center.1, radius, 0.0, TAU)
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        let Viewport { width, height } = self.viewport();
        self.context.clear_rect(0.0, 0.0, width, height);

        Ok(())
    }

    #[allow(deprecated)]
    fn fill_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.disc(center, radius)?;
        self.context
            .set_fill_style(&JsValue::from_str(&rgba(color, alpha)));
        self.context.fill();

        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from.0, from.1);
        self.context.line_to(to.0, to.1);
        self.context
            .set_stroke_style(&JsValue::from_str(&rgba(color, alpha)));
        self.context.set_line_width(width);
        self.context.set_line_cap("round");
        self.context.stroke();

        Ok(())
    }

    #[allow(deprecated)]
    fn fill_radial(
        &mut self,
        center: (f64, f64),
        radius: f64,
        stops: &[ColorStop],
    ) -> Result<(), JsValue> {
        let gradient = self
            .context
            .create_radial_gradient(center.0, center.1, 0.0, center.0, center.1, radius)?;

        for ColorStop(offset, color, alpha) in stops {
            gradient.add_color_stop(*offset as f32, &rgba(*color, *alpha))?;
        }

        self.disc(center, radius)?;
        self.context.set_fill_style(&gradient);
        self.context.fill();

        Ok(())
    }
}
