//! Browser bindings
//!
//! `requestAnimationFrame` as a [`FrameHost`] and the canvas 2D context as a
//! [`Surface`].

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::renderer::Surface;
use crate::scheduler::FrameHost;

/// Animation-frame registration on a browser window
pub struct BrowserFrames {
    window: Window,
    on_frame: Rc<dyn Fn(f64)>,
}

impl BrowserFrames {
    /// `on_frame` runs for every refresh this host registers, with the
    /// `DOMHighResTimeStamp` of the frame.
    pub fn new(window: Window, on_frame: impl Fn(f64) + 'static) -> Self {
        Self {
            window,
            on_frame: Rc::new(on_frame),
        }
    }
}

impl FrameHost for BrowserFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let on_frame = Rc::clone(&self.on_frame);
        // Freed by wasm-bindgen after its single call
        let callback = Closure::once_into_js(move |time: f64| on_frame(time));
        match self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

/// Look up the canvas by id, size it to `size × size` and get its 2D context
pub fn canvas_context(
    document: &Document,
    id: &str,
    size: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no #{} element", id)))?
        .dyn_into()?;

    canvas.set_width(size);
    canvas.set_height(size);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?;

    Ok((canvas, context))
}

// Transform calls only fail for non-finite arguments, which the layout never
// produces.
impl Surface for CanvasRenderingContext2d {
    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, width as f64, height as f64);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        let _ = CanvasRenderingContext2d::arc(
            self,
            x as f64,
            y as f64,
            radius as f64,
            start as f64,
            end as f64,
        );
    }

    fn line_to(&mut self, x: f32, y: f32) {
        CanvasRenderingContext2d::line_to(self, x as f64, y as f64);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = CanvasRenderingContext2d::translate(self, x as f64, y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = CanvasRenderingContext2d::rotate(self, angle as f64);
    }
}
