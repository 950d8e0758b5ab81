//! A double-buffered drawing surface for one window.
//!
//! Drawing goes into an off-screen [`Pixmap`]; nothing reaches the screen
//! until [`Canvas::present`] blits the whole buffer onto the visible surface.

use std::num::NonZeroU32;

use tracing::{debug, error, warn};

use crate::pixmap::{Pixmap, Style};
use crate::units::{Color, Recti, Vec2i};
use crate::window::WindowHandle;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("presentation context unavailable: {0}")]
    Context(softbuffer::SoftBufferError),
    #[error("surface creation failed: {0}")]
    Create(softbuffer::SoftBufferError),
    #[error("surface resize failed: {0}")]
    Resize(softbuffer::SoftBufferError),
}

/// The live presentation resources. Dropped as a unit on dispose.
struct Presenter {
    surface: softbuffer::Surface<WindowHandle, WindowHandle>,
    // The surface does not keep the display context alive on every backend.
    _context: softbuffer::Context<WindowHandle>,
}

enum State {
    Ready(Presenter),
    Disposed,
}

pub struct Canvas {
    handle: WindowHandle,
    pixmap: Pixmap,
    state: State,
}

impl Canvas {
    /// Wires a presentation surface to the window and allocates the
    /// off-screen buffer at the current client size.
    pub fn new(handle: WindowHandle) -> Result<Self, SurfaceError> {
        let context = softbuffer::Context::new(handle.clone()).map_err(SurfaceError::Context)?;
        let surface =
            softbuffer::Surface::new(&context, handle.clone()).map_err(SurfaceError::Create)?;

        let size = client_size(&handle);
        let mut canvas = Self {
            handle,
            pixmap: Pixmap::new(size),
            state: State::Ready(Presenter {
                surface,
                _context: context,
            }),
        };
        canvas.configure_surface(size)?;
        Ok(canvas)
    }

    /// Reallocates the off-screen buffer and the surface to the window's
    /// current client size. Call this whenever a resize event is observed;
    /// until then draws keep using the old dimensions.
    pub fn resize(&mut self) -> Result<(), SurfaceError> {
        if matches!(self.state, State::Disposed) {
            warn!("resize on a disposed canvas ignored");
            return Ok(());
        }
        let size = client_size(&self.handle);
        self.pixmap = Pixmap::new(size);
        self.configure_surface(size)
    }

    fn configure_surface(&mut self, size: Vec2i) -> Result<(), SurfaceError> {
        let State::Ready(presenter) = &mut self.state else {
            return Ok(());
        };
        let (Some(width), Some(height)) = (
            NonZeroU32::new(size.x.max(0) as u32),
            NonZeroU32::new(size.y.max(0) as u32),
        ) else {
            // Zero client area, e.g. a minimized window. Presenting is
            // skipped until the next resize.
            debug!(?size, "skipping surface configuration for empty client area");
            return Ok(());
        };
        presenter
            .surface
            .resize(width, height)
            .map_err(SurfaceError::Resize)
    }

    pub fn size(&self) -> Vec2i {
        self.pixmap.size()
    }

    /// Read access to the off-screen buffer.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        match self.state {
            State::Ready(_) => Some(&mut self.pixmap),
            State::Disposed => {
                debug!("draw on a disposed canvas ignored");
                None
            }
        }
    }

    /// Fills the entire off-screen buffer.
    pub fn clear(&mut self, color: Color) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.clear(color);
        }
    }

    pub fn draw_pixel(&mut self, p: Vec2i, color: Color) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.set_pixel(p, color);
        }
    }

    pub fn draw_line(&mut self, a: Vec2i, b: Vec2i, color: Color, width: i32) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.line(a, b, color, width);
        }
    }

    pub fn draw_rect(&mut self, rect: Recti, style: Style) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.rect(rect, style);
        }
    }

    pub fn fill_rect(&mut self, rect: Recti, color: Color) {
        self.draw_rect(rect, Style::fill(color));
    }

    pub fn stroke_rect(&mut self, rect: Recti, color: Color, width: i32) {
        self.draw_rect(rect, Style::stroke(color, width));
    }

    pub fn draw_circle(&mut self, center: Vec2i, radius: i32, style: Style) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.circle(center, radius, style);
        }
    }

    pub fn fill_circle(&mut self, center: Vec2i, radius: i32, color: Color) {
        self.draw_circle(center, radius, Style::fill(color));
    }

    pub fn stroke_circle(&mut self, center: Vec2i, radius: i32, color: Color, width: i32) {
        self.draw_circle(center, radius, Style::stroke(color, width));
    }

    pub fn draw_ellipse(&mut self, center: Vec2i, radii: Vec2i, style: Style) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.ellipse(center, radii, style);
        }
    }

    pub fn fill_ellipse(&mut self, center: Vec2i, radii: Vec2i, color: Color) {
        self.draw_ellipse(center, radii, Style::fill(color));
    }

    pub fn stroke_ellipse(&mut self, center: Vec2i, radii: Vec2i, color: Color, width: i32) {
        self.draw_ellipse(center, radii, Style::stroke(color, width));
    }

    pub fn draw_polygon(&mut self, points: &[Vec2i], style: Style) {
        if let Some(pixmap) = self.pixmap_mut() {
            pixmap.polygon(points, style);
        }
    }

    pub fn fill_polygon(&mut self, points: &[Vec2i], color: Color) {
        self.draw_polygon(points, Style::fill(color));
    }

    pub fn stroke_polygon(&mut self, points: &[Vec2i], color: Color, width: i32) {
        self.draw_polygon(points, Style::stroke(color, width));
    }

    /// Copies the entire off-screen buffer onto the visible surface, verbatim.
    ///
    /// Presentation failures do not change the canvas contract; they are
    /// logged and the frame is skipped.
    pub fn present(&mut self) {
        let State::Ready(presenter) = &mut self.state else {
            debug!("present on a disposed canvas ignored");
            return;
        };
        if self.pixmap.width() <= 0 || self.pixmap.height() <= 0 {
            return;
        }

        let mut buffer = match presenter.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                error!("could not acquire the surface buffer: {err}");
                return;
            }
        };
        if buffer.len() != self.pixmap.data().len() {
            // Surface and pixmap went out of step, e.g. a resize event the
            // owner has not forwarded yet.
            warn!(
                surface = buffer.len(),
                pixmap = self.pixmap.data().len(),
                "surface/buffer size mismatch, skipping present"
            );
            return;
        }
        buffer.copy_from_slice(self.pixmap.data());
        if let Err(err) = buffer.present() {
            error!("present failed: {err}");
        }
    }

    /// Releases the presentation resources. Idempotent; a disposed canvas
    /// ignores drawing and presenting.
    pub fn dispose(&mut self) {
        if matches!(self.state, State::Ready(_)) {
            self.state = State::Disposed;
            debug!("canvas disposed");
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn client_size(handle: &WindowHandle) -> Vec2i {
    let size = handle.inner_size();
    Vec2i::new(size.width as i32, size.height as i32)
}
