//! A small windowing and software 2D drawing toolkit.
//!
//! `zinc` wraps the platform windowing stack (`winit` for the window and
//! message pump, `softbuffer` for presentation) behind a poll-driven API: the
//! application owns the frame loop, pumps messages, polls [`event::Event`]s,
//! draws shapes into a double-buffered [`canvas::Canvas`], and paces itself
//! with a [`timer::Timer`].
//!
//! ```no_run
//! use zinc::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut window = Window::new("hello", Vec2i::new(800, 600))?;
//! let mut canvas = Canvas::new(window.handle())?;
//! let mut timer = Timer::new(PacingMode::Simple);
//! window.show();
//!
//! while !window.should_close() {
//!     timer.tick();
//!     window.process_messages();
//!     while let Some(event) = window.poll_event() {
//!         match event {
//!             Event::Quit => window.close(),
//!             Event::Resize { .. } => canvas.resize()?,
//!             _ => {}
//!         }
//!     }
//!     canvas.clear(Color::BLACK);
//!     canvas.fill_circle(Vec2i::new(400, 300), 50, Color::RED);
//!     canvas.present();
//!     timer.sleep_to_fps(60.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod event;
pub mod pixmap;
pub mod timer;
pub mod units;
pub mod window;

pub mod prelude {
    pub use crate::canvas::{Canvas, SurfaceError};
    pub use crate::event::{Event, KeyCode, MouseButton};
    pub use crate::pixmap::{Mode, Pixmap, Style};
    pub use crate::timer::{PacingMode, Timer};
    pub use crate::units::{Color, ColorF, DivideByZero, Rectf, Recti, Vec2f, Vec2i};
    pub use crate::window::{CreationError, Window, WindowHandle};
}
