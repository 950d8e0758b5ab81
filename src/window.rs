//! A native window with an explicit message pump and an event FIFO.
//!
//! Unlike a callback-driven event loop, the owner drives everything:
//! [`Window::process_messages`] drains pending platform messages into the
//! queue, [`Window::poll_event`] hands them out one at a time, and the frame
//! loop decides when both happen.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{WindowAttributes, WindowId};

use crate::event::{self, Event};
use crate::units::{Recti, Vec2i};

/// Shared handle to the native window, the unit a [`crate::canvas::Canvas`]
/// attaches to.
pub type WindowHandle = Arc<winit::window::Window>;

#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error("could not create the event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create the native window: {0}")]
    Window(#[from] OsError),
    #[error("the platform never delivered a window")]
    NoWindow,
}

/// The [`ApplicationHandler`] half of a window: everything the platform
/// mutates while the pump runs.
struct Shell {
    attributes: WindowAttributes,
    window: Option<WindowHandle>,
    creation_error: Option<OsError>,
    events: VecDeque<Event>,
    cursor: Vec2i,
    size: Vec2i,
    position: Vec2i,
    should_close: bool,
}

impl Shell {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes,
            window: None,
            creation_error: None,
            events: VecDeque::new(),
            cursor: Vec2i::ZERO,
            size: Vec2i::ZERO,
            position: Vec2i::ZERO,
            should_close: false,
        }
    }

    fn handle_event(&mut self, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.should_close = true,
            WindowEvent::Resized(size) => {
                self.size = Vec2i::new(size.width as i32, size.height as i32);
            }
            WindowEvent::Moved(position) => {
                self.position = Vec2i::new(position.x, position.y);
            }
            _ => {}
        }

        if let Some(translated) = event::translate(&event, self.cursor) {
            if let Event::MouseMove { position } = translated {
                self.cursor = position;
            }
            self.events.push_back(translated);
        }
    }
}

impl ApplicationHandler for Shell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.creation_error.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                let size = window.inner_size();
                self.size = Vec2i::new(size.width as i32, size.height as i32);
                if let Ok(position) = window.outer_position() {
                    self.position = Vec2i::new(position.x, position.y);
                }
                self.window = Some(Arc::new(window));
            }
            Err(err) => self.creation_error = Some(err),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        self.handle_event(event);
    }
}

pub struct Window {
    // Declared before the event loop so the native handles drop first.
    handle: WindowHandle,
    shell: Shell,
    event_loop: EventLoop<()>,
    title: String,
}

impl Window {
    /// Creates a hidden window with the given client size. Call
    /// [`Window::show`] to make it visible.
    pub fn new(title: &str, size: Vec2i) -> Result<Self, CreationError> {
        let attributes = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(size.x.max(1) as u32, size.y.max(1) as u32))
            .with_visible(false);
        Self::build(title, attributes)
    }

    /// Creates a hidden window at an explicit position and client size.
    pub fn with_bounds(title: &str, bounds: Recti) -> Result<Self, CreationError> {
        let attributes = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(
                bounds.w.max(1) as u32,
                bounds.h.max(1) as u32,
            ))
            .with_position(PhysicalPosition::new(bounds.x, bounds.y))
            .with_visible(false);
        Self::build(title, attributes)
    }

    fn build(title: &str, attributes: WindowAttributes) -> Result<Self, CreationError> {
        let mut event_loop = EventLoop::new()?;
        let mut shell = Shell::new(attributes);

        // The platform hands out windows from inside the pump, on the first
        // resume.
        event_loop.pump_app_events(Some(Duration::ZERO), &mut shell);

        if let Some(err) = shell.creation_error.take() {
            return Err(CreationError::Window(err));
        }
        let Some(handle) = shell.window.clone() else {
            return Err(CreationError::NoWindow);
        };

        Ok(Self {
            handle,
            shell,
            event_loop,
            title: title.to_owned(),
        })
    }

    /// A shared handle to the native window, e.g. for attaching a canvas.
    pub fn handle(&self) -> WindowHandle {
        Arc::clone(&self.handle)
    }

    pub fn show(&self) {
        self.handle.set_visible(true);
    }

    pub fn hide(&self) {
        self.handle.set_visible(false);
    }

    pub fn minimize(&self) {
        self.handle.set_minimized(true);
    }

    pub fn maximize(&self) {
        self.handle.set_maximized(true);
    }

    pub fn restore(&self) {
        self.handle.set_minimized(false);
        self.handle.set_maximized(false);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
        self.handle.set_title(title);
    }

    /// The cached client size, kept current by the explicit setters and by
    /// resize notifications from the platform.
    pub fn size(&self) -> Vec2i {
        self.shell.size
    }

    /// The cached outer position, kept current the same way as [`Self::size`].
    pub fn position(&self) -> Vec2i {
        self.shell.position
    }

    /// The client size as the platform reports it right now.
    pub fn client_size(&self) -> Vec2i {
        let size = self.handle.inner_size();
        Vec2i::new(size.width as i32, size.height as i32)
    }

    /// Requests a new client size. The cache updates immediately; when the
    /// platform resizes asynchronously instead, the echoed resize
    /// notification converges the cache to the final value.
    pub fn set_size(&mut self, size: Vec2i) {
        self.shell.size = size;
        let request = PhysicalSize::new(size.x.max(0) as u32, size.y.max(0) as u32);
        if let Some(actual) = self.handle.request_inner_size(request) {
            self.shell.size = Vec2i::new(actual.width as i32, actual.height as i32);
        }
    }

    pub fn set_position(&mut self, position: Vec2i) {
        self.shell.position = position;
        self.handle
            .set_outer_position(PhysicalPosition::new(position.x, position.y));
    }

    pub fn set_bounds(&mut self, bounds: Recti) {
        self.set_position(bounds.position());
        self.set_size(bounds.size());
    }

    /// Drains all currently queued platform messages without blocking,
    /// translating each into an [`Event`] on the FIFO. Call once per loop
    /// iteration, before polling.
    pub fn process_messages(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.shell);
        if let PumpStatus::Exit(code) = status {
            debug!(code, "event loop exited");
            self.shell.should_close = true;
        }
    }

    /// Removes and returns the oldest queued event, in the order the
    /// platform produced them. `None` when the queue is empty.
    pub fn poll_event(&mut self) -> Option<Event> {
        self.shell.events.pop_front()
    }

    /// True once a close request or destroy notification was observed, or
    /// after [`Self::close`].
    pub fn should_close(&self) -> bool {
        self.shell.should_close
    }

    pub fn close(&mut self) {
        self.shell.should_close = true;
    }

    pub fn screen_to_client(&self, p: Vec2i) -> Vec2i {
        p - self.client_origin()
    }

    pub fn client_to_screen(&self, p: Vec2i) -> Vec2i {
        p + self.client_origin()
    }

    fn client_origin(&self) -> Vec2i {
        match self.handle.inner_position() {
            Ok(position) => Vec2i::new(position.x, position.y),
            Err(err) => {
                warn!("client origin unavailable: {err}");
                Vec2i::ZERO
            }
        }
    }

    /// Centers the window's outer bounds on the primary monitor.
    pub fn center_on_screen(&mut self) {
        let Some(monitor) = self
            .handle
            .primary_monitor()
            .or_else(|| self.handle.current_monitor())
        else {
            warn!("no monitor to center on");
            return;
        };
        let monitor_position = monitor.position();
        let monitor_size = monitor.size();
        let outer = self.handle.outer_size();
        self.set_position(Vec2i::new(
            monitor_position.x + (monitor_size.width as i32 - outer.width as i32) / 2,
            monitor_position.y + (monitor_size.height as i32 - outer.height as i32) / 2,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseButton;
    use winit::event::{DeviceId, ElementState};

    fn shell() -> Shell {
        Shell::new(WindowAttributes::default())
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(x, y),
        }
    }

    #[test]
    fn events_come_out_in_fifo_order() {
        let mut shell = shell();
        shell.handle_event(cursor_moved(1.0, 1.0));
        shell.handle_event(WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: winit::event::MouseButton::Left,
        });
        shell.handle_event(WindowEvent::Resized(PhysicalSize::new(320, 200)));

        assert_eq!(
            shell.events.pop_front(),
            Some(Event::MouseMove {
                position: Vec2i::new(1, 1)
            })
        );
        assert_eq!(
            shell.events.pop_front(),
            Some(Event::MouseDown {
                position: Vec2i::new(1, 1),
                button: MouseButton::Left,
            })
        );
        assert_eq!(
            shell.events.pop_front(),
            Some(Event::Resize {
                size: Vec2i::new(320, 200)
            })
        );
        assert_eq!(shell.events.pop_front(), None);
    }

    #[test]
    fn button_events_use_the_last_cursor_position() {
        let mut shell = shell();
        shell.handle_event(cursor_moved(42.0, 17.0));
        shell.handle_event(WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Released,
            button: winit::event::MouseButton::Right,
        });

        let events: Vec<_> = std::iter::from_fn(|| shell.events.pop_front()).collect();
        assert_eq!(
            events[1],
            Event::MouseUp {
                position: Vec2i::new(42, 17),
                button: MouseButton::Right,
            }
        );
    }

    #[test]
    fn close_request_sets_should_close_and_queues_quit() {
        let mut shell = shell();
        assert!(!shell.should_close);
        shell.handle_event(WindowEvent::CloseRequested);
        assert!(shell.should_close);
        assert_eq!(shell.events.pop_front(), Some(Event::Quit));
    }

    #[test]
    fn resize_notifications_update_the_size_cache() {
        let mut shell = shell();
        shell.handle_event(WindowEvent::Resized(PhysicalSize::new(1024, 768)));
        assert_eq!(shell.size, Vec2i::new(1024, 768));
    }

    #[test]
    fn unmapped_messages_do_not_queue() {
        let mut shell = shell();
        shell.handle_event(WindowEvent::Focused(true));
        assert!(shell.events.is_empty());
    }
}
