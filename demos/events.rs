//! Opens a window and logs the events it produces. Escape or closing the
//! window exits.

use tracing::info;
use zinc::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut window = Window::new("Event Window", Vec2i::new(800, 600))?;
    window.center_on_screen();
    window.show();

    let timer = Timer::new(PacingMode::Simple);
    while !window.should_close() {
        window.process_messages();

        while let Some(event) = window.poll_event() {
            match event {
                Event::MouseMove { position } => {
                    info!("mouse at ({}, {})", position.x, position.y)
                }
                Event::MouseDown { position, button } => {
                    info!("{button:?} down at ({}, {})", position.x, position.y)
                }
                Event::Resize { size } => info!("resize: {} x {}", size.x, size.y),
                Event::KeyDown { key } => {
                    info!("key down: {key:?}");
                    if key == KeyCode::Escape {
                        window.close();
                    }
                }
                Event::Quit => window.close(),
                _ => {}
            }
        }

        timer.sleep_to_fps(60.0);
    }

    Ok(())
}
