//! Animated tour of the canvas primitives: rectangles in every fill/stroke
//! mode, circles, ellipses, a polygon, lines and pixels, paced to 60 FPS.
//! Left-click moves the highlighted rectangle; Escape exits.

use tracing::info;
use zinc::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut window = Window::new("Canvas Demo", Vec2i::new(800, 600))?;
    window.center_on_screen();
    window.show();

    let mut canvas = Canvas::new(window.handle())?;
    let mut timer = Timer::new(PacingMode::Precise);

    let mut time = 0.0_f32;
    let mut marker = Vec2i::new(400, 300);

    while !window.should_close() {
        timer.tick();
        time += timer.delta_time();

        window.process_messages();
        while let Some(event) = window.poll_event() {
            match event {
                Event::Quit => window.close(),
                Event::Resize { size } => {
                    info!("resize: {} x {}", size.x, size.y);
                    canvas.resize()?;
                }
                Event::KeyDown { key: KeyCode::Escape } => window.close(),
                Event::MouseDown { position, button: MouseButton::Left } => marker = position,
                _ => {}
            }
        }

        render(&mut canvas, time, marker);
        timer.sleep_to_fps(60.0);
    }

    Ok(())
}

fn render(canvas: &mut Canvas, time: f32, marker: Vec2i) {
    canvas.clear(Color::new(20, 20, 30, 255));

    // One rectangle per mode.
    canvas.stroke_rect(Recti::new(50, 50, 100, 80), Color::WHITE, 1);
    canvas.stroke_rect(Recti::new(200, 50, 100, 80), Color::RED, 3);
    canvas.fill_rect(Recti::new(350, 50, 100, 80), Color::GREEN);
    canvas.draw_rect(
        Recti::new(500, 50, 100, 80),
        Style::fill_stroke(Color::BLUE, Color::YELLOW, 2),
    );

    // A grid of pulsing fills.
    for x in 0..10 {
        for y in 0..5 {
            let color = Color::new(
                (127.0 + 127.0 * (time + x as f32 * 0.5).sin()) as i32,
                (127.0 + 127.0 * (time + y as f32 * 0.3).sin()) as i32,
                (127.0 + 127.0 * (time + (x + y) as f32 * 0.2).sin()) as i32,
                255,
            );
            canvas.fill_rect(Recti::new(50 + x * 35, 200 + y * 35, 30, 30), color);
        }
    }

    // The marker follows the last left click.
    canvas.draw_rect(
        Recti::new(marker.x - 25, marker.y - 25, 50, 50),
        Style::fill_stroke(Color::new(255, 200, 100, 255), Color::WHITE, 2),
    );

    // Circle and ellipse variations.
    canvas.stroke_circle(Vec2i::new(650, 250), 40, Color::WHITE, 2);
    canvas.fill_circle(Vec2i::new(650, 350), 30, Color::new(100, 255, 255, 255));
    canvas.draw_circle(
        Vec2i::new(650, 450),
        35,
        Style::fill_stroke(Color::MAGENTA, Color::WHITE, 3),
    );
    canvas.draw_ellipse(
        Vec2i::new(400, 160),
        Vec2i::new(60, 20),
        Style::fill_stroke(Color::new(60, 60, 120, 255), Color::CYAN, 1),
    );

    // A spinning triangle.
    let spin = time * 0.8;
    let triangle: Vec<Vec2i> = (0..3)
        .map(|i| {
            let angle = spin + i as f32 * std::f32::consts::TAU / 3.0;
            Vec2i::new(
                (150.0 + 40.0 * angle.cos()) as i32,
                (520.0 + 40.0 * angle.sin()) as i32,
            )
        })
        .collect();
    canvas.draw_polygon(&triangle, Style::fill_stroke(Color::GREEN, Color::WHITE, 1));

    // A fan of sine-driven lines.
    for i in 0..20 {
        canvas.draw_line(
            Vec2i::new(300 + i * 20, 450),
            Vec2i::new(300 + i * 20, 450 + (50.0 * (time * 2.0 + i as f32 * 0.5).sin()) as i32),
            Color::WHITE,
            1,
        );
    }

    // Orbiting pixels.
    for i in 0..100 {
        let angle = time + i as f32 * 0.1;
        let p = Vec2i::new(
            (650.0 + 40.0 * angle.cos()) as i32,
            (550.0 + 40.0 * angle.sin()) as i32,
        );
        canvas.draw_pixel(p, Color::new((255.0 * (angle.sin() + 1.0) / 2.0) as i32, 128, 255, 255));
    }

    canvas.present();
}
