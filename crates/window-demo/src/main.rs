// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed host that renders the engine to a window via RGBA
// blit (CPU) using winit + softbuffer. Draw with the mouse right of the anchor,
// press R to reveal, G to refresh all charts.

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::time::Instant;

use hindsight_core::{
    EraLine, Gallery, PointerEvent, PointerKind, Question, RenderOptions, Slot,
};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const KEY: &str = "population";

fn main() {
    let mut questions = BTreeMap::new();
    questions.insert(KEY.to_string(), sample_question());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Hindsight — draw the missing years (R reveals, G resets)")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 400.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut gallery = Gallery::mount(&questions, &slots_for(size)).expect("mount gallery");

    let mut mouse_down = false;
    let mut cursor: Option<(f64, f64)> = None;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, cf| {
        if *cf != ControlFlow::Exit {
            *cf = ControlFlow::Poll;
        }
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    gallery.notify_resize(Instant::now());
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    let kind = if mouse_down { PointerKind::Drag } else { PointerKind::Move };
                    forward_pointer(&mut gallery, position.x, position.y, kind);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left {
                        mouse_down = state == ElementState::Pressed;
                        if mouse_down {
                            if let Some((x, y)) = cursor {
                                forward_pointer(&mut gallery, x, y, PointerKind::Click);
                            }
                        }
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match key {
                    VirtualKeyCode::R => {
                        if let Some(inst) = gallery.instance_mut(KEY) {
                            if inst.begin_reveal() {
                                println!("Revealing...");
                            } else if !inst.completed() {
                                println!("Finish drawing to the right edge first");
                            }
                        }
                    }
                    VirtualKeyCode::G => {
                        gallery.reset_all(&slots_for(size)).expect("reset");
                        println!("Charts reset");
                    }
                    VirtualKeyCode::Escape => {
                        *cf = ControlFlow::Exit;
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                let dt = now - last_frame;
                last_frame = now;
                gallery.advance_all(dt);
                if gallery
                    .poll_resize(now, &slots_for(size))
                    .expect("rebuild after resize")
                {
                    println!("Rebuilt at {}x{}", size.width, size.height);
                }
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                draw(&gallery, &mut surface, size);
            }
            _ => {}
        }
    });
}

fn slots_for(size: winit::dpi::PhysicalSize<u32>) -> Vec<Slot> {
    vec![Slot::new(KEY, size.width.max(1) as i32).with_height(size.height.max(1) as i32)]
}

/// Map window pixels into plot-relative coordinates and feed the instance.
fn forward_pointer(gallery: &mut Gallery, x: f64, y: f64, kind: PointerKind) {
    let Some(inst) = gallery.instance_mut(KEY) else {
        return;
    };
    let insets = inst.layout().insets;
    let px = (x - insets.left as f64) as f32;
    let py = (y - insets.top as f64) as f32;
    let outcome = inst.pointer(PointerEvent::new(kind, px, py));
    if outcome.became_complete {
        println!("Drawing complete — press R to reveal");
    }
}

fn draw(
    gallery: &Gallery,
    surface: &mut softbuffer::Surface,
    size: winit::dpi::PhysicalSize<u32>,
) {
    let Some(inst) = gallery.instance(KEY) else {
        return;
    };
    let w = size.width.max(1);
    let h = size.height.max(1);
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .ok();

    let mut opts = RenderOptions::default();
    opts.viewport_width = w as f32;

    // Render to RGBA and convert to 0RGB u32 for softbuffer
    let (rgba, rw, rh, _) = match inst.render_to_rgba8(&opts) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("render error: {e:?}");
            return;
        }
    };
    let mut frame = match surface.buffer_mut() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("frame error: {e:?}");
            return;
        }
    };
    // The freshly rebuilt instance and the surface can disagree for one
    // frame mid-resize; blit the overlapping rows only.
    let copy_w = (rw as u32).min(w) as usize;
    let copy_h = (rh as u32).min(h) as usize;
    for row in 0..copy_h {
        for col in 0..copy_w {
            let s = (row * rw as usize + col) * 4;
            let r = rgba[s] as u32;
            let g = rgba[s + 1] as u32;
            let b = rgba[s + 2] as u32;
            frame[row * w as usize + col] = (r << 16) | (g << 8) | b;
        }
    }
    if let Err(e) = frame.present() {
        eprintln!("present error: {e:?}");
    }
}

fn sample_question() -> Question {
    Question::new(vec![
        (1880, 45.2),
        (1890, 49.4),
        (1900, 56.4),
        (1910, 64.9),
        (1920, 61.8),
        (1930, 65.1),
        (1940, 69.8),
        (1950, 68.7),
        (1960, 72.7),
        (1970, 77.7),
        (1980, 78.3),
        (1990, 79.8),
        (2000, 82.2),
        (2010, 81.8),
    ])
    .with_years_axis(
        "Jahr",
        vec![
            EraLine::new(1910, "black"),
            EraLine::new(1950, "black"),
            EraLine::new(1990, "red"),
            EraLine::new(2010, "red"),
        ],
    )
    .with_unit("Mio.")
    .with_precision(1)
}
