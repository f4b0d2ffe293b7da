use std::sync::Arc;

use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod fetch;
mod frame;
mod gpu;
mod text;

use fetch::WordMailbox;

const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut demo = false;
    let mut article: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--demo" => demo = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => article = Some(other.to_string()),
        }
    }

    // One mailbox between the fetch worker and the frame loop; a delivered
    // list replaces the whole scene at the next tick.
    let mailbox: WordMailbox = Arc::default();
    if demo {
        *mailbox.lock().unwrap() = Some(fetch::demo_words());
    } else if let Some(url) = article {
        let endpoint =
            std::env::var("LEXIS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        log::info!("analyzing {url} via {endpoint}");
        fetch::spawn_analyze(endpoint, url, mailbox.clone());
    } else {
        log::info!("no article URL given; starting with an empty scene (try --demo)");
    }

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("lexis-3d")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(gpu::GpuState::new(&window)).expect("gpu");
    let font = text::load_font().expect("font");
    let mut atlas = text::GlyphAtlas::new(&state.device, font);
    state.bind_atlas(&atlas);
    let mut ctx = frame::FrameContext::new(mailbox);

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => ctx.on_cursor_moved(position.x as f32, position.y as f32),
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state: button_state, button, .. },
                ..
            } => {
                let pressed = button_state == ElementState::Pressed;
                match button {
                    MouseButton::Left => ctx.on_rotate_button(pressed),
                    MouseButton::Right | MouseButton::Middle => ctx.on_pan_button(pressed),
                    _ => {}
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                ctx.on_scroll(lines);
            }
            Event::AboutToWait => match ctx.frame(&mut state, &mut atlas) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            },
            _ => {}
        })
        .unwrap();
}

fn print_usage() {
    println!("lexis-3d — interactive 3D keyword cloud");
    println!();
    println!("usage: app-native [ARTICLE_URL | --demo]");
    println!();
    println!("  ARTICLE_URL     analyze this article via the analysis service");
    println!("  --demo          use a built-in sample word set, no network");
    println!();
    println!("environment:");
    println!("  LEXIS_ENDPOINT  analysis service base URL (default {DEFAULT_ENDPOINT})");
    println!("  LEXIS_FONT      path to a .ttf font used for labels");
}
