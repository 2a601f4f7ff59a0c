//! Native platform layer
//!
//! Owns the window, GPU state and event loop. Handles:
//! - Pointer and keyboard input
//! - Resize
//! - Fixed-delay frame pacing (one simulation step per frame)

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::error::PongError;
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, draw_list, tick};

/// Open the window and run the game until quit
pub fn run(settings: Settings) -> Result<(), PongError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Game instance holding all state
struct App {
    settings: Settings,
    state: GameState,
    input: TickInput,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    next_frame: Instant,
    /// Fatal error raised inside the event loop
    error: Option<PongError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let state = GameState::new(settings.width as i32, settings.height as i32);
        let input = TickInput {
            pointer_y: state.player.center_y(),
            pause: false,
        };
        Self {
            settings,
            state,
            input,
            window: None,
            render_state: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PongError> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.as_str())
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attributes)?);

        // The platform may not honor the requested size; lay out for the real one
        let size = window.inner_size();
        if size.width > 0 && size.height > 0 {
            self.state = GameState::new(size.width as i32, size.height as i32);
            self.input.pointer_y = self.state.player.center_y();
        }

        let render_state = pollster::block_on(init_gpu(
            window.clone(),
            size.width,
            size.height,
            self.settings.vsync,
        ))?;

        log::info!(
            "Window {}x{}, frame delay {}ms",
            size.width,
            size.height,
            self.settings.frame_delay_ms
        );

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.next_frame = Instant::now();
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
            PhysicalKey::Code(KeyCode::Space | KeyCode::KeyP) => self.input.pause = true,
            _ => {}
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        // Minimized windows report zero; keep the last arena
        if size.width == 0 || size.height == 0 {
            return;
        }
        log::debug!("Resized to {}x{}", size.width, size.height);
        self.state.resize(size.width as i32, size.height as i32);
        if let Some(render_state) = self.render_state.as_mut() {
            render_state.resize(size.width, size.height);
        }
    }

    /// Step the simulation once and clear one-shot inputs
    fn step(&mut self) {
        tick(&mut self.state, &self.input);
        self.input.pause = false;
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(&draw_list(&self.state)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

async fn init_gpu(
    window: Arc<Window>,
    width: u32,
    height: u32,
    vsync: bool,
) -> Result<RenderState, PongError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });
    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(surface, &adapter, width, height, vsync).await
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::CursorMoved { position, .. } => {
                self.input.pointer_y = position.y.round() as i32;
            }
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::RedrawRequested => self.render(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_frame {
            self.step();
            window.request_redraw();
            self.next_frame = now + self.settings.frame_delay();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!(
            "Exiting after {} frames, final score {} - {}",
            self.state.frame,
            self.state.score.player,
            self.state.score.enemy
        );
    }
}
