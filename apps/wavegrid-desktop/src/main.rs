use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wavegrid_common::{GridSpec, ViewportSize};
use wavegrid_render_wgpu::{LineBatch, LineRenderer};
use wavegrid_runtime::{Backdrop, FrameHost};
use wavegrid_scene::GridScene;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "wavegrid-desktop", about = "Animated wireframe backdrop window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Lattice columns
    #[arg(long, default_value_t = 22)]
    columns: u32,

    /// Lattice rows
    #[arg(long, default_value_t = 16)]
    rows: u32,

    /// Cell width in world units
    #[arg(long, default_value_t = 120.0)]
    cell_width: f32,

    /// Cell height in world units
    #[arg(long, default_value_t = 80.0)]
    cell_height: f32,
}

/// Frame host backed by the winit redraw queue.
///
/// `request_redraw` coalesces duplicates and has no revoke primitive, so
/// `cancel_frame` is a no-op; the scheduler's Stopped state is what actually
/// gates rendering after a stop.
struct RedrawHost {
    window: Arc<Window>,
}

impl FrameHost for RedrawHost {
    type Handle = ();

    fn schedule_frame(&mut self) {
        self.window.request_redraw();
    }

    fn cancel_frame(&mut self, (): ()) {}
}

struct GpuApp {
    spec: GridSpec,
    backdrop: Option<Backdrop<RedrawHost>>,
    batch: LineBatch,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<LineRenderer>,
}

impl GpuApp {
    fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            backdrop: None,
            batch: LineBatch::new(),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.stop();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("wavegrid")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("wavegrid_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = LineRenderer::new(&device, surface_format);

        let scene = GridScene::new(self.spec);
        let host = RedrawHost {
            window: window.clone(),
        };
        let mut backdrop = Backdrop::new(
            scene,
            host,
            ViewportSize::new(size.width, size.height),
        );
        backdrop.start();

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.backdrop = Some(backdrop);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shut_down(event_loop);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.shut_down(event_loop);
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                }
                if let Some(backdrop) = &mut self.backdrop {
                    backdrop.handle_resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(backdrop) = &mut self.backdrop {
                    backdrop.handle_pointer_move(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(surface), Some(device), Some(queue), Some(renderer)) =
                    (&self.surface, &self.device, &self.queue, &self.renderer)
                else {
                    return;
                };
                let Some(backdrop) = &mut self.backdrop else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                backdrop.render_frame(&mut self.batch);
                renderer.render(device, queue, &view, backdrop.viewport(), &self.batch);

                output.present();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let spec = GridSpec::new(cli.columns, cli.rows, cli.cell_width, cli.cell_height)?;

    tracing::info!("wavegrid-desktop starting");

    let event_loop = EventLoop::new()?;
    // Frames are driven by the scheduler's redraw requests, not a busy loop.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = GpuApp::new(spec);
    event_loop.run_app(&mut app)?;

    Ok(())
}
