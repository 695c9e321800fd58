// SPDX-License-Identifier: MIT OR Apache-2.0
//! Main site application setup and event loop.

use crate::contact::{ContactSubmitter, LogSubmitter, OutboxSubmitter};
use crate::page::Page;
use crate::pages::{AboutPage, ContactPage, Footer, Header, HeroPage, WorksPage, CONTENT_WIDTH};
use crate::settings::SiteSettings;
use crate::shell::PageShell;
use crate::theme::{install_fonts, SiteTheme};
use egui_wgpu::wgpu;
use kochillium_sequencer::{ConfigError, LoadingScreen};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Site application errors
#[derive(Debug, Error)]
pub enum SiteError {
    /// Window creation failed
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// Renderer initialization failed
    #[error("Failed to initialize renderer: {0}")]
    RendererInit(String),

    /// Event loop error
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Settings serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// Settings written by a newer build
    #[error("Settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// Invalid loading sequence
    #[error("Loading sequence: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Graphics state for wgpu rendering
struct GraphicsState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    egui_renderer: egui_wgpu::Renderer,
    clear_color: wgpu::Color,
}

impl GraphicsState {
    fn new(window: Arc<Window>, background: egui::Color32) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| SiteError::RendererInit(e.to_string()))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| SiteError::RendererInit("No suitable GPU adapter".to_string()))?;

        tracing::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Ko-ChilLium Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            },
            None,
        ))
        .map_err(|e| SiteError::RendererInit(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| SiteError::RendererInit("Surface has no formats".to_string()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        let [r, g, b, _] = egui::Rgba::from(background).to_array();
        Ok(Self {
            surface,
            device,
            queue,
            config,
            egui_renderer,
            clear_color: wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: 1.0,
            },
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    #[allow(unsafe_code)] // Workaround for wgpu 23 lifetime issue with RenderPass
    fn render(
        &mut self,
        egui_ctx: &egui::Context,
        full_output: egui::FullOutput,
        window: &Window,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Site Encoder"),
        });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        // wgpu 23 has a 'static lifetime bound issue with RenderPass
        let encoder_ptr = Box::into_raw(Box::new(encoder));

        {
            // SAFETY: encoder_ptr is valid and is reclaimed after the render pass is dropped
            let encoder_ref: &'static mut wgpu::CommandEncoder = unsafe { &mut *encoder_ptr };

            let mut render_pass = encoder_ref.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Site Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        // SAFETY: the render pass borrowing the encoder has been dropped
        let encoder = unsafe { Box::from_raw(encoder_ptr) };

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        Ok(())
    }
}

/// Running state of the site
struct SiteRunning {
    window: Arc<Window>,
    graphics: GraphicsState,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    site: SiteInner,
}

/// Pages and the shell that switches between them
struct SiteInner {
    shell: PageShell,
    header: Header,
    works: WorksPage,
    contact: ContactPage,
    theme: SiteTheme,
    shown_page: Option<Page>,
}

impl SiteInner {
    fn new(settings: &SiteSettings, theme: SiteTheme) -> Result<Self> {
        let shell = PageShell::new(
            settings.loading.clone(),
            settings.show_loading_screen,
            Duration::from_millis(settings.content_fade_ms),
        )?;

        let submitter: Box<dyn ContactSubmitter> = match &settings.contact.outbox_dir {
            Some(dir) => {
                tracing::info!("Contact submissions go to {}", dir.display());
                Box::new(OutboxSubmitter::new(dir.clone()))
            }
            None => Box::new(LogSubmitter::new()),
        };

        Ok(Self {
            shell,
            header: Header::new(),
            works: WorksPage::new(),
            contact: ContactPage::new(submitter),
            theme,
            shown_page: None,
        })
    }

    fn update(&mut self, ctx: &egui::Context, window: &Window) {
        self.shell.update();

        if let Some(sequencer) = self.shell.sequencer() {
            let response = LoadingScreen::show(ctx, sequencer, &self.theme.loading_style());
            if response.skip_requested {
                self.shell.skip_loading();
            }
            return;
        }

        let Self {
            shell,
            header,
            works,
            contact,
            theme,
            ..
        } = self;

        egui::TopBottomPanel::top("site_header")
            .frame(egui::Frame::none().fill(theme.colors.cream).inner_margin(egui::Margin::symmetric(32.0, 16.0)))
            .show(ctx, |ui| {
                ui.set_opacity(shell.content_opacity());
                if let Some(page) = header.ui(ui, shell.current_page(), theme) {
                    shell.navigate(page);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_opacity(shell.content_opacity());
            let page = shell.current_page();
            egui::ScrollArea::vertical()
                .id_salt(page)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        let picked = match page {
                            Page::Home => HeroPage::ui(ui, theme),
                            Page::About => {
                                AboutPage::ui(ui, theme);
                                None
                            }
                            Page::Works => {
                                works.ui(ui, theme);
                                None
                            }
                            Page::Contact => {
                                contact.ui(ui, theme);
                                None
                            }
                        };
                        let picked = Footer::ui(ui, theme).or(picked);
                        if let Some(page) = picked {
                            shell.navigate(page);
                        }
                    });
                });
        });

        if self.shell.is_animating() {
            ctx.request_repaint();
        }

        let page = self.shell.current_page();
        if self.shown_page != Some(page) {
            window.set_title(&format!("Ko-ChilLium | {}", page.title()));
            self.shown_page = Some(page);
        }
    }
}

/// Main site application
pub struct SiteApp {
    settings: SiteSettings,
    running: Option<SiteRunning>,
    /// First fatal error raised inside the event loop
    error: Option<SiteError>,
}

impl SiteApp {
    /// Create the application; fails on an invalid loading sequence
    pub fn new(settings: SiteSettings) -> Result<Self> {
        settings.loading.validate()?;
        Ok(Self {
            settings,
            running: None,
            error: None,
        })
    }

    /// Run until the window closes
    pub fn run(settings: SiteSettings) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = SiteApp::new(settings)?;
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<SiteRunning> {
        tracing::info!("Creating site window...");

        let window_attrs = Window::default_attributes()
            .with_title("Ko-ChilLium")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(360, 480));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| SiteError::WindowCreation(e.to_string()))?,
        );

        let theme = SiteTheme::default();
        let graphics = GraphicsState::new(window.clone(), theme.colors.cream)?;

        let egui_ctx = egui::Context::default();
        theme.apply(&egui_ctx);
        install_fonts(&egui_ctx, self.settings.cjk_font_path.as_deref());

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(2 * 1024),
        );

        // Starts the loading sequence clock
        let site = SiteInner::new(&self.settings, theme)?;

        tracing::info!("Site initialized, window size: {:?}", window.inner_size());

        Ok(SiteRunning {
            window,
            graphics,
            egui_ctx,
            egui_state,
            site,
        })
    }
}

impl ApplicationHandler for SiteApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(e) => {
                tracing::error!("Startup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(running) = &mut self.running else {
            return;
        };

        let response = running.egui_state.on_window_event(&running.window, &event);

        if response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                tracing::debug!("Window resized to {:?}", new_size);
                running.graphics.resize(new_size);
                running.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let raw_input = running.egui_state.take_egui_input(&running.window);
                let full_output = running.egui_ctx.run(raw_input, |ctx| {
                    running.site.update(ctx, &running.window);
                });

                running
                    .egui_state
                    .handle_platform_output(&running.window, full_output.platform_output.clone());

                match running.graphics.render(&running.egui_ctx, full_output, &running.window) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = running.window.inner_size();
                        running.graphics.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("Out of GPU memory!");
                        event_loop.exit();
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        tracing::warn!("Surface timeout");
                    }
                }

                running.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }
}
