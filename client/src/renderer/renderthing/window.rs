use std::{sync::Arc, time::Duration};

use log::{debug, info};
use pixels::{wgpu::TextureFormat, Pixels, PixelsBuilder, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::new(config.frame_delay);

        Self {
            config,
            resumed_window: None,
            sleeper,
        }
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub frame_delay: Duration,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width as f64, self.config.height as f64);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .expect("Creating window")
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .expect("Creating pixels buffer")
        };

        info!(
            "Window created ({}x{} logical)",
            self.config.width, self.config.height
        );

        window.request_redraw();

        self.resumed_window = Some(ResumedWindow { window, pixels });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        // SAFETY: I don't think winit will ever call window_event before resumed.
        let ResumedWindow { window, pixels } = self.resumed_window.as_mut().unwrap();

        match event {
            WindowEvent::RedrawRequested => {
                let PhysicalSize { width, height } = window.inner_size();

                let next_frame = RenderFrame {
                    width,
                    height,
                    buffer: pixels.frame_mut(),
                };

                (self.config.draw_callback)(next_frame);

                pixels.render().expect("Rendering with pixels");

                // The loop is deliberately synchronous: draw, then hold
                // the thread for the rest of the frame delay before
                // asking for the next redraw.
                self.sleeper.sleep();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                debug!("Surface resized to {width}x{height}");
                pixels.resize_surface(width, height).unwrap();
                pixels.resize_buffer(width, height).unwrap();
                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            _ => {}
        }
    }
}
