use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, StartCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::EventQueue;
use crate::input::platform::winit::translate_window_event;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Inner size in logical pixels.
    pub size: LogicalSize<u32>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "kumite".to_string(),
            size: LogicalSize::new(768, 384),
            resizable: false,
        }
    }
}

/// Entry point: opens one window and drives `app` until it exits.
pub struct Runtime;

impl Runtime {
    /// Blocks until the app returns [`AppControl::Exit`] or the platform
    /// closes the event loop. Window or GPU creation failures are returned
    /// after the loop has shut down.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    events: EventQueue,

    started: bool,
    shut_down: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A: App> RuntimeState<A> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            events: EventQueue::new(),
            started: false,
            shut_down: false,
            startup_error: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    /// Tears down in a fixed order: the app's resources, then the GPU, then
    /// the window. Safe to call more than once.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if !self.shut_down {
            self.shut_down = true;

            if self.started {
                self.app.on_exit();
            }

            if let Some(entry) = self.window.take() {
                // ouroboros drops the borrowing `gpu` before `window`.
                drop(entry);
                log::debug!("gpu and window released");
            }
            self.events.clear();
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let (app, events) = (&mut self.app, &mut self.events);
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { id: window_id, window: fields.window },
                gpu: fields.gpu,
                events,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            log::info!("app requested exit");
            self.shutdown(event_loop);
        }
    }
}

impl<A: App> ApplicationHandler for RuntimeState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.shut_down {
            return;
        }

        let mut entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(err) => {
                log::error!("{err:#}");
                self.startup_error = Some(err);
                self.shutdown(event_loop);
                return;
            }
        };

        if !self.started {
            let app = &mut self.app;
            entry.with_mut(|fields| {
                let mut ctx = StartCtx {
                    window: WindowCtx { id: fields.window.id(), window: fields.window },
                    gpu: fields.gpu,
                };
                app.on_start(&mut ctx);
            });
            self.started = true;
        }

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shut_down {
            event_loop.exit();
            return;
        }

        // Continuous redraw; the app paces itself.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.shut_down {
            event_loop.exit();
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            log::trace!("input {ev:?}");
            self.events.push(ev);
        }

        match event {
            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),
            // CloseRequested was queued as InputEvent::Quit; the app decides.
            _ => {}
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown(event_loop);
    }
}
