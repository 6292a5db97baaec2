//////////////////////////////////////////////////
// Module

pub mod bridge;
pub mod engine;
pub mod file;
pub mod surface;

//////////////////////////////////////////////////
// Prelude

pub mod prelude {
    pub use crate::bridge::{AppState, Bridge};
    pub use crate::engine::Engine;
    pub use crate::file::Assets;
    pub use crate::surface::{SurfaceEvents, SurfaceState};
    pub use crate::Host;
    pub use log::LevelFilter;
    #[cfg(target_os = "android")]
    pub use winit::platform::android::activity::AndroidApp;
}

//////////////////////////////////////////////////
// Using

use log::LevelFilter;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::Window;

#[cfg(target_os = "android")]
use winit::platform::android::activity::AndroidApp;
#[cfg(target_os = "android")]
use winit::platform::android::EventLoopBuilderExtAndroid;

use crate::bridge::{AppState, Bridge};
use crate::engine::Engine;
use crate::file::Assets;

//////////////////////////////////////////////////
// Definition

/// Drives the bridge from the platform event loop. The window lifecycle
/// maps onto the host contract: the first resume creates the engine, later
/// resumes forward `resume`, suspension forwards `pause` before the surface
/// handle is dropped, and every redraw becomes one frame tick.
pub struct Host<E: Engine> {
    bridge: Bridge<E>,
    window: Option<Window>,
    title: String,
    #[cfg(target_os = "android")]
    android_app: AndroidApp,
}

//////////////////////////////////////////////////
// Implementation

#[cfg(target_os = "android")]
impl<E: Engine> Host<E> {
    pub fn new(android_app: AndroidApp, engine: E) -> Self {
        Self {
            bridge: Bridge::new(engine),
            window: None,
            title: String::from("engine-gl"),
            android_app,
        }
    }

    pub fn with_logging(self, level_filter: LevelFilter) -> Self {
        android_logger::init_once(android_logger::Config::default().with_max_level(level_filter));
        self
    }

    fn assets(&self) -> Assets {
        Assets::new(&self.android_app)
    }
}

#[cfg(not(target_os = "android"))]
impl<E: Engine> Host<E> {
    pub fn new(engine: E) -> Self {
        Self {
            bridge: Bridge::new(engine),
            window: None,
            title: String::from("engine-gl"),
        }
    }

    pub fn with_logging(self, level_filter: LevelFilter) -> Self {
        env_logger::builder()
            .filter_level(level_filter) // Default Log Level
            .parse_default_env()
            .init();
        self
    }

    fn assets(&self) -> Assets {
        Assets::new()
    }
}

impl<E: Engine> Host<E> {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn bridge(&self) -> &Bridge<E> {
        &self.bridge
    }

    pub fn run(mut self) {
        log::info!("Starting lifecycle bridge...");

        #[cfg(target_os = "android")]
        let event_loop = EventLoop::builder().with_android_app(self.android_app.clone()).build().unwrap();
        #[cfg(not(target_os = "android"))]
        let event_loop = EventLoop::builder().build().unwrap();

        log::info!("Running event loop...");
        event_loop.run_app(&mut self).unwrap();
    }
}

impl<E: Engine> ApplicationHandler for Host<E> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        log::info!("Resuming lifecycle bridge ...");

        // engine (and audio) come up before any surface wiring
        if self.bridge.app_state() == AppState::Uninitialized {
            self.bridge.on_create(&self.assets());
        } else {
            self.bridge.on_app_resume();
        }

        let window = event_loop.create_window(Window::default_attributes().with_title(&self.title)).unwrap();
        self.bridge.on_surface_created();
        let size = window.inner_size();
        if size.width != 0 && size.height != 0 {
            self.bridge.on_surface_changed(size.width, size.height);
        }
        window.request_redraw();
        self.window = Some(window);
    }

    fn suspended(&mut self, event_loop: &ActiveEventLoop) {
        log::info!("Suspending lifecycle bridge ...");
        let _ = event_loop;

        // pause reaches the engine before the surface goes away
        self.bridge.on_app_pause();
        self.bridge.on_surface_destroyed();
        self.window = None;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: winit::window::WindowId, event: WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => {
                self.bridge.on_draw_frame();
                // continuous rendering, one tick per frame
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            WindowEvent::Resized(size) if size.width != 0 && size.height != 0 => {
                self.bridge.on_surface_changed(size.width, size.height);
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => (),
        }
    }
}
