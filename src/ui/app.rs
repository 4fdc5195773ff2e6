// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// Picker window: apply input events as they arrive, present the composed frame.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, anyhow};
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{CursorIcon, Icon, Window, WindowId};

use super::input::{InputEvent, InputTracker, dispatch};
use crate::app::AppModel;
use crate::app::clipboard::SystemClipboard;
use crate::app::model::CursorHint;
use crate::app::update::{Services, UpdateResult, update};
use crate::app::view::canvas::{self, Frame};
use crate::app::view::footer;
use crate::config::AppConfig;
use crate::domain::operations::RegionExporter;
use crate::fl;

/// Run the picker until the window is closed or Escape is pressed.
pub fn run(model: AppModel, config: &AppConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to start the event loop: {e}"))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut picker = Picker::new(model, config);
    log::info!("Exporting to {}", picker.exporter.dir().display());

    event_loop
        .run_app(&mut picker)
        .map_err(|e| anyhow!("event loop failed: {e}"))?;

    picker.error.map_or(Ok(()), Err)
}

struct Picker {
    model: AppModel,
    base: Frame,
    frame: Frame,
    exporter: RegionExporter,
    clipboard: SystemClipboard,
    tracker: InputTracker,
    icon_path: Option<PathBuf>,
    surface: Option<PickerSurface>,
    error: Option<anyhow::Error>,
}

impl Picker {
    fn new(model: AppModel, config: &AppConfig) -> Self {
        let base = Frame::from_rgba(&model.display_frame);
        let frame = canvas::view(&model, &base);
        Self {
            model,
            base,
            frame,
            exporter: RegionExporter::new(&config.export_dir),
            clipboard: SystemClipboard::default(),
            tracker: InputTracker::default(),
            icon_path: config.icon_path.clone(),
            surface: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_input(&mut self, event_loop: &ActiveEventLoop, input: InputEvent) {
        if input == InputEvent::KeyPressed(KeyCode::Escape) {
            event_loop.exit();
            return;
        }
        let Some(message) = dispatch(input) else {
            return;
        };

        let mut services = Services {
            clipboard: &mut self.clipboard,
            exporter: &self.exporter,
        };
        let result = update(&mut self.model, message, &mut services);

        let Some(surface) = &self.surface else {
            return;
        };
        if result == UpdateResult::Redraw {
            self.frame = canvas::view(&self.model, &self.base);
            surface.window.set_title(&title(&self.model));
            surface.window.request_redraw();
        }
        surface.window.set_cursor(cursor_icon(self.model.cursor()));
    }
}

impl ApplicationHandler for Picker {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        let icon = self.icon_path.as_deref().and_then(|path| {
            load_window_icon(path)
                .map_err(|e| log::warn!("Window icon not loaded: {e:#}"))
                .ok()
        });

        match PickerSurface::open(event_loop, &title(&self.model), self.base.size(), icon) {
            Ok(surface) => {
                surface.window.set_cursor(cursor_icon(self.model.cursor()));
                self.surface = Some(surface);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Some(surface) = &mut self.surface
                    && let Err(e) = surface.present(&self.frame)
                {
                    self.fail(event_loop, e);
                }
            }
            event => {
                if let Some(input) = self.tracker.translate(&event) {
                    self.handle_input(event_loop, input);
                }
            }
        }
    }
}

/// The window and the software surface frames are presented on.
struct PickerSurface {
    window: Rc<Window>,
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
}

impl PickerSurface {
    fn open(
        event_loop: &ActiveEventLoop,
        title: &str,
        (width, height): (u32, u32),
        icon: Option<Icon>,
    ) -> anyhow::Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false)
            .with_window_icon(icon);
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| anyhow!("failed to open the picker window: {e}"))?;
        let window = Rc::new(window);

        let context =
            Context::new(Rc::clone(&window)).map_err(|e| anyhow!("surface context: {e}"))?;
        let surface =
            Surface::new(&context, Rc::clone(&window)).map_err(|e| anyhow!("surface: {e}"))?;

        Ok(Self {
            window,
            _context: context,
            surface,
        })
    }

    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .map_err(|e| anyhow!("failed to resize surface: {e}"))?;
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("failed to map surface: {e}"))?;
        frame.copy_into(&mut buffer, size.width as usize, size.height as usize);
        buffer
            .present()
            .map_err(|e| anyhow!("failed to present frame: {e}"))
    }
}

/// Decode an image file into a window icon.
fn load_window_icon(path: &Path) -> anyhow::Result<Icon> {
    let image = image::open(path)
        .with_context(|| format!("failed to read {}", path.display()))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height)
        .with_context(|| format!("invalid icon {}", path.display()))
}

fn title(model: &AppModel) -> String {
    format!("{}  |  {}", fl!("app-title"), footer::view(model))
}

fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Crosshair => CursorIcon::Crosshair,
        CursorHint::Hand => CursorIcon::Grab,
        CursorHint::Grabbing => CursorIcon::Grabbing,
    }
}
