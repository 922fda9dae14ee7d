//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  CoreSystems-        │
//  │   ↓                      │    │  Orchestrator        │
//  │  InputProcessor          │    │   ↓                  │
//  │   ├─ Cursor / touch      │    │  SceneManager        │
//  │   └─ Arrow keys, swipes  │    │   ↓                  │
//  │   ↓                      │    │  Scene::update/draw  │
//  │  InputBuffer             │    │   ↓                  │
//  │   ├─ pointer (last wins) │    │  Surface             │
//  │   ├─ viewport (last wins)│    └──────────────────────┘
//  │   └─ switches (ordered)  │         ↑          │
//  │   ↓                      │         │          │
//  │  RedrawRequested (flush) │         │          │
//  │   ↓                      │         │          │
//  │  Channel ────────────────┼─────────┘          │
//  │                          │   PlatformEvent    │
//  │  Window title  ◄─────────┼────────────────────┘
//  └──────────────────────────┘   CoreEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent as one FrameInput
//    → Core applies it at its own fixed TPS
//    → Idle frames are NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input lands in the core strictly
//   between ticks, never in the middle of an update/draw pair
// - **Graceful channel disconnect**: if the core thread dies, the platform
//   logs a warning and keeps running so the window can still be closed
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::Viewport;
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Initial window settings.
#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    /// Title prefix; the active scene name is appended after ` | `.
    pub title: String,

    /// Initial inner size in logical pixels.
    pub viewport: Viewport,
}

//=== Platform ============================================================

/// Window manager and input aggregator.
///
/// Runs on the main thread and exchanges messages with the core thread
/// over two channels.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` - no window yet
/// 2. **Execution**: `platform.run()` - enters the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Window settings used on creation and for titles.
    config: WindowConfig,

    /// Current title, kept in sync with the active scene.
    title: String,

    /// Buffers host input until the frame boundary.
    buffer: InputBuffer,

    /// Channel to the core thread.
    event_sender: Sender<PlatformEvent>,

    /// Channel from the core thread.
    core_events: Receiver<CoreEvent>,

    /// Converts Winit events to host input.
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance. The window is created lazily in
    /// `resumed()`.
    pub fn new(
        config: WindowConfig,
        event_sender: Sender<PlatformEvent>,
        core_events: Receiver<CoreEvent>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: config.title.clone(),
            config,
            buffer: InputBuffer::new(),
            event_sender,
            core_events,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms where Winit
    /// requires it (macOS/iOS).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends this frame's buffered input to the core thread.
    ///
    /// If the channel is disconnected (core thread exited early), the
    /// input is dropped with a warning so the window stays closable.
    fn flush_input_buffer(&mut self) {
        let Some(frame) = self.buffer.drain() else {
            return;
        };

        trace!(
            target: "platform::input",
            "Flushing frame: pointer {:?}, viewport {:?}, {} switches",
            frame.pointer,
            frame.viewport,
            frame.switches.len()
        );

        if self.event_sender.send(PlatformEvent::Inputs(frame)).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping frame input");
        }
    }

    /// Drains core events and updates the title. Returns `true` if the
    /// title changed.
    fn poll_core_events(&mut self) -> bool {
        let mut changed = false;

        for event in self.core_events.try_iter() {
            match event {
                CoreEvent::SceneActivated { index, name } => {
                    info!(target: "platform", "Scene {} active: {}", index, name);
                    self.title = format!("{} | {}", self.config.title, name);
                    changed = true;
                }
            }
        }

        if changed {
            if let Some(window) = &self.window {
                window.set_title(&self.title);
            }
        }
        changed
    }

    fn send_window_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core thread already gone at shutdown");
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        self.poll_core_events();

        let size = LogicalSize::new(self.config.viewport.width, self.config.viewport.height);
        let attrs = WindowAttributes::default()
            .with_title(self.title.as_str())
            .with_inner_size(size);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let inner = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    inner.width,
                    inner.height,
                    window.scale_factor()
                );
                self.buffer.push_viewport(Viewport::new(inner.width as f32, inner.height as f32));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.send_window_closed();
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send_window_closed();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Resized to {}x{}", size.width, size.height);
                self.buffer.push_viewport(Viewport::new(size.width as f32, size.height as f32));
            }

            WindowEvent::CursorMoved { position, .. } => {
                let change = self.input_processor.process_cursor_moved(position.x as f32, position.y as f32);
                self.buffer.push_pointer(change);
            }

            WindowEvent::CursorLeft { .. } => {
                self.buffer.push_pointer(self.input_processor.process_cursor_left());
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(direction) = self.input_processor.process_key_event(key_event) {
                    debug!(target: "platform::input", "Scene switch requested: {:?}", direction);
                    self.buffer.push_switch(direction);
                }
            }

            WindowEvent::Touch(touch) => {
                let outcome = self.input_processor.process_touch(
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                    touch.location.y as f32,
                );
                if let Some(change) = outcome.pointer {
                    self.buffer.push_pointer(change);
                }
                if let Some(direction) = outcome.switch {
                    debug!(target: "platform::input", "Swipe: {:?}", direction);
                    self.buffer.push_switch(direction);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush buffered input, pick up title changes
                self.flush_input_buffer();
                self.poll_core_events();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform_bridge::PointerChange;
    use crate::core::scene::SceneDirection;
    use crossbeam_channel::unbounded;
    use glam::Vec2;

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<CoreEvent>) {
        let (tx, rx) = unbounded();
        let (core_tx, core_rx) = unbounded();
        let config = WindowConfig {
            title: "Aetheric Fields".to_string(),
            viewport: Viewport::default(),
        };
        (Platform::new(config, tx, core_rx), rx, core_tx)
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _rx, _core) = platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
        assert_eq!(platform.title, "Aetheric Fields");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _core) = platform();

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_frame() {
        let (mut platform, rx, _core) = platform();

        platform.buffer.push_switch(SceneDirection::Next);
        platform.buffer.push_pointer(PointerChange::Moved(Vec2::new(1.0, 2.0)));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(frame)) => {
                assert_eq!(frame.switches, vec![SceneDirection::Next]);
                assert_eq!(frame.pointer, Some(PointerChange::Moved(Vec2::new(1.0, 2.0))));
                assert_eq!(frame.viewport, None);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx, _core) = platform();
        platform.buffer.push_switch(SceneDirection::Previous);

        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (mut platform, rx, _core) = platform();
        platform.buffer.push_switch(SceneDirection::Next);

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    //=====================================================================
    // Core Event Tests
    //=====================================================================

    #[test]
    fn scene_activation_updates_title() {
        let (mut platform, _rx, core) = platform();

        core.send(CoreEvent::SceneActivated { index: 0, name: "Antigravity" }).unwrap();
        core.send(CoreEvent::SceneActivated { index: 1, name: "Gravity" }).unwrap();

        assert!(platform.poll_core_events());
        assert_eq!(platform.title, "Aetheric Fields | Gravity");
        assert!(!platform.poll_core_events());
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
