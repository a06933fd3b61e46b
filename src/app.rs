//! Windowing loop: input polling, change-signal consumption, presentation.
//!
//! The loop polls the window every frame, converts the polled pointer and
//! keyboard state into edge-triggered events for the sketch state machine,
//! and repaints the Cairo surface into the window's pixel buffer only when
//! the state raised its change signal. Polling button state every frame
//! means a pointer release can never be missed, even when it happens
//! outside the window.

use crate::config::Config;
use crate::export::{self, ExportTarget};
use crate::input::{Key, PointerButton, SketchState};
use anyhow::{Context as _, Result, anyhow};
use log::{error, info};
use minifb::{KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use std::sync::mpsc;

/// Forwards decoded unicode input from the window to the event loop.
///
/// minifb delivers printable characters through a callback rather than the
/// polled key list; the sink hands them to the loop over a channel so glyph
/// entry sees real text instead of raw key codes.
struct CharSink(mpsc::Sender<char>);

impl minifb::InputCallback for CharSink {
    fn add_char(&mut self, uni_char: u32) {
        if let Some(c) = char::from_u32(uni_char) {
            let _ = self.0.send(c);
        }
    }
}

/// The sketchpad application: window, drawing surface, and session state.
pub struct App {
    window: Window,
    surface: cairo::ImageSurface,
    state: SketchState,
    chars: mpsc::Receiver<char>,
    export_scale: u32,
    export_target: ExportTarget,
    width: u32,
    height: u32,
    left_down: bool,
}

impl App {
    /// Creates the window and drawing surface.
    ///
    /// Both are required to proceed; failure here is fatal and reported to
    /// the caller immediately.
    pub fn new(title: &str, config: &Config) -> Result<Self> {
        let width = config.canvas.width;
        let height = config.canvas.height;

        let mut window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .context("Failed to create window")?;
        window.set_target_fps(60);

        let (sender, receiver) = mpsc::channel();
        window.set_input_callback(Box::new(CharSink(sender)));

        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
                .context("Drawing surface unavailable")?;

        let palette = config
            .sticker
            .palette
            .iter()
            .map(|entry| {
                (
                    entry.glyph().to_string(),
                    entry.size_or(config.sticker.default_size),
                )
            })
            .collect();

        let state = SketchState::with_defaults(
            config.marker.ink.to_color(),
            config.canvas.background.to_color(),
            config.marker.thin_width,
            config.marker.thick_width,
            config.sticker.default_size,
            palette,
        );

        Ok(Self {
            window,
            surface,
            state,
            chars: receiver,
            export_scale: config.export.scale,
            export_target: ExportTarget::from_config(&config.export),
            width,
            height,
            left_down: false,
        })
    }

    /// Runs the event loop until the window closes or the user exits.
    pub fn run(&mut self) -> Result<()> {
        info!("Sketchpad ready ({}x{} canvas)", self.width, self.height);

        while self.window.is_open() && !self.state.should_exit {
            self.poll_pointer();
            self.poll_keys();

            if self.state.take_pending_export() {
                self.export();
            }

            if self.state.needs_redraw {
                self.state.needs_redraw = false;
                self.repaint()?;
            } else {
                self.window.update();
            }
        }

        Ok(())
    }

    /// Converts polled pointer state into press/motion/release events.
    fn poll_pointer(&mut self) {
        // Clamp keeps coordinates canvas-local while a drag leaves the
        // window, mirroring pointer-capture semantics.
        let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Clamp) else {
            return;
        };
        let (x, y) = (x as f64, y as f64);

        if (x, y) != self.state.cursor {
            self.state.on_pointer_motion(x, y);
        }

        let down = self.window.get_mouse_down(MouseButton::Left);
        if down && !self.left_down {
            self.state.on_pointer_press(PointerButton::Left, x, y);
        } else if !down && self.left_down {
            self.state.on_pointer_release(PointerButton::Left, x, y);
        }
        self.left_down = down;
    }

    /// Converts polled keyboard state into key events.
    fn poll_keys(&mut self) {
        // Decoded characters drive glyph entry; outside it they are
        // discarded so the channel never backs up.
        while let Ok(c) = self.chars.try_recv() {
            if self.state.in_glyph_entry() && !c.is_control() {
                self.state.on_key_press(Key::Char(c));
            }
        }

        let in_glyph_entry = self.state.in_glyph_entry();
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            if let Some(key) = map_key(key, in_glyph_entry) {
                self.state.on_key_press(key);
            }
        }
    }

    /// Repaints the scene and presents it to the window.
    fn repaint(&mut self) -> Result<()> {
        {
            let ctx = cairo::Context::new(&self.surface)
                .context("Drawing context unavailable")?;
            self.state.render_scene(&ctx);
        }
        self.surface.flush();

        let buffer = surface_to_pixels(&mut self.surface)?;
        self.window
            .update_with_buffer(&buffer, self.width as usize, self.height as usize)
            .context("Failed to present frame")?;
        Ok(())
    }

    /// Runs the export pipeline for the current committed history.
    ///
    /// Export failures are logged, not fatal; the sketch is still on screen.
    fn export(&mut self) {
        match export::export_history(
            &self.state.history,
            self.width,
            self.height,
            self.export_scale,
            self.state.background,
            &self.export_target,
        ) {
            Ok(path) => info!("Exported sketch to {}", path.display()),
            Err(err) => error!("Export failed: {err}"),
        }
    }
}

/// Maps a minifb key code to the generic key type.
///
/// During glyph entry only the editing keys are mapped; printable input
/// arrives through the character callback instead (mapping letters here as
/// well would double every typed character).
fn map_key(key: minifb::Key, in_glyph_entry: bool) -> Option<Key> {
    use minifb::Key as K;

    if in_glyph_entry {
        return match key {
            K::Escape => Some(Key::Escape),
            K::Enter => Some(Key::Return),
            K::Backspace => Some(Key::Backspace),
            _ => None,
        };
    }

    match key {
        K::Key1 => Some(Key::Char('1')),
        K::Key2 => Some(Key::Char('2')),
        K::Key3 => Some(Key::Char('3')),
        K::Key4 => Some(Key::Char('4')),
        K::Key5 => Some(Key::Char('5')),
        K::Key6 => Some(Key::Char('6')),
        K::Key7 => Some(Key::Char('7')),
        K::Key8 => Some(Key::Char('8')),
        K::Key9 => Some(Key::Char('9')),
        K::T => Some(Key::Char('t')),
        K::Z => Some(Key::Char('z')),
        K::Y => Some(Key::Char('y')),
        K::E => Some(Key::Char('e')),
        K::S => Some(Key::Char('s')),
        K::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Converts the Cairo ARGB32 surface into the 0RGB pixel buffer the window
/// expects.
///
/// Cairo stores ARGB32 in native endianness, so on little-endian machines a
/// pixel's bytes are B, G, R, A; reassembling them native-endian yields the
/// 0xAARRGGBB layout minifb reads.
fn surface_to_pixels(surface: &mut cairo::ImageSurface) -> Result<Vec<u32>> {
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let stride = surface.stride() as usize;

    let data = surface
        .data()
        .map_err(|e| anyhow!("Surface data unavailable: {e}"))?;

    let mut buffer = vec![0u32; width * height];
    for y in 0..height {
        let row = &data[y * stride..y * stride + width * 4];
        for (x, px) in row.chunks_exact(4).enumerate() {
            buffer[y * width + x] = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
        }
    }

    Ok(buffer)
}
