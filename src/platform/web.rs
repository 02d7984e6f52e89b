//! Browser backends (WASM only)
//!
//! LocalStorage, `<audio>` elements and a 2D canvas.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, HtmlImageElement};

use super::{AudioSink, KeyValueStore, RenderSurface, SpriteKind};

/// Window LocalStorage. Missing storage (private mode, sandboxed frames)
/// reads as empty and drops writes.
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - high score will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write {} to LocalStorage", key);
            }
        }
    }
}

/// An `<audio>` element playing a file
pub struct HtmlAudioSink {
    el: Option<HtmlAudioElement>,
}

impl HtmlAudioSink {
    pub fn new(src: &str, looping: bool) -> Self {
        let el = HtmlAudioElement::new_with_src(src).ok();
        match &el {
            Some(el) => el.set_loop(looping),
            None => log::warn!("Failed to create audio element for {} - audio disabled", src),
        }
        Self { el }
    }
}

impl AudioSink for HtmlAudioSink {
    fn play(&mut self) {
        if let Some(el) = &self.el {
            // Browsers reject autoplay before a user gesture; nothing to do about it
            let _ = el.play();
        }
    }

    fn pause(&mut self) {
        if let Some(el) = &self.el {
            let _ = el.pause();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        if let Some(el) = &self.el {
            el.set_volume(volume as f64);
        }
    }

    fn rewind(&mut self) {
        if let Some(el) = &self.el {
            el.set_current_time(0.0);
        }
    }

    fn is_paused(&self) -> bool {
        self.el.as_ref().map(|el| el.paused()).unwrap_or(true)
    }
}

/// Canvas 2D context drawing sprite images
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: HashMap<SpriteKind, HtmlImageElement>,
}

impl CanvasSurface {
    /// Size the canvas and start loading sprite images
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Option<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let kinds = [
            SpriteKind::Player,
            SpriteKind::Collectible,
            SpriteKind::PowerUp,
            SpriteKind::Pursuer,
            SpriteKind::Hazard,
        ];
        let mut images = HashMap::new();
        for kind in kinds {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(kind.asset());
                    images.insert(kind, img);
                }
                Err(_) => log::warn!("Failed to create image for {:?}", kind),
            }
        }

        Some(Self {
            ctx,
            width: width as f64,
            height: height as f64,
            images,
        })
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw(&mut self, sprite: SpriteKind, x: f32, y: f32, w: f32, h: f32) {
        let Some(img) = self.images.get(&sprite) else {
            return;
        };
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img, x as f64, y as f64, w as f64, h as f64,
        );
    }
}
