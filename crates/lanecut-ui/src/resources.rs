//! Asynchronous image loading for overlay display.
//!
//! Decoding happens on worker threads; the UI polls finished results each
//! frame and uploads them as egui textures. A failed load is logged and the
//! item keeps its placeholder fill; the timeline model is never involved.

use std::collections::HashMap;
use std::path::Path;

use crossbeam_channel::{Receiver, Sender};
use egui::{ColorImage, TextureHandle, TextureOptions};
use tracing::{debug, warn};

use lanecut_core::{LanecutError, Result};

enum LoadState {
    Pending,
    Ready(TextureHandle),
    Failed,
}

/// Poll-based store of decoded overlay images, keyed by source URL.
pub struct ImageStore {
    entries: HashMap<String, LoadState>,
    tx: Sender<(String, Result<ColorImage>)>,
    rx: Receiver<(String, Result<ColorImage>)>,
}

impl ImageStore {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            entries: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Start loading `url` if it is not already known.
    pub fn request(&mut self, url: &str) {
        if self.entries.contains_key(url) {
            return;
        }
        self.entries.insert(url.to_owned(), LoadState::Pending);

        let tx = self.tx.clone();
        let url = url.to_owned();
        std::thread::spawn(move || {
            let result = decode(&url);
            // Receiver dropped means the store is gone; nothing to do.
            let _ = tx.send((url, result));
        });
    }

    /// Drain finished loads and upload them as textures.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((url, result)) = self.rx.try_recv() {
            match result {
                Ok(img) => {
                    debug!(url, "overlay image loaded");
                    let handle = ctx.load_texture(&url, img, TextureOptions::LINEAR);
                    self.entries.insert(url, LoadState::Ready(handle));
                }
                Err(err) => {
                    warn!(url, %err, "overlay image failed to load");
                    self.entries.insert(url, LoadState::Failed);
                }
            }
        }
    }

    /// Texture for `url` once its load has finished successfully.
    pub fn texture(&self, url: &str) -> Option<&TextureHandle> {
        match self.entries.get(url) {
            Some(LoadState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(url: &str) -> Result<ColorImage> {
    let bytes = std::fs::read(Path::new(url))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| LanecutError::ImageDecode(e.to_string()))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}
