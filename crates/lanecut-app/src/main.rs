//! LaneCut - Caption & overlay timeline editor
//!
//! Entry point and main application loop.

use anyhow::Result;
use eframe::egui;
use lanecut_core::TimelineConfig;
use lanecut_timeline::{ImageItem, ImageRef, TextItem, TimelineModel};
use lanecut_ui::TimelineRuler;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const DISPLAY_WIDTH: f32 = 1200.0;
const DISPLAY_HEIGHT: f32 = 400.0;
const MEDIA_DURATION: f64 = 120.0;
const CONFIG_PATH: &str = "lanecut.json";

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("LaneCut starting...");

    // Optional overlay image paths from the command line
    let overlays: Vec<String> = std::env::args().skip(1).collect();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DISPLAY_WIDTH + 40.0, DISPLAY_HEIGHT + 80.0])
            .with_title("LaneCut"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "LaneCut",
        options,
        Box::new(move |_cc| Ok(Box::new(LanecutApp::new(overlays)))),
    )?;

    Ok(())
}

struct LanecutApp {
    ruler: TimelineRuler,
}

impl LanecutApp {
    fn new(overlays: Vec<String>) -> Self {
        let model = demo_model(&overlays);
        let ruler = TimelineRuler::new(
            MEDIA_DURATION,
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
            model,
            load_config(),
        );
        Self { ruler }
    }
}

impl eframe::App for LanecutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ruler.show(ui);
        });
    }
}

/// Timeline configuration, with optional overrides from `lanecut.json` in the
/// working directory. A malformed file is logged and ignored.
fn load_config() -> TimelineConfig {
    match std::fs::read(CONFIG_PATH) {
        Ok(data) => match serde_json::from_slice(&data) {
            Ok(cfg) => {
                info!(path = CONFIG_PATH, "loaded timeline config overrides");
                cfg
            }
            Err(err) => {
                warn!(path = CONFIG_PATH, %err, "ignoring malformed config file");
                TimelineConfig::default()
            }
        },
        Err(_) => TimelineConfig::default(),
    }
}

/// A small starter timeline: two captions plus one overlay per image path
/// given on the command line (missing files just log a warning and render as
/// placeholder blocks).
fn demo_model(overlays: &[String]) -> TimelineModel {
    let text_items = vec![
        TextItem::new("Opening title", 0.0, 18.0, 0),
        TextItem::new("Lower third - interview", 25.0, 60.0, 1),
    ];
    let image_items = overlays
        .iter()
        .enumerate()
        .map(|(i, path)| ImageItem::new(ImageRef::new(path), 10.0, 40.0, 2 + i))
        .collect();
    TimelineModel::new(text_items, image_items)
}
