#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use eframe::{
    egui::{Context, ViewportBuilder},
    CreationContext, NativeOptions,
};
use gyrovis_core::GyroIndicator;
use gyrovis_device::SamplingInterval;
use log::error;
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;

mod panel;
mod widgets;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let native_options = NativeOptions {
        default_theme: eframe::Theme::Dark,
        viewport: ViewportBuilder::default().with_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "gyrovis",
        native_options,
        Box::new(|cc| Box::new(App::new(cc))),
    );

    match result {
        Ok(()) => {}
        Err(e) => {
            error!("eframe error: {e}");
        }
    }
}

struct App {
    indicator: GyroIndicator,
}

impl App {
    fn new(cc: &CreationContext) -> Self {
        let settings: Settings = match cc.storage {
            Some(storage) => {
                match serde_json::from_str(storage.get_string("settings").as_deref().unwrap_or(""))
                {
                    Ok(settings) => settings,
                    Err(e) => {
                        error!("error loading Settings: {e}");
                        Settings::default()
                    }
                }
            }
            None => Settings::default(),
        };

        let source = gyrovis_driver_sim::start();

        let indicator = GyroIndicator::new();
        indicator.set_interval(settings.interval);
        indicator.attach_source(source);

        let ctx = cc.egui_ctx.clone();
        indicator.set_repainter(Arc::new(move || ctx.request_repaint()));

        if settings.running {
            indicator.start();
        }

        App { indicator }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.bottom_panel(ctx);
        self.central_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = Settings {
            interval: self.indicator.interval(),
            running: self.indicator.started(),
        };

        match serde_json::to_string::<Settings>(&settings) {
            Ok(string) => {
                storage.set_string("settings", string);
            }
            Err(e) => {
                error!("error serializing Settings: {e}");
            }
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct Settings {
    interval: SamplingInterval,
    running: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interval: SamplingInterval::default(),
            running: true,
        }
    }
}
