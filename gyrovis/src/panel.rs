use eframe::egui::{self, ComboBox, Context, RichText};
use gyrovis_device::SamplingInterval;

use crate::{widgets::gyro_indicator::GyroIndicatorView, App};

impl App {
    pub fn central_panel(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(GyroIndicatorView::new(self.indicator.sample()));
        });
    }

    pub fn bottom_panel(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("control_panel").show(ctx, |ui| {
            ui.add_space(7.0);
            ui.label(RichText::new("Sensor").strong());
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                if self.indicator.started() {
                    if ui.button("Stop").clicked() {
                        self.indicator.stop();
                    }
                } else if ui.button("Start").clicked() {
                    self.indicator.start();
                }

                let mut interval = self.indicator.interval();
                let changed = ComboBox::from_label("Sampling rate")
                    .selected_text(interval.name())
                    .show_ui(ui, |ui| {
                        let mut changed = false;
                        for tier in SamplingInterval::ALL {
                            changed |= ui.selectable_value(&mut interval, tier, tier.name()).changed();
                        }
                        changed
                    })
                    .inner
                    .unwrap_or(false);

                if changed {
                    self.indicator.set_interval(interval);
                    if self.indicator.started() {
                        self.indicator.stop();
                        self.indicator.start();
                    }
                }

                ui.label(
                    RichText::new(format!("{:.2} rad/s", self.indicator.sample().magnitude()))
                        .weak()
                        .monospace(),
                );
            });

            ui.add_space(5.0);
        });
    }
}
