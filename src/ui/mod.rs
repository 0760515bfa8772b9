// src/ui/mod.rs

pub mod color_picker;
pub mod line_edit;
pub mod spinner;

use egui::{FontId, Response, RichText};

use crate::constants::{STATUS_BAR_HEIGHT, UI_PADDING};

/// Bottom bar showing the status tip of whatever the pointer is over.
#[derive(Debug, Default)]
pub struct StatusBar {
    tip: Option<&'static str>,
}

impl StatusBar {
    /// Forgets last frame's tip. Call once per frame before drawing widgets.
    pub fn begin_frame(&mut self) {
        self.tip = None;
    }

    pub fn track(&mut self, response: &Response, tip: &'static str) {
        if response.hovered() {
            self.tip = Some(tip);
        }
    }

    pub fn tip(&self) -> Option<&'static str> {
        self.tip
    }

    pub fn show(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::same(UI_PADDING))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(self.tip.unwrap_or_default())
                                .font(FontId::proportional(12.0)),
                        );
                    });
            });
    }
}
