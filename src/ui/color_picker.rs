// src/ui/color_picker.rs

use egui::{
    color_picker::{color_picker_color32, Alpha},
    Color32, Response, Ui, Widget,
};

/// Color picker drawn inline rather than in a popup.
pub struct EmbeddedColorPicker<'a> {
    color: &'a mut Color32,
}

impl<'a> EmbeddedColorPicker<'a> {
    pub fn new(color: &'a mut Color32) -> Self {
        Self { color }
    }
}

impl Widget for EmbeddedColorPicker<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let color = self.color;
        let inner = ui.scope(|ui| color_picker_color32(ui, color, Alpha::Opaque));

        let mut response = inner.response;
        if inner.inner {
            response.mark_changed();
        }
        response
    }
}
