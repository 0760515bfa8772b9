// src/ui/spinner.rs

use egui::{DragValue, Response, Ui, Widget};

use crate::constants::{MAX_POINT_SIZE, MIN_POINT_SIZE};

/// Integer spin box for font sizes: a drag value with step buttons.
pub struct FontSizeSpinner<'a> {
    value: &'a mut u32,
}

impl<'a> FontSizeSpinner<'a> {
    pub fn new(value: &'a mut u32) -> Self {
        Self { value }
    }
}

impl Widget for FontSizeSpinner<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let value = self.value;
        let original_value = *value;

        let mut response = ui
            .horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                ui.add(
                    DragValue::new(&mut *value)
                        .range(MIN_POINT_SIZE..=MAX_POINT_SIZE)
                        .speed(0.1),
                );
                if ui.small_button("-").clicked() {
                    *value = value.saturating_sub(1).max(MIN_POINT_SIZE);
                }
                if ui.small_button("+").clicked() {
                    *value = (*value + 1).min(MAX_POINT_SIZE);
                }
            })
            .response;

        if *value != original_value {
            response.mark_changed();
        }

        response
    }
}
