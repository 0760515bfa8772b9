// src/ui/line_edit.rs

use egui::{Color32, FontId, Response, TextEdit, Ui, Widget};

/// Single-line text field with a hard character limit and a configurable font.
pub struct LineEdit<'a> {
    text: &'a mut String,
    font: FontId,
    color: Color32,
    max_len: usize,
}

impl<'a> LineEdit<'a> {
    pub fn new(text: &'a mut String, font: FontId, color: Color32, max_len: usize) -> Self {
        Self {
            text,
            font,
            color,
            max_len,
        }
    }
}

impl Widget for LineEdit<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            text,
            font,
            color,
            max_len,
        } = self;

        TextEdit::singleline(text)
            .font(font)
            .text_color(color)
            .char_limit(max_len)
            .desired_width(f32::INFINITY)
            .ui(ui)
    }
}
