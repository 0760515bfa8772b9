// src/window.rs

use egui::{Color32, FontId, Style, TextStyle, ViewportCommand, ViewportInfo};
use strum_macros::{Display, EnumIter};

use crate::{
    constants::{
        CLEAR_STATUS_TIP, COUNT_TEMPLATE, EXIT_STATUS_TIP, LOGICAL_DPI, MAX_CHAR, MAX_POINT_SIZE,
        MIN_POINT_SIZE,
    },
    geometry::{Placement, WindowGeometry, WindowState},
    settings::SettingsStore,
    utils::{pixel_to_point, point_to_pixel},
};

/// Entries of the window's single menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, Display)]
pub enum MenuAction {
    Clear,
    Exit,
}

impl MenuAction {
    pub fn status_tip(&self) -> &'static str {
        match self {
            MenuAction::Clear => CLEAR_STATUS_TIP,
            MenuAction::Exit => EXIT_STATUS_TIP,
        }
    }
}

/// What the native window should do after the controller handled an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowCommand {
    None,
    Close,
}

impl WindowCommand {
    /// Forwards the command to the native window.
    pub fn send(self, ctx: &egui::Context) {
        if self == WindowCommand::Close {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

/// Font settings inherited from the style the window was created with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontDefaults {
    pub point_size: u32,
    pub color: Color32,
}

impl FontDefaults {
    /// Captures the text-edit font size and text color from `style`.
    ///
    /// egui reports font sizes in pixels, so the size goes through
    /// [`pixel_to_point`] using the DPI implied by `pixels_per_point`.
    pub fn from_style(style: &Style, pixels_per_point: f32) -> Self {
        let pixel_size = TextStyle::Body.resolve(style).size * pixels_per_point;
        let dpi = LOGICAL_DPI * pixels_per_point;
        let point_size = clamp_point_size(pixel_to_point(pixel_size, dpi).round() as u32);

        let color = style
            .visuals
            .override_text_color
            .unwrap_or_else(|| style.visuals.widgets.inactive.text_color());

        Self { point_size, color }
    }
}

fn clamp_point_size(point_size: u32) -> u32 {
    point_size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
}

/// State and event handling of the demo window.
///
/// Widgets bind to the `*_mut` accessors and report changes through the
/// `on_*_changed` methods; the applied font only changes in response to those.
pub struct DemoWindow<S: SettingsStore> {
    text: String,
    font_point_size: u32,
    font_color: Color32,

    /// Values currently shown by the spinner and the color picker
    spinner_value: u32,
    picker_color: Color32,

    defaults: FontDefaults,

    /// Last known normal geometry and window flags
    placement: Placement,

    settings: S,
    persisted: bool,
}

impl<S: SettingsStore> DemoWindow<S> {
    pub fn new(defaults: FontDefaults, settings: S) -> Self {
        let placement = Placement::restore(&settings);
        tracing::debug!(
            "Captured font defaults: {}pt, {:?}",
            defaults.point_size,
            defaults.color
        );

        Self {
            text: String::new(),
            font_point_size: defaults.point_size,
            font_color: defaults.color,
            spinner_value: defaults.point_size,
            picker_color: defaults.color,
            defaults,
            placement,
            settings,
            persisted: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replaces the text, dropping everything past [`MAX_CHAR`] characters.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.on_text_changed();
    }

    pub fn on_text_changed(&mut self) {
        if let Some((cut, _)) = self.text.char_indices().nth(MAX_CHAR) {
            tracing::debug!("Truncating text to {} characters.", MAX_CHAR);
            self.text.truncate(cut);
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Text of the character-count label, e.g. `"5/20"`.
    pub fn count_label(&self) -> String {
        COUNT_TEMPLATE
            .replace("{count}", &self.char_count().to_string())
            .replace("{max}", &MAX_CHAR.to_string())
    }

    pub fn spinner_value(&self) -> u32 {
        self.spinner_value
    }

    pub fn spinner_value_mut(&mut self) -> &mut u32 {
        &mut self.spinner_value
    }

    pub fn on_font_size_changed(&mut self) {
        self.spinner_value = clamp_point_size(self.spinner_value);
        self.font_point_size = self.spinner_value;
        tracing::debug!("Font size set to {}pt", self.font_point_size);
    }

    pub fn picker_color(&self) -> Color32 {
        self.picker_color
    }

    pub fn picker_color_mut(&mut self) -> &mut Color32 {
        &mut self.picker_color
    }

    pub fn on_font_color_changed(&mut self) {
        let [r, g, b, _] = self.picker_color.to_array();
        self.picker_color = Color32::from_rgb(r, g, b);
        self.font_color = self.picker_color;
        tracing::debug!("Font color set to {:?}", self.font_color);
    }

    pub fn font_point_size(&self) -> u32 {
        self.font_point_size
    }

    pub fn font_color(&self) -> Color32 {
        self.font_color
    }

    /// Font of the line edit, in egui's logical pixels.
    pub fn font_id(&self) -> FontId {
        FontId::proportional(point_to_pixel(self.font_point_size as f32, LOGICAL_DPI))
    }

    pub fn defaults(&self) -> FontDefaults {
        self.defaults
    }

    pub fn trigger(&mut self, action: MenuAction) -> WindowCommand {
        tracing::debug!("Menu action: {}", action);
        match action {
            MenuAction::Clear => {
                self.clear();
                WindowCommand::None
            }
            MenuAction::Exit => WindowCommand::Close,
        }
    }

    /// Empties the text and resets font and widgets to the captured defaults.
    ///
    /// Widget values are assigned directly, so no change event follows.
    pub fn clear(&mut self) {
        self.text.clear();
        self.font_point_size = self.defaults.point_size;
        self.spinner_value = self.defaults.point_size;
        self.font_color = self.defaults.color;
        self.picker_color = self.defaults.color;
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Records what the native window currently looks like.
    ///
    /// The geometry is only tracked while the window is in its normal state.
    pub fn observe_viewport(&mut self, info: &ViewportInfo) {
        let state = WindowState::from_viewport(info);
        if !state.maximized && !state.fullscreen && !info.minimized.unwrap_or(false) {
            if let Some(geometry) = WindowGeometry::from_viewport(info) {
                self.placement.geometry = Some(geometry);
            }
        }
        self.placement.state = state;
    }

    /// Per-frame viewport handling: tracks the placement and saves it once a
    /// close was requested.
    pub fn sync_viewport(&mut self, ctx: &egui::Context) {
        let viewport = ctx.input(|i| i.viewport().clone());
        self.observe_viewport(&viewport);
        if viewport.close_requested() {
            self.close();
        }
    }

    /// Saves the placement. Only the first call writes.
    pub fn close(&mut self) {
        if self.persisted {
            return;
        }
        self.persisted = true;

        match self.placement.save(&mut self.settings) {
            Ok(()) => tracing::debug!("Saved window placement {:?}", self.placement),
            Err(e) => tracing::error!("Failed to save window placement: {}", e),
        }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, RawInput, Rect, Vec2, ViewportEvent, ViewportId};
    use strum::IntoEnumIterator;

    use super::*;
    use crate::settings::MemorySettings;

    fn defaults() -> FontDefaults {
        FontDefaults {
            point_size: 9,
            color: Color32::from_gray(140),
        }
    }

    fn new_window() -> DemoWindow<MemorySettings> {
        DemoWindow::new(defaults(), MemorySettings::new())
    }

    fn normal_viewport(x: f32, y: f32, width: f32, height: f32) -> ViewportInfo {
        ViewportInfo {
            outer_rect: Some(Rect::from_min_size(
                Pos2::new(x, y),
                Vec2::new(width, height + 30.0),
            )),
            inner_rect: Some(Rect::from_min_size(
                Pos2::new(x, y + 30.0),
                Vec2::new(width, height),
            )),
            maximized: Some(false),
            fullscreen: Some(false),
            minimized: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let window = new_window();
        assert_eq!(window.defaults(), defaults());
        assert_eq!(window.text(), "");
        assert_eq!(window.count_label(), format!("0/{MAX_CHAR}"));
        assert_eq!(window.font_point_size(), 9);
        assert_eq!(window.spinner_value(), 9);
        assert_eq!(window.font_color(), Color32::from_gray(140));
        assert_eq!(window.picker_color(), Color32::from_gray(140));
        assert!(window.placement().is_centered());
    }

    #[test]
    fn test_count_follows_text() {
        let mut window = new_window();
        window.text_mut().push_str("hello");
        window.on_text_changed();
        assert_eq!(window.count_label(), format!("5/{MAX_CHAR}"));

        window.text_mut().pop();
        window.on_text_changed();
        assert_eq!(window.char_count(), 4);
    }

    #[test]
    fn test_count_uses_characters_not_bytes() {
        let mut window = new_window();
        window.set_text("größe");
        assert_eq!(window.count_label(), format!("5/{MAX_CHAR}"));
    }

    #[test]
    fn test_font_size_change_applies_spinner_value() {
        let mut window = new_window();
        *window.spinner_value_mut() = 24;
        assert_eq!(window.font_point_size(), 9);
        window.on_font_size_changed();
        assert_eq!(window.font_point_size(), 24);
        assert_eq!(window.font_id().size, 32.0);
    }

    #[test]
    fn test_font_size_below_minimum_is_clamped() {
        let mut window = new_window();
        *window.spinner_value_mut() = 0;
        window.on_font_size_changed();
        assert_eq!(window.font_point_size(), MIN_POINT_SIZE);
        assert_eq!(window.spinner_value(), MIN_POINT_SIZE);
    }

    #[test]
    fn test_color_change_applies_picker_color() {
        let mut window = new_window();
        *window.picker_color_mut() = Color32::from_rgb(200, 10, 10);
        window.on_font_color_changed();
        assert_eq!(window.font_color(), Color32::from_rgb(200, 10, 10));
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut window = new_window();
        window.set_text("some text");
        *window.spinner_value_mut() = 30;
        window.on_font_size_changed();
        *window.picker_color_mut() = Color32::from_rgb(0, 0, 255);
        window.on_font_color_changed();

        assert_eq!(window.trigger(MenuAction::Clear), WindowCommand::None);

        assert_eq!(window.text(), "");
        assert_eq!(window.count_label(), format!("0/{MAX_CHAR}"));
        assert_eq!(window.font_point_size(), defaults().point_size);
        assert_eq!(window.spinner_value(), defaults().point_size);
        assert_eq!(window.font_color(), defaults().color);
        assert_eq!(window.picker_color(), defaults().color);
        assert_eq!(window.settings().sync_count(), 0);
    }

    #[test]
    fn test_exit_writes_settings_once() {
        let mut window = new_window();
        assert_eq!(window.trigger(MenuAction::Exit), WindowCommand::Close);
        assert_eq!(window.settings().sync_count(), 0);

        window.close();
        window.close();
        assert_eq!(window.settings().sync_count(), 1);
    }

    #[test]
    fn test_exit_through_native_close_writes_once() {
        let ctx = egui::Context::default();
        let mut window = new_window();

        // Frame 1: the Exit menu item asks the native window to close
        let output = ctx.run(RawInput::default(), |ctx| {
            window.sync_viewport(ctx);
            window.trigger(MenuAction::Exit).send(ctx);
        });
        let commands = &output.viewport_output[&ViewportId::ROOT].commands;
        assert!(commands.iter().any(|c| matches!(c, ViewportCommand::Close)));
        assert_eq!(window.settings().sync_count(), 0);

        // Frame 2: the backend reports the close request
        let mut closing = normal_viewport(40.0, 30.0, 300.0, 100.0);
        closing.events.push(ViewportEvent::Close);
        let mut input = RawInput::default();
        input.viewports.insert(ViewportId::ROOT, closing);
        let _ = ctx.run(input, |ctx| window.sync_viewport(ctx));
        assert_eq!(window.settings().sync_count(), 1);

        // Exit hook runs after the window is gone
        window.close();
        assert_eq!(window.settings().sync_count(), 1);
        assert_eq!(
            window.placement().geometry.map(|g| (g.x, g.y)),
            Some((40.0, 30.0))
        );
    }

    #[test]
    fn test_clear_sends_no_window_command() {
        let ctx = egui::Context::default();
        let mut window = new_window();
        let output = ctx.run(RawInput::default(), |ctx| {
            window.trigger(MenuAction::Clear).send(ctx);
        });
        let commands = &output.viewport_output[&ViewportId::ROOT].commands;
        assert!(!commands.iter().any(|c| matches!(c, ViewportCommand::Close)));
    }

    #[test]
    fn test_geometry_survives_reopen() {
        let mut window = new_window();
        window.observe_viewport(&normal_viewport(50.0, 60.0, 640.0, 480.0));
        window.close();

        let settings = window.settings().clone();
        let reopened = DemoWindow::new(defaults(), settings);
        let placement = reopened.placement();
        assert_eq!(
            placement.geometry,
            Some(WindowGeometry {
                x: 50.0,
                y: 60.0,
                width: 640.0,
                height: 480.0,
            })
        );
        assert_eq!(placement.state, WindowState::default());
    }

    #[test]
    fn test_maximized_window_keeps_normal_geometry() {
        let mut window = new_window();
        window.observe_viewport(&normal_viewport(50.0, 60.0, 640.0, 480.0));

        let mut maximized = normal_viewport(0.0, 0.0, 1920.0, 1050.0);
        maximized.maximized = Some(true);
        window.observe_viewport(&maximized);

        let placement = window.placement();
        assert!(placement.state.maximized);
        assert_eq!(placement.geometry.map(|g| g.width), Some(640.0));
    }

    #[test]
    fn test_menu_order_and_tips() {
        let names: Vec<String> = MenuAction::iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["Clear", "Exit"]);
        assert_eq!(MenuAction::Exit.status_tip(), EXIT_STATUS_TIP);
    }

    #[test]
    fn test_defaults_from_style() {
        let mut style = Style::default();
        style.text_styles.insert(TextStyle::Body, FontId::proportional(16.0));
        style.visuals.override_text_color = Some(Color32::from_rgb(1, 2, 3));

        let at_1x = FontDefaults::from_style(&style, 1.0);
        assert_eq!(at_1x.point_size, 12);
        assert_eq!(at_1x.color, Color32::from_rgb(1, 2, 3));

        // DPI scaling cancels out
        assert_eq!(FontDefaults::from_style(&style, 2.0).point_size, 12);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn count_label_matches_text_length(text in ".{0,20}") {
                let mut window = new_window();
                window.set_text(text.clone());
                prop_assert_eq!(window.text(), text.as_str());
                prop_assert_eq!(
                    window.count_label(),
                    format!("{}/{}", text.chars().count(), MAX_CHAR)
                );
            }

            #[test]
            fn overlong_text_is_truncated(text in ".{21,60}") {
                let mut window = new_window();
                window.set_text(text.clone());
                let expected: String = text.chars().take(MAX_CHAR).collect();
                prop_assert_eq!(window.text(), expected.as_str());
                prop_assert_eq!(window.count_label(), format!("{MAX_CHAR}/{MAX_CHAR}"));
            }
        }
    }
}
