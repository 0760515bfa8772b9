// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use demo_dialog::{
    constants::{
        APPLICATION_NAME, COLOR_PICKER_STATUS_TIP, COUNT_LABEL_STATUS_TIP, FONT_COLOR_LABEL,
        FONT_SIZE_LABEL, LINE_EDIT_STATUS_TIP, MAX_CHAR, MENU_TITLE, ORGANIZATION_NAME,
        SPINNER_STATUS_TIP, UI_SPACING, WINDOW_TITLE,
    },
    geometry::Placement,
    settings::FileSettings,
    ui::{
        color_picker::EmbeddedColorPicker, line_edit::LineEdit, spinner::FontSizeSpinner,
        StatusBar,
    },
    window::{DemoWindow, FontDefaults, MenuAction},
};
use eframe::{egui, App, Frame, NativeOptions};
use strum::IntoEnumIterator;
use tracing::Level;
use tracing_subscriber::{self};

pub struct DemoApp {
    /// Widget state, font state and window placement
    pub window: DemoWindow<Option<FileSettings>>,

    pub status_bar: StatusBar,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: Option<FileSettings>) -> Self {
        let app_span = tracing::span!(Level::INFO, "App Initialization");
        let _app_guard = app_span.enter();

        // Defaults come from the inherited style, not from fixed values
        let defaults =
            FontDefaults::from_style(&cc.egui_ctx.style(), cc.egui_ctx.pixels_per_point());

        Self {
            window: DemoWindow::new(defaults, settings),
            status_bar: StatusBar::default(),
        }
    }

    fn draw_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(MENU_TITLE, |ui| {
                    for action in MenuAction::iter() {
                        let response = ui.button(action.to_string());
                        self.status_bar.track(&response, action.status_tip());

                        if response.clicked() {
                            ui.close_menu();
                            self.window.trigger(action).send(ui.ctx());
                        }
                    }
                });
            });
        });
    }

    fn draw_ui(&mut self, ui: &mut egui::Ui) {
        let font = self.window.font_id();
        let color = self.window.font_color();
        let response_text = ui.add(LineEdit::new(self.window.text_mut(), font, color, MAX_CHAR));
        self.status_bar.track(&response_text, LINE_EDIT_STATUS_TIP);
        if response_text.changed() {
            self.window.on_text_changed();
        }

        ui.add_space(UI_SPACING);

        ui.horizontal(|ui| {
            ui.label(FONT_COLOR_LABEL);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response_spinner =
                    ui.add(FontSizeSpinner::new(self.window.spinner_value_mut()));
                self.status_bar.track(&response_spinner, SPINNER_STATUS_TIP);
                if response_spinner.changed() {
                    self.window.on_font_size_changed();
                }
                ui.label(FONT_SIZE_LABEL);
            });
        });

        let response_picker = ui.add(EmbeddedColorPicker::new(self.window.picker_color_mut()));
        self.status_bar.track(&response_picker, COLOR_PICKER_STATUS_TIP);
        if response_picker.changed() {
            self.window.on_font_color_changed();
        }

        ui.add_space(UI_SPACING);

        let response_count = ui.label(self.window.count_label());
        self.status_bar.track(&response_count, COUNT_LABEL_STATUS_TIP);
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.window.sync_viewport(ctx);

        // Panels must be added before the central panel, so the bar shows last frame's tip
        self.status_bar.show(ctx);
        self.status_bar.begin_frame();

        self.draw_menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.draw_ui(ui);
                });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // No-op if the close request was already handled in `update`
        self.window.close();
    }
}

fn init_logging() -> anyhow::Result<()> {
    // Initialize logging based on build mode
    #[cfg(debug_assertions)]
    {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    }

    #[cfg(not(debug_assertions))]
    {
        // In release mode, set up a no-op subscriber to disable logging
        use anyhow::Context;
        use tracing_subscriber::Registry;
        let noop_subscriber = Registry::default();
        tracing::subscriber::set_global_default(noop_subscriber)
            .context("Failed to set global subscriber.")?;
    }

    Ok(())
}

fn main() -> eframe::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("{e:?}");
    }

    let settings = match FileSettings::open(ORGANIZATION_NAME, APPLICATION_NAME) {
        Ok(settings) => {
            tracing::debug!("Using settings file {:?}", settings.path());
            Some(settings)
        }
        Err(e) => {
            tracing::warn!("{}, window placement will not be saved.", e);
            None
        }
    };

    let placement = Placement::restore(&settings);
    let options = NativeOptions {
        viewport: placement.viewport(),
        centered: placement.is_centered(),
        ..Default::default()
    };

    let run_span = tracing::span!(Level::INFO, "Run Native");
    run_span.in_scope(|| {
        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, settings)))),
        )
    })
}
