// src/constants.rs

pub const WINDOW_TITLE: &str = "Demo Dialog";

// Default window size, used when no geometry was saved
pub const WINDOW_WIDTH: f32 = 300.0;
pub const WINDOW_HEIGHT: f32 = 100.0;

pub const UI_SPACING: f32 = 6.0; // Spacing between grid rows
pub const UI_PADDING: f32 = 3.0; // Padding inside the status bar
pub const STATUS_BAR_HEIGHT: f32 = 22.0;

/// Maximum number of characters accepted by the line edit.
pub const MAX_CHAR: usize = 20;

/// Character-count label; `{count}` and `{max}` are substituted.
pub const COUNT_TEMPLATE: &str = "{count}/{max}";

/// Spinner bounds, in typographic points.
pub const MIN_POINT_SIZE: u32 = 1;
pub const MAX_POINT_SIZE: u32 = 99;

/// egui font sizes are logical pixels; one logical pixel per point at 1x scale is 96 DPI.
pub const LOGICAL_DPI: f32 = 96.0;

// Settings store identity and keys
pub const ORGANIZATION_NAME: &str = "mvn";
pub const APPLICATION_NAME: &str = "demo-dialog";
pub const GEOMETRY_KEY: &str = "geometry";
pub const WINDOW_STATE_KEY: &str = "windowState";

pub const MENU_TITLE: &str = "Menu";
pub const FONT_SIZE_LABEL: &str = "Font Size:";
pub const FONT_COLOR_LABEL: &str = "Font Color:";

// Status tips shown in the status bar while hovering
pub const CLEAR_STATUS_TIP: &str = "Clear the text and reset font size and color.";
pub const EXIT_STATUS_TIP: &str = "Close this application.";
pub const LINE_EDIT_STATUS_TIP: &str = "This is a line edit you can enter text in.";
pub const SPINNER_STATUS_TIP: &str = "This is a spinbox you can enter a font size in.";
pub const COLOR_PICKER_STATUS_TIP: &str =
    "This is a color dialog you can select the font color in.";
pub const COUNT_LABEL_STATUS_TIP: &str =
    "This is a label for displaying the number of characters entered.";
