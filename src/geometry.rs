// src/geometry.rs

use egui::{ViewportBuilder, ViewportInfo};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    constants::{GEOMETRY_KEY, WINDOW_HEIGHT, WINDOW_STATE_KEY, WINDOW_TITLE, WINDOW_WIDTH},
    errors::SettingsError,
    settings::SettingsStore,
};

/// Position and size of the window while it is in its normal (restored) state.
///
/// `x`/`y` is the outer top-left corner, `width`/`height` the inner size.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WindowGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WindowGeometry {
    /// Reads the geometry reported by the native viewport, if it reported both rects.
    pub fn from_viewport(info: &ViewportInfo) -> Option<Self> {
        let outer = info.outer_rect?;
        let inner = info.inner_rect?;
        Some(Self {
            x: outer.min.x,
            y: outer.min.y,
            width: inner.width(),
            height: inner.height(),
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, SettingsError> {
        encode_blob(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        let geometry: Self = decode_blob(GEOMETRY_KEY, bytes)?;
        let values = [geometry.x, geometry.y, geometry.width, geometry.height];
        if values.iter().any(|v| !v.is_finite()) || geometry.width <= 0.0 || geometry.height <= 0.0
        {
            return Err(SettingsError::InvalidValue {
                key: GEOMETRY_KEY.to_string(),
                reason: format!("unusable geometry {geometry:?}"),
            });
        }
        Ok(geometry)
    }
}

/// Window flags that are restored alongside the geometry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowState {
    pub maximized: bool,
    pub fullscreen: bool,
}

impl WindowState {
    pub fn from_viewport(info: &ViewportInfo) -> Self {
        Self {
            maximized: info.maximized.unwrap_or(false),
            fullscreen: info.fullscreen.unwrap_or(false),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, SettingsError> {
        encode_blob(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        decode_blob(WINDOW_STATE_KEY, bytes)
    }
}

fn encode_blob<T: Serialize>(value: &T) -> Result<Vec<u8>, SettingsError> {
    Ok(serde_json::to_vec(value)?)
}

fn decode_blob<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, SettingsError> {
    serde_json::from_slice(bytes).map_err(|e| SettingsError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Where the window goes on screen: a saved geometry, or centered at the default size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub geometry: Option<WindowGeometry>,
    pub state: WindowState,
}

impl Placement {
    /// Reads the placement saved by a previous run.
    ///
    /// Missing keys are the normal first-run path; undecodable values are
    /// logged and ignored.
    pub fn restore(store: &dyn SettingsStore) -> Self {
        let geometry = store
            .value(GEOMETRY_KEY)
            .and_then(|bytes| match WindowGeometry::decode(&bytes) {
                Ok(geometry) => Some(geometry),
                Err(e) => {
                    tracing::warn!("Ignoring saved window geometry: {}", e);
                    None
                }
            });

        let state = store
            .value(WINDOW_STATE_KEY)
            .and_then(|bytes| match WindowState::decode(&bytes) {
                Ok(state) => Some(state),
                Err(e) => {
                    tracing::warn!("Ignoring saved window state: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        tracing::debug!("Restored placement: {:?} {:?}", geometry, state);
        Self { geometry, state }
    }

    /// Writes both values and flushes the store once.
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), SettingsError> {
        if let Some(geometry) = self.geometry {
            store.set_value(GEOMETRY_KEY, geometry.encode()?);
        }
        store.set_value(WINDOW_STATE_KEY, self.state.encode()?);
        store.sync()
    }

    /// True when no geometry was saved and the window should center itself.
    pub fn is_centered(&self) -> bool {
        self.geometry.is_none()
    }

    /// Describes the native window for this placement.
    pub fn viewport(&self) -> ViewportBuilder {
        let builder = ViewportBuilder::default().with_title(WINDOW_TITLE);

        let builder = match self.geometry {
            Some(geometry) => builder
                .with_inner_size([geometry.width, geometry.height])
                .with_position([geometry.x, geometry.y]),
            None => builder.with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        };

        builder
            .with_maximized(self.state.maximized)
            .with_fullscreen(self.state.fullscreen)
    }
}
