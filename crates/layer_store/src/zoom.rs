//! Canvas zoom factor

use crate::settings::{clamp_to, ZoomSettings};

/// Zoom factor of the canvas, where 1.0 is 100%
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    zoom: f32,
    limits: ZoomSettings,
}

impl ZoomState {
    /// Create a zoom state at 100% with default limits
    pub fn new() -> Self {
        Self::with_settings(ZoomSettings::default())
    }

    /// Create a zoom state at 100% with the given limits
    pub fn with_settings(limits: ZoomSettings) -> Self {
        Self {
            zoom: clamp_to(1.0, limits.min, limits.max),
            limits,
        }
    }

    /// Get the zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Get the zoom as a rounded percentage
    pub fn percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Set the zoom factor, clamped to the configured limits
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = clamp_to(zoom, self.limits.min, self.limits.max);
    }

    /// Zoom in by one step
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.limits.step);
    }

    /// Zoom out by one step
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.limits.step);
    }

    /// Return to 100%
    pub fn reset(&mut self) {
        self.set_zoom(1.0);
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}
