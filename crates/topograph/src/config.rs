//! Configuration types for topograph rendering.
//!
//! This module provides configuration structures that control diagram
//! orientation, spacing, and styling. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Default orientation and Graphviz spacing hints.
//! - [`StyleConfig`] - Visual styling passed through to the rendering engine.
//!
//! # Example
//!
//! ```
//! # use topograph::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_none());
//! ```

use serde::Deserialize;

use crate::semantic::Orientation;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Default orientation and spacing hints for the rendering engine.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Default [`Orientation`] when the command line does not override it.
    #[serde(default)]
    orientation: Orientation,

    /// Graphviz `nodesep`, in inches.
    #[serde(default)]
    nodesep: Option<f64>,

    /// Graphviz `ranksep`, in inches.
    #[serde(default)]
    ranksep: Option<f64>,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(orientation: Orientation, nodesep: Option<f64>, ranksep: Option<f64>) -> Self {
        Self {
            orientation,
            nodesep,
            ranksep,
        }
    }

    /// Returns the default [`Orientation`].
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the `nodesep` hint, if configured.
    pub fn nodesep(&self) -> Option<f64> {
        self.nodesep
    }

    /// Returns the `ranksep` hint, if configured.
    pub fn ranksep(&self) -> Option<f64> {
        self.ranksep
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Values are passed through to the rendering engine as graph attributes;
/// the engine is the authority on what constitutes a valid color or font
/// name, so no parsing happens here.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color for the whole diagram, as a Graphviz color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for all labels.
    #[serde(default)]
    font_name: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    pub fn new(background_color: Option<String>, font_name: Option<String>) -> Self {
        Self {
            background_color,
            font_name,
        }
    }

    /// Returns the configured background color, if any.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Returns the configured font name, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }
}
