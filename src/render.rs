//! HTML map rendering (Leaflet).
//!
//! Produces a standalone page with one toggleable overlay group per
//! [`MarkerLayer`]. Marker data is embedded as JSON; labels are inserted as
//! text nodes, never as markup.

use crate::geo::{Coordinates, MapPoint};
use askama::Template;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_ZOOM: u8 = 5;

/// Circle marker appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: u32,
    pub color: &'static str,
    #[serde(rename = "fillColor")]
    pub fill_color: &'static str,
}

/// Film locations: red outline, black fill.
pub const FILM_STYLE: MarkerStyle = MarkerStyle {
    radius: 15,
    color: "red",
    fill_color: "black",
};

/// Neighbouring countries: green outline, yellow fill.
pub const COUNTRY_STYLE: MarkerStyle = MarkerStyle {
    radius: 20,
    color: "green",
    fill_color: "yellow",
};

/// A named overlay group of identically styled markers.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerLayer {
    pub name: String,
    pub style: MarkerStyle,
    pub points: Vec<MapPoint>,
}

impl MarkerLayer {
    pub fn new(name: &str, style: MarkerStyle, points: Vec<MapPoint>) -> Self {
        Self {
            name: name.to_string(),
            style,
            points,
        }
    }
}

#[derive(Serialize)]
struct MapSpec<'a> {
    center: [f64; 2],
    zoom: u8,
    layers: &'a [MarkerLayer],
}

/// Leaflet page template. `data` is inserted unescaped into a `<script>`
/// block and must already be script-safe JSON.
#[derive(Template)]
#[template(path = "map.html")]
struct MapPage<'a> {
    title: &'a str,
    data: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Cannot serialize map data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Cannot render map page: {0}")]
    Template(#[from] askama::Error),
    #[error("Cannot write map file: {0}")]
    Io(#[from] io::Error),
}

/// Builds the HTML page for a map.
pub struct MapRenderer {
    title: String,
}

impl MapRenderer {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    pub fn render(&self, center: Coordinates, layers: &[MarkerLayer]) -> Result<String, RenderError> {
        let spec = MapSpec {
            center: [center.lat, center.lon],
            zoom: DEFAULT_ZOOM,
            layers,
        };
        let page = MapPage {
            title: &self.title,
            data: script_safe(&serde_json::to_string(&spec)?),
        };
        Ok(page.render()?)
    }

    /// Render and write to `path`.
    pub fn save(&self, path: &Path, center: Coordinates, layers: &[MarkerLayer]) -> Result<(), RenderError> {
        let html = self.render(center, layers)?;
        fs::write(path, html)?;
        Ok(())
    }
}

/// File name of the map for `year`.
pub fn map_file_name(year: i32) -> String {
    format!("map{}.html", year)
}

// JSON is valid JS, but "</script>" or "<!--" inside a string would end the block.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}
