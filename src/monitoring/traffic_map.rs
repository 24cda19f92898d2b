use crate::error::Result;
use crate::global_variables::{CITY_CENTER, MAP_ZOOM, MARKER_JITTER, TILE_ATTRIBUTION, TILE_URL};
use crate::shared_data::{area_label, CongestionLevel};

use rand::rngs::SmallRng;
use rand::Rng;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// A point offset from `self` by up to `max_offset` degrees on each axis.
    pub fn jittered(&self, rng: &mut SmallRng, max_offset: f64) -> Self {
        Self {
            lat: self.lat + rng.random_range(-max_offset..=max_offset),
            lng: self.lng + rng.random_range(-max_offset..=max_offset),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Sample,
    Prediction,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub location: LatLng,
    pub popup: String,
    pub color: &'static str,
    pub icon: &'static str,
    pub prefix: &'static str,
}

impl MapMarker {
    /// Car marker for one measured area, colored by congestion band.
    pub fn sample(index: usize, congestion: u32, location: LatLng) -> Self {
        let level = CongestionLevel::from_value(congestion as f64);
        Self {
            kind: MarkerKind::Sample,
            location,
            popup: format!(
                "Area: {}\nCongestion: {}%",
                area_label(index),
                congestion
            ),
            color: level.marker_color(),
            icon: "car",
            prefix: "fa",
        }
    }

    pub fn prediction(prediction: f64, location: LatLng) -> Self {
        Self {
            kind: MarkerKind::Prediction,
            location,
            popup: format!("Predicted City Congestion: {:.2}%", prediction),
            color: "purple",
            icon: "info-sign",
            prefix: "glyphicon",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrafficMap {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl TrafficMap {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: MapMarker) {
        self.markers.push(marker);
    }

    pub fn count_markers(&self, kind: MarkerKind) -> usize {
        self.markers.iter().filter(|m| m.kind == kind).count()
    }

    /// Render a standalone Leaflet page with the markers embedded as JSON.
    pub fn render_html(&self) -> Result<String> {
        // Keep "</script>" inside popup text from ending the script block.
        let markers_json = serde_json::to_string(&self.markers)?.replace("</", "<\\/");
        let attribution_json = serde_json::to_string(TILE_ATTRIBUTION)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Bangalore Traffic Congestion</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" />
    <link rel="stylesheet" href="https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap-glyphicons.css" />
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css" />
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #traffic_map {{ position: absolute; top: 0; bottom: 0; left: 0; right: 0; }}
    </style>
</head>
<body>
    <div id="traffic_map"></div>
    <script>
        var trafficMap = L.map("traffic_map").setView([{lat}, {lng}], {zoom});
        L.tileLayer("{tiles}", {{
            attribution: {attribution},
            subdomains: "abcd",
            maxZoom: 20
        }}).addTo(trafficMap);

        var markers = {markers};
        markers.forEach(function (m) {{
            var popup = document.createElement("div");
            m.popup.split("\n").forEach(function (line, i) {{
                if (i > 0) {{ popup.appendChild(document.createElement("br")); }}
                popup.appendChild(document.createTextNode(line));
            }});
            L.marker([m.location.lat, m.location.lng], {{
                icon: L.AwesomeMarkers.icon({{
                    icon: m.icon,
                    prefix: m.prefix,
                    markerColor: m.color
                }})
            }}).bindPopup(popup).addTo(trafficMap);
        }});
    </script>
</body>
</html>
"#,
            lat = self.center.lat,
            lng = self.center.lng,
            zoom = self.zoom,
            tiles = TILE_URL,
            attribution = attribution_json,
            markers = markers_json,
        ))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let html = self.render_html()?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Place one jittered marker per sample plus a prediction marker around the
/// city center.
pub fn build_traffic_map(data: &[u32], prediction: f64, rng: &mut SmallRng) -> TrafficMap {
    let center = LatLng::new(CITY_CENTER.0, CITY_CENTER.1);
    let mut map = TrafficMap::new(center, MAP_ZOOM);

    for (i, &congestion) in data.iter().enumerate() {
        let location = center.jittered(rng, MARKER_JITTER);
        map.add_marker(MapMarker::sample(i, congestion, location));
    }

    let prediction_location = center.jittered(rng, MARKER_JITTER);
    map.add_marker(MapMarker::prediction(prediction, prediction_location));

    map
}

/// Build the congestion map and write it to `path`.
pub fn visualize_traffic(
    data: &[u32],
    prediction: f64,
    rng: &mut SmallRng,
    path: &Path,
) -> Result<TrafficMap> {
    let map = build_traffic_map(data, prediction, rng);
    map.save(path)?;
    log::info!(
        "Wrote {} sample markers and {} prediction marker",
        map.count_markers(MarkerKind::Sample),
        map.count_markers(MarkerKind::Prediction)
    );
    println!(
        "Bangalore traffic congestion map saved to {}",
        path.display()
    );
    Ok(map)
}
