// City center for Bangalore (latitude, longitude)
pub const CITY_CENTER: (f64, f64) = (12.9716, 77.5946);
pub const MAP_ZOOM: u8 = 11;

// CartoDB Positron light tiles
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

pub const OUTPUT_MAP_FILE: &str = "bangalore_traffic_congestion_map.html";

pub const BANGALORE_AREAS: [&str; 10] = [
    "Indiranagar",
    "Koramangala",
    "Electronic City",
    "Whitefield",
    "Marathahalli",
    "HSR Layout",
    "Jayanagar",
    "JP Nagar",
    "BTM Layout",
    "Rajajinagar",
];

// Generated congestion bounds (inclusive, percent)
pub const MIN_CONGESTION: u32 = 40;
pub const MAX_CONGESTION: u32 = 80;

pub const DEFAULT_NUM_POINTS: usize = 10;
pub const DEFAULT_WINDOW_SIZE: usize = 3;
pub const DEFAULT_PREDICTION: f64 = 50.0;

// Max marker offset from the city center, in degrees
pub const MARKER_JITTER: f64 = 0.1;
