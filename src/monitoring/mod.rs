pub mod traffic_map;

pub use traffic_map::{
    build_traffic_map, visualize_traffic, LatLng, MapMarker, MarkerKind, TrafficMap,
};
