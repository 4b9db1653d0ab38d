pub mod markers;
pub mod status;
pub mod types;
pub mod window;
pub mod zoom;

pub use markers::{MarkerKind, TimelineMarker, generate_timeline_markers};
pub use status::{StatusPeriod, calculate_status_periods};
pub use types::{EventType, Property, PropertyStatus, TimelineEvent};
pub use window::TimeWindow;
pub use zoom::{ZOOM_LEVELS, ZoomLevel, range_for_level};
