use crate::models::MatchInput;
use geo::Point;

/// Borrowed view of an input's area window
///
/// Neither bound is parsed or ordered; the format belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaWindow<'a> {
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

impl AreaWindow<'_> {
    /// Both ends are present
    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

impl MatchInput {
    /// The query point, only when both coordinates are present
    ///
    /// Follows the `geo` convention of x = longitude, y = latitude.
    pub fn location(&self) -> Option<Point<f64>> {
        match (self.latitude(), self.longitude()) {
            (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
            _ => None,
        }
    }

    /// Set both coordinates from a point
    pub fn set_location(&mut self, point: Point<f64>) {
        self.set_latitude(Some(point.y()));
        self.set_longitude(Some(point.x()));
    }

    pub fn area_window(&self) -> AreaWindow<'_> {
        AreaWindow {
            start: self.area_start(),
            end: self.area_end(),
        }
    }
}
