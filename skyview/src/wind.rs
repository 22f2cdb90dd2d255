use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// One of the 16 points of the compass rose, clockwise from north.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const SECTOR_DEGREES: f64 = 22.5;

impl CompassPoint {
    pub const ALL: [CompassPoint; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Map a bearing in degrees to its compass point.
    ///
    /// Half-sector boundaries round away from zero, so 11.25 is NNE.
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = (degrees.rem_euclid(360.0) / SECTOR_DEGREES).round() as usize;
        Self::ALL[sector % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`CompassPoint::from_degrees`].
pub fn wind_direction(degrees: f64) -> CompassPoint {
    CompassPoint::from_degrees(degrees)
}

#[cfg(test)]
mod tests {
    use super::{CompassPoint, wind_direction};

    #[test]
    fn cardinal_points() {
        assert_eq!(wind_direction(0.0), CompassPoint::N);
        assert_eq!(wind_direction(90.0), CompassPoint::E);
        assert_eq!(wind_direction(180.0), CompassPoint::S);
        assert_eq!(wind_direction(270.0), CompassPoint::W);
    }

    #[test]
    fn sector_boundaries() {
        assert_eq!(wind_direction(11.24), CompassPoint::N);
        assert_eq!(wind_direction(11.25), CompassPoint::NNE);
        assert_eq!(wind_direction(348.75), CompassPoint::N);
        assert_eq!(wind_direction(359.9), CompassPoint::N);
        assert_eq!(wind_direction(337.5), CompassPoint::NNW);
    }

    #[test]
    fn out_of_range_bearings_wrap() {
        assert_eq!(wind_direction(360.0), CompassPoint::N);
        assert_eq!(wind_direction(-90.0), CompassPoint::W);
        assert_eq!(wind_direction(450.0), CompassPoint::E);
    }

    #[test]
    fn every_bearing_has_a_label() {
        for tenth in 0..3600 {
            let point = wind_direction(f64::from(tenth) / 10.0);
            assert!(CompassPoint::ALL.contains(&point));
        }
    }

    #[test]
    fn serializes_as_label() {
        let value = serde_json::to_value(CompassPoint::WSW).unwrap();
        assert_eq!(value, "WSW");
    }
}
