use crate::core::coerce::{
    coerce_number, coerce_text, encode_number, encode_text, kind_of, AbsentPolicy, DecodeMode,
    ExpectedKind,
};
use crate::error::{CoercionError, MappingError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use validator::Validate;

/// The six keys a match input recognizes, with their wire spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    Criteria,
    Latitude,
    Longitude,
    EqualityParam,
    AreaStart,
    AreaEnd,
}

impl MatchField {
    pub const ALL: [MatchField; 6] = [
        MatchField::Criteria,
        MatchField::Latitude,
        MatchField::Longitude,
        MatchField::EqualityParam,
        MatchField::AreaStart,
        MatchField::AreaEnd,
    ];

    /// Map key, case-sensitive
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchField::Criteria => "criteria",
            MatchField::Latitude => "latitude",
            MatchField::Longitude => "longitude",
            MatchField::EqualityParam => "equalityParam",
            MatchField::AreaStart => "areaStart",
            MatchField::AreaEnd => "areaEnd",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }

    pub const fn expected(self) -> ExpectedKind {
        match self {
            MatchField::Latitude | MatchField::Longitude => ExpectedKind::Number,
            _ => ExpectedKind::Text,
        }
    }
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query input sent to the location-matching service
///
/// Every field is independently optional. An absent coordinate is `None`,
/// which is distinct from a coordinate of `0.0`. Nothing is validated on
/// construction or decode; call [`Validate::validate`] to range-check the
/// coordinates before sending.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MatchInput {
    criteria: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    longitude: Option<f64>,
    equality_param: Option<String>,
    area_start: Option<String>,
    area_end: Option<String>,
}

/// Result of decoding a map, with any coercion diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub input: MatchInput,
    pub issues: Vec<CoercionError>,
}

impl MatchInput {
    pub fn new(
        criteria: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        equality_param: Option<String>,
        area_start: Option<String>,
        area_end: Option<String>,
    ) -> Self {
        Self {
            criteria,
            latitude,
            longitude,
            equality_param,
            area_start,
            area_end,
        }
    }

    /// Build from a string-keyed map, degrading mismatched values to absent
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let (input, issues) = Self::collect(map);
        for issue in &issues {
            tracing::debug!("Dropping match input value: {}", issue);
        }
        input
    }

    /// Build from any JSON value; `null` and non-objects give the default input
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => {
                if !other.is_null() {
                    tracing::debug!("Expected match input object, found {}", kind_of(other));
                }
                Self::default()
            }
        }
    }

    /// Decode a map, reporting every coercion mismatch
    ///
    /// In [`DecodeMode::Lenient`] this always succeeds and the mismatches are
    /// returned alongside the input. In [`DecodeMode::Strict`] any mismatch
    /// fails the decode.
    pub fn decode(map: &Map<String, Value>, mode: DecodeMode) -> Result<Decoded, MappingError> {
        let (input, issues) = Self::collect(map);

        if mode == DecodeMode::Strict && !issues.is_empty() {
            return Err(MappingError::Coercion(issues));
        }

        Ok(Decoded { input, issues })
    }

    /// Strict decode
    pub fn try_from_map(map: &Map<String, Value>) -> Result<Self, MappingError> {
        Self::decode(map, DecodeMode::Strict).map(|decoded| decoded.input)
    }

    /// Strict decode straight from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, MappingError> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(&value)
    }

    /// Map with exactly the six recognized keys; absent fields are `null`
    ///
    /// Coordinates are always written as JSON floats, so an integer `37` read
    /// by [`MatchInput::from_map`] comes back out as `37.0`. NaN and infinite
    /// coordinates have no JSON form and are written as `null`, which decodes
    /// back to absent.
    pub fn to_map(&self) -> Map<String, Value> {
        self.to_map_with(AbsentPolicy::Null)
    }

    pub fn to_map_with(&self, policy: AbsentPolicy) -> Map<String, Value> {
        MatchField::ALL
            .into_iter()
            .map(|field| {
                let value = match field {
                    MatchField::Criteria => encode_text(self.criteria(), policy),
                    MatchField::Latitude => encode_number(self.latitude, policy),
                    MatchField::Longitude => encode_number(self.longitude, policy),
                    MatchField::EqualityParam => encode_text(self.equality_param(), policy),
                    MatchField::AreaStart => encode_text(self.area_start(), policy),
                    MatchField::AreaEnd => encode_text(self.area_end(), policy),
                };
                (field.as_str().to_string(), value)
            })
            .collect()
    }

    /// The extracted map as a JSON object, ready to merge into a payload
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn collect(map: &Map<String, Value>) -> (Self, Vec<CoercionError>) {
        let mut input = Self::default();
        let mut issues = Vec::new();
        let mut recognized = 0;

        for field in MatchField::ALL {
            let Some(value) = map.get(field.as_str()) else {
                continue;
            };
            recognized += 1;
            if let Err(issue) = input.assign(field, value) {
                issues.push(issue);
            }
        }

        tracing::trace!(
            "Decoded match input: {} recognized, {} ignored, {} mismatched",
            recognized,
            map.len() - recognized,
            issues.len()
        );

        (input, issues)
    }

    fn assign(&mut self, field: MatchField, value: &Value) -> Result<(), CoercionError> {
        match field {
            MatchField::Criteria => self.criteria = coerce_text(field, value)?,
            MatchField::Latitude => self.latitude = coerce_number(field, value)?,
            MatchField::Longitude => self.longitude = coerce_number(field, value)?,
            MatchField::EqualityParam => self.equality_param = coerce_text(field, value)?,
            MatchField::AreaStart => self.area_start = coerce_text(field, value)?,
            MatchField::AreaEnd => self.area_end = coerce_text(field, value)?,
        }
        Ok(())
    }

    pub fn criteria(&self) -> Option<&str> {
        self.criteria.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn equality_param(&self) -> Option<&str> {
        self.equality_param.as_deref()
    }

    pub fn area_start(&self) -> Option<&str> {
        self.area_start.as_deref()
    }

    pub fn area_end(&self) -> Option<&str> {
        self.area_end.as_deref()
    }

    pub fn set_criteria(&mut self, criteria: Option<String>) {
        self.criteria = criteria;
    }

    pub fn set_latitude(&mut self, latitude: Option<f64>) {
        self.latitude = latitude;
    }

    pub fn set_longitude(&mut self, longitude: Option<f64>) {
        self.longitude = longitude;
    }

    pub fn set_equality_param(&mut self, equality_param: Option<String>) {
        self.equality_param = equality_param;
    }

    pub fn set_area_start(&mut self, area_start: Option<String>) {
        self.area_start = area_start;
    }

    pub fn set_area_end(&mut self, area_end: Option<String>) {
        self.area_end = area_end;
    }

    pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.criteria = Some(criteria.into());
        self
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn with_equality_param(mut self, equality_param: impl Into<String>) -> Self {
        self.equality_param = Some(equality_param.into());
        self
    }

    pub fn with_area_start(mut self, area_start: impl Into<String>) -> Self {
        self.area_start = Some(area_start.into());
        self
    }

    pub fn with_area_end(mut self, area_end: impl Into<String>) -> Self {
        self.area_end = Some(area_end.into());
        self
    }
}

impl TryFrom<&Value> for MatchInput {
    type Error = MappingError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::try_from_map(map),
            other => Err(MappingError::NotAnObject(kind_of(other))),
        }
    }
}

impl Serialize for MatchInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

// Goes through the lenient decode so a nested input never fails its parent.
impl<'de> Deserialize<'de> for MatchInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
