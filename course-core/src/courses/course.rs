use crate::courses::error::CourseError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Course identifier. Always held as a string, JSON numbers are
/// accepted on input so `3` and `"3"` name the same course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a plain unsigned integer.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for CourseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => CourseId(id),
            RawId::Number(id) => CourseId(id.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
}

/// Course fields as sent in a create/update body. Every field is optional
/// here, the operation decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl CourseFields {
    pub fn from_json(body: &[u8]) -> Result<Self, CourseError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|_| CourseError::InvalidData)
    }

    /// Builds a complete course. Empty strings and non-positive prices
    /// count as missing.
    pub fn into_course(self, id: CourseId) -> Result<Course, CourseError> {
        let fields = self.present();
        match (fields.name, fields.price, fields.description, fields.duration) {
            (Some(name), Some(price), Some(description), Some(duration)) => Ok(Course {
                id,
                name,
                description,
                price,
                duration,
            }),
            _ => Err(CourseError::InvalidData),
        }
    }

    /// Overwrites the fields of `course` that are present in `self`,
    /// leaving the rest untouched.
    pub fn apply_to(self, course: &mut Course) {
        let fields = self.present();
        if let Some(name) = fields.name {
            course.name = name;
        }
        if let Some(price) = fields.price {
            course.price = price;
        }
        if let Some(description) = fields.description {
            course.description = description;
        }
        if let Some(duration) = fields.duration {
            course.duration = duration;
        }
    }

    fn present(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.is_empty()),
            price: self.price.filter(|v| *v > 0.0),
            description: self.description.filter(|v| !v.is_empty()),
            duration: self.duration.filter(|v| !v.is_empty()),
        }
    }
}

impl From<Course> for CourseFields {
    fn from(course: Course) -> Self {
        Self {
            name: Some(course.name),
            price: Some(course.price),
            description: Some(course.description),
            duration: Some(course.duration),
        }
    }
}
