//! Care seeker sub-form: where support is needed, what kind, and who to call.

use serde::{Deserialize, Serialize};

use super::catalog::{MultiSelect, NeedCategory};

/// Geographic position. Serialized as a GeoJSON point (`coordinates: [lng, lat]`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "GeoJsonPoint", try_from = "GeoJsonPoint")]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Option<Self> {
        let mut point = Self::default();
        (point.set_longitude(longitude) && point.set_latitude(latitude)).then_some(point)
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn set_longitude(&mut self, value: f64) -> bool {
        if value.is_finite() && (-180.0..=180.0).contains(&value) {
            self.longitude = value;
            true
        } else {
            false
        }
    }

    pub fn set_latitude(&mut self, value: f64) -> bool {
        if value.is_finite() && (-90.0..=90.0).contains(&value) {
            self.latitude = value;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

impl From<GeoPoint> for GeoJsonPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [point.longitude, point.latitude],
        }
    }
}

impl TryFrom<GeoJsonPoint> for GeoPoint {
    type Error = String;

    fn try_from(raw: GeoJsonPoint) -> Result<Self, Self::Error> {
        if raw.kind != "Point" {
            return Err(format!("expected a GeoJSON Point, got `{}`", raw.kind));
        }
        let [longitude, latitude] = raw.coordinates;
        GeoPoint::new(longitude, latitude)
            .ok_or_else(|| format!("coordinates out of range: [{longitude}, {latitude}]"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub address_text: String,
    pub geo: GeoPoint,
    pub needs_categories: MultiSelect<NeedCategory>,
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl SeekerProfile {
    pub fn set_address_text(&mut self, value: impl Into<String>) {
        self.address_text = value.into();
    }

    /// Parse a coordinate typed into the form. Unparseable or out-of-range
    /// input keeps the previous value.
    pub fn set_longitude_input(&mut self, raw: &str) -> bool {
        parse_coordinate(raw).is_some_and(|value| self.geo.set_longitude(value))
    }

    pub fn set_latitude_input(&mut self, raw: &str) -> bool {
        parse_coordinate(raw).is_some_and(|value| self.geo.set_latitude(value))
    }

    pub fn set_need(&mut self, category: NeedCategory, checked: bool) {
        self.needs_categories.set(category, checked);
    }

    pub fn add_contact(&mut self) {
        self.emergency_contacts.push(EmergencyContact::default());
    }

    pub fn update_contact(
        &mut self,
        index: usize,
        field: ContactField,
        value: impl Into<String>,
    ) -> bool {
        let Some(contact) = self.emergency_contacts.get_mut(index) else {
            return false;
        };
        match field {
            ContactField::Name => contact.name = value.into(),
            ContactField::Phone => contact.phone = value.into(),
        }
        true
    }

    pub fn remove_contact(&mut self, index: usize) -> bool {
        if index < self.emergency_contacts.len() {
            self.emergency_contacts.remove(index);
            true
        } else {
            false
        }
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
