//! Care giver sub-form: reach, skills, and when they are free.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{Availability, MultiSelect, Skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("service radius must be between 1 and 30 km, got {0}")]
pub struct RadiusOutOfRange(pub u8);

/// Distance a giver is willing to travel, bounded to `MIN..=MAX` kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ServiceRadiusKm(u8);

impl ServiceRadiusKm {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;
    pub const DEFAULT: u8 = 3;

    pub fn clamped(km: i64) -> Self {
        Self(km.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parse a number input. Blank or non-numeric input yields `None`; numbers
    /// outside the bounds are clamped.
    pub fn parse_input(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(km) = raw.parse::<i64>() {
            return Some(Self::clamped(km));
        }
        raw.parse::<f64>()
            .ok()
            .filter(|km| km.is_finite())
            .map(|km| Self::clamped(km.round() as i64))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ServiceRadiusKm {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for ServiceRadiusKm {
    type Error = RadiusOutOfRange;

    fn try_from(km: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&km) {
            Ok(Self(km))
        } else {
            Err(RadiusOutOfRange(km))
        }
    }
}

impl From<ServiceRadiusKm> for u8 {
    fn from(radius: ServiceRadiusKm) -> Self {
        radius.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiverProfile {
    pub service_radius_km: ServiceRadiusKm,
    pub skills: MultiSelect<Skill>,
    pub availability: MultiSelect<Availability>,
    pub intro: String,
    pub is_vetted_helper: bool,
}

impl GiverProfile {
    pub fn set_service_radius_input(&mut self, raw: &str) -> bool {
        match ServiceRadiusKm::parse_input(raw) {
            Some(radius) => {
                self.service_radius_km = radius;
                true
            }
            None => false,
        }
    }

    pub fn set_skill(&mut self, skill: Skill, checked: bool) {
        self.skills.set(skill, checked);
    }

    pub fn set_availability(&mut self, slot: Availability, checked: bool) {
        self.availability.set(slot, checked);
    }

    pub fn set_intro(&mut self, value: impl Into<String>) {
        self.intro = value.into();
    }

    pub fn set_vetted_helper(&mut self, vetted: bool) {
        self.is_vetted_helper = vetted;
    }
}
