use std::fmt;

use serde::{Deserialize, Serialize};

/// Creature gender as decoded from the oracle's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    pub const MALE_RAW: i32 = 0;
    pub const FEMALE_RAW: i32 = 1;

    pub fn from_raw(raw: i32) -> Self {
        match raw {
            Self::MALE_RAW => Self::Male,
            Self::FEMALE_RAW => Self::Female,
            _ => Self::Genderless,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Genderless => "Genderless",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trainer gender. Trainers carry no genderless case: 0 is male, anything
/// else reads back as female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerGender {
    Male,
    Female,
}

impl TrainerGender {
    pub const MALE_RAW: i32 = 0;

    pub fn from_raw(raw: i32) -> Self {
        if raw == Self::MALE_RAW {
            Self::Male
        } else {
            Self::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for TrainerGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
