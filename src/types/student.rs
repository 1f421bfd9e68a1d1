//! Student records managed by the roster.
//!
//! ## Keys
//!
//! - Unique key: the student code (`id`)
//! - Ordering key: the last name (`last_name`)
//!
//! Sorted insertion therefore groups students alphabetically by surname,
//! while lookups, updates and deletes address them by code.

use std::fmt;

use crate::types::Record;

// ============================================================================
// Gender enum
// ============================================================================

/// Gender of a student.
///
/// Represented as u8 in canonical encodings:
/// - Female = 0
/// - Male = 1
/// - Other = 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Female,
    Male,
    #[default]
    Other,
}

impl Gender {
    /// Convert to u8 for canonical encoding
    pub fn to_u8(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
            Gender::Other => 2,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Student struct
// ============================================================================

/// A student entry in the roster.
///
/// Every text field is required; an empty (or whitespace-only) field makes
/// the record invalid for the registry.
///
/// ## Example
///
/// ```
/// use student_roster::types::{Gender, Record, Student};
///
/// let student = Student::new("001", "Camila", "Gonzalez", "camila@uni.edu", Gender::Female, "systems");
///
/// assert_eq!(student.key(), "001");
/// assert_eq!(student.sort_key(), "Gonzalez");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Student {
    /// Student code, unique across the roster
    pub id: String,

    /// Given name
    pub name: String,

    /// Last name, used as the ordering key
    pub last_name: String,

    pub email: String,

    pub gender: Gender,

    /// Degree programme
    pub career: String,
}

impl Student {
    /// Create a new student record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        gender: Gender,
        career: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            gender,
            career: career.into(),
        }
    }

    /// Same student under a different code
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Full display name, "name last_name"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

impl Record for Student {
    fn key(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.last_name
    }

    fn missing_field(&self) -> Option<&'static str> {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("career", &self.career),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    fn canonical_bytes(&self) -> Vec<u8> {
        // Unit separator between fields keeps "ab"+"c" distinct from "a"+"bc"
        const SEP: u8 = 0x1f;

        let mut bytes = Vec::with_capacity(
            self.id.len()
                + self.name.len()
                + self.last_name.len()
                + self.email.len()
                + self.career.len()
                + 6,
        );
        for field in [&self.id, &self.name, &self.last_name, &self.email, &self.career] {
            bytes.extend_from_slice(field.as_bytes());
            bytes.push(SEP);
        }
        bytes.push(self.gender.to_u8());
        bytes
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student [code={}, name={}, last name={}, email={}, gender={}, career={}]",
            self.id, self.name, self.last_name, self.email, self.gender, self.career
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
