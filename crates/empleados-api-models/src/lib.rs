#![forbid(unsafe_code)]
#![warn(
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the empleados REST API.
//!
//! The browser app and the CLI both encode requests and decode responses with
//! these types so the wire contract lives in exactly one place.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Employee record as returned by the API.
///
/// Decoding accepts `_id`, `id`, or both (`_id` wins); encoding always writes `_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// First name.
    #[serde(rename = "nombre")]
    pub first_name: String,
    /// Last name.
    #[serde(rename = "apellido")]
    pub last_name: String,
    /// Age in years.
    #[serde(rename = "edad")]
    pub age: u32,
    /// Department name. Kept as free text so stale server values still render.
    #[serde(rename = "departamento")]
    pub department: String,
    /// Salary amount.
    #[serde(rename = "salario")]
    pub salary: f64,
}

/// Raw employee object; identifier keys are resolved by [`Employee`]'s `TryFrom`.
#[derive(Deserialize)]
struct EmployeeRecord {
    #[serde(rename = "_id")]
    object_id: Option<String>,
    id: Option<String>,
    nombre: String,
    apellido: String,
    edad: u32,
    departamento: String,
    salario: f64,
}

/// An employee object carried neither `_id` nor `id`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("employee record has no `_id` or `id`")]
pub struct MissingIdentifier;

impl TryFrom<EmployeeRecord> for Employee {
    type Error = MissingIdentifier;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        let id = record.object_id.or(record.id).ok_or(MissingIdentifier)?;
        Ok(Self {
            id,
            first_name: record.nombre,
            last_name: record.apellido,
            age: record.edad,
            department: record.departamento,
            salary: record.salario,
        })
    }
}

/// Create/update request body: an employee without its identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeePayload {
    /// First name.
    #[serde(rename = "nombre")]
    pub first_name: String,
    /// Last name.
    #[serde(rename = "apellido")]
    pub last_name: String,
    /// Age in years, always positive.
    #[serde(rename = "edad")]
    pub age: u32,
    /// One of the recognised departments.
    #[serde(rename = "departamento")]
    pub department: Department,
    /// Salary amount, never negative.
    #[serde(rename = "salario")]
    pub salary: f64,
}

impl EmployeePayload {
    /// Attach a server identifier, producing the record the API would echo back.
    #[must_use]
    pub fn into_employee(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            department: self.department.as_str().to_string(),
            salary: self.salary,
        }
    }
}

/// The 14 departments of El Salvador accepted by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Department {
    /// Ahuachapán.
    #[serde(rename = "Ahuachapán")]
    Ahuachapan,
    /// Santa Ana.
    #[serde(rename = "Santa Ana")]
    SantaAna,
    /// Sonsonate.
    #[serde(rename = "Sonsonate")]
    Sonsonate,
    /// Chalatenango.
    #[serde(rename = "Chalatenango")]
    Chalatenango,
    /// La Libertad.
    #[serde(rename = "La Libertad")]
    LaLibertad,
    /// San Salvador.
    #[serde(rename = "San Salvador")]
    SanSalvador,
    /// Cuscatlán.
    #[serde(rename = "Cuscatlán")]
    Cuscatlan,
    /// La Paz.
    #[serde(rename = "La Paz")]
    LaPaz,
    /// Cabañas.
    #[serde(rename = "Cabañas")]
    Cabanas,
    /// San Vicente.
    #[serde(rename = "San Vicente")]
    SanVicente,
    /// Usulután.
    #[serde(rename = "Usulután")]
    Usulutan,
    /// San Miguel.
    #[serde(rename = "San Miguel")]
    SanMiguel,
    /// Morazán.
    #[serde(rename = "Morazán")]
    Morazan,
    /// La Unión.
    #[serde(rename = "La Unión")]
    LaUnion,
}

impl Department {
    /// All departments in selector order.
    pub const ALL: [Self; 14] = [
        Self::Ahuachapan,
        Self::SantaAna,
        Self::Sonsonate,
        Self::Chalatenango,
        Self::LaLibertad,
        Self::SanSalvador,
        Self::Cuscatlan,
        Self::LaPaz,
        Self::Cabanas,
        Self::SanVicente,
        Self::Usulutan,
        Self::SanMiguel,
        Self::Morazan,
        Self::LaUnion,
    ];

    /// Display and wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ahuachapan => "Ahuachapán",
            Self::SantaAna => "Santa Ana",
            Self::Sonsonate => "Sonsonate",
            Self::Chalatenango => "Chalatenango",
            Self::LaLibertad => "La Libertad",
            Self::SanSalvador => "San Salvador",
            Self::Cuscatlan => "Cuscatlán",
            Self::LaPaz => "La Paz",
            Self::Cabanas => "Cabañas",
            Self::SanVicente => "San Vicente",
            Self::Usulutan => "Usulután",
            Self::SanMiguel => "San Miguel",
            Self::Morazan => "Morazán",
            Self::LaUnion => "La Unión",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name one of the recognised departments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown department '{0}'")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    /// Matches the exact display name; surrounding whitespace is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|department| department.as_str() == trimmed)
            .ok_or_else(|| UnknownDepartment(trimmed.to_string()))
    }
}

/// Error document the API attaches to rejected requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable reason (primary key used by the API).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Alternate key some deployments use for the same text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First non-blank message carried by the body.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}
