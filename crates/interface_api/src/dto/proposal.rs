//! Proposal DTOs
//!
//! Missing string fields deserialize as empty strings so that they are
//! reported by the field rules rather than rejected as malformed JSON.
//!
//! A salary sent as a JSON number is kept as the literal text of the number
//! (serde_json `arbitrary_precision`) and parsed straight into a `Decimal`, so
//! no binary floating point step can drop digits.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use domain_proposal::validation::DECIMAL_MESSAGE;
use domain_proposal::{CreateProposalRequest, ProposalCreated, ProposalError, Violation};

/// Field reported when the body cannot be decoded at all
pub const BODY_FIELD: &str = "body";

/// Message reported when the body cannot be decoded at all
pub const BODY_MESSAGE: &str = "must be a JSON object with string fields and a numeric or string salary";

/// Salary as sent by the client: `"1000.50"` or `1000.50`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryInput {
    Text(String),
    /// Literal text of a JSON number
    Number(String),
}

impl SalaryInput {
    /// Parses the salary; blank text counts as absent
    fn parse(&self) -> Result<Option<Decimal>, ProposalError> {
        let raw = match self {
            SalaryInput::Text(text) => text.trim(),
            SalaryInput::Number(number) => number.as_str(),
        };
        if raw.is_empty() {
            return Ok(None);
        }

        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map(Some)
            .map_err(|_| {
                ProposalError::validation_failed(vec![Violation::new("salary", DECIMAL_MESSAGE)])
            })
    }
}

impl<'de> Deserialize<'de> for SalaryInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SalaryVisitor)
    }
}

struct SalaryVisitor;

impl<'de> Visitor<'de> for SalaryVisitor {
    type Value = SalaryInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string holding a decimal")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(SalaryInput::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(SalaryInput::Text(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(SalaryInput::Number(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(SalaryInput::Number(value.to_string()))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(SalaryInput::Number(value.to_string()))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
        Ok(SalaryInput::Number(value.to_string()))
    }

    // serde_json only takes this path when the value prints back to its own text
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(SalaryInput::Number(value.to_string()))
    }

    // serde_json hands arbitrary precision numbers over as a one-entry map
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let number = serde_json::Number::deserialize(MapAccessDeserializer::new(map))?;
        Ok(SalaryInput::Number(number.to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProposalRequestDto {
    pub name: String,
    pub document: String,
    pub email: String,
    pub address: String,
    pub salary: Option<SalaryInput>,
}

impl TryFrom<CreateProposalRequestDto> for CreateProposalRequest {
    type Error = ProposalError;

    fn try_from(dto: CreateProposalRequestDto) -> Result<Self, Self::Error> {
        let salary = match dto.salary {
            Some(input) => input.parse()?,
            None => None,
        };

        Ok(CreateProposalRequest {
            name: dto.name,
            document: dto.document,
            email: dto.email,
            address: dto.address,
            salary,
        })
    }
}

/// Seconds and nanoseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(time: DateTime<Utc>) -> Self {
        Self {
            seconds: time.timestamp(),
            // always below 2e9, even during a leap second
            nanos: time.timestamp_subsec_nanos() as i32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalResponse {
    pub id: String,
    pub created_at: Timestamp,
}

impl From<ProposalCreated> for CreateProposalResponse {
    fn from(created: ProposalCreated) -> Self {
        Self {
            id: created.id.as_uuid().to_string(),
            created_at: created.created_at.into(),
        }
    }
}
