use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Company vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "plateNumber")]
    pub plate_number: String,

    #[serde(default)]
    pub make: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "assignedDriver", alias = "driver", default)]
    pub assigned_driver: Option<String>,

    #[serde(rename = "insuranceExpiry", default)]
    pub insurance_expiry: Option<String>,

    #[serde(rename = "lastServiceDate", default)]
    pub last_service_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleDto {
    #[serde(rename = "plateNumber", skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "assignedDriver", skip_serializing_if = "Option::is_none")]
    pub assigned_driver: Option<String>,

    #[serde(rename = "insuranceExpiry", skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<String>,

    #[serde(rename = "lastServiceDate", skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("active", "Active", BadgeVariant::Success),
    ("under maintenance", "Under maintenance", BadgeVariant::Warning),
    ("sold", "Sold", BadgeVariant::Neutral),
]);
