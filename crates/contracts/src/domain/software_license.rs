use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Software license with seat accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareLicense {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub seats: Option<i32>,

    #[serde(rename = "seatsUsed", default)]
    pub seats_used: Option<i32>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "expiryDate", default)]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoftwareLicenseDto {
    #[serde(rename = "productName", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i32>,

    #[serde(rename = "seatsUsed", skip_serializing_if = "Option::is_none")]
    pub seats_used: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("active", "Active", BadgeVariant::Success),
    ("expired", "Expired", BadgeVariant::Error),
    ("suspended", "Suspended", BadgeVariant::Warning),
]);
