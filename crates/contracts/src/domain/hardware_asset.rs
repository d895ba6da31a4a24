use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// IT hardware inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareAsset {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "assetTag")]
    pub asset_tag: String,

    #[serde(rename = "assetType", default)]
    pub asset_type: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(rename = "serialNumber", default)]
    pub serial_number: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "assignedTo", alias = "assignTo", default)]
    pub assigned_to: Option<String>,

    #[serde(rename = "purchaseDate", default)]
    pub purchase_date: Option<String>,

    #[serde(rename = "warrantyExpiry", default)]
    pub warranty_expiry: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardwareAssetDto {
    #[serde(rename = "assetTag", skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,

    #[serde(rename = "assetType", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(rename = "serialNumber", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(rename = "purchaseDate", skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    #[serde(rename = "warrantyExpiry", skip_serializing_if = "Option::is_none")]
    pub warranty_expiry: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("in use", "In use", BadgeVariant::Success),
    ("in storage", "In storage", BadgeVariant::Primary),
    ("under repair", "Under repair", BadgeVariant::Warning),
    ("retired", "Retired", BadgeVariant::Neutral),
]);
