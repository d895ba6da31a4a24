use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Company legal document (certificates, registrations, contracts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalDocument {
    #[serde(alias = "_id")]
    pub id: String,

    pub title: String,

    #[serde(rename = "documentType", default)]
    pub document_type: Option<String>,

    #[serde(rename = "referenceNumber", alias = "refNumber", default)]
    pub reference_number: Option<String>,

    #[serde(rename = "issuedBy", default)]
    pub issued_by: Option<String>,

    #[serde(rename = "issueDate", default)]
    pub issue_date: Option<String>,

    #[serde(rename = "expiryDate", default)]
    pub expiry_date: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegalDocumentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "documentType", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    #[serde(rename = "referenceNumber", skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    #[serde(rename = "issuedBy", skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<String>,

    #[serde(rename = "issueDate", skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("valid", "Valid", BadgeVariant::Success),
    ("expired", "Expired", BadgeVariant::Error),
    ("pending renewal", "Pending renewal", BadgeVariant::Warning),
]);
