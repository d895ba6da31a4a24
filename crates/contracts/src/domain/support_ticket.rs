use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// IT support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    #[serde(alias = "_id")]
    pub id: String,

    pub subject: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "reportedBy", alias = "reporter", default)]
    pub reported_by: Option<String>,

    #[serde(rename = "assignedTo", alias = "assignTo", default)]
    pub assigned_to: Option<String>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportTicketDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "reportedBy", skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,

    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("open", "Open", BadgeVariant::Primary),
    ("in progress", "In progress", BadgeVariant::Warning),
    ("resolved", "Resolved", BadgeVariant::Success),
    ("closed", "Closed", BadgeVariant::Neutral),
]);
