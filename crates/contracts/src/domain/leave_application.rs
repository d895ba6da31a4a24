use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Employee leave application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveApplication {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "employeeName", alias = "employee")]
    pub employee_name: String,

    #[serde(rename = "leaveType", default)]
    pub leave_type: Option<String>,

    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,

    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub days: Option<f64>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveApplicationDto {
    #[serde(rename = "employeeName", skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,

    #[serde(rename = "leaveType", skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,

    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("pending", "Pending", BadgeVariant::Warning),
    ("approved", "Approved", BadgeVariant::Success),
    ("rejected", "Rejected", BadgeVariant::Error),
    ("cancelled", "Cancelled", BadgeVariant::Neutral),
]);
