use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Issued cheque tracked against a bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cheque {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "chequeNumber")]
    pub cheque_number: String,

    #[serde(rename = "payeeName", alias = "payee", default)]
    pub payee_name: Option<String>,

    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(rename = "issueDate", default)]
    pub issue_date: Option<String>,

    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Id of the owning bank account.
    #[serde(rename = "bankAccountRef", alias = "bankAccountId", default)]
    pub bank_account_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChequeDto {
    #[serde(rename = "chequeNumber", skip_serializing_if = "Option::is_none")]
    pub cheque_number: Option<String>,

    #[serde(rename = "payeeName", skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(rename = "issueDate", skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "bankAccountRef", skip_serializing_if = "Option::is_none")]
    pub bank_account_ref: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("pending", "Pending", BadgeVariant::Warning),
    ("cleared", "Cleared", BadgeVariant::Success),
    ("bounced", "Bounced", BadgeVariant::Error),
    ("cancelled", "Cancelled", BadgeVariant::Neutral),
]);
