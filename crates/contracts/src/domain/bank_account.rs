use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Company bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "accountName")]
    pub account_name: String,

    #[serde(rename = "accountNumber", default)]
    pub account_number: Option<String>,

    #[serde(rename = "bankName", default)]
    pub bank_name: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub balance: Option<f64>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "openedDate", default)]
    pub opened_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankAccountDto {
    #[serde(rename = "accountName", skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    #[serde(rename = "accountNumber", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(rename = "bankName", skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "openedDate", skip_serializing_if = "Option::is_none")]
    pub opened_date: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("active", "Active", BadgeVariant::Success),
    ("dormant", "Dormant", BadgeVariant::Warning),
    ("closed", "Closed", BadgeVariant::Neutral),
]);
