use serde::{Deserialize, Serialize};

use crate::shared::badge::{BadgeVariant, StatusVocabulary};

/// Equipment asset as served by the REST resource.
///
/// Wire-format field variants (`assignTo`/`assignee`, `_id`) are
/// resolved here, at the deserialization boundary, so renderers see
/// exactly one canonical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "equipmentName")]
    pub equipment_name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(rename = "serialNumber", default)]
    pub serial_number: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "assignedTo", alias = "assignTo", alias = "assignee", default)]
    pub assigned_to: Option<String>,

    #[serde(rename = "purchaseDate", default)]
    pub purchase_date: Option<String>,

    #[serde(rename = "warrantyExpiry", default)]
    pub warranty_expiry: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}

/// Write payload for create/update. Fields left `None` are skipped on
/// the wire, which leaves them untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentDto {
    #[serde(rename = "equipmentName", skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub const STATUS: StatusVocabulary = StatusVocabulary::new(&[
    ("active", "Active", BadgeVariant::Success),
    ("under maintenance", "Under maintenance", BadgeVariant::Warning),
    ("retired", "Retired", BadgeVariant::Neutral),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_variants_resolve_to_canonical_names() {
        let record: Equipment = serde_json::from_str(
            r#"{"_id":"eq-1","equipmentName":"Drill","assignTo":"J. Doe"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "eq-1");
        assert_eq!(record.assigned_to.as_deref(), Some("J. Doe"));

        let record: Equipment = serde_json::from_str(
            r#"{"id":"eq-2","equipmentName":"Drill","assignee":"A. Smith"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "eq-2");
        assert_eq!(record.assigned_to.as_deref(), Some("A. Smith"));
    }

    #[test]
    fn test_dto_skips_absent_fields() {
        let dto = EquipmentDto {
            status: Some("retired".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_string(&dto).unwrap();
        assert_eq!(body, r#"{"status":"retired"}"#);
    }
}
