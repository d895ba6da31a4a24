use once_cell::sync::Lazy;

use contracts::domain::hardware_asset::{HardwareAsset, HardwareAssetDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for HardwareAsset {
    type Dto = HardwareAssetDto;

    fn endpoint() -> &'static str {
        "/api/it/hardware"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "hardwareAssets"], &["data", "hardware"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Hardware asset"
    }

    fn list_name() -> &'static str {
        "Hardware assets"
    }
}

static COLUMNS: Lazy<ColumnSet<HardwareAsset>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "assetTag",
            header: "Asset tag",
            render: |h: &HardwareAsset| Cell::text(&h.asset_tag),
        },
        ColumnDescriptor {
            key: "assetType",
            header: "Type",
            render: |h: &HardwareAsset| Cell::opt_text(h.asset_type.as_deref()),
        },
        ColumnDescriptor {
            key: "model",
            header: "Model",
            render: |h: &HardwareAsset| Cell::opt_text(h.model.as_deref()),
        },
        ColumnDescriptor {
            key: "serialNumber",
            header: "Serial no.",
            render: |h: &HardwareAsset| Cell::opt_text(h.serial_number.as_deref()),
        },
        ColumnDescriptor {
            key: "assignedTo",
            header: "Assigned to",
            render: |h: &HardwareAsset| Cell::opt_text(h.assigned_to.as_deref()),
        },
        ColumnDescriptor {
            key: "warrantyExpiry",
            header: "Warranty until",
            render: |h: &HardwareAsset| Cell::date(h.warranty_expiry.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |h: &HardwareAsset| {
                Cell::badge(STATUS.classify(h.status.as_deref().unwrap_or("")))
            },
        },
    ])
    .expect("hardware asset column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<HardwareAsset> {
    &COLUMNS
}
