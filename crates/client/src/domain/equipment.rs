use once_cell::sync::Lazy;

use contracts::domain::equipment::{Equipment, EquipmentDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for Equipment {
    type Dto = EquipmentDto;

    fn endpoint() -> &'static str {
        "/api/equipment"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "equipments"], &["data", "equipment"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Equipment"
    }

    fn list_name() -> &'static str {
        "Equipment"
    }

    // the equipment resource rejects limits above 200
    fn page_size_ceiling() -> Option<u32> {
        Some(200)
    }
}

static COLUMNS: Lazy<ColumnSet<Equipment>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "equipmentName",
            header: "Name",
            render: |e: &Equipment| Cell::text(&e.equipment_name),
        },
        ColumnDescriptor {
            key: "category",
            header: "Category",
            render: |e: &Equipment| Cell::opt_text(e.category.as_deref()),
        },
        ColumnDescriptor {
            key: "serialNumber",
            header: "Serial no.",
            render: |e: &Equipment| Cell::opt_text(e.serial_number.as_deref()),
        },
        ColumnDescriptor {
            key: "assignedTo",
            header: "Assigned to",
            render: |e: &Equipment| Cell::opt_text(e.assigned_to.as_deref()),
        },
        ColumnDescriptor {
            key: "location",
            header: "Location",
            render: |e: &Equipment| Cell::opt_text(e.location.as_deref()),
        },
        ColumnDescriptor {
            key: "purchaseDate",
            header: "Purchased",
            render: |e: &Equipment| Cell::date(e.purchase_date.as_deref()),
        },
        ColumnDescriptor {
            key: "warrantyExpiry",
            header: "Warranty until",
            render: |e: &Equipment| Cell::date(e.warranty_expiry.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |e: &Equipment| Cell::badge(STATUS.classify(e.status.as_deref().unwrap_or(""))),
        },
    ])
    .expect("equipment column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<Equipment> {
    &COLUMNS
}
