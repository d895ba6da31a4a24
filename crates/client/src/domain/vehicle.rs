use once_cell::sync::Lazy;

use contracts::domain::vehicle::{Vehicle, VehicleDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for Vehicle {
    type Dto = VehicleDto;

    fn endpoint() -> &'static str {
        "/api/vehicles"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "vehicles"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Vehicle"
    }

    fn list_name() -> &'static str {
        "Vehicles"
    }
}

static COLUMNS: Lazy<ColumnSet<Vehicle>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "plateNumber",
            header: "Plate",
            render: |v: &Vehicle| Cell::text(&v.plate_number),
        },
        ColumnDescriptor {
            key: "make",
            header: "Make",
            render: |v: &Vehicle| Cell::opt_text(v.make.as_deref()),
        },
        ColumnDescriptor {
            key: "model",
            header: "Model",
            render: |v: &Vehicle| Cell::opt_text(v.model.as_deref()),
        },
        ColumnDescriptor {
            key: "year",
            header: "Year",
            render: |v: &Vehicle| Cell::opt_display(v.year),
        },
        ColumnDescriptor {
            key: "assignedDriver",
            header: "Driver",
            render: |v: &Vehicle| Cell::opt_text(v.assigned_driver.as_deref()),
        },
        ColumnDescriptor {
            key: "insuranceExpiry",
            header: "Insurance until",
            render: |v: &Vehicle| Cell::date(v.insurance_expiry.as_deref()),
        },
        ColumnDescriptor {
            key: "lastServiceDate",
            header: "Last service",
            render: |v: &Vehicle| Cell::date(v.last_service_date.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |v: &Vehicle| Cell::badge(STATUS.classify(v.status.as_deref().unwrap_or(""))),
        },
    ])
    .expect("vehicle column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<Vehicle> {
    &COLUMNS
}
