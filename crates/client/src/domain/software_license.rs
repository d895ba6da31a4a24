use once_cell::sync::Lazy;

use contracts::domain::software_license::{SoftwareLicense, SoftwareLicenseDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for SoftwareLicense {
    type Dto = SoftwareLicenseDto;

    fn endpoint() -> &'static str {
        "/api/it/software-licenses"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "softwareLicenses"], &["data", "licenses"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Software license"
    }

    fn list_name() -> &'static str {
        "Software licenses"
    }
}

fn render_seats(license: &SoftwareLicense) -> Cell {
    match (license.seats_used, license.seats) {
        (Some(used), Some(total)) => Cell::text(format!("{}/{}", used, total)),
        (None, Some(total)) => Cell::text(total.to_string()),
        _ => Cell::opt_text(None),
    }
}

static COLUMNS: Lazy<ColumnSet<SoftwareLicense>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "productName",
            header: "Product",
            render: |l: &SoftwareLicense| Cell::text(&l.product_name),
        },
        ColumnDescriptor {
            key: "vendor",
            header: "Vendor",
            render: |l: &SoftwareLicense| Cell::opt_text(l.vendor.as_deref()),
        },
        ColumnDescriptor {
            key: "seats",
            header: "Seats",
            render: render_seats,
        },
        ColumnDescriptor {
            key: "expiryDate",
            header: "Expires",
            render: |l: &SoftwareLicense| Cell::date(l.expiry_date.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |l: &SoftwareLicense| {
                Cell::badge(STATUS.classify(l.status.as_deref().unwrap_or("")))
            },
        },
    ])
    .expect("software license column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<SoftwareLicense> {
    &COLUMNS
}
