use once_cell::sync::Lazy;

use contracts::domain::leave_application::{LeaveApplication, LeaveApplicationDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for LeaveApplication {
    type Dto = LeaveApplicationDto;

    fn endpoint() -> &'static str {
        "/api/leave-applications"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "leaveApplications"], &["data", "leaves"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Leave application"
    }

    fn list_name() -> &'static str {
        "Leave applications"
    }
}

static COLUMNS: Lazy<ColumnSet<LeaveApplication>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "employeeName",
            header: "Employee",
            render: |l: &LeaveApplication| Cell::text(&l.employee_name),
        },
        ColumnDescriptor {
            key: "leaveType",
            header: "Type",
            render: |l: &LeaveApplication| Cell::opt_text(l.leave_type.as_deref()),
        },
        ColumnDescriptor {
            key: "startDate",
            header: "From",
            render: |l: &LeaveApplication| Cell::date(l.start_date.as_deref()),
        },
        ColumnDescriptor {
            key: "endDate",
            header: "To",
            render: |l: &LeaveApplication| Cell::date(l.end_date.as_deref()),
        },
        ColumnDescriptor {
            key: "days",
            header: "Days",
            render: |l: &LeaveApplication| Cell::opt_display(l.days),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |l: &LeaveApplication| {
                Cell::badge(STATUS.classify(l.status.as_deref().unwrap_or("")))
            },
        },
    ])
    .expect("leave application column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<LeaveApplication> {
    &COLUMNS
}
