use once_cell::sync::Lazy;

use contracts::domain::cheque::{Cheque, ChequeDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for Cheque {
    type Dto = ChequeDto;

    fn endpoint() -> &'static str {
        "/api/cheques"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "cheques"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Cheque"
    }

    fn list_name() -> &'static str {
        "Cheques"
    }
}

static COLUMNS: Lazy<ColumnSet<Cheque>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "chequeNumber",
            header: "Cheque no.",
            render: |c: &Cheque| Cell::text(&c.cheque_number),
        },
        ColumnDescriptor {
            key: "payeeName",
            header: "Payee",
            render: |c: &Cheque| Cell::opt_text(c.payee_name.as_deref()),
        },
        ColumnDescriptor {
            key: "amount",
            header: "Amount",
            render: |c: &Cheque| Cell::opt_display(c.amount.map(|a| format!("{:.2}", a))),
        },
        ColumnDescriptor {
            key: "currency",
            header: "Currency",
            render: |c: &Cheque| Cell::opt_text(c.currency.as_deref()),
        },
        ColumnDescriptor {
            key: "issueDate",
            header: "Issued",
            render: |c: &Cheque| Cell::date(c.issue_date.as_deref()),
        },
        ColumnDescriptor {
            key: "dueDate",
            header: "Due",
            render: |c: &Cheque| Cell::date(c.due_date.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |c: &Cheque| Cell::badge(STATUS.classify(c.status.as_deref().unwrap_or(""))),
        },
    ])
    .expect("cheque column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<Cheque> {
    &COLUMNS
}
