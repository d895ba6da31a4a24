use once_cell::sync::Lazy;

use contracts::domain::legal_document::{LegalDocument, LegalDocumentDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for LegalDocument {
    type Dto = LegalDocumentDto;

    fn endpoint() -> &'static str {
        "/api/legal-documents"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "legalDocuments"], &["data", "documents"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Legal document"
    }

    fn list_name() -> &'static str {
        "Legal documents"
    }
}

static COLUMNS: Lazy<ColumnSet<LegalDocument>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "title",
            header: "Title",
            render: |d: &LegalDocument| Cell::text(&d.title),
        },
        ColumnDescriptor {
            key: "documentType",
            header: "Type",
            render: |d: &LegalDocument| Cell::opt_text(d.document_type.as_deref()),
        },
        ColumnDescriptor {
            key: "referenceNumber",
            header: "Reference",
            render: |d: &LegalDocument| Cell::opt_text(d.reference_number.as_deref()),
        },
        ColumnDescriptor {
            key: "issuedBy",
            header: "Issued by",
            render: |d: &LegalDocument| Cell::opt_text(d.issued_by.as_deref()),
        },
        ColumnDescriptor {
            key: "issueDate",
            header: "Issued",
            render: |d: &LegalDocument| Cell::date(d.issue_date.as_deref()),
        },
        ColumnDescriptor {
            key: "expiryDate",
            header: "Expires",
            render: |d: &LegalDocument| Cell::date(d.expiry_date.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |d: &LegalDocument| {
                Cell::badge(STATUS.classify(d.status.as_deref().unwrap_or("")))
            },
        },
    ])
    .expect("legal document column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<LegalDocument> {
    &COLUMNS
}
