use once_cell::sync::Lazy;

use contracts::domain::support_ticket::{SupportTicket, SupportTicketDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for SupportTicket {
    type Dto = SupportTicketDto;

    fn endpoint() -> &'static str {
        "/api/support-tickets"
    }

    // the ticketing service predates the common envelope; it nests the
    // array at the top level and reports the count as `total`
    fn envelope() -> ListEnvelope {
        ListEnvelope::new(&[&["tickets"], &["data"], &[]], &["total"])
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Support ticket"
    }

    fn list_name() -> &'static str {
        "Support tickets"
    }
}

static COLUMNS: Lazy<ColumnSet<SupportTicket>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "subject",
            header: "Subject",
            render: |t: &SupportTicket| Cell::text(&t.subject),
        },
        ColumnDescriptor {
            key: "category",
            header: "Category",
            render: |t: &SupportTicket| Cell::opt_text(t.category.as_deref()),
        },
        ColumnDescriptor {
            key: "priority",
            header: "Priority",
            render: |t: &SupportTicket| Cell::opt_text(t.priority.as_deref()),
        },
        ColumnDescriptor {
            key: "reportedBy",
            header: "Reported by",
            render: |t: &SupportTicket| Cell::opt_text(t.reported_by.as_deref()),
        },
        ColumnDescriptor {
            key: "assignedTo",
            header: "Assigned to",
            render: |t: &SupportTicket| Cell::opt_text(t.assigned_to.as_deref()),
        },
        ColumnDescriptor {
            key: "createdAt",
            header: "Created",
            render: |t: &SupportTicket| Cell::datetime(t.created_at.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |t: &SupportTicket| {
                Cell::badge(STATUS.classify(t.status.as_deref().unwrap_or("")))
            },
        },
    ])
    .expect("support ticket column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<SupportTicket> {
    &COLUMNS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestApi;
    use contracts::shared::page::PageRequest;
    use serde_json::json;

    #[tokio::test]
    async fn test_top_level_envelope_is_normalized() {
        let api = TestApi::start().await;
        api.mock_get_json(
            "/api/support-tickets",
            json!({"tickets": [{"id": "t-1", "subject": "VPN down", "status": "open"}],
                   "total": 12}),
        )
        .await;

        let page = api
            .service::<SupportTicket>()
            .list(PageRequest::first(25))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 12);
        assert_eq!(page.items[0].subject, "VPN down");
    }
}
