use once_cell::sync::Lazy;

use contracts::domain::bank_account::{BankAccount, BankAccountDto, STATUS};

use crate::columns::{Cell, ColumnDescriptor, ColumnSet};
use crate::envelope::ListEnvelope;
use crate::resource::RestResource;

impl RestResource for BankAccount {
    type Dto = BankAccountDto;

    fn endpoint() -> &'static str {
        "/api/bank-accounts"
    }

    fn envelope() -> ListEnvelope {
        ListEnvelope::new(
            &[&["data", "bankAccounts"], &["data", "accounts"], &["data"], &[]],
            &["data", "pagination", "totalCount"],
        )
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn element_name() -> &'static str {
        "Bank account"
    }

    fn list_name() -> &'static str {
        "Bank accounts"
    }
}

fn render_balance(account: &BankAccount) -> Cell {
    match account.balance {
        Some(balance) => {
            let currency = account.currency.as_deref().unwrap_or("");
            Cell::text(format!("{:.2} {}", balance, currency).trim_end().to_string())
        }
        None => Cell::opt_text(None),
    }
}

static COLUMNS: Lazy<ColumnSet<BankAccount>> = Lazy::new(|| {
    ColumnSet::new(vec![
        ColumnDescriptor {
            key: "accountName",
            header: "Account",
            render: |a: &BankAccount| Cell::text(&a.account_name),
        },
        ColumnDescriptor {
            key: "accountNumber",
            header: "Number",
            render: |a: &BankAccount| Cell::opt_text(a.account_number.as_deref()),
        },
        ColumnDescriptor {
            key: "bankName",
            header: "Bank",
            render: |a: &BankAccount| Cell::opt_text(a.bank_name.as_deref()),
        },
        ColumnDescriptor {
            key: "balance",
            header: "Balance",
            render: render_balance,
        },
        ColumnDescriptor {
            key: "openedDate",
            header: "Opened",
            render: |a: &BankAccount| Cell::date(a.opened_date.as_deref()),
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
            render: |a: &BankAccount| {
                Cell::badge(STATUS.classify(a.status.as_deref().unwrap_or("")))
            },
        },
    ])
    .expect("bank account column keys must be unique")
});

pub fn columns() -> &'static ColumnSet<BankAccount> {
    &COLUMNS
}
