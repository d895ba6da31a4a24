pub mod bank_account;
pub mod cheque;
pub mod equipment;
pub mod hardware_asset;
pub mod leave_application;
pub mod legal_document;
pub mod software_license;
pub mod support_ticket;
pub mod vehicle;
