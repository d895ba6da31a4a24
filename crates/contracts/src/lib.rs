//! Shared contracts between the back-office client layer and its REST
//! resources: typed entity records, write DTOs, and the pure display
//! primitives (pagination math, status badges, date formatting).

pub mod domain;
pub mod shared;
