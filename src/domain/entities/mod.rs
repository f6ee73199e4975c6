//! Domain entities.

mod customer;
mod module;
mod token;

pub use customer::{
    CustomerDetail, CustomerPage, CustomerSummary, CustomerType, FIELD_PLACEHOLDER,
    display_or_placeholder,
};
pub use module::ModuleSummary;
pub use token::SessionToken;

#[cfg(test)]
pub(crate) use customer::fixtures;
