//! Customer entities for the website admin.

use chrono::{DateTime, Utc};

/// Fixed placeholder rendered in place of absent optional fields.
pub const FIELD_PLACEHOLDER: &str = "-";

/// Two-valued customer classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerType {
    /// A private individual.
    Individual,
    /// A registered company.
    Company,
}

impl CustomerType {
    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Company => "Company",
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One customer row as returned in list responses.
#[derive(Debug, Clone)]
pub struct CustomerSummary {
    /// Backend identifier.
    pub id: String,
    /// Contact email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional phone number.
    pub phone_number: Option<String>,
    /// Individual or company.
    pub customer_type: CustomerType,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional company name.
    pub company_name: Option<String>,
    /// Optional tax identifier.
    pub tax_id: Option<String>,
    /// Optional street name.
    pub address_street: Option<String>,
    /// Optional exterior number.
    pub address_ext_number: Option<String>,
    /// Optional interior number.
    pub address_int_number: Option<String>,
    /// Optional neighborhood.
    pub address_neighborhood: Option<String>,
    /// Optional city.
    pub address_city: Option<String>,
    /// Optional state.
    pub address_state: Option<String>,
    /// Optional postal code.
    pub address_postal_code: Option<String>,
    /// Optional country.
    pub address_country: Option<String>,
    /// Whether the customer account is active.
    pub is_active: bool,
}

impl CustomerSummary {
    /// Returns first and last name joined.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A filtered page of customers plus the backend's total count.
#[derive(Debug, Clone)]
pub struct CustomerPage {
    /// Customers matching the filter.
    pub items: Vec<CustomerSummary>,
    /// Total match count reported by the backend.
    pub total: u64,
}

impl CustomerPage {
    /// Returns whether the page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Full customer record shown on the detail view.
#[derive(Debug, Clone)]
pub struct CustomerDetail {
    /// Summary fields shared with the list view.
    pub summary: CustomerSummary,
    /// Whether the customer holds admin rights.
    pub is_admin: bool,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Renders an optional field, substituting the fixed placeholder when absent
/// or blank.
#[must_use]
pub fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => FIELD_PLACEHOLDER,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn summary(id: &str) -> CustomerSummary {
        CustomerSummary {
            id: id.to_string(),
            email: format!("{id}@example.mx"),
            first_name: "Ana".to_string(),
            last_name: "Garcia".to_string(),
            phone_number: None,
            customer_type: CustomerType::Individual,
            description: None,
            company_name: None,
            tax_id: None,
            address_street: None,
            address_ext_number: None,
            address_int_number: None,
            address_neighborhood: None,
            address_city: Some("Monterrey".to_string()),
            address_state: Some("NL".to_string()),
            address_postal_code: None,
            address_country: Some("MX".to_string()),
            is_active: true,
        }
    }

    pub fn detail(id: &str) -> CustomerDetail {
        CustomerDetail {
            summary: summary(id),
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer = fixtures::summary("c1");
        assert_eq!(customer.full_name(), "Ana Garcia");
    }

    #[test]
    fn test_display_or_placeholder() {
        assert_eq!(display_or_placeholder(Some("Monterrey")), "Monterrey");
        assert_eq!(display_or_placeholder(Some("  ")), FIELD_PLACEHOLDER);
        assert_eq!(display_or_placeholder(None), FIELD_PLACEHOLDER);
    }

    #[test]
    fn test_empty_page() {
        let page = CustomerPage {
            items: vec![],
            total: 0,
        };
        assert!(page.is_empty());
    }
}
