//! Wire DTOs for the backend APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    CustomerDetail, CustomerPage, CustomerSummary, CustomerType, ModuleSummary,
};

/// Login request body for `POST /api/public/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequestDto<'a> {
    pub identifier: &'a str,
    pub secret: &'a str,
}

/// Login response body.
#[derive(Debug, Deserialize)]
pub struct TokenResponseDto {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
}

/// One customer row on the wire.
#[derive(Debug, Deserialize)]
pub struct CustomerItemDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub customer_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address_street: Option<String>,
    #[serde(default)]
    pub address_ext_number: Option<String>,
    #[serde(default)]
    pub address_int_number: Option<String>,
    #[serde(default)]
    pub address_neighborhood: Option<String>,
    #[serde(default)]
    pub address_city: Option<String>,
    #[serde(default)]
    pub address_state: Option<String>,
    #[serde(default)]
    pub address_postal_code: Option<String>,
    #[serde(default)]
    pub address_country: Option<String>,
    pub is_active: bool,
}

/// Customer collection response: `items` plus a `total` count.
#[derive(Debug, Deserialize)]
pub struct CustomerListResponseDto {
    pub items: Vec<CustomerItemDto>,
    pub total: u64,
}

/// Full customer record on the wire.
#[derive(Debug, Deserialize)]
pub struct CustomerDetailDto {
    #[serde(flatten)]
    pub summary: CustomerItemDto,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One hub module entry on the wire.
#[derive(Debug, Deserialize)]
pub struct ModuleDto {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// The backend tags customers in its own locale; anything that is not the
// company tag counts as an individual, matching the original UI.
const COMPANY_TAG: &str = "bedrijf";

impl From<CustomerItemDto> for CustomerSummary {
    fn from(dto: CustomerItemDto) -> Self {
        let customer_type = if dto.customer_type == COMPANY_TAG {
            CustomerType::Company
        } else {
            CustomerType::Individual
        };

        Self {
            id: dto.id,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            customer_type,
            description: dto.description,
            company_name: dto.company_name,
            tax_id: dto.tax_id,
            address_street: dto.address_street,
            address_ext_number: dto.address_ext_number,
            address_int_number: dto.address_int_number,
            address_neighborhood: dto.address_neighborhood,
            address_city: dto.address_city,
            address_state: dto.address_state,
            address_postal_code: dto.address_postal_code,
            address_country: dto.address_country,
            is_active: dto.is_active,
        }
    }
}

impl From<CustomerListResponseDto> for CustomerPage {
    fn from(dto: CustomerListResponseDto) -> Self {
        Self {
            items: dto.items.into_iter().map(CustomerSummary::from).collect(),
            total: dto.total,
        }
    }
}

impl From<CustomerDetailDto> for CustomerDetail {
    fn from(dto: CustomerDetailDto) -> Self {
        Self {
            summary: dto.summary.into(),
            is_admin: dto.is_admin,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<ModuleDto> for ModuleSummary {
    fn from(dto: ModuleDto) -> Self {
        Self {
            slug: dto.slug,
            name: dto.name,
            description: dto.description,
            url: dto.url,
        }
    }
}
