//! Wire types for the backend's JSON contract.
//!
//! The backend speaks camelCase JSON with decimal money amounts; these
//! DTOs stay private to the crate and convert into the domain types at
//! the boundary.

use essence_commerce::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct TaxonomyDto {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl From<TaxonomyDto> for Taxonomy {
    fn from(dto: TaxonomyDto) -> Self {
        Taxonomy {
            departments: dto.departments,
            brands: dto.brands,
            categories: dto.categories,
            subcategories: dto.subcategories,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDto {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl ProductDto {
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            code: self.code,
            brand: self.brand,
            department: self.department,
            category: self.category,
            subcategory: self.subcategory,
            price: Money::from_decimal(self.price, currency),
            stock: self.stock,
            image_url: self.image_url,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilteredProductsDto {
    #[serde(default)]
    pub products: Vec<ProductDto>,
    pub page: u32,
    pub pages: u32,
    #[serde(default)]
    pub total_products: u64,
}

impl FilteredProductsDto {
    pub fn into_page(self, currency: Currency) -> ProductPage {
        ProductPage {
            products: self
                .products
                .into_iter()
                .map(|p| p.into_product(currency))
                .collect(),
            page: self.page,
            pages: self.pages,
            total_products: self.total_products,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineDto {
    pub product_id: String,
    pub name: String,
    pub code: String,
    pub quantity: i64,
    pub price_at_sale: f64,
}

impl CartLineDto {
    pub fn into_line(self, currency: Currency) -> CartLine {
        CartLine {
            product_id: ProductId::new(self.product_id),
            name: self.name,
            code: self.code,
            quantity: self.quantity,
            price_at_sale: Money::from_decimal(self.price_at_sale, currency),
        }
    }

    pub fn from_line(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            code: line.code.clone(),
            quantity: line.quantity,
            price_at_sale: line.price_at_sale.to_decimal(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartDto {
    #[serde(default)]
    pub cart_items: Vec<CartLineDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddItemBody<'a> {
    pub product_id: &'a str,
    pub quantity: i64,
    pub price_at_sale: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateQuantityBody<'a> {
    pub product_id: &'a str,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderBody<'a> {
    pub items: Vec<CartLineDto>,
    pub agent_contact: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceOrderDto {
    pub order: OrderDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDto {
    pub id: String,
    #[serde(default)]
    pub items: Vec<CartLineDto>,
    pub total: f64,
    pub agent_contact: String,
    #[serde(default)]
    pub created_at: i64,
}

impl OrderDto {
    pub fn into_order(self, currency: Currency) -> Order {
        Order {
            id: OrderId::new(self.id),
            items: self
                .items
                .into_iter()
                .map(|l| l.into_line(currency))
                .collect(),
            total: Money::from_decimal(self.total, currency),
            agent_contact: self.agent_contact,
            created_at: self.created_at,
        }
    }
}
