//! The backend contract and its HTTP implementation.

use crate::config::StorefrontConfig;
use crate::error::ApiError;
use crate::session::Session;
use crate::types::{
    AddItemBody, CartDto, CartLineDto, FilteredProductsDto, PlaceOrderBody, PlaceOrderDto,
    TaxonomyDto, UpdateQuantityBody,
};
use async_trait::async_trait;
use essence_commerce::prelude::*;
use essence_data::{FetchClient, RequestBuilder};
use std::time::Duration;

/// The remote storefront backend, one method per endpoint.
///
/// Stores depend on this trait rather than on HTTP so they can be driven
/// against a scripted mock in tests.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /taxonomy` scoped to the given filters (empty keys omitted).
    async fn fetch_taxonomy(
        &self,
        session: Option<&Session>,
        scope: &FilterSet,
    ) -> Result<Taxonomy, ApiError>;

    /// `GET /products/filtered` for one page of matching products.
    async fn fetch_products(
        &self,
        session: Option<&Session>,
        filters: &FilterSet,
        page: u32,
        limit: u32,
    ) -> Result<ProductPage, ApiError>;

    /// `GET /cart` — the authoritative cart contents.
    async fn fetch_cart(&self, session: &Session) -> Result<Vec<CartLine>, ApiError>;

    /// `POST /cart/add-item`.
    async fn add_cart_item(
        &self,
        session: &Session,
        product_id: &ProductId,
        quantity: i64,
        price_at_sale: Money,
    ) -> Result<(), ApiError>;

    /// `PUT /cart/update-item-quantity`.
    async fn update_cart_quantity(
        &self,
        session: &Session,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), ApiError>;

    /// `DELETE /cart/remove-item/{productId}`.
    async fn remove_cart_item(
        &self,
        session: &Session,
        product_id: &ProductId,
    ) -> Result<(), ApiError>;

    /// `POST /cart/place-order` — returns the server-assigned order.
    async fn place_order(
        &self,
        session: &Session,
        items: &[CartLine],
        agent_contact: &str,
    ) -> Result<Order, ApiError>;
}

/// `reqwest`-backed implementation of [`StorefrontApi`].
pub struct HttpStorefrontApi {
    client: FetchClient,
    currency: Currency,
}

impl HttpStorefrontApi {
    /// Create an API client over an already configured [`FetchClient`].
    pub fn new(client: FetchClient, currency: Currency) -> Self {
        Self { client, currency }
    }

    /// Create an API client from storefront configuration.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client = FetchClient::with_timeout(Duration::from_secs(config.request_timeout_secs))
            .map_err(ApiError::from)?
            .with_base_url(&config.api_base_url);
        Ok(Self::new(client, config.currency()))
    }

    fn authed(builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(s) => builder.bearer_auth(s.token()),
            None => builder,
        }
    }
}

/// Filter entries as wire query pairs.
fn filter_pairs(filters: &FilterSet) -> Vec<(&'static str, &str)> {
    filters
        .entries()
        .into_iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect()
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn fetch_taxonomy(
        &self,
        session: Option<&Session>,
        scope: &FilterSet,
    ) -> Result<Taxonomy, ApiError> {
        let request = Self::authed(self.client.get("/taxonomy"), session)
            .query(&filter_pairs(scope));
        let dto: TaxonomyDto = request.send().await?.error_for_status()?.json()?;
        Ok(dto.into())
    }

    async fn fetch_products(
        &self,
        session: Option<&Session>,
        filters: &FilterSet,
        page: u32,
        limit: u32,
    ) -> Result<ProductPage, ApiError> {
        let page_param = page.to_string();
        let limit_param = limit.to_string();
        let mut pairs = vec![
            ("page", page_param.as_str()),
            ("limit", limit_param.as_str()),
        ];
        pairs.extend(filter_pairs(filters));

        let request = Self::authed(self.client.get("/products/filtered"), session).query(&pairs);
        let dto: FilteredProductsDto = request.send().await?.error_for_status()?.json()?;
        Ok(dto.into_page(self.currency))
    }

    async fn fetch_cart(&self, session: &Session) -> Result<Vec<CartLine>, ApiError> {
        let dto: CartDto = self
            .client
            .get("/cart")
            .bearer_auth(session.token())
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(dto
            .cart_items
            .into_iter()
            .map(|l| l.into_line(self.currency))
            .collect())
    }

    async fn add_cart_item(
        &self,
        session: &Session,
        product_id: &ProductId,
        quantity: i64,
        price_at_sale: Money,
    ) -> Result<(), ApiError> {
        let body = AddItemBody {
            product_id: product_id.as_str(),
            quantity,
            price_at_sale: price_at_sale.to_decimal(),
        };
        self.client
            .post("/cart/add-item")
            .bearer_auth(session.token())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update_cart_quantity(
        &self,
        session: &Session,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), ApiError> {
        let body = UpdateQuantityBody {
            product_id: product_id.as_str(),
            quantity,
        };
        self.client
            .put("/cart/update-item-quantity")
            .bearer_auth(session.token())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn remove_cart_item(
        &self,
        session: &Session,
        product_id: &ProductId,
    ) -> Result<(), ApiError> {
        self.client
            .delete(format!("/cart/remove-item/{}", product_id))
            .bearer_auth(session.token())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn place_order(
        &self,
        session: &Session,
        items: &[CartLine],
        agent_contact: &str,
    ) -> Result<Order, ApiError> {
        let body = PlaceOrderBody {
            items: items.iter().map(CartLineDto::from_line).collect(),
            agent_contact,
        };
        let dto: PlaceOrderDto = self
            .client
            .post("/cart/place-order")
            .bearer_auth(session.token())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(dto.order.into_order(self.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pairs_omit_unset_keys() {
        let mut filters = FilterSet::new();
        filters.set(FilterKey::Department, "Fragancias");
        filters.set(FilterKey::Brand, "Dior");

        let pairs = filter_pairs(&filters);
        assert_eq!(
            pairs,
            vec![("department", "Fragancias"), ("brand", "Dior")]
        );
    }

    #[test]
    fn test_filter_pairs_empty_set() {
        assert!(filter_pairs(&FilterSet::new()).is_empty());
    }
}
