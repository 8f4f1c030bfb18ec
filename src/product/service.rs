//! Product business logic.
//!
//! Validates writes, detects missing rows, and maps between wire and
//! persisted shapes around each store call.

use std::sync::Arc;

use crate::product::error::{ProductError, ProductResult};
use crate::product::mapper;
use crate::product::model::{ProductDto, ProductEntity, ProductId};
use crate::product::store::{ProductStore, StoreError};
use crate::product::validation::validate_product;

/// Orchestrates validation, persistence and mapping for products.
pub struct ProductService<S> {
    store: Arc<S>,
}

impl<S> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All products, in store order.
    pub async fn list_products(&self) -> ProductResult<Vec<ProductDto>> {
        let rows = self.store.find_all().await?;
        Ok(mapper::to_dtos(&rows))
    }

    pub async fn get_product(&self, id: ProductId) -> ProductResult<ProductDto> {
        let row = self.find_existing(id).await?;
        Ok(mapper::to_dto(&row))
    }

    /// Validate and insert. The returned product carries the generated id.
    pub async fn add_product(&self, product: ProductDto) -> ProductResult<ProductDto> {
        validate_product(&product)?;

        let mut record = mapper::to_entity(&product);
        record.id = None;

        let saved = self.store.save(record).await?;
        tracing::info!(id = ?saved.id, name = %saved.name, "Product created");
        Ok(mapper::to_dto(&saved))
    }

    /// Full replace of every mutable field of row `id`.
    ///
    /// The payload is mapped to a fresh record rather than merged onto the
    /// stored row; only the id is carried over.
    pub async fn update_product_by_id(
        &self,
        product: ProductDto,
        id: ProductId,
    ) -> ProductResult<ProductDto> {
        validate_product(&product)?;
        self.find_existing(id).await?;

        let mut record = mapper::to_entity(&product);
        record.id = Some(id);

        let saved = self.store.save(record).await.map_err(|e| not_found_or(e, id))?;
        tracing::info!(id, "Product updated");
        Ok(mapper::to_dto(&saved))
    }

    pub async fn delete_product_by_id(&self, id: ProductId) -> ProductResult<()> {
        let row = self.find_existing(id).await?;
        self.store.delete(&row).await.map_err(|e| not_found_or(e, id))?;
        tracing::info!(id, "Product deleted");
        Ok(())
    }

    async fn find_existing(&self, id: ProductId) -> ProductResult<ProductEntity> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

/// A row that vanished between lookup and write is still a not-found.
fn not_found_or(err: StoreError, id: ProductId) -> ProductError {
    match err {
        StoreError::MissingRow(_) => ProductError::NotFound(id),
        other => ProductError::Store(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::store::InMemoryProductStore;

    const DESCRIPTION: &str = "A twenty-plus character description text";

    fn service() -> ProductService<InMemoryProductStore> {
        ProductService::new(InMemoryProductStore::new())
    }

    #[tokio::test]
    async fn test_list_empty() {
        assert!(service().list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_assigns_id() {
        let service = service();
        let input = ProductDto::new("Pen", DESCRIPTION, 1.5);

        let created = service.add_product(input.clone()).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, input.name);
        assert_eq!(created.description, input.description);
        assert_eq!(created.price, input.price);
        assert_eq!(service.list_products().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_add_ignores_client_id() {
        let service = service();
        let input = ProductDto {
            id: Some(42),
            ..ProductDto::new("Pen", DESCRIPTION, 1.5)
        };

        let created = service.add_product(input).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_add_invalid_never_reaches_store() {
        let service = service();
        let err = service
            .add_product(ProductDto::new("", "short", -1.0))
            .await
            .unwrap_err();

        match err {
            ProductError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {}", other),
        }
        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let err = service().get_product(999).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(999)));
        assert_eq!(err.to_string(), "Could not find product by that id");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let service = service();
        let created = service
            .add_product(ProductDto::new("Pen", DESCRIPTION, 1.5))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let replacement = ProductDto::new("Fountain pen", "Refillable fountain pen, blue ink", 12.0);
        let updated = service
            .update_product_by_id(replacement.clone(), id)
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, replacement.name);
        assert_eq!(updated.description, replacement.description);
        assert_eq!(updated.price, Some(12.0));
        assert_eq!(service.get_product(id).await.unwrap(), updated);
        assert_eq!(service.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let err = service()
            .update_product_by_id(ProductDto::new("Pen", DESCRIPTION, 1.5), 7)
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_update_validates_first() {
        let service = service();
        let created = service
            .add_product(ProductDto::new("Pen", DESCRIPTION, 1.5))
            .await
            .unwrap();

        let err = service
            .update_product_by_id(ProductDto::new("Pen", DESCRIPTION, -3.0), created.id.unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
        assert_eq!(service.get_product(1).await.unwrap().price, Some(1.5));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = service();
        let created = service
            .add_product(ProductDto::new("Pen", DESCRIPTION, 1.5))
            .await
            .unwrap();
        let id = created.id.unwrap();

        service.delete_product_by_id(id).await.unwrap();
        let err = service.delete_product_by_id(id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[test]
    fn test_missing_row_maps_to_not_found() {
        assert!(matches!(
            not_found_or(StoreError::MissingRow(4), 4),
            ProductError::NotFound(4)
        ));
        assert!(matches!(
            not_found_or(StoreError::MissingId, 4),
            ProductError::Store(StoreError::MissingId)
        ));
    }
}
