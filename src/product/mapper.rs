//! Conversion between the persisted and wire shapes.
//!
//! Pure and stateless. No validation happens here; on the write path the
//! validator runs first, so a wire value reaching `to_entity` always has a price.

use crate::product::model::{ProductDto, ProductEntity};

/// Persisted row → wire value. The id is carried over as-is; rows coming out
/// of a store always have one.
pub fn to_dto(entity: &ProductEntity) -> ProductDto {
    ProductDto {
        id: entity.id,
        name: entity.name.clone(),
        description: entity.description.clone(),
        price: Some(entity.price),
    }
}

/// Wire value → persisted row. A wire value without an id leaves the row id
/// unset so the store assigns one.
pub fn to_entity(dto: &ProductDto) -> ProductEntity {
    ProductEntity {
        id: dto.id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        price: dto.price.unwrap_or_default(),
    }
}

pub fn to_dtos(entities: &[ProductEntity]) -> Vec<ProductDto> {
    entities.iter().map(to_dto).collect()
}
