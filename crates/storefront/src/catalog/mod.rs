//! Product catalogue.
//!
//! The catalogue is a static in-memory table loaded once at first access
//! and never mutated; every lookup is a pure read over that table. It
//! stands in for a product backend the same way the account tables do.

mod data;

use core::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fay_core::{Price, ProductId};

/// Product category used for shop filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Outerwear,
    Accessories,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Tops, Self::Bottoms, Self::Outerwear, Self::Accessories];

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tops => "Tops",
            Self::Bottoms => "Bottoms",
            Self::Outerwear => "Outerwear",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a [`Category`] from its display label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Seasonal collection a product is merchandised under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "The Essentials")]
    Essentials,
    #[serde(rename = "New Season")]
    NewSeason,
    #[serde(rename = "The Edit")]
    Edit,
}

impl Collection {
    /// All collections in display order.
    pub const ALL: [Self; 3] = [Self::Essentials, Self::NewSeason, Self::Edit];

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Essentials => "The Essentials",
            Self::NewSeason => "New Season",
            Self::Edit => "The Edit",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a [`Collection`] from its display label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCollection(s.to_owned()))
    }
}

/// A catalogue product.
///
/// Immutable once loaded; the bag takes its own snapshot of the fields it
/// needs at add time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Unique, URL-safe identifier.
    pub slug: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Construction and fit details, in display order.
    pub details: Vec<String>,
    /// Composition and care instructions, in display order.
    pub fabric_care: Vec<String>,
    /// Image URIs, primary first.
    pub images: Vec<String>,
    /// Size labels in display order.
    pub sizes: Vec<String>,
    pub category: Category,
    pub collection: Collection,
    pub is_new: bool,
    pub is_featured: bool,
}

impl Product {
    /// Primary image URI, if the product has one.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

static CATALOGUE: LazyLock<Vec<Product>> = LazyLock::new(data::products);

/// All products in display order.
#[must_use]
pub fn all() -> &'static [Product] {
    &CATALOGUE
}

/// Look up a product by its slug.
#[must_use]
pub fn product_by_slug(slug: &str) -> Option<&'static Product> {
    CATALOGUE.iter().find(|p| p.slug == slug)
}

/// Look up a product by its ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> Option<&'static Product> {
    CATALOGUE.iter().find(|p| p.id == id)
}

/// Products in a category, in display order.
#[must_use]
pub fn products_by_category(category: Category) -> Vec<&'static Product> {
    CATALOGUE.iter().filter(|p| p.category == category).collect()
}

/// Products merchandised under a collection, in display order.
#[must_use]
pub fn products_by_collection(collection: Collection) -> Vec<&'static Product> {
    CATALOGUE
        .iter()
        .filter(|p| p.collection == collection)
        .collect()
}

/// Products flagged for the featured rail.
#[must_use]
pub fn featured_products() -> Vec<&'static Product> {
    CATALOGUE.iter().filter(|p| p.is_featured).collect()
}

/// Products flagged as new arrivals.
#[must_use]
pub fn new_arrivals() -> Vec<&'static Product> {
    CATALOGUE.iter().filter(|p| p.is_new).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalogue_is_loaded() {
        assert_eq!(all().len(), 12);
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<&str> = all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), all().len());
    }

    #[test]
    fn test_lookup_by_slug() {
        let product = product_by_slug("structured-wool-overcoat").unwrap();
        assert_eq!(product.name, "Structured Wool Overcoat");
        assert_eq!(product.price, Price::from_units(895));
        assert_eq!(product.category, Category::Outerwear);

        assert!(product_by_slug("missing-product").is_none());
    }

    #[test]
    fn test_lookup_by_id_matches_slug() {
        for product in all() {
            let found = product_by_id(product.id).unwrap();
            assert_eq!(found.slug, product.slug);
        }
    }

    #[test]
    fn test_category_filters_partition_catalogue() {
        let total: usize = Category::ALL
            .into_iter()
            .map(|c| products_by_category(c).len())
            .sum();
        assert_eq!(total, all().len());
    }

    #[test]
    fn test_collection_filters_partition_catalogue() {
        let total: usize = Collection::ALL
            .into_iter()
            .map(|c| products_by_collection(c).len())
            .sum();
        assert_eq!(total, all().len());
    }

    #[test]
    fn test_flag_filters() {
        assert!(featured_products().iter().all(|p| p.is_featured));
        assert!(new_arrivals().iter().all(|p| p.is_new));
        assert!(!featured_products().is_empty());
        assert!(!new_arrivals().is_empty());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Outerwear".parse::<Category>().unwrap(), Category::Outerwear);
        assert_eq!("tops".parse::<Category>().unwrap(), Category::Tops);
        assert!("Shoes".parse::<Category>().is_err());

        assert_eq!(
            "The Essentials".parse::<Collection>().unwrap(),
            Collection::Essentials
        );
        assert!("Winter".parse::<Collection>().is_err());
    }

    #[test]
    fn test_serializes_with_published_field_names() {
        let product = product_by_slug("silk-blend-relaxed-shirt").unwrap();
        let json = serde_json::to_value(product).unwrap();
        assert_eq!(json["collection"], "New Season");
        assert!(json.get("fabricCare").is_some());
        assert!(json.get("isNew").is_some());
        assert!(json.get("isFeatured").is_some());
    }
}
