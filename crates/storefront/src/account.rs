//! Mock account data tables.
//!
//! Read-only fixtures standing in for a backend: the shopper profile,
//! address book, order history, and wishlist. Loaded once at first
//! access and never mutated; accessors are pure reads.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fay_core::{AddressId, OrderId, OrderStatus, Price, ProductId};

use crate::catalog::Category;

/// Shopper profile details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

/// An entry in the saved address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    /// Shopper-assigned label, e.g. "Home".
    pub label: String,
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub is_default: bool,
}

/// A line on a past order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub price: Price,
    pub quantity: u32,
    pub image: String,
    pub slug: String,
}

/// A past order in the account history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    pub tracking_number: Option<String>,
    pub delivery_date: Option<NaiveDate>,
}

/// A saved wishlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
    pub sizes: Vec<String>,
}

/// The mock shopper's profile.
#[must_use]
pub fn profile() -> &'static UserProfile {
    &PROFILE
}

/// Saved addresses, default first.
#[must_use]
pub fn addresses() -> &'static [Address] {
    &ADDRESSES
}

/// The default saved address, if one is flagged.
#[must_use]
pub fn default_address() -> Option<&'static Address> {
    ADDRESSES.iter().find(|a| a.is_default)
}

/// Past orders, most recent first.
#[must_use]
pub fn orders() -> &'static [Order] {
    &ORDERS
}

/// Look up a past order by its order number.
#[must_use]
pub fn order_by_number(number: &str) -> Option<&'static Order> {
    ORDERS.iter().find(|o| o.order_number == number)
}

/// Saved wishlist entries.
#[must_use]
pub fn wishlist() -> &'static [WishlistItem] {
    &WISHLIST
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn sizes(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

static PROFILE: LazyLock<UserProfile> = LazyLock::new(|| UserProfile {
    first_name: "Amara".to_owned(),
    last_name: "Osei".to_owned(),
    email: "amara.osei@email.com".to_owned(),
    phone: "+233 24 456 7890".to_owned(),
    date_of_birth: date(1994, 3, 15),
    gender: "Female".to_owned(),
});

static ADDRESSES: LazyLock<Vec<Address>> = LazyLock::new(|| {
    vec![
        Address {
            id: AddressId::new(1),
            label: "Home".to_owned(),
            first_name: "Amara".to_owned(),
            last_name: "Osei".to_owned(),
            address_line1: "24 Independence Avenue".to_owned(),
            address_line2: Some("Ridge Residential".to_owned()),
            city: "Accra".to_owned(),
            state: "Greater Accra".to_owned(),
            postal_code: "GA-123".to_owned(),
            country: "Ghana".to_owned(),
            phone: "+233 24 456 7890".to_owned(),
            is_default: true,
        },
        Address {
            id: AddressId::new(2),
            label: "Office".to_owned(),
            first_name: "Amara".to_owned(),
            last_name: "Osei".to_owned(),
            address_line1: "5th Floor, One Airport Square".to_owned(),
            address_line2: None,
            city: "Accra".to_owned(),
            state: "Greater Accra".to_owned(),
            postal_code: "GA-058".to_owned(),
            country: "Ghana".to_owned(),
            phone: "+233 30 277 1234".to_owned(),
            is_default: false,
        },
    ]
});

static ORDERS: LazyLock<Vec<Order>> = LazyLock::new(|| {
    vec![
        Order {
            id: OrderId::new(1),
            order_number: "FAY-20250187".to_owned(),
            date: date(2025, 2, 10),
            status: OrderStatus::Delivered,
            items: vec![
                OrderItem {
                    product_id: ProductId::new(2),
                    name: "Silk Blend Relaxed Shirt".to_owned(),
                    size: "M".to_owned(),
                    price: Price::from_units(345),
                    quantity: 1,
                    image: "/images/products/silk-blend-relaxed-shirt/1.jpg".to_owned(),
                    slug: "silk-blend-relaxed-shirt".to_owned(),
                },
                OrderItem {
                    product_id: ProductId::new(5),
                    name: "Leather Minimal Belt".to_owned(),
                    size: "M".to_owned(),
                    price: Price::from_units(195),
                    quantity: 1,
                    image: "/images/products/leather-minimal-belt/1.jpg".to_owned(),
                    slug: "leather-minimal-belt".to_owned(),
                },
            ],
            subtotal: Price::from_units(540),
            shipping: Price::ZERO,
            total: Price::from_units(540),
            tracking_number: Some("FAY1234567890".to_owned()),
            delivery_date: Some(date(2025, 2, 18)),
        },
        Order {
            id: OrderId::new(2),
            order_number: "FAY-20250203".to_owned(),
            date: date(2025, 1, 28),
            status: OrderStatus::Shipped,
            items: vec![OrderItem {
                product_id: ProductId::new(1),
                name: "Structured Wool Overcoat".to_owned(),
                size: "S".to_owned(),
                price: Price::from_units(895),
                quantity: 1,
                image: "/images/products/structured-wool-overcoat/1.jpg".to_owned(),
                slug: "structured-wool-overcoat".to_owned(),
            }],
            subtotal: Price::from_units(895),
            shipping: Price::ZERO,
            total: Price::from_units(895),
            tracking_number: Some("FAY0987654321".to_owned()),
            delivery_date: None,
        },
        Order {
            id: OrderId::new(3),
            order_number: "FAY-20250089".to_owned(),
            date: date(2024, 12, 15),
            status: OrderStatus::Delivered,
            items: vec![
                OrderItem {
                    product_id: ProductId::new(3),
                    name: "Tailored Wide-Leg Trouser".to_owned(),
                    size: "S".to_owned(),
                    price: Price::from_units(425),
                    quantity: 1,
                    image: "/images/products/tailored-wide-leg-trouser/1.jpg".to_owned(),
                    slug: "tailored-wide-leg-trouser".to_owned(),
                },
                OrderItem {
                    product_id: ProductId::new(7),
                    name: "Ribbed Knit Tank".to_owned(),
                    size: "S".to_owned(),
                    price: Price::from_units(165),
                    quantity: 2,
                    image: "/images/products/ribbed-knit-tank/1.jpg".to_owned(),
                    slug: "ribbed-knit-tank".to_owned(),
                },
            ],
            subtotal: Price::from_units(755),
            shipping: Price::ZERO,
            total: Price::from_units(755),
            tracking_number: None,
            delivery_date: Some(date(2024, 12, 23)),
        },
    ]
});

static WISHLIST: LazyLock<Vec<WishlistItem>> = LazyLock::new(|| {
    vec![
        WishlistItem {
            product_id: ProductId::new(6),
            slug: "double-breasted-blazer".to_owned(),
            name: "Double-Breasted Blazer".to_owned(),
            price: Price::from_units(695),
            image: "/images/products/double-breasted-blazer/1.jpg".to_owned(),
            category: Category::Outerwear,
            sizes: sizes(&["XS", "S", "M", "L"]),
        },
        WishlistItem {
            product_id: ProductId::new(4),
            slug: "cashmere-half-zip-knit".to_owned(),
            name: "Cashmere Half-Zip Knit".to_owned(),
            price: Price::from_units(545),
            image: "/images/products/cashmere-half-zip-knit/1.jpg".to_owned(),
            category: Category::Tops,
            sizes: sizes(&["S", "M", "L", "XL"]),
        },
        WishlistItem {
            product_id: ProductId::new(8),
            slug: "draped-midi-skirt".to_owned(),
            name: "Draped Midi Skirt".to_owned(),
            price: Price::from_units(385),
            image: "/images/products/draped-midi-skirt/1.jpg".to_owned(),
            category: Category::Bottoms,
            sizes: sizes(&["XS", "S", "M"]),
        },
        WishlistItem {
            product_id: ProductId::new(10),
            slug: "leather-structured-tote".to_owned(),
            name: "Leather Structured Tote".to_owned(),
            price: Price::from_units(595),
            image: "/images/products/leather-structured-tote/1.jpg".to_owned(),
            category: Category::Accessories,
            sizes: sizes(&["One Size"]),
        },
    ]
});
