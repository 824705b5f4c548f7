//! Static product table.
//!
//! Fixture data standing in for a product backend. Prices are whole
//! currency units; image paths are site-relative URIs.

use fay_core::{Price, ProductId};

use super::{Category, Collection, Product};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_lines)]
pub(super) fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            slug: "structured-wool-overcoat".to_owned(),
            name: "Structured Wool Overcoat".to_owned(),
            price: Price::from_units(895),
            description: "A commanding silhouette in double-faced wool. This overcoat is cut \
                for an intentional, slightly oversized drape that layers effortlessly over \
                tailoring or knitwear. The clean, minimal construction lets the weight and \
                quality of the fabric speak for itself."
                .to_owned(),
            details: strings(&[
                "Double-faced virgin wool",
                "Notch lapel with structured shoulder",
                "Two-button front closure",
                "Welt chest pocket",
                "Fully lined in cupro",
                "Made in Italy",
            ]),
            fabric_care: strings(&[
                "100% Virgin Wool",
                "Lining: 100% Cupro",
                "Dry clean only",
                "Store on a padded hanger",
            ]),
            images: strings(&[
                "/images/products/product-1.jpg",
                "/images/products/product-1-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            category: Category::Outerwear,
            collection: Collection::Essentials,
            is_new: false,
            is_featured: true,
        },
        Product {
            id: ProductId::new(2),
            slug: "silk-blend-relaxed-shirt".to_owned(),
            name: "Silk Blend Relaxed Shirt".to_owned(),
            price: Price::from_units(345),
            description: "Fluid and refined, this relaxed-fit shirt is crafted from a \
                silk-cotton blend that drapes with quiet elegance. The slightly dropped \
                shoulder and clean placket give it an effortless quality that transitions \
                from day to evening without compromise."
                .to_owned(),
            details: strings(&[
                "Silk-cotton blend fabric",
                "Relaxed fit with dropped shoulder",
                "Concealed front placket",
                "Single-button barrel cuffs",
                "Back yoke with box pleat",
                "Made in Portugal",
            ]),
            fabric_care: strings(&[
                "70% Cotton, 30% Silk",
                "Hand wash cold or dry clean",
                "Iron on low heat",
                "Do not tumble dry",
            ]),
            images: strings(&[
                "/images/products/product-2.jpg",
                "/images/products/product-2-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            category: Category::Tops,
            collection: Collection::NewSeason,
            is_new: true,
            is_featured: true,
        },
        Product {
            id: ProductId::new(3),
            slug: "tailored-wide-leg-trouser".to_owned(),
            name: "Tailored Wide-Leg Trouser".to_owned(),
            price: Price::from_units(425),
            description: "A study in proportion. These wide-leg trousers are cut from a \
                structured wool-blend with a high rise and clean front pleat that creates a \
                strong, elongated line. The generous leg opening balances perfectly against \
                fitted tops and structured outerwear."
                .to_owned(),
            details: strings(&[
                "Wool-blend structured fabric",
                "High-rise with double pleat front",
                "Wide-leg silhouette",
                "Side slash pockets",
                "Single welt back pockets",
                "Zip fly with hook-and-bar closure",
                "Made in Italy",
            ]),
            fabric_care: strings(&[
                "80% Wool, 20% Polyamide",
                "Dry clean recommended",
                "Steam to remove wrinkles",
                "Store folded or on a clamp hanger",
            ]),
            images: strings(&[
                "/images/products/product-3.jpg",
                "/images/products/product-3-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            category: Category::Bottoms,
            collection: Collection::Essentials,
            is_new: false,
            is_featured: true,
        },
        Product {
            id: ProductId::new(4),
            slug: "cashmere-half-zip-knit".to_owned(),
            name: "Cashmere Half-Zip Knit".to_owned(),
            price: Price::from_units(545),
            description: "Pure cashmere, zero excess. This half-zip knit is spun from \
                two-ply Mongolian cashmere in a fine gauge that sits close to the body \
                without clinging. The ribbed collar and cuffs add subtle structure to an \
                otherwise fluid piece."
                .to_owned(),
            details: strings(&[
                "Two-ply Mongolian cashmere",
                "Fine gauge knit",
                "Half-zip with metal hardware",
                "Ribbed collar, cuffs, and hem",
                "Regular fit",
                "Made in Scotland",
            ]),
            fabric_care: strings(&[
                "100% Cashmere",
                "Hand wash in cold water with cashmere detergent",
                "Lay flat to dry",
                "Store folded, never on a hanger",
            ]),
            images: strings(&[
                "/images/products/product-4.jpg",
                "/images/products/product-4-alt.jpg",
            ]),
            sizes: strings(&["S", "M", "L", "XL"]),
            category: Category::Tops,
            collection: Collection::Essentials,
            is_new: false,
            is_featured: false,
        },
        Product {
            id: ProductId::new(5),
            slug: "leather-minimal-belt".to_owned(),
            name: "Leather Minimal Belt".to_owned(),
            price: Price::from_units(195),
            description: "Pared back to its purest form. This belt is cut from a single \
                piece of full-grain Italian leather with a slim, brushed-silver buckle. The \
                understated profile makes it a foundational piece that anchors any look \
                without competing for attention."
                .to_owned(),
            details: strings(&[
                "Full-grain Italian leather",
                "Brushed silver-tone buckle",
                "30mm width",
                "Five-hole adjustment",
                "Tonal edge painting",
                "Made in Italy",
            ]),
            fabric_care: strings(&[
                "100% Full-Grain Cowhide Leather",
                "Wipe clean with a soft cloth",
                "Condition with leather balm periodically",
                "Store flat or loosely rolled",
            ]),
            images: strings(&[
                "/images/products/product-5.jpg",
                "/images/products/product-5-alt.jpg",
            ]),
            sizes: strings(&["S", "M", "L"]),
            category: Category::Accessories,
            collection: Collection::Essentials,
            is_new: false,
            is_featured: false,
        },
        Product {
            id: ProductId::new(6),
            slug: "double-breasted-blazer".to_owned(),
            name: "Double-Breasted Blazer".to_owned(),
            price: Price::from_units(695),
            description: "Authority, tailored. This double-breasted blazer is constructed \
                from a seasonless wool-crepe with a slightly nipped waist and peak lapel. It \
                borrows from menswear tradition but is recut with sharper, modern \
                proportions that feel entirely current."
                .to_owned(),
            details: strings(&[
                "Wool-crepe suiting fabric",
                "Peak lapel with double-breasted closure",
                "Padded shoulders for structure",
                "Functional sleeve buttons",
                "Double welt front pockets",
                "Interior welt pocket",
                "Half-canvas construction",
                "Made in Italy",
            ]),
            fabric_care: strings(&[
                "100% Virgin Wool",
                "Lining: 100% Viscose",
                "Dry clean only",
                "Store on a shaped hanger",
            ]),
            images: strings(&[
                "/images/products/product-6.jpg",
                "/images/products/product-6-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            category: Category::Outerwear,
            collection: Collection::NewSeason,
            is_new: true,
            is_featured: true,
        },
        Product {
            id: ProductId::new(7),
            slug: "ribbed-knit-tank".to_owned(),
            name: "Ribbed Knit Tank".to_owned(),
            price: Price::from_units(165),
            description: "Essential layering, elevated. This ribbed knit tank is made from \
                a compact cotton-blend that holds its shape wear after wear. The high \
                neckline and slim cut make it as effective under a blazer as it is on its \
                own."
                .to_owned(),
            details: strings(&[
                "Compact ribbed cotton-blend knit",
                "High round neckline",
                "Slim fit through the body",
                "Clean armhole finish",
                "Reinforced shoulder seams",
                "Made in Portugal",
            ]),
            fabric_care: strings(&[
                "90% Cotton, 10% Elastane",
                "Machine wash cold on gentle cycle",
                "Lay flat to dry",
                "Do not bleach",
            ]),
            images: strings(&[
                "/images/products/product-7.jpg",
                "/images/products/product-7-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L"]),
            category: Category::Tops,
            collection: Collection::Edit,
            is_new: true,
            is_featured: false,
        },
        Product {
            id: ProductId::new(8),
            slug: "draped-midi-skirt".to_owned(),
            name: "Draped Midi Skirt".to_owned(),
            price: Price::from_units(385),
            description: "Movement captured in fabric. This midi skirt is cut from a fluid \
                satin-back crepe that catches the light as it moves. The bias-cut \
                construction creates a natural drape that skims the body, landing at a \
                flattering mid-calf length."
                .to_owned(),
            details: strings(&[
                "Satin-back crepe fabric",
                "Bias-cut construction",
                "Concealed side zip",
                "Elasticated back waistband panel",
                "Midi length, hits mid-calf",
                "Made in France",
            ]),
            fabric_care: strings(&[
                "100% Triacetate",
                "Dry clean only",
                "Cool iron on reverse side",
                "Store on a padded skirt hanger",
            ]),
            images: strings(&[
                "/images/products/product-8.jpg",
                "/images/products/product-8-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L"]),
            category: Category::Bottoms,
            collection: Collection::NewSeason,
            is_new: true,
            is_featured: false,
        },
        Product {
            id: ProductId::new(9),
            slug: "oversized-cotton-tee".to_owned(),
            name: "Oversized Cotton Tee".to_owned(),
            price: Price::from_units(95),
            description: "The definitive wardrobe staple, reworked. This oversized tee is \
                cut from a heavyweight organic cotton jersey that has substance and \
                presence. The dropped shoulder and extended body length give it a relaxed, \
                intentional silhouette that pairs with everything."
                .to_owned(),
            details: strings(&[
                "Heavyweight organic cotton jersey (280 GSM)",
                "Oversized fit with dropped shoulder",
                "Ribbed crew neckline",
                "Extended body length",
                "Side-seam construction",
                "Made in Portugal",
            ]),
            fabric_care: strings(&[
                "100% Organic Cotton",
                "Machine wash cold",
                "Tumble dry low",
                "Will soften with each wash",
            ]),
            images: strings(&[
                "/images/products/product-9.jpg",
                "/images/products/product-9-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L", "XL", "XXL"]),
            category: Category::Tops,
            collection: Collection::Essentials,
            is_new: false,
            is_featured: false,
        },
        Product {
            id: ProductId::new(10),
            slug: "leather-structured-tote".to_owned(),
            name: "Leather Structured Tote".to_owned(),
            price: Price::from_units(595),
            description: "Carry everything, reveal nothing. This structured tote is crafted \
                from smooth, full-grain leather with a rigid base that keeps its shape \
                whether full or empty. The clean lines and absence of visible hardware give \
                it a quiet authority."
                .to_owned(),
            details: strings(&[
                "Full-grain smooth leather",
                "Rigid base construction",
                "Unlined interior with suede finish",
                "Interior zip pocket and slip pocket",
                "Magnetic top closure",
                "Reinforced handles with 22cm drop",
                "Protective metal feet",
                "Made in Italy",
            ]),
            fabric_care: strings(&[
                "100% Full-Grain Leather",
                "Wipe with a damp cloth",
                "Apply leather conditioner every 3-6 months",
                "Store stuffed with tissue in dust bag",
            ]),
            images: strings(&[
                "/images/products/product-10.jpg",
                "/images/products/product-10-alt.jpg",
            ]),
            sizes: strings(&["One Size"]),
            category: Category::Accessories,
            collection: Collection::Edit,
            is_new: false,
            is_featured: true,
        },
        Product {
            id: ProductId::new(11),
            slug: "slim-tailored-trouser".to_owned(),
            name: "Slim Tailored Trouser".to_owned(),
            price: Price::from_units(365),
            description: "Precision meets ease. These slim tailored trousers are cut from a \
                stretch-wool blend that moves with you without losing its pressed \
                silhouette. The mid-rise sits comfortably at the waist, and the tapered leg \
                creates a clean, modern line from hip to ankle."
                .to_owned(),
            details: strings(&[
                "Stretch-wool blend suiting",
                "Mid-rise with flat front",
                "Slim tapered leg",
                "Side slash pockets",
                "Single jetted back pockets with button",
                "Extended hook-and-bar closure",
                "Made in Italy",
            ]),
            fabric_care: strings(&[
                "96% Wool, 4% Elastane",
                "Dry clean recommended",
                "Steam or press on wool setting",
                "Store on a clamp hanger",
            ]),
            images: strings(&[
                "/images/products/product-11.jpg",
                "/images/products/product-11-alt.jpg",
            ]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            category: Category::Bottoms,
            collection: Collection::Edit,
            is_new: false,
            is_featured: false,
        },
        Product {
            id: ProductId::new(12),
            slug: "wool-cashmere-scarf".to_owned(),
            name: "Wool Cashmere Scarf".to_owned(),
            price: Price::from_units(225),
            description: "Warmth without weight. This generously sized scarf is woven from \
                a wool-cashmere blend that is impossibly soft against the skin. The raw-edge \
                finish and tonal palette keep it minimal, letting the quality of the yarn do \
                all the talking."
                .to_owned(),
            details: strings(&[
                "Wool-cashmere blend",
                "Generously sized: 200cm x 70cm",
                "Raw-edge finish",
                "Tonal brand label",
                "Lightweight yet insulating",
                "Made in Scotland",
            ]),
            fabric_care: strings(&[
                "70% Wool, 30% Cashmere",
                "Dry clean or hand wash cold",
                "Lay flat to dry away from direct heat",
                "Store folded in a breathable bag",
            ]),
            images: strings(&[
                "/images/products/product-12.jpg",
                "/images/products/product-12-alt.jpg",
            ]),
            sizes: strings(&["One Size"]),
            category: Category::Accessories,
            collection: Collection::NewSeason,
            is_new: true,
            is_featured: false,
        },
    ]
}
