//! Default catalog content.
//!
//! Written by `hartna seed` and used whenever a collection has never been
//! saved.

use crate::models::{Category, HeroSlide, Product, Subcategory};
use crate::types::{CategoryId, Price, ProductId, SlideId, SubcategoryId};

fn category(id: &str, name: &str, name_ar: &str, subcategories: &[(&str, &str, &str)]) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        name_ar: name_ar.to_owned(),
        subcategories: subcategories
            .iter()
            .map(|(id, name, name_ar)| Subcategory {
                id: SubcategoryId::new(*id),
                name: (*name).to_owned(),
                name_ar: (*name_ar).to_owned(),
            })
            .collect(),
    }
}

/// The six default categories and their subcategories.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        category(
            "coffee-machines",
            "Coffee Machines",
            "آلات القهوة",
            &[
                ("professional-espresso", "Professional Espresso Machines", "آلات إسبريسو احترافية"),
                ("vending-machines", "Vending Machines", "آلات البيع"),
                ("home-office", "Home-Office Machines", "آلات المنزل والمكتب"),
            ],
        ),
        category(
            "slush-machines",
            "Slush Machines",
            "آلات السلاش",
            &[
                ("elmec", "ELMEC", "إلميكو"),
                ("spm", "SPM", "إس بي إم"),
            ],
        ),
        category(
            "coffee-grinder",
            "Coffee Grinder",
            "مطاحن القهوة",
            &[
                ("espresso", "Espresso Coffee Grinder", "مطحنة قهوة إسبريسو"),
                ("fine", "Fine Coffee Grinder", "مطحنة قهوة ناعمة"),
            ],
        ),
        category(
            "others-machines",
            "Others Machines",
            "آلات أخرى",
            &[
                ("blenders", "Blenders Machines", "آلات الخلاط"),
                ("cooling", "Cooling Machines", "آلات التبريد"),
                ("others", "Others Machines", "آلات أخرى"),
            ],
        ),
        category(
            "spare-parts",
            "Spare Parts",
            "قطع الغيار",
            &[
                ("coffee-machines", "Spare Parts Coffee Machines", "قطع غيار آلات القهوة"),
                ("slush-machines", "Spare Parts Slush Machines", "قطع غيار آلات السلاش"),
                ("coffee-grinder", "Spare Parts Coffee Grinder", "قطع غيار مطاحن القهوة"),
            ],
        ),
        category(
            "accessories",
            "Accessories",
            "الإكسسوارات",
            &[
                ("grinders", "Grinders", "مطاحن"),
                ("filters", "Filters", "فلاتر"),
                ("cups", "Cups & Mugs", "أكواب وفناجين"),
                ("cleaning", "Cleaning Supplies", "مستلزمات التنظيف"),
            ],
        ),
    ]
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    name_ar: &'static str,
    description: &'static str,
    description_ar: &'static str,
    price: u32,
    image: &'static str,
    category: &'static str,
    subcategory: &'static str,
    featured: bool,
    origin: &'static str,
    origin_ar: &'static str,
}

impl From<&ProductSeed> for Product {
    fn from(seed: &ProductSeed) -> Self {
        Self {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            name_ar: seed.name_ar.to_owned(),
            description: seed.description.to_owned(),
            description_ar: seed.description_ar.to_owned(),
            price: Price::from_units(seed.price),
            image: seed.image.to_owned(),
            category: CategoryId::new(seed.category),
            subcategory: Some(SubcategoryId::new(seed.subcategory)),
            featured: seed.featured,
            product_origin: Some(seed.origin.to_owned()),
            product_origin_ar: Some(seed.origin_ar.to_owned()),
        }
    }
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: "1",
        name: "Professional Espresso Machine Pro X1",
        name_ar: "آلة إسبريسو احترافية برو X1",
        description: "High-end professional espresso machine with dual boiler system",
        description_ar: "آلة إسبريسو احترافية عالية الجودة مع نظام غلاية مزدوجة",
        price: 2999,
        image: "/professional-espresso-machine.jpg",
        category: "coffee-machines",
        subcategory: "professional-espresso",
        featured: true,
        origin: "Italy",
        origin_ar: "إيطاليا",
    },
    ProductSeed {
        id: "2",
        name: "Automatic Coffee Maker Elite",
        name_ar: "صانعة قهوة أوتوماتيكية إيليت",
        description: "Fully automatic coffee machine with built-in grinder",
        description_ar: "آلة قهوة أوتوماتيكية بالكامل مع مطحنة مدمجة",
        price: 1899,
        image: "/automatic-coffee-maker.jpg",
        category: "coffee-machines",
        subcategory: "vending-machines",
        featured: true,
        origin: "Germany",
        origin_ar: "ألمانيا",
    },
    ProductSeed {
        id: "3",
        name: "Commercial Espresso Station",
        name_ar: "محطة إسبريسو تجارية",
        description: "Heavy-duty commercial espresso machine for cafes",
        description_ar: "آلة إسبريسو تجارية للاستخدام المكثف في المقاهي",
        price: 4599,
        image: "/commercial-espresso-machine.jpg",
        category: "coffee-machines",
        subcategory: "home-office",
        featured: true,
        origin: "Switzerland",
        origin_ar: "سويسرا",
    },
    ProductSeed {
        id: "7",
        name: "ELMEC Slush Machine BIG BIZ ",
        name_ar: "آلة صنع سلاش إلميكو بيك بيز",
        description: "ELMEC professional slush machine with 2tanks(6Liter), dual motor (cooling and freezing), and environmentally friendly",
        description_ar: "آلة صنع سلاش الاحترافية مع خزانين (6 لترًا)، ومحرك مزدوج (تبريد وتجميد)، وصديقة للبيئة",
        price: 3499,
        image: "/ELMECO BIG BIZ.jpg",
        category: "slush-machines",
        subcategory: "elmec",
        featured: true,
        origin: "Italian",
        origin_ar: "ايطالية المنشأ",
    },
    ProductSeed {
        id: "15",
        name: "ELMEC Slush Machine FC3 ",
        name_ar: "آلة صنع سلاش إلميكو إف سي 3",
        description: "ELMEC professional slush machine with 3tanks(12Liter), dual motor (cooling and freezing), and environmentally friendly",
        description_ar: "آلة صنع سلاش الاحترافية مع ثلاث خزانات (12 لترًا)، ومحرك مزدوج (تبريد وتجميد)، وصديقة للبيئة",
        price: 3000,
        image: "/ELMECO FC3.jpg",
        category: "slush-machines",
        subcategory: "elmec",
        featured: true,
        origin: "Italian",
        origin_ar: "ايطالية المنشأ",
    },
    ProductSeed {
        id: "8",
        name: "SPM Slush Frosty Dream",
        name_ar: " آلة صنع سلاش إس بي إم فروستي دريم",
        description: "SPM professional slush machine with two tanks(12Liter), dual motor (cooling and freezing), and environmentally friendly",
        description_ar: "آلة صنع سلاش الاحترافية مع خزانين (12 لترًا)، ومحرك مزدوج (تبريد وتجميد)، وصديقة للبيئة",
        price: 2899,
        image: "/SPM Frosty Dream 2.jpg",
        category: "slush-machines",
        subcategory: "spm",
        featured: false,
        origin: "Italian",
        origin_ar: "ايطالية المنشأ",
    },
    ProductSeed {
        id: "9",
        name: "Espresso Grinder Pro",
        name_ar: "مطحنة إسبريسو برو",
        description: "Professional espresso grinder with precision burrs",
        description_ar: "مطحنة إسبريسو احترافية مع شفرات دقيقة",
        price: 599,
        image: "/CUNCILL BRASIL.png",
        category: "coffee-grinder",
        subcategory: "espresso",
        featured: false,
        origin: "Espain",
        origin_ar: "اسبانيا",
    },
    ProductSeed {
        id: "10",
        name: "Fine Coffee Grinder",
        name_ar: "مطحنة قهوة ناعمة",
        description: "Fine grind coffee grinder for Turkish coffee",
        description_ar: "مطحنة قهوة ناعمة للقهوة التركية",
        price: 399,
        image: "/vintage-coffee-grinder.png",
        category: "coffee-grinder",
        subcategory: "fine",
        featured: false,
        origin: "Turkey",
        origin_ar: "تركيا",
    },
    ProductSeed {
        id: "11",
        name: "Commercial Blender",
        name_ar: "خلاط تجاري",
        description: "Heavy-duty commercial blender for smoothies",
        description_ar: "خلاط تجاري للاستخدام المكثف للعصائر",
        price: 799,
        image: "/commercial-blender.jpg",
        category: "others-machines",
        subcategory: "blenders",
        featured: false,
        origin: "USA",
        origin_ar: "الولايات المتحدة",
    },
    ProductSeed {
        id: "12",
        name: "Cooling Machine",
        name_ar: "آلة تبريد",
        description: "Professional cooling machine for beverages",
        description_ar: "آلة تبريد احترافية للمشروبات",
        price: 1299,
        image: "/cooling-machine.jpg",
        category: "others-machines",
        subcategory: "cooling",
        featured: false,
        origin: "Netherlands",
        origin_ar: "هولندا",
    },
    ProductSeed {
        id: "13",
        name: "Coffee Machine Spare Parts Kit",
        name_ar: "طقم قطع غيار آلة القهوة",
        description: "Complete spare parts kit for coffee machines",
        description_ar: "طقم قطع غيار كامل لآلات القهوة",
        price: 199,
        image: "/spare-parts.jpg",
        category: "spare-parts",
        subcategory: "coffee-machines",
        featured: false,
        origin: "Germany",
        origin_ar: "ألمانيا",
    },
    ProductSeed {
        id: "14",
        name: "Slush Machine Parts",
        name_ar: "قطع غيار آلة السلاش",
        description: "Replacement parts for slush machines",
        description_ar: "قطع غيار بديلة لآلات السلاش",
        price: 149,
        image: "/machine-parts.jpg",
        category: "spare-parts",
        subcategory: "slush-machines",
        featured: false,
        origin: "Spain",
        origin_ar: "إسبانيا",
    },
    ProductSeed {
        id: "4",
        name: "Premium Coffee Grinder",
        name_ar: "مطحنة قهوة فاخرة",
        description: "Precision burr grinder with 40 grind settings",
        description_ar: "مطحنة دقيقة مع 40 إعداد طحن",
        price: 399,
        image: "/vintage-coffee-grinder.png",
        category: "accessories",
        subcategory: "grinders",
        featured: false,
        origin: "Japan",
        origin_ar: "اليابان",
    },
    ProductSeed {
        id: "5",
        name: "Water Filter System",
        name_ar: "نظام فلتر المياه",
        description: "Advanced water filtration for better coffee taste",
        description_ar: "نظام ترشيح مياه متقدم لطعم قهوة أفضل",
        price: 149,
        image: "/water-filter-kitchen.png",
        category: "accessories",
        subcategory: "filters",
        featured: false,
        origin: "USA",
        origin_ar: "الولايات المتحدة",
    },
    ProductSeed {
        id: "6",
        name: "Espresso Cup Set",
        name_ar: "طقم فناجين إسبريسو",
        description: "Premium porcelain espresso cups, set of 6",
        description_ar: "فناجين إسبريسو فاخرة من البورسلان، طقم من 6",
        price: 79,
        image: "/colorful-espresso-cups.png",
        category: "accessories",
        subcategory: "cups",
        featured: false,
        origin: "Portugal",
        origin_ar: "البرتغال",
    },
];

/// The fifteen default products.
#[must_use]
pub fn default_products() -> Vec<Product> {
    PRODUCTS.iter().map(Product::from).collect()
}

/// The three default hero slides.
#[must_use]
pub fn default_hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            id: SlideId::new("1"),
            title: "Premium Espresso Machines".to_owned(),
            title_ar: "آلات إسبريسو فاخرة".to_owned(),
            subtitle: "Crafted for perfection, designed for excellence".to_owned(),
            subtitle_ar: "مصنوعة للكمال، مصممة للتميز".to_owned(),
            image: "/premium-espresso-machine-hero.jpg".to_owned(),
            cta: "Shop Now".to_owned(),
            cta_ar: "تسوق الآن".to_owned(),
            link: None,
        },
        HeroSlide {
            id: SlideId::new("2"),
            title: "Professional Coffee Solutions".to_owned(),
            title_ar: "حلول قهوة احترافية".to_owned(),
            subtitle: "Elevate your coffee experience".to_owned(),
            subtitle_ar: "ارتقِ بتجربة القهوة الخاصة بك".to_owned(),
            image: "/professional-coffee-machine.jpg".to_owned(),
            cta: "Explore".to_owned(),
            cta_ar: "استكشف".to_owned(),
            link: None,
        },
        HeroSlide {
            id: SlideId::new("3"),
            title: "Complete Accessories Range".to_owned(),
            title_ar: "مجموعة إكسسوارات كاملة".to_owned(),
            subtitle: "Everything you need for the perfect brew".to_owned(),
            subtitle_ar: "كل ما تحتاجه للتحضير المثالي".to_owned(),
            image: "/coffee-accessories.jpg".to_owned(),
            cta: "Discover".to_owned(),
            cta_ar: "اكتشف".to_owned(),
            link: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_sizes() {
        assert_eq!(default_categories().len(), 6);
        assert_eq!(default_products().len(), 15);
        assert_eq!(default_hero_slides().len(), 3);
    }

    #[test]
    fn test_product_ids_unique() {
        let products = default_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_products_reference_existing_subcategories() {
        let categories = default_categories();
        for product in default_products() {
            let category = categories
                .iter()
                .find(|c| c.id == product.category)
                .unwrap_or_else(|| panic!("unknown category for {}", product.id));
            if let Some(sub) = &product.subcategory {
                assert!(category.subcategory(sub).is_some(), "product {}", product.id);
            }
        }
    }
}
