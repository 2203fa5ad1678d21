//! Built-in content served when the studio has nothing to offer.
//!
//! Every content query falls back to the values here when the CMS is
//! unconfigured, unreachable, or returns an empty result. The site stays
//! fully browsable on this dataset alone, so a fresh deploy works before
//! anyone has touched the studio.

use rust_decimal::Decimal;

use crate::types::{
    AboutSection, AccentColor, Announcement, Category, CategoryRef, ContactDetails, Cta,
    HeroSection, Product, SiteSettings, SocialLinks, Stat, Testimonial, TrustIndicator,
};

/// The four product lines, in display order.
#[must_use]
pub fn catalog_categories() -> Vec<Category> {
    vec![
        category(
            "1",
            "Imanes de MDF",
            "imanes",
            "Imanes premium con corte láser",
            AccentColor::Magenta,
            1,
        ),
        category(
            "2",
            "Llaveros",
            "llaveros",
            "Llaveros resistentes",
            AccentColor::Turquesa,
            2,
        ),
        category(
            "3",
            "Destapadores",
            "destapadores",
            "Funcionales y decorativos",
            AccentColor::Verde,
            3,
        ),
        category(
            "4",
            "Portallaves",
            "portallaves",
            "Arte para tu hogar",
            AccentColor::Naranja,
            4,
        ),
    ]
}

/// Sample products covering all four categories.
#[must_use]
pub fn catalog_products() -> Vec<Product> {
    let imanes = CategoryRef {
        name: "Imanes de MDF".to_owned(),
        slug: "imanes".to_owned(),
        color: AccentColor::Magenta,
    };
    let llaveros = CategoryRef {
        name: "Llaveros".to_owned(),
        slug: "llaveros".to_owned(),
        color: AccentColor::Turquesa,
    };
    let destapadores = CategoryRef {
        name: "Destapadores".to_owned(),
        slug: "destapadores".to_owned(),
        color: AccentColor::Verde,
    };
    let portallaves = CategoryRef {
        name: "Portallaves".to_owned(),
        slug: "portallaves".to_owned(),
        color: AccentColor::Naranja,
    };

    vec![
        product(
            "p1",
            "Imán Oaxaca",
            "iman-oaxaca",
            "Imán decorativo con diseño exclusivo de Oaxaca, corte láser premium.",
            45,
            "Oaxaca",
            true,
            &imanes,
        ),
        product(
            "p2",
            "Imán Cancún",
            "iman-cancun",
            "Imán con el paraíso caribeño de Cancún, acabado brillante UV.",
            45,
            "Cancún",
            true,
            &imanes,
        ),
        product(
            "p3",
            "Llavero CDMX",
            "llavero-cdmx",
            "Llavero con iconos de la Ciudad de México, resistente y duradero.",
            55,
            "CDMX",
            true,
            &llaveros,
        ),
        product(
            "p4",
            "Llavero Guanajuato",
            "llavero-guanajuato",
            "Llavero con las coloridas casas de Guanajuato.",
            55,
            "Guanajuato",
            false,
            &llaveros,
        ),
        product(
            "p5",
            "Destapador Tequila",
            "destapador-tequila",
            "Destapador con diseño de agave, funcional y decorativo.",
            65,
            "Tequila",
            true,
            &destapadores,
        ),
        product(
            "p6",
            "Portallaves México",
            "portallaves-mexico",
            "Portallaves con diseño azteca, perfecto para decorar tu hogar.",
            120,
            "México",
            false,
            &portallaves,
        ),
        product(
            "p7",
            "Imán Huasteca Potosina",
            "iman-huasteca",
            "Imán con las cascadas de la Huasteca Potosina.",
            45,
            "Huasteca Potosina",
            true,
            &imanes,
        ),
        product(
            "p8",
            "Llavero San Miguel de Allende",
            "llavero-san-miguel",
            "Llavero con la icónica parroquia de San Miguel.",
            55,
            "San Miguel de Allende",
            false,
            &llaveros,
        ),
    ]
}

/// Three stock testimonials for the homepage carousel.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_owned(),
            name: "María González".to_owned(),
            role: "Turista de España".to_owned(),
            quote: "Compré imanes para toda mi familia y fueron el mejor recuerdo que me \
                    traje de México. La calidad es impresionante."
                .to_owned(),
            avatar_url: None,
            rating: 5,
            featured: true,
        },
        Testimonial {
            id: "2".to_owned(),
            name: "Carlos Mendoza".to_owned(),
            role: "Dueño de tienda de souvenirs".to_owned(),
            quote: "Como mayorista, la consistencia y calidad de AXKAN me ha ayudado a \
                    diferenciarnos de la competencia. Mis clientes vuelven por más."
                .to_owned(),
            avatar_url: None,
            rating: 5,
            featured: true,
        },
        Testimonial {
            id: "3".to_owned(),
            name: "Ana López".to_owned(),
            role: "Organizadora de eventos".to_owned(),
            quote: "Pedí souvenirs personalizados para una boda en Oaxaca y el resultado \
                    superó todas las expectativas. ¡Absolutamente recomendados!"
                .to_owned(),
            avatar_url: None,
            rating: 5,
            featured: true,
        },
    ]
}

/// Default hero content.
#[must_use]
pub fn hero() -> HeroSection {
    HeroSection {
        badge: "Detonadores de Orgullo Mexicano".to_owned(),
        headline: "Recuerdos que sí importan".to_owned(),
        subheadline: "Souvenirs premium que capturan la esencia de México. Llévate el \
                      momento que te hizo sentir."
            .to_owned(),
        cta_primary: Cta {
            text: "Explorar Catálogo".to_owned(),
            link: "/catalogo".to_owned(),
        },
        cta_secondary: Cta {
            text: "Hacer Pedido".to_owned(),
            link: "/pedido".to_owned(),
        },
        background_image_url: None,
        trust_indicators: vec![
            trust("🇲🇽", "Hecho en México"),
            trust("✨", "Calidad Premium"),
            trust("🚚", "Envío Nacional"),
            trust("💎", "+500 Diseños"),
        ],
    }
}

/// Default brand story for the about section.
#[must_use]
pub fn about() -> AboutSection {
    AboutSection {
        badge: "Nuestra Historia".to_owned(),
        headline: "El eterno ahora de México".to_owned(),
        paragraphs: vec![
            "AXKAN nace de una creencia simple: México merece souvenirs que estén a la \
             altura de su grandeza cultural."
                .to_owned(),
            "El nombre viene del maya \"ahora\" — ese momento eterno donde el pasado se \
             encuentra con el presente. Ese instante cuando escuchas mariachis y sientes \
             algo profundo. Cuando ves una pirámide y te conectas con algo ancestral."
                .to_owned(),
            "Nuestros productos son detonadores: objetos que te regresan a ese momento \
             exacto cuando México te hizo sentir algo real."
                .to_owned(),
        ],
        quote: "Cuando llevas un producto AXKAN, no llevas un souvenir — llevas un \
                detonador de orgullo mexicano."
            .to_owned(),
        image_url: None,
        stats: vec![
            stat("500+", "Diseños únicos"),
            stat("100+", "Destinos de México"),
            stat("5K+", "Clientes felices"),
            stat("5★", "Calificación promedio"),
        ],
    }
}

/// Default site-wide settings.
#[must_use]
pub fn site_settings() -> SiteSettings {
    SiteSettings {
        site_name: "AXKAN".to_owned(),
        tagline: "Recuerdos Hechos Souvenir".to_owned(),
        description: "Souvenirs premium mexicanos que despiertan orgullo. Imanes, \
                      llaveros y más con diseños auténticos de los destinos más hermosos \
                      de México."
            .to_owned(),
        contact: ContactDetails {
            email: "hola@axkan.art".to_owned(),
            phone: "+52 55 3825 3251".to_owned(),
            whatsapp: "5215538253251".to_owned(),
            address: None,
        },
        social: SocialLinks {
            instagram: Some("https://instagram.com/axkan.art".to_owned()),
            facebook: Some("https://facebook.com/axkan.art".to_owned()),
            tiktok: None,
            twitter: None,
        },
        announcement: Announcement::default(),
    }
}

fn category(
    id: &str,
    name: &str,
    slug: &str,
    description: &str,
    color: AccentColor,
    order: i32,
) -> Category {
    Category {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: slug.to_owned(),
        description: description.to_owned(),
        color,
        image_url: None,
        order,
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    slug: &str,
    description: &str,
    price: u32,
    destination: &str,
    featured: bool,
    category: &CategoryRef,
) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: slug.to_owned(),
        description: description.to_owned(),
        price: Decimal::from(price),
        wholesale_price: None,
        images: Vec::new(),
        destination: Some(destination.to_owned()),
        featured,
        in_stock: true,
        tags: Vec::new(),
        category: Some(category.clone()),
    }
}

fn trust(emoji: &str, text: &str) -> TrustIndicator {
    TrustIndicator {
        emoji: emoji.to_owned(),
        text: text.to_owned(),
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_owned(),
        label: label.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_all_four_categories() {
        let categories = catalog_categories();
        let products = catalog_products();
        assert_eq!(categories.len(), 4);
        assert_eq!(products.len(), 8);

        let known: HashSet<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
        for product in &products {
            let slug = product.category_slug().unwrap_or_default();
            assert!(known.contains(slug), "unknown category for {}", product.id);
        }
    }

    #[test]
    fn test_product_ids_and_slugs_are_unique() {
        let products = catalog_products();
        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let slugs: HashSet<&str> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn test_everything_is_in_stock_with_a_destination() {
        for product in catalog_products() {
            assert!(product.in_stock);
            assert!(product.destination.is_some());
        }
    }

    #[test]
    fn test_default_announcement_is_disabled() {
        assert!(!site_settings().announcement.enabled);
    }
}
