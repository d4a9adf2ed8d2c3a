//! Hero banners shown by the slide rotator.

/// A single hero banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSlide {
    /// Headline
    pub title: &'static str,
    /// Supporting line
    pub subtitle: &'static str,
}

/// The fixed set of banners on the landing screen.
pub fn default_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            title: "Tu próxima moto está en Daytona",
            subtitle: "Las mejores marcas, todas las cilindradas",
        },
        HeroSlide {
            title: "Financiación a tu medida",
            subtitle: "Consultá planes en cuotas con nuestros asesores",
        },
        HeroSlide {
            title: "Service y repuestos originales",
            subtitle: "Atención personalizada antes y después de tu compra",
        },
    ]
}
