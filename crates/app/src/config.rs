use std::env;

/// Letterhead details printed on every document.
///
/// Read once at startup from `ATELIER_SHOP_*` environment variables,
/// with defaults suitable for local runs.
#[derive(Debug, Clone)]
pub struct ShopProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for ShopProfile {
    fn default() -> Self {
        Self {
            name: "Carrosserie Atlas".into(),
            address: "12 rue des Ateliers, Casablanca".into(),
            phone: "05 22 00 00 00".into(),
        }
    }
}

impl ShopProfile {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env::var("ATELIER_SHOP_NAME").unwrap_or(defaults.name),
            address: env::var("ATELIER_SHOP_ADDRESS").unwrap_or(defaults.address),
            phone: env::var("ATELIER_SHOP_PHONE").unwrap_or(defaults.phone),
        }
    }
}
