//! Bundle catalog handler
//!
//! Read-only view of the bundles offered in the bot, for storefront pages.

use axum::Json;
use domain::{Bundle, CATALOG};
use serde::{Deserialize, Serialize};

/// One purchasable bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageResponse {
    pub id: u8,
    /// UC amount
    pub quantity: u32,
    /// Price in rubles
    pub price: u32,
    pub bonus_percent: Option<u8>,
    pub popular: bool,
    /// Prefilled DonationAlerts link
    pub payment_url: String,
}

impl From<&Bundle> for PackageResponse {
    fn from(bundle: &Bundle) -> Self {
        Self {
            id: bundle.id,
            quantity: bundle.quantity,
            price: bundle.price,
            bonus_percent: bundle.bonus_percent,
            popular: bundle.popular,
            payment_url: bundle.payment_url(),
        }
    }
}

/// List all bundles in catalog order
pub async fn list_packages() -> Json<Vec<PackageResponse>> {
    Json(CATALOG.iter().map(PackageResponse::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_six_bundles_in_order() {
        let Json(packages) = list_packages().await;
        let ids: Vec<u8> = packages.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn only_one_bundle_is_popular() {
        let Json(packages) = list_packages().await;
        let popular: Vec<u8> = packages.iter().filter(|p| p.popular).map(|p| p.id).collect();
        assert_eq!(popular, [3]);
    }

    #[test]
    fn first_bundle_has_no_bonus() {
        let package = PackageResponse::from(&CATALOG[0]);
        assert_eq!(package.bonus_percent, None);
        assert_eq!(
            package.payment_url,
            "https://www.donationalerts.com/r/froksi137373?amount=81"
        );
        let json = serde_json::to_value(&package).unwrap();
        assert!(json["bonus_percent"].is_null());
    }
}
