//! UC bundle catalog
//!
//! The single source of truth for what the store sells. The package menu and
//! the payment detail lookup both read [`CATALOG`].

use serde::Serialize;

/// DonationAlerts page that accepts payments; the bundle price is passed as
/// the `amount` query parameter.
pub const PAYMENT_PAGE_URL: &str = "https://www.donationalerts.com/r/froksi137373";

/// A purchasable UC bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bundle {
    /// Catalog identifier (1-based)
    pub id: u8,
    /// Amount of UC delivered
    pub quantity: u32,
    /// Price in rubles
    pub price: u32,
    /// Bonus on top of the base amount, in percent
    pub bonus_percent: Option<u8>,
    /// Highlighted on the storefront
    pub popular: bool,
}

/// Every bundle the store offers, in menu order
pub const CATALOG: [Bundle; 6] = [
    Bundle {
        id: 1,
        quantity: 60,
        price: 81,
        bonus_percent: None,
        popular: false,
    },
    Bundle {
        id: 2,
        quantity: 325,
        price: 405,
        bonus_percent: Some(5),
        popular: false,
    },
    Bundle {
        id: 3,
        quantity: 660,
        price: 810,
        bonus_percent: Some(10),
        popular: true,
    },
    Bundle {
        id: 4,
        quantity: 1800,
        price: 2025,
        bonus_percent: Some(25),
        popular: false,
    },
    Bundle {
        id: 5,
        quantity: 3850,
        price: 4050,
        bonus_percent: Some(50),
        popular: false,
    },
    Bundle {
        id: 6,
        quantity: 8100,
        price: 8100,
        bonus_percent: Some(100),
        popular: false,
    },
];

impl Bundle {
    /// Look up a bundle by its textual identifier
    ///
    /// Matching is exact on the decimal form: `"3"` finds bundle 3, while
    /// `"03"`, `"+3"` or `" 3"` find nothing.
    #[must_use]
    pub fn find(id: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|bundle| bundle.id.to_string() == id)
            .copied()
    }

    /// Callback tag carried by this bundle's menu button
    #[must_use]
    pub fn callback_tag(&self) -> String {
        format!("{}{}", crate::actions::BUNDLE_PREFIX, self.id)
    }

    /// Menu button label, e.g. `325 UC - 405₽ (+5% бонус)`
    #[must_use]
    pub fn menu_label(&self) -> String {
        let bonus = self
            .bonus_percent
            .map(|bonus| format!(" (+{bonus}% бонус)"))
            .unwrap_or_default();
        format!("{} UC - {}₽{bonus}", self.quantity, self.price)
    }

    /// Payment page link pre-filled with this bundle's price
    #[must_use]
    pub fn payment_url(&self) -> String {
        format!("{PAYMENT_PAGE_URL}?amount={}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn catalog_has_six_bundles_in_id_order() {
        let ids: Vec<u8> = CATALOG.iter().map(|b| b.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn catalog_values_match_price_list() {
        let rows: Vec<_> = CATALOG
            .iter()
            .map(|b| (b.quantity, b.price, b.bonus_percent))
            .collect();
        assert_eq!(
            rows,
            [
                (60, 81, None),
                (325, 405, Some(5)),
                (660, 810, Some(10)),
                (1800, 2025, Some(25)),
                (3850, 4050, Some(50)),
                (8100, 8100, Some(100)),
            ]
        );
    }

    #[test]
    fn only_bundle_three_is_popular() {
        let popular: Vec<u8> = CATALOG.iter().filter(|b| b.popular).map(|b| b.id).collect();
        assert_eq!(popular, [3]);
    }

    #[test]
    fn find_matches_exact_identifier() {
        assert_eq!(Bundle::find("4").map(|b| b.price), Some(2025));
    }

    #[test]
    fn find_rejects_non_canonical_identifiers() {
        for id in ["", "0", "7", "03", "+3", " 3", "3 ", "three", "-1"] {
            assert!(Bundle::find(id).is_none(), "{id:?} should not match");
        }
    }

    #[test]
    fn menu_label_without_bonus() {
        let bundle = Bundle::find("1").unwrap();
        assert_eq!(bundle.menu_label(), "60 UC - 81₽");
    }

    #[test]
    fn menu_label_with_bonus() {
        let bundle = Bundle::find("6").unwrap();
        assert_eq!(bundle.menu_label(), "8100 UC - 8100₽ (+100% бонус)");
    }

    #[test]
    fn callback_tag_uses_bundle_prefix() {
        assert_eq!(CATALOG[1].callback_tag(), "pkg_2");
    }

    #[test]
    fn payment_url_carries_price() {
        assert_eq!(
            CATALOG[2].payment_url(),
            "https://www.donationalerts.com/r/froksi137373?amount=810"
        );
    }

    proptest! {
        #[test]
        fn find_by_id_is_consistent_with_catalog(index in 0usize..6) {
            let bundle = CATALOG[index];
            prop_assert_eq!(Bundle::find(&bundle.id.to_string()), Some(bundle));
        }

        #[test]
        fn find_never_matches_out_of_range_numbers(id in 7u32..10_000) {
            prop_assert!(Bundle::find(&id.to_string()).is_none());
        }
    }
}
