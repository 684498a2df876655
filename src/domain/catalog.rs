use serde::Serialize;

/// One entry in the master list of non-permissible activity categories.
///
/// The catalog is informational: declared line items may carry any name, and
/// computation never branches on it. The slug is the stable lookup handle for
/// `catalog <slug>`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Activity {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Master list of non-permissible activities as determined for screening.
pub const NON_PERMISSIBLE_ACTIVITIES: &[Activity] = &[
    Activity {
        slug: "conventional-banking",
        label: "Conventional banking & lending",
    },
    Activity {
        slug: "conventional-insurance",
        label: "Conventional insurance",
    },
    Activity {
        slug: "gambling",
        label: "Gambling",
    },
    Activity {
        slug: "liquor",
        label: "Liquor-related activities",
    },
    Activity {
        slug: "pork",
        label: "Pork-related activities",
    },
    Activity {
        slug: "non-halal-fnb",
        label: "Non-halal F&B / no halal certification",
    },
    Activity {
        slug: "tobacco",
        label: "Tobacco / cigarette / vape-related",
    },
    Activity {
        slug: "interest-income",
        label: "Interest income / interest-related charges",
    },
    Activity {
        slug: "non-shariah-dividends",
        label: "Dividends from non-Shariah investments",
    },
    Activity {
        slug: "non-shariah-entertainment",
        label: "Non-Shariah entertainment",
    },
    Activity {
        slug: "share-trading",
        label: "Share trading",
    },
    Activity {
        slug: "stockbroking",
        label: "Stockbroking business",
    },
    Activity {
        slug: "cinema",
        label: "Cinema",
    },
    Activity {
        slug: "non-compliant-rental",
        label: "Rental from non-compliant activities",
    },
    Activity {
        slug: "others",
        label: "Others (as determined by SAC)",
    },
];

pub fn find(slug: &str) -> Option<&'static Activity> {
    let slug = slug.trim().to_ascii_lowercase();
    NON_PERMISSIBLE_ACTIVITIES.iter().find(|a| a.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::{find, NON_PERMISSIBLE_ACTIVITIES};
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let mut seen = HashSet::new();
        for a in NON_PERMISSIBLE_ACTIVITIES {
            assert!(seen.insert(a.slug), "duplicate slug {}", a.slug);
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("Gambling").map(|a| a.label), Some("Gambling"));
        assert_eq!(find(" stockbroking ").map(|a| a.slug), Some("stockbroking"));
        assert!(find("mining").is_none());
    }
}
