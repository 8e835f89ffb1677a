use crate::PricingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment cadence selected on the pricing page.
///
/// The set is closed. Raw keys coming from a UI are parsed strictly with
/// [`FromStr`] or leniently with [`BillingInterval::from_key_or_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillingInterval {
    #[default]
    Monthly,
    Annually,
    TwoYears,
    ThreeYears,
}

impl BillingInterval {
    /// All intervals, in toggle order.
    pub const ALL: [BillingInterval; 4] = [
        BillingInterval::Monthly,
        BillingInterval::Annually,
        BillingInterval::TwoYears,
        BillingInterval::ThreeYears,
    ];

    /// Wire key (`"monthly"`, `"annually"`, `"twoYears"`, `"threeYears"`).
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annually => "annually",
            Self::TwoYears => "twoYears",
            Self::ThreeYears => "threeYears",
        }
    }

    /// Human-readable name used in labels and announcements.
    pub fn human_name(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
            Self::TwoYears => "2 Years",
            Self::ThreeYears => "3 Years",
        }
    }

    /// Parse a wire key, falling back to [`BillingInterval::Monthly`].
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::warn!(key, "unrecognized billing interval, using monthly");
            Self::Monthly
        })
    }
}

impl FromStr for BillingInterval {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_key() == s)
            .ok_or_else(|| PricingError::InvalidInterval(s.to_string()))
    }
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.human_name())
    }
}

/// Human-readable interval name.
pub fn human_interval(interval: BillingInterval) -> &'static str {
    interval.human_name()
}

/// Human-readable name for a raw key; unknown keys read as "Monthly".
pub fn human_interval_key(key: &str) -> &'static str {
    key.parse::<BillingInterval>()
        .map(|interval| interval.human_name())
        .unwrap_or("Monthly")
}

/// One button of the interval toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalOption {
    pub value: BillingInterval,
    pub label: String,
    /// Mirrors `aria-pressed` on the rendered button.
    pub pressed: bool,
}

/// Toggle options with the `selected` interval marked as pressed.
pub fn interval_options(selected: BillingInterval) -> Vec<IntervalOption> {
    BillingInterval::ALL
        .into_iter()
        .map(|value| IntervalOption {
            value,
            label: value.human_name().to_string(),
            pressed: value == selected,
        })
        .collect()
}
