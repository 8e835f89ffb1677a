//! # Pricekit Core
//!
//! Pricing logic behind a billing page: interval quotes, money formatting,
//! the plan catalog and the selection state that feeds screen-reader
//! announcements.
//!
//! Everything here is synchronous and free of I/O apart from
//! [`PricingConfig::from_file`]. Money values use fixed-point decimals
//! ([`Amount`]); `f64` is only accepted by [`MoneyFormatter::format_f64`].
//!
//! ```rust
//! use pricekit_core::{build_formatter, SelectionController, SelectionEvent};
//!
//! let mut page = SelectionController::default();
//! page.handle(SelectionEvent::IntervalChanged("annually".into()));
//! page.handle(SelectionEvent::PlanSelected("core".into()));
//! assert_eq!(page.announcement(), "Selected FutureFeed Core — Annually.");
//!
//! let usd = build_formatter("USD", 0).unwrap();
//! assert_eq!(usd.format(page.plans()[1].price.amount), "$399");
//! ```

pub mod amount;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod interval;
pub mod money;
pub mod selection;
pub mod view;

pub use amount::Amount;
pub use calculator::{
    price_for, price_for_key, Price, PriceCalculator, PricePeriod, QUOTE_CURRENCY,
};
pub use catalog::{get_plans, BillingPlan, PlanCatalog, PlanDefinition, PlanFeature, PlanPricing};
pub use config::PricingConfig;
pub use interval::{
    human_interval, human_interval_key, interval_options, BillingInterval, IntervalOption,
};
pub use money::{build_formatter, Locale, MoneyFormatter, MoneyStyle};
pub use selection::{SelectionController, SelectionEvent, SelectionState};
pub use view::{plan_cards, PlanCardView};

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),
    #[error("fractional digits must be at most 20, got {0}")]
    InvalidPrecision(u32),
    #[error("unsupported locale: {0}")]
    InvalidLocale(String),
    #[error("unknown billing interval: {0}")]
    InvalidInterval(String),
    #[error("invalid plan catalog: {0}")]
    InvalidCatalog(String),
    #[error("configuration error: {0}")]
    Config(String),
}
