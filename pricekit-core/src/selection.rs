//! Selection state and screen-reader announcements
//!
//! [`SelectionController`] owns the selected interval and the text of the
//! page's live region. Two events drive it:
//!
//! - interval changed: `"Billing interval set to 2 Years. Prices updated."`
//! - plan selected: `"Selected FutureFeed Core — Annually."`
//!
//! Every accepted event replaces the whole [`SelectionState`].

use crate::view::{plan_cards, PlanCardView};
use crate::{
    interval_options, BillingInterval, BillingPlan, IntervalOption, MoneyStyle, PlanCatalog,
    Result,
};
use serde::{Deserialize, Serialize};

/// Name used in announcements when a plan id is not in the catalog.
pub const UNKNOWN_PLAN_LABEL: &str = "plan";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub current_interval: BillingInterval,
    pub last_announcement: String,
}

/// User action on the pricing page. Payloads are raw UI values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum SelectionEvent {
    IntervalChanged(String),
    PlanSelected(String),
}

/// Announcement for a new interval.
pub fn interval_announcement(interval: BillingInterval) -> String {
    format!(
        "Billing interval set to {}. Prices updated.",
        interval.human_name()
    )
}

/// Announcement for a plan selection.
pub fn plan_announcement(plan_name: &str, interval: BillingInterval) -> String {
    format!("Selected {} — {}.", plan_name, interval.human_name())
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    catalog: PlanCatalog,
    state: SelectionState,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(PlanCatalog::default())
    }
}

impl SelectionController {
    /// Start on the monthly interval with an empty announcement.
    pub fn new(catalog: PlanCatalog) -> Self {
        Self::with_interval(catalog, BillingInterval::default())
    }

    pub fn with_interval(catalog: PlanCatalog, interval: BillingInterval) -> Self {
        Self {
            catalog,
            state: SelectionState {
                current_interval: interval,
                last_announcement: String::new(),
            },
        }
    }

    /// Apply an event. Returns `false` when the event was ignored.
    pub fn handle(&mut self, event: SelectionEvent) -> bool {
        match event {
            SelectionEvent::IntervalChanged(value) => self.change_interval(&value),
            SelectionEvent::PlanSelected(plan_id) => {
                self.select_plan(&plan_id);
                true
            }
        }
    }

    /// Switch to the interval named by `value`.
    ///
    /// Values outside the closed interval set leave the state untouched and
    /// produce no announcement.
    pub fn change_interval(&mut self, value: &str) -> bool {
        let Ok(interval) = value.parse::<BillingInterval>() else {
            tracing::warn!(value, "ignoring unknown billing interval");
            return false;
        };

        self.replace(SelectionState {
            current_interval: interval,
            last_announcement: interval_announcement(interval),
        });
        true
    }

    /// Record a plan selection for the current interval.
    pub fn select_plan(&mut self, plan_id: &str) {
        let name = self.catalog.plan_name(plan_id).unwrap_or_else(|| {
            tracing::warn!(plan_id, "selected plan is not in the catalog");
            UNKNOWN_PLAN_LABEL
        });

        let interval = self.state.current_interval;
        let announcement = plan_announcement(name, interval);
        self.replace(SelectionState {
            current_interval: interval,
            last_announcement: announcement,
        });
    }

    fn replace(&mut self, next: SelectionState) {
        tracing::debug!(
            interval = next.current_interval.as_key(),
            announcement = %next.last_announcement,
            "selection updated"
        );
        self.state = next;
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current_interval(&self) -> BillingInterval {
        self.state.current_interval
    }

    /// Text for the live region.
    pub fn announcement(&self) -> &str {
        &self.state.last_announcement
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Plans priced for the current interval.
    pub fn plans(&self) -> Vec<BillingPlan> {
        self.catalog.plans_for(self.state.current_interval)
    }

    /// Toggle options with the current interval pressed.
    pub fn interval_options(&self) -> Vec<IntervalOption> {
        interval_options(self.state.current_interval)
    }

    /// Card view models for the current interval, each priced in its
    /// plan's currency.
    pub fn cards(&self, style: MoneyStyle) -> Result<Vec<PlanCardView>> {
        plan_cards(&self.plans(), self.state.current_interval, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amount;

    #[test]
    fn test_initial_state() {
        let controller = SelectionController::default();
        assert_eq!(controller.current_interval(), BillingInterval::Monthly);
        assert_eq!(controller.announcement(), "");
    }

    #[test]
    fn test_interval_change_announces() {
        let mut controller = SelectionController::default();
        assert!(controller.handle(SelectionEvent::IntervalChanged("twoYears".into())));
        assert_eq!(controller.current_interval(), BillingInterval::TwoYears);
        assert_eq!(
            controller.announcement(),
            "Billing interval set to 2 Years. Prices updated."
        );
    }

    #[test]
    fn test_unknown_interval_is_ignored() {
        let mut controller = SelectionController::default();
        controller.change_interval("annually");
        let before = controller.state().clone();

        assert!(!controller.handle(SelectionEvent::IntervalChanged("weekly".into())));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_plan_selection_uses_current_interval() {
        let mut controller = SelectionController::default();
        controller.handle(SelectionEvent::IntervalChanged("annually".into()));
        controller.handle(SelectionEvent::PlanSelected("core".into()));

        assert_eq!(controller.announcement(), "Selected FutureFeed Core — Annually.");
        assert_eq!(controller.current_interval(), BillingInterval::Annually);
    }

    #[test]
    fn test_unknown_plan_uses_fallback_label() {
        let mut controller = SelectionController::default();
        assert!(controller.handle(SelectionEvent::PlanSelected("enterprise".into())));
        assert_eq!(controller.announcement(), "Selected plan — Monthly.");
    }

    #[test]
    fn test_plans_track_interval() {
        let mut controller = SelectionController::default();
        let core_monthly = controller.plans()[1].price.amount;
        controller.change_interval("threeYears");
        let core_three_years = controller.plans()[1].price.amount;

        assert_eq!(core_monthly, Amount::from_units(419));
        assert_eq!(core_three_years, Amount::from_units(355));
    }

    #[test]
    fn test_options_and_cards_follow_state() {
        let mut controller = SelectionController::default();
        controller.change_interval("threeYears");

        let pressed: Vec<_> = controller
            .interval_options()
            .into_iter()
            .filter(|o| o.pressed)
            .map(|o| o.value)
            .collect();
        assert_eq!(pressed, [BillingInterval::ThreeYears]);

        let cards = controller.cards(MoneyStyle::default()).unwrap();
        assert_eq!(cards[1].price_text, "$355");
    }

    #[test]
    fn test_card_labels_follow_interval_changes() {
        let mut controller = SelectionController::default();
        controller.change_interval("annually");
        let cards = controller.cards(MoneyStyle::default()).unwrap();
        assert_eq!(cards[1].cta_accessible_label, "Select Plan: FutureFeed Core — Annually");

        controller.change_interval("twoYears");
        let cards = controller.cards(MoneyStyle::default()).unwrap();
        assert_eq!(cards[1].cta_accessible_label, "Select Plan: FutureFeed Core — 2 Years");
        assert_eq!(cards[2].price_text, "$444");
    }

    #[test]
    fn test_event_json() {
        let event: SelectionEvent =
            serde_json::from_str(r#"{"type":"planSelected","value":"dod"}"#).unwrap();
        assert_eq!(event, SelectionEvent::PlanSelected("dod".to_string()));
    }
}
