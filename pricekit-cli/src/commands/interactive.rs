//! Interactive command - drive the selection controller from the terminal

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Select};
use pricekit_core::{MoneyStyle, PricingConfig, SelectionController, SelectionEvent};

use crate::ui;

const ACTIONS: [&str; 3] = ["Change billing interval", "Select a plan", "Quit"];

pub fn run(config: &PricingConfig) -> Result<()> {
    if !ui::is_interactive() {
        bail!("Interactive mode needs a terminal. Use 'pricekit plans' instead.");
    }

    let style = config.money_style();
    let mut page = config.controller()?;
    let theme = ColorfulTheme::default();

    ui::header("How often do you want to pay?");
    loop {
        render(&page, style)?;

        let action = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&ACTIONS[..])
            .default(0)
            .interact()?;

        let event = match action {
            0 => {
                let options = page.interval_options();
                let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
                let current = options.iter().position(|o| o.pressed).unwrap_or(0);
                let picked = Select::with_theme(&theme)
                    .with_prompt("Billing interval")
                    .items(&labels[..])
                    .default(current)
                    .interact()?;
                SelectionEvent::IntervalChanged(options[picked].value.as_key().to_string())
            }
            1 => {
                let plans = page.plans();
                let names: Vec<_> = plans.iter().map(|p| p.name.as_str()).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Plan")
                    .items(&names[..])
                    .default(0)
                    .interact()?;
                SelectionEvent::PlanSelected(plans[picked].id.clone())
            }
            _ => break,
        };

        tracing::debug!("Handling {:?}", event);
        page.handle(event);
        ui::announce(page.announcement());
    }

    ui::info("Done.");
    Ok(())
}

fn render(page: &SelectionController, style: MoneyStyle) -> Result<()> {
    ui::interval_toggle(&page.interval_options());
    for card in page.cards(style)? {
        ui::plan_card(&card);
    }
    ui::separator();
    Ok(())
}
