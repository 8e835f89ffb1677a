//! Terminal UI utilities

use colored::Colorize;
use console::Term;
use pricekit_core::{IntervalOption, PlanCardView};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a separator line
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Print JSON prettily
pub fn json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the contents of the live region, the way a screen reader hears it
pub fn announce(text: &str) {
    if !text.is_empty() {
        println!("{} {}", "🔊".bold(), text.italic());
    }
}

/// Render the interval toggle on one line
pub fn interval_toggle(options: &[IntervalOption]) {
    let buttons: Vec<String> = options
        .iter()
        .map(|opt| {
            if opt.pressed {
                format!("[{}]", opt.label).black().on_cyan().to_string()
            } else {
                format!(" {} ", opt.label)
            }
        })
        .collect();
    println!("  {}", buttons.join(" "));
}

/// Render one plan card
pub fn plan_card(card: &PlanCardView) {
    separator();
    let title = if card.highlight {
        format!("★ {}", card.name).yellow().bold()
    } else {
        card.name.bold()
    };
    println!("{}", title);
    if let Some(subtitle) = &card.subtitle {
        println!("{}", subtitle.dimmed());
    }

    println!("\n  {} {}", card.price_text.bold(), card.period_text.dimmed());
    if let Some(note) = &card.note {
        println!("  {}", note.dimmed());
    }
    println!();

    for feature in &card.features {
        println!("  {} {}", "✓".green(), feature);
    }
    println!("\n  [ {} ]  {}", card.cta_label, card.plan_id.dimmed());
    println!("  {}", card.cta_accessible_label.dimmed());
}

/// Whether stdout is attached to a terminal
pub fn is_interactive() -> bool {
    Term::stdout().is_term()
}
