//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a USD amount
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a CO2 mass in kilograms
pub fn format_kg(kg: f64) -> String {
    format!("{:.2} kg", kg)
}

/// Format a percentage to one decimal place
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Color a carbon intensity by how clean the grid is
pub fn color_intensity(gco2_kwh: f64) -> String {
    let formatted = format!("{:.0} g/kWh", gco2_kwh);
    if gco2_kwh <= 100.0 {
        formatted.green().to_string()
    } else if gco2_kwh <= 400.0 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Color a savings figure: green when positive, red when negative
pub fn color_savings(value: f64, formatted: String) -> String {
    if value > 0.0 {
        formatted.green().to_string()
    } else if value < 0.0 {
        formatted.red().to_string()
    } else {
        formatted.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(83.22), "$83.22");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(30.21), "30.21 kg");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(88.3), "88.3%");
        assert_eq!(format_percent(-5.25), "-5.2%");
    }
}
