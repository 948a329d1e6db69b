// --- File: crates/services/contactify_shell/src/render.rs ---
//! Terminal output: the banner, the contact table, the read-only detail
//! panel, and the notifier that prints write-path outcomes.

use chrono::{DateTime, Utc};
use contactify_common::Contact;
use contactify_ui::Notifier;
use dialoguer::console::style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the persistent layout header.
pub fn banner() {
    println!();
    println!("{}", style(format!("=== Contactify v{} ===", VERSION)).bold());
}

/// `DD/MM/YYYY - HH:MM`, or a dash when the server has not set the value.
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%d/%m/%Y - %H:%M").to_string(),
        None => "-".to_string(),
    }
}

fn table_line(
    last_name: &str,
    first_name: &str,
    email: &str,
    phone: &str,
    created: &str,
    modified: &str,
) -> String {
    format!(
        "{:<16} {:<16} {:<30} {:<12} {:<19} {:<19}",
        last_name, first_name, email, phone, created, modified
    )
}

/// One table row for a contact.
pub fn table_row(contact: &Contact) -> String {
    table_line(
        &contact.last_name,
        &contact.first_name,
        &contact.email,
        &contact.phone,
        &format_timestamp(contact.created_at),
        &format_timestamp(contact.updated_at),
    )
}

/// Print the filtered view as a table.
pub fn contact_table(rows: &[&Contact]) {
    println!(
        "{}",
        style(table_line(
            "Last name",
            "First name",
            "Email",
            "Number",
            "Created",
            "Modified"
        ))
        .dim()
    );
    if rows.is_empty() {
        println!("{}", style("No contacts").dim());
        return;
    }
    for contact in rows {
        println!("{}", table_row(contact));
    }
}

/// Print the read-only detail panel for the selected contact.
pub fn contact_detail(contact: &Contact) {
    println!();
    println!("{}", style("Contact details").bold());
    println!("  {} {}", style("Last name:").dim(), contact.last_name);
    println!("  {} {}", style("First name:").dim(), contact.first_name);
    println!("  {} {}", style("Email:").dim(), contact.email);
    println!("  {} {}", style("Number:").dim(), contact.phone);
    println!(
        "  {} {}",
        style("Created:").dim(),
        format_timestamp(contact.created_at)
    );
    println!(
        "  {} {}",
        style("Modified:").dim(),
        format_timestamp(contact.updated_at)
    );
}

/// Notifier that prints styled outcome lines to the terminal.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("{} {}", style("✔").green().bold(), message);
    }

    fn error(&self, message: &str) {
        println!("{} {}", style("✘").red().bold(), message);
    }
}
