// --- File: crates/services/contactify_shell/src/shell.rs ---
//! The navigation shell: one persistent layout rendering the active route's
//! page. The list page lives at the root; the form page handles both add
//! and edit-by-id. The shell owns no domain state — it reads controller
//! state, renders it, and feeds user input back in.

use std::sync::Arc;

use anyhow::Result;
use contactify_client::ContactClient;
use contactify_common::ContactDraft;
use contactify_ui::validate;
use contactify_ui::{ContactFormController, ContactListController, SubmitOutcome};
use dialoguer::console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::render::{self, TermNotifier};

/// The navigable route group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ContactList,
    ContactForm { id: Option<String> },
    Exit,
}

pub struct Shell {
    service: Arc<ContactClient>,
    notifier: Arc<TermNotifier>,
    theme: ColorfulTheme,
}

impl Shell {
    pub fn new(client: Arc<ContactClient>) -> Self {
        Self {
            service: client,
            notifier: Arc::new(TermNotifier),
            theme: ColorfulTheme::default(),
        }
    }

    /// Render the active route's page until the user leaves.
    pub async fn run(&mut self) -> Result<()> {
        render::banner();
        let mut route = Route::ContactList;
        loop {
            route = match route {
                Route::ContactList => self.contact_list_page().await?,
                Route::ContactForm { id } => self.contact_form_page(id).await?,
                Route::Exit => break,
            };
        }
        Ok(())
    }

    async fn contact_list_page(&self) -> Result<Route> {
        let mut controller =
            ContactListController::new(self.service.clone(), self.notifier.clone());
        println!("{}", style("Loading contacts...").dim());
        controller.load().await;

        loop {
            println!();
            println!("{}", style("Contact list").bold());
            if !controller.filter().trim().is_empty() {
                println!(
                    "{}",
                    style(format!("Filter: {}", controller.filter().trim())).dim()
                );
            }
            render::contact_table(&controller.filtered());

            let actions = [
                "Search by first or last name",
                "New contact",
                "View details",
                "Edit",
                "Delete",
                "Refresh",
                "Quit",
            ];
            let action = Select::with_theme(&self.theme)
                .with_prompt("Action")
                .items(&actions)
                .default(0)
                .interact()?;

            match action {
                0 => {
                    let filter: String = Input::with_theme(&self.theme)
                        .with_prompt("Search")
                        .with_initial_text(controller.filter().to_string())
                        .allow_empty(true)
                        .interact_text()?;
                    controller.set_filter(filter);
                }
                1 => return Ok(Route::ContactForm { id: None }),
                2 => {
                    if let Some(id) = self.pick_contact(&controller)? {
                        controller.view(&id).await;
                        if let Some(contact) = controller.selected() {
                            render::contact_detail(contact);
                            self.wait_for_close()?;
                            controller.clear_selection();
                        }
                    }
                }
                3 => {
                    if let Some(id) = self.pick_contact(&controller)? {
                        return Ok(Route::ContactForm { id: Some(id) });
                    }
                }
                4 => {
                    if let Some(id) = self.pick_contact(&controller)? {
                        let confirmed = Confirm::with_theme(&self.theme)
                            .with_prompt("Are you sure you want to delete this contact?")
                            .default(false)
                            .interact()?;
                        controller.delete(&id, confirmed).await;
                    }
                }
                5 => controller.load().await,
                _ => return Ok(Route::Exit),
            }
        }
    }

    async fn contact_form_page(&self, id: Option<String>) -> Result<Route> {
        let mut controller =
            ContactFormController::new(self.service.clone(), self.notifier.clone(), id);
        controller.load_original().await;

        println!();
        if controller.is_edit() {
            println!("{}", style("Edit contact").bold());
        } else {
            println!("{}", style("Add a new contact").bold());
        }

        loop {
            let fields = self.prompt_fields(controller.fields())?;
            controller.set_fields(fields);

            let action = Select::with_theme(&self.theme)
                .with_prompt("Action")
                .items(&["Save", "Cancel"])
                .default(0)
                .interact()?;
            if action == 1 {
                // Cancel discards the entered changes; no persistence call
                return Ok(Route::ContactList);
            }

            match controller.submit().await {
                SubmitOutcome::Saved(_) => return Ok(Route::ContactList),
                SubmitOutcome::Invalid(issues) => {
                    for issue in issues {
                        println!("{} {}", style("!").yellow().bold(), issue);
                    }
                }
                // The notification was already shown; the entered values
                // stay in place for correction
                SubmitOutcome::Failed => {}
            }
        }
    }

    /// Prompt for every form field, starting from the current values.
    ///
    /// The same rules that gate submission run inline, so the user is asked
    /// again right away instead of failing at save time.
    fn prompt_fields(&self, current: &ContactDraft) -> Result<ContactDraft> {
        let last_name: String = Input::with_theme(&self.theme)
            .with_prompt("Last name")
            .with_initial_text(current.last_name.clone())
            .validate_with(|value: &String| validate::validate_last_name(value))
            .interact_text()?;
        let first_name: String = Input::with_theme(&self.theme)
            .with_prompt("First name")
            .with_initial_text(current.first_name.clone())
            .validate_with(|value: &String| validate::validate_first_name(value))
            .interact_text()?;
        let email: String = Input::with_theme(&self.theme)
            .with_prompt("Email")
            .with_initial_text(current.email.clone())
            .validate_with(|value: &String| validate::validate_email(value))
            .interact_text()?;
        let phone: String = Input::with_theme(&self.theme)
            .with_prompt("Number")
            .with_initial_text(current.phone.clone())
            .validate_with(|value: &String| validate::validate_phone(value))
            .interact_text()?;
        Ok(ContactDraft {
            last_name,
            first_name,
            email,
            phone,
        })
    }

    /// Pick one row of the filtered view; `None` when the view is empty.
    fn pick_contact(&self, controller: &ContactListController) -> Result<Option<String>> {
        let rows = controller.filtered();
        if rows.is_empty() {
            println!("{}", style("No contacts to select").dim());
            return Ok(None);
        }
        let labels: Vec<String> = rows
            .iter()
            .map(|c| format!("{} {} <{}>", c.last_name, c.first_name, c.email))
            .collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt("Contact")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Some(rows[index].id.clone()))
    }

    fn wait_for_close(&self) -> Result<()> {
        let _: String = Input::with_theme(&self.theme)
            .with_prompt("Press enter to close")
            .allow_empty(true)
            .interact_text()?;
        Ok(())
    }
}
