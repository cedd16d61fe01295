//! Config command handlers
//!
//! Each setter persists immediately, mirroring the settings-surface contract
//! where every dropdown/toggle change is saved on the spot.

use notelist_core::settings::{Settings, SortOrder};

use crate::cli::args::ConfigCommands;

pub fn handle_config_command(command: Option<ConfigCommands>) -> bool {
    match command {
        None | Some(ConfigCommands::Show) => show_settings(),

        Some(ConfigCommands::SortOrder { value }) => match value {
            Some(order) => set_sort_order(order.into()),
            None => show_current(|s| format_sort_order(s.sort_order).to_string()),
        },

        Some(ConfigCommands::DateOnly { value }) => match value {
            Some(enabled) => set_date_only(enabled),
            None => show_current(|s| s.date_formatted_only.to_string()),
        },
    }
}

/// Show all settings
fn show_settings() -> bool {
    match Settings::load() {
        Ok(settings) => {
            println!("Notelist Settings");
            println!("=================");
            println!("Sort order:          {}", format_sort_order(settings.sort_order));
            println!("Date-prefixed only:  {}", settings.date_formatted_only);
            if let Some(path) = Settings::config_path() {
                println!("Settings file:       {}", path.display());
            }
            true
        }
        Err(e) => {
            eprintln!("✗ Error reading settings: {}", e);
            false
        }
    }
}

/// Show a single current value
fn show_current(value: impl Fn(&Settings) -> String) -> bool {
    match Settings::load() {
        Ok(settings) => {
            println!("{}", value(&settings));
            true
        }
        Err(e) => {
            eprintln!("✗ Error reading settings: {}", e);
            false
        }
    }
}

/// Set and immediately persist the sort order
fn set_sort_order(order: SortOrder) -> bool {
    update_settings(|settings| settings.sort_order = order, || {
        format!("Sort order set to {}", format_sort_order(order))
    })
}

/// Set and immediately persist the date filter
fn set_date_only(enabled: bool) -> bool {
    update_settings(
        |settings| settings.date_formatted_only = enabled,
        || format!("Date-prefixed only set to {}", enabled),
    )
}

fn update_settings(apply: impl FnOnce(&mut Settings), done: impl FnOnce() -> String) -> bool {
    let mut settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("✗ Error reading settings: {}", e);
            return false;
        }
    };

    apply(&mut settings);

    match settings.save() {
        Ok(()) => {
            println!("✓ {}", done());
            true
        }
        Err(e) => {
            eprintln!("✗ Error saving settings: {}", e);
            false
        }
    }
}

fn format_sort_order(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "asc (ascending)",
        SortOrder::Descending => "desc (descending)",
    }
}
