use sitedeck_core::{AppViewModel, Field, ValidationError};

pub const EMPTY_HINT: &str =
    "No site configured yet. Add your first one with: add <name> | <url>";

/// Sidebar listing, one line per site, active site marked with `>`.
pub fn render_sites(view: &AppViewModel) -> Vec<String> {
    if view.sites.is_empty() {
        return vec![EMPTY_HINT.to_string()];
    }
    view.sites
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let marker = if row.is_active { '>' } else { ' ' };
            let badge = row.initial.as_deref().unwrap_or("?");
            format!(
                "{marker} {:>2}. [{badge}] {}  {}",
                index + 1,
                row.name,
                row.url
            )
        })
        .collect()
}

/// Single-line header: active site name and reload count.
pub fn render_status(view: &AppViewModel) -> String {
    match &view.active_name {
        Some(name) => format!(
            "Viewing: {name} | Sites: {} | Reloads: {}",
            view.sites.len(),
            view.reload_token
        ),
        None => format!("Viewing: nothing | Sites: {}", view.sites.len()),
    }
}

/// User-facing copy for add-form errors.
pub fn describe_add_error(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField(Field::Name) => "Please enter a site name.".to_string(),
        ValidationError::MissingField(Field::Url) => "Please enter a site URL.".to_string(),
        ValidationError::InvalidUrl(raw) => format!("{raw:?} is not a valid URL."),
    }
}
