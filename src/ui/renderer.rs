//! Plain-text rendering of view models.
//!
//! Output is returned as a `String` so the console host decides where it goes.
//! Badge colours use ANSI SGR codes when `color` is set.

use super::format::format_count;
use super::viewmodel::{ApplicationCard, NavbarView};
use crate::moderation::{ApplicationCollection, BadgeCategory};
use std::fmt::Write;

/// Renders the seller-applications screen.
#[must_use]
pub fn render_applications(applications: &ApplicationCollection, color: bool) -> String {
    let mut out = String::new();
    let pending = applications
        .iter()
        .filter(|app| !app.status.is_final())
        .count();

    let _ = writeln!(
        out,
        "Seller Applications ({} total, {} pending)",
        format_count(i64::try_from(applications.len()).unwrap_or(i64::MAX)),
        format_count(i64::try_from(pending).unwrap_or(i64::MAX)),
    );

    if applications.is_empty() {
        out.push_str("  No applications to review.\n");
        return out;
    }

    for app in applications {
        render_card(&mut out, &ApplicationCard::from_application(app), color);
    }

    out
}

fn render_card(out: &mut String, card: &ApplicationCard, color: bool) {
    let _ = writeln!(
        out,
        "- [{}] {} <{}>  {}",
        card.id,
        card.name,
        card.email,
        badge(&card.status_label, card.badge, color)
    );
    let _ = writeln!(out, "    Business: {}  Phone: {}", card.business_name, card.phone);
    let _ = writeln!(out, "    Address:  {}  Tax ID: {}", card.business_address, card.tax_id);
    let _ = writeln!(out, "    Submitted: {}", card.submitted);
    if card.can_moderate {
        let _ = writeln!(out, "    actions: approve {0} | reject {0}", card.id);
    }
}

fn badge(label: &str, category: BadgeCategory, color: bool) -> String {
    if color {
        format!("\u{1b}[{}m{label}\u{1b}[0m", category.ansi_code())
    } else {
        format!("({label})")
    }
}

/// Renders the navbar: links, menu and palette state.
#[must_use]
pub fn render_navbar(view: &NavbarView) -> String {
    let mut out = String::new();

    let links: Vec<String> = view
        .links
        .iter()
        .map(|link| {
            if link.is_active {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect();

    let style = if view.scrolled { "compact" } else { "full" };
    let _ = writeln!(out, "ArtAuction  {}  ({style})", links.join("  "));

    if view.mobile_menu_open {
        let _ = writeln!(out, "  menu: open  search box: \"{}\"", view.search_query);
    }

    if view.search_open {
        let _ = writeln!(out, "  palette> {}", view.palette_query);
        if view.palette_entries.is_empty() {
            out.push_str("    No results found.\n");
        }
        for entry in &view.palette_entries {
            let _ = writeln!(out, "    {entry}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CommandUiState, DispatchSettings};
    use crate::domain::{Application, ApplicationStatus};

    #[test]
    fn pending_rows_offer_actions() {
        let apps = ApplicationCollection::new(vec![
            Application::new("a1", "Mira", "mira@example.com"),
            Application::new("a2", "Jonas", "jonas@example.com").with_status(ApplicationStatus::Approved),
        ])
        .unwrap();

        let text = render_applications(&apps, false);

        assert!(text.starts_with("Seller Applications (2 total, 1 pending)"));
        assert!(text.contains("(Pending)"));
        assert!(text.contains("(Approved)"));
        assert!(text.contains("approve a1"));
        assert!(!text.contains("approve a2"));
    }

    #[test]
    fn colored_badges_use_category_codes() {
        let apps = ApplicationCollection::new(vec![Application::new("a1", "Mira", "mira@example.com")]).unwrap();
        assert!(render_applications(&apps, true).contains("\u{1b}[33mPending\u{1b}[0m"));
    }

    #[test]
    fn navbar_brackets_active_link() {
        let mut state = CommandUiState::new(DispatchSettings::default(), "/");
        state.observe_route("/auctions");
        let text = render_navbar(&state.compute_view());
        assert!(text.contains("[Auctions]"));
        assert!(!text.contains("palette>"));
    }
}
