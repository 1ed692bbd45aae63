//! Update layer: state transitions
//!
//! The only place that mutates [`App`]. Every message maps onto a core
//! mutation or a cursor move; the core reports its effects synchronously
//! into `app.effects`, which this layer folds back into the cursor and
//! status line before the next frame.

use dns_prefs_core::{IndexPath, Item};

use crate::message::AppMessage;
use crate::model::App;

/// Main update function, exhaustive over all messages
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => app.should_quit = true,
        AppMessage::ToggleEditMode => toggle_edit_mode(app),
        AppMessage::SelectPrevious => app.select_previous(),
        AppMessage::SelectNext => app.select_next(),
        AppMessage::SelectFirst => app.select_first(),
        AppMessage::SelectLast => app.select_last(),
        AppMessage::Activate => activate(app),
        AppMessage::Input(c) => edit_focused_text(app, Some(c)),
        AppMessage::Backspace => edit_focused_text(app, None),
        AppMessage::DeleteEntry => delete_focused_entry(app),
        AppMessage::MoveEntryUp => move_focused_entry(app, true),
        AppMessage::MoveEntryDown => move_focused_entry(app, false),
        AppMessage::Noop => {}
    }

    // Honor the scroll hint, then re-anchor a cursor a structural change
    // may have left stale.
    if let Some(target) = app.effects.scroll_target.take() {
        app.cursor = target;
    }
    app.clamp_cursor();
}

fn toggle_edit_mode(app: &mut App) {
    let editing = !app.service.is_editing();
    app.service
        .set_editing(editing, &mut app.effects, &mut app.store);

    if editing {
        app.set_status("Editing servers — Enter commits, Esc leaves");
    } else {
        app.set_status("Left edit mode");
    }
}

fn activate(app: &mut App) {
    match app.focused_item() {
        Some(Item::BlockAdvertising) => {
            let on = !app.service.model().block_advertising;
            app.service
                .set_block_advertising(on, &mut app.effects, &mut app.store);
            app.set_status(format!("Block ads: {}", on_off(on)));
        }
        Some(Item::BlockTracking) => {
            let on = !app.service.model().block_tracking;
            app.service
                .set_block_tracking(on, &mut app.effects, &mut app.store);
            app.set_status(format!("Block trackers: {}", on_off(on)));
        }
        Some(Item::UseCustomDns) => {
            if app.service.model().can_enable_custom_dns() {
                let on = !app.service.model().enable_custom_dns;
                app.service
                    .set_enable_custom_dns(on, &mut app.effects, &mut app.store);
                app.set_status(format!("Custom DNS: {}", on_off(on)));
            } else {
                app.set_status("Disable Block ads and Block trackers to activate this setting");
            }
        }
        Some(Item::AddDnsEntry) => commit_pending(app),
        Some(Item::DnsEntry(_)) | None => {}
    }
}

fn commit_pending(app: &mut App) {
    // Nothing typed yet: leave the row alone rather than flagging the
    // empty field as an error.
    if app.service.model().pending_entry_text.is_empty() {
        return;
    }

    if app.service.commit_pending_entry(&mut app.effects, &mut app.store) {
        app.set_status("Server added");
    } else {
        app.set_status("Not a valid IP address");
    }
}

fn edit_focused_text(app: &mut App, keystroke: Option<char>) {
    match app.focused_item() {
        Some(Item::AddDnsEntry) => {
            let mut text = app.service.model().pending_entry_text.clone();
            apply_keystroke(&mut text, keystroke);
            app.service.update_pending_entry_text(text, &mut app.effects);
        }
        Some(Item::DnsEntry(index)) => {
            let Some(entry) = app.service.model().custom_dns_domains.get(index) else {
                return;
            };
            let mut text = entry.clone();
            apply_keystroke(&mut text, keystroke);
            if let Err(err) = app.service.update_entry_text(index, text, &mut app.effects) {
                log::warn!("edit of stale entry row ignored: {err}");
            }
        }
        _ => {}
    }
}

fn apply_keystroke(text: &mut String, keystroke: Option<char>) {
    match keystroke {
        Some(c) => text.push(c),
        None => {
            text.pop();
        }
    }
}

fn delete_focused_entry(app: &mut App) {
    let Some(item @ Item::DnsEntry(index)) = app.focused_item() else {
        return;
    };
    if !app.service.can_edit(item) {
        return;
    }

    match app.service.delete_entry(index, &mut app.effects, &mut app.store) {
        Ok(()) => app.set_status("Server removed"),
        Err(err) => log::warn!("delete of stale entry row ignored: {err}"),
    }
}

fn move_focused_entry(app: &mut App, up: bool) {
    let Some(item @ Item::DnsEntry(index)) = app.focused_item() else {
        return;
    };
    if !app.service.can_edit(item) {
        return;
    }

    let proposed_row = if up {
        app.cursor.row.saturating_sub(1)
    } else {
        app.cursor.row + 1
    };
    let proposed = IndexPath::new(app.cursor.section, proposed_row);
    let destination = app.service.clamped_move_destination(app.cursor, proposed);

    let Some(Item::DnsEntry(target)) = app.service.item_at(destination) else {
        return;
    };
    if target == index {
        return;
    }

    match app.service.move_entry(index, target, &mut app.store) {
        Ok(()) => app.cursor = destination,
        Err(err) => log::warn!("reorder of stale entry row ignored: {err}"),
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::JsonSettingsStore;
    use dns_prefs_core::DnsSettings;

    fn app_with_domains(name: &str, domains: &[&str]) -> App {
        let path = std::env::temp_dir()
            .join(format!("dns-prefs-update-{}-{name}", std::process::id()))
            .join("settings.json");
        let _ = std::fs::remove_file(&path);

        let store = JsonSettingsStore::at(path);
        store
            .save(&DnsSettings {
                custom_dns_domains: domains
                    .iter()
                    .map(|d| d.parse().expect("valid test address"))
                    .collect(),
                ..DnsSettings::default()
            })
            .expect("seed settings");

        App::with_store(store)
    }

    /// Drive the app the way the main loop would.
    fn send(app: &mut App, messages: &[AppMessage]) {
        for &msg in messages {
            update(app, msg);
        }
    }

    #[test]
    fn typing_and_committing_adds_a_server() {
        let mut app = app_with_domains("commit", &["8.8.8.8"]);

        send(&mut app, &[AppMessage::ToggleEditMode, AppMessage::SelectLast]);
        assert_eq!(app.focused_item(), Some(Item::AddDnsEntry));

        for c in "10.0.0.1".chars() {
            send(&mut app, &[AppMessage::Input(c)]);
        }
        send(&mut app, &[AppMessage::Activate]);

        assert_eq!(
            app.service.model().custom_dns_domains,
            vec!["8.8.8.8", "10.0.0.1"]
        );
        // The scroll hint lands the cursor back on the add row.
        assert_eq!(app.focused_item(), Some(Item::AddDnsEntry));
        assert_eq!(app.status.as_deref(), Some("Server added"));
    }

    #[test]
    fn committing_garbage_keeps_the_list() {
        let mut app = app_with_domains("garbage", &[]);

        send(&mut app, &[AppMessage::ToggleEditMode, AppMessage::SelectLast]);
        for c in "abc".chars() {
            send(&mut app, &[AppMessage::Input(c)]);
        }
        send(&mut app, &[AppMessage::Activate]);

        assert!(app.service.model().custom_dns_domains.is_empty());
        assert_eq!(app.service.model().pending_entry_text, "abc");
        assert!(app.effects.invalid_rows.contains(&Item::AddDnsEntry));
        assert_eq!(app.status.as_deref(), Some("Not a valid IP address"));
    }

    #[test]
    fn toggles_flip_under_the_cursor() {
        let mut app = app_with_domains("toggles", &[]);

        send(&mut app, &[AppMessage::Activate]);
        assert!(app.service.model().block_advertising);

        // With blocking on, the custom DNS row refuses to activate.
        send(&mut app, &[AppMessage::SelectNext, AppMessage::SelectNext]);
        assert_eq!(app.focused_item(), Some(Item::UseCustomDns));
        send(&mut app, &[AppMessage::Activate]);
        assert!(!app.service.model().enable_custom_dns);
        assert!(app.service.footer_visible(dns_prefs_core::Section::CustomDns));
    }

    #[test]
    fn delete_reanchors_the_cursor() {
        let mut app = app_with_domains("delete", &["1.1.1.1", "2.2.2.2"]);

        send(&mut app, &[AppMessage::ToggleEditMode]);
        // Move onto the last entry row.
        app.cursor = IndexPath::new(1, 2);
        send(&mut app, &[AppMessage::DeleteEntry]);

        assert_eq!(app.service.model().custom_dns_domains, vec!["1.1.1.1"]);
        // Old path now addresses the add row; still a valid cursor.
        assert!(app.focused_item().is_some());

        // Outside edit mode the delete affordance is gone entirely.
        send(&mut app, &[AppMessage::ToggleEditMode]);
        app.cursor = IndexPath::new(1, 1);
        send(&mut app, &[AppMessage::DeleteEntry]);
        assert_eq!(app.service.model().custom_dns_domains, vec!["1.1.1.1"]);
    }

    #[test]
    fn reorder_follows_the_row_and_clamps() {
        let mut app = app_with_domains("reorder", &["1.1.1.1", "2.2.2.2"]);

        send(&mut app, &[AppMessage::ToggleEditMode]);
        app.cursor = IndexPath::new(1, 1);

        send(&mut app, &[AppMessage::MoveEntryDown]);
        assert_eq!(
            app.service.model().custom_dns_domains,
            vec!["2.2.2.2", "1.1.1.1"]
        );
        assert_eq!(app.cursor, IndexPath::new(1, 2));

        // Already at the bottom of the run: clamped, nothing changes.
        send(&mut app, &[AppMessage::MoveEntryDown]);
        assert_eq!(
            app.service.model().custom_dns_domains,
            vec!["2.2.2.2", "1.1.1.1"]
        );
        assert_eq!(app.cursor, IndexPath::new(1, 2));
    }

    #[test]
    fn leaving_edit_mode_persists_valid_edits() {
        let mut app = app_with_domains("persist-edit", &["1.1.1.1"]);

        send(&mut app, &[AppMessage::ToggleEditMode]);
        app.cursor = IndexPath::new(1, 1);
        send(&mut app, &[AppMessage::Backspace, AppMessage::Input('2')]);
        assert_eq!(app.service.model().custom_dns_domains, vec!["1.1.1.2"]);

        send(&mut app, &[AppMessage::ToggleEditMode]);

        // The edited address survived cleanup unchanged and must still
        // have reached the store.
        let persisted: Vec<String> = app
            .store
            .load()
            .expect("load")
            .custom_dns_domains
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(persisted, vec!["1.1.1.2"]);
    }

    #[test]
    fn leaving_edit_mode_drops_invalid_rows() {
        let mut app = app_with_domains("cleanup", &["1.1.1.1"]);

        send(&mut app, &[AppMessage::ToggleEditMode]);
        app.cursor = IndexPath::new(1, 1);
        // Half-typed edit leaves the entry transiently invalid.
        send(&mut app, &[AppMessage::Backspace, AppMessage::Backspace]);
        assert_eq!(app.service.model().custom_dns_domains, vec!["1.1.1"]);
        assert!(app.effects.invalid_rows.contains(&Item::DnsEntry(0)));

        send(&mut app, &[AppMessage::ToggleEditMode]);
        assert!(app.service.model().custom_dns_domains.is_empty());
        assert!(app.effects.invalid_rows.is_empty());
    }
}
