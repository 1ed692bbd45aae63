//! Preferences list view
//!
//! One visual row per projected item, derived on every frame so the
//! display can never drift from the model.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use dns_prefs_core::{EditAffordance, IndexPath, Item, PreferencesModel, Section};

use crate::model::App;
use crate::view::theme::{ThemeColors, colors};

/// Render the sectioned preference list
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;

    for (section_index, &section) in app.service.sections().iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(section_header(section));

        for row in 0..app.service.row_count(section) {
            let path = IndexPath::new(section_index, row);
            let Some(item) = app.service.item_at(path) else {
                continue;
            };

            if path == app.cursor {
                cursor_line = lines.len();
            }
            lines.push(render_row(app, item, path == app.cursor));
        }

        if app.service.footer_visible(section) {
            lines.push(section_footer());
        }
    }

    // Keep the focused row inside the viewport.
    let height = usize::from(area.height);
    let offset =
        u16::try_from((cursor_line + 1).saturating_sub(height)).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn section_header(section: Section) -> Line<'static> {
    let c = colors();
    let title = match section {
        Section::ManagedDns => "DNS CONTENT BLOCKERS",
        Section::CustomDns => "CUSTOM DNS",
    };
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
    ))
}

fn section_footer() -> Line<'static> {
    let c = colors();
    Line::from(Span::styled(
        " Disable Block ads and Block trackers to activate this setting.",
        Style::default()
            .fg(c.muted)
            .add_modifier(Modifier::ITALIC),
    ))
}

/// One visual row, exhaustive over the item taxonomy
fn render_row(app: &App, item: Item, is_selected: bool) -> Line<'static> {
    let c = colors();
    let model = app.service.model();

    match item {
        Item::BlockAdvertising => {
            toggle_row(&c, "Block ads", model.block_advertising, true, is_selected)
        }
        Item::BlockTracking => toggle_row(
            &c,
            "Block trackers",
            model.block_tracking,
            true,
            is_selected,
        ),
        Item::UseCustomDns => toggle_row(
            &c,
            "Use custom DNS",
            model.effective_enable_custom_dns(),
            model.can_enable_custom_dns(),
            is_selected,
        ),
        Item::DnsEntry(index) => {
            let text = model
                .custom_dns_domains
                .get(index)
                .cloned()
                .unwrap_or_default();
            let flagged = app.effects.invalid_rows.contains(&item)
                || !PreferencesModel::is_valid_for_presentation(&text);
            entry_row(app, &c, item, text, flagged, is_selected)
        }
        Item::AddDnsEntry => {
            let text = model.pending_entry_text.clone();
            let flagged = app.effects.invalid_rows.contains(&item)
                || !PreferencesModel::is_valid_for_presentation(&text);
            entry_row(app, &c, item, text, flagged, is_selected)
        }
    }
}

fn toggle_row(
    c: &ThemeColors,
    label: &'static str,
    is_on: bool,
    is_enabled: bool,
    is_selected: bool,
) -> Line<'static> {
    let marker = if is_on { "[x]" } else { "[ ]" };
    let mut style = if is_enabled {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.muted)
    };
    if is_selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::raw(cursor_prefix(is_selected)),
        Span::styled(format!("{marker} {label}"), style),
    ])
}

fn entry_row(
    app: &App,
    c: &ThemeColors,
    item: Item,
    text: String,
    flagged: bool,
    is_selected: bool,
) -> Line<'static> {
    let indent = "  ".repeat(app.service.indentation_level(item));

    let affordance = if app.service.can_edit(item) {
        match item.edit_affordance() {
            EditAffordance::Delete => "− ",
            EditAffordance::Insert => "+ ",
            EditAffordance::None => "",
        }
    } else {
        ""
    };

    let mut style = if flagged {
        Style::default().fg(c.error)
    } else {
        Style::default().fg(c.fg)
    };
    if is_selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::raw(cursor_prefix(is_selected)),
        Span::raw(indent),
        Span::styled(affordance, Style::default().fg(c.muted)),
    ];

    if text.is_empty() && item == Item::AddDnsEntry {
        spans.push(Span::styled(
            "Add a server…",
            Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(text, style));
    }

    // Text caret on the focused editable row
    if is_selected && app.service.can_edit(item) {
        spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
    }

    Line::from(spans)
}

fn cursor_prefix(is_selected: bool) -> &'static str {
    if is_selected { " ▶ " } else { "   " }
}
