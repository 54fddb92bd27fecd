use std::fmt::Write;

use chrono::DateTime;
use smartbase_core::{
    validation::MAX_CONTENT_CHARS, AppViewModel, CreateFormView, ItemPhase, NotificationKind,
    PanelPhase, SnippetCardView, TagAccent,
};

use super::constants::*;

/// Renders the whole screen as text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let toggle = if matches!(view.panel, PanelPhase::Entering | PanelPhase::Visible) {
        "[x Close]"
    } else {
        "[+ New Snippet]"
    };
    let _ = writeln!(out, "{BOLD}SmartBase{RESET} {DIM}AI Knowledge Engine{RESET}   {toggle}");
    let _ = writeln!(out, "{RULE}");

    if view.panel.is_mounted() {
        render_form(&mut out, view.panel, &view.form);
    }

    let search = if view.search.is_empty() {
        format!("{DIM}Search your knowledge base...{RESET}")
    } else {
        view.search.clone()
    };
    let _ = writeln!(out, "search: {search}");

    let tags: Vec<String> = view
        .tags
        .iter()
        .map(|button| {
            if button.active {
                format!("{BOLD}{}[{}]{RESET}", accent_color(button.accent), button.label)
            } else {
                format!(" {} ", button.label)
            }
        })
        .collect();
    let _ = writeln!(out, "tags:   {}", tags.join(" "));
    let _ = writeln!(out, "{DIM}{}{RESET}   (refresh)", view.status_line);
    let _ = writeln!(out, "{RULE}");

    if view.fetching {
        let _ = writeln!(out, "  ...");
    } else if view.cards.is_empty() {
        let _ = writeln!(out, "  No snippets found");
        let _ = writeln!(out, "  {DIM}Upload your first snippet to get started{RESET}");
    } else {
        for card in &view.cards {
            render_card(&mut out, card);
        }
    }

    if let Some(note) = &view.notification {
        let (color, mark) = match note.kind {
            NotificationKind::Success => (SUCCESS, "ok"),
            NotificationKind::Error => (ERROR, "!!"),
        };
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{color}{mark} {}{RESET}", note.message);
    }

    out
}

fn render_form(out: &mut String, phase: PanelPhase, form: &CreateFormView) {
    let state = match phase {
        PanelPhase::Entering => " (opening)",
        PanelPhase::Exiting => " (closing)",
        PanelPhase::Visible | PanelPhase::Hidden => "",
    };
    let _ = writeln!(out, "{BOLD}Upload Knowledge Snippet{RESET}{DIM}{state}{RESET}");
    let _ = writeln!(
        out,
        "{DIM}The backend will automatically analyze and tag your content{RESET}"
    );
    let _ = writeln!(out, "> {}", form.draft);
    let counter = format!("{} / {}", form.char_count, MAX_CONTENT_CHARS);
    let counter = if form.char_warn {
        format!("{ERROR}{counter}{RESET}")
    } else {
        counter
    };
    let action = if form.submitting {
        "analyzing..."
    } else {
        "[Analyze & Upload]"
    };
    let _ = writeln!(out, "{counter}   {action}");
    let _ = writeln!(out, "{RULE}");
}

fn render_card(out: &mut String, card: &SnippetCardView) {
    let color = accent_color(card.accent);
    let _ = writeln!(
        out,
        "#{} {color}[{}]{RESET} {DIM}{}{RESET}",
        card.id,
        card.tag_label,
        format_date(&card.created_at)
    );

    match card.phase {
        ItemPhase::Viewing => {
            let _ = writeln!(out, "  {}", card.content);
        }
        ItemPhase::Editing | ItemPhase::Saving => {
            let draft = card.draft.as_deref().unwrap_or_default();
            let _ = writeln!(out, "  edit> {draft}");
            if card.phase == ItemPhase::Saving {
                let _ = writeln!(out, "  {DIM}saving...{RESET}");
            } else {
                let _ = writeln!(out, "  {DIM}[cancel {id}] [save {id}]{RESET}", id = card.id);
            }
        }
        ItemPhase::ConfirmingDelete => {
            let _ = writeln!(out, "  {}", card.content);
            let _ = writeln!(
                out,
                "  {ERROR}Delete Snippet? This action cannot be undone.{RESET} [keep {id}] [confirm {id}]",
                id = card.id
            );
        }
        ItemPhase::Deleting => {
            let _ = writeln!(out, "  {DIM}{STRIKE}{}{RESET}", card.content);
        }
    }
}

fn accent_color(accent: TagAccent) -> &'static str {
    match accent {
        TagAccent::All => ACCENT_ALL,
        TagAccent::Technical => ACCENT_TECHNICAL,
        TagAccent::Urgent => ACCENT_URGENT,
        TagAccent::General => ACCENT_GENERAL,
        TagAccent::Neutral => ACCENT_NEUTRAL,
    }
}

/// `2026-10-19T09:00:00Z` -> `Oct 19, 2026`; unparseable input is shown as-is.
pub(crate) fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
