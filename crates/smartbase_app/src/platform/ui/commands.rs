use smartbase_core::{Msg, SnippetId, TagFilter};

/// Everything the host loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Core(Msg),
    Help,
    Invalid(String),
    Quit,
}

pub const USAGE: &str = "\
commands:
  tag <All|Technical|Urgent|General|...>   filter by tag
  search <text> | clear                      filter by text
  refresh                                    reload the list
  new                                        open/close the creation panel
  draft <text> | submit                      edit and submit the new snippet
  edit <id> | text <id> <content> | save <id> | cancel <id>
  delete <id> | confirm <id> | keep <id>
  dismiss                                    close the notification
  help | quit";

/// Parses one line of user input.
pub fn parse_line(line: &str) -> HostEvent {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    let msg = match verb.to_ascii_lowercase().as_str() {
        "" => Some(Msg::NoOp),
        "help" | "?" => return HostEvent::Help,
        "quit" | "exit" => return HostEvent::Quit,
        "tag" if !rest.is_empty() => Some(Msg::TagSelected(TagFilter::from_label(rest))),
        "search" => Some(Msg::SearchChanged(rest.to_string())),
        "clear" => Some(Msg::SearchCleared),
        "refresh" => Some(Msg::RefreshClicked),
        "new" => Some(Msg::PanelToggled),
        "draft" => Some(Msg::DraftChanged(rest.to_string())),
        "submit" => Some(Msg::SubmitClicked),
        "dismiss" => Some(Msg::NotificationDismissed),
        "edit" => with_id(rest, Msg::EditClicked),
        "save" => with_id(rest, Msg::SaveClicked),
        "cancel" | "keep" => with_id(rest, Msg::CancelClicked),
        "delete" => with_id(rest, Msg::DeleteClicked),
        "confirm" => with_id(rest, Msg::DeleteConfirmed),
        "text" => rest.split_once(char::is_whitespace).and_then(|(id, text)| {
            let id = id.parse::<SnippetId>().ok()?;
            Some(Msg::EditDraftChanged {
                id,
                text: text.trim_start().to_string(),
            })
        }),
        _ => None,
    };

    match msg {
        Some(msg) => HostEvent::Core(msg),
        None => HostEvent::Invalid(line.to_string()),
    }
}

fn with_id(rest: &str, make: fn(SnippetId) -> Msg) -> Option<Msg> {
    rest.parse::<SnippetId>().ok().map(make)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbase_core::Tag;

    #[test]
    fn filter_commands() {
        assert_eq!(
            parse_line("tag Urgent"),
            HostEvent::Core(Msg::TagSelected(TagFilter::Only(Tag::Urgent)))
        );
        assert_eq!(
            parse_line("tag all"),
            HostEvent::Core(Msg::TagSelected(TagFilter::All))
        );
        assert_eq!(
            parse_line("search  login bug"),
            HostEvent::Core(Msg::SearchChanged("login bug".to_string()))
        );
        assert_eq!(
            parse_line("search"),
            HostEvent::Core(Msg::SearchChanged(String::new()))
        );
    }

    #[test]
    fn item_commands_need_numeric_ids() {
        assert_eq!(parse_line("edit 7"), HostEvent::Core(Msg::EditClicked(7)));
        assert_eq!(parse_line("keep 7"), HostEvent::Core(Msg::CancelClicked(7)));
        assert_eq!(
            parse_line("text 7 new words here"),
            HostEvent::Core(Msg::EditDraftChanged {
                id: 7,
                text: "new words here".to_string()
            })
        );
        assert_eq!(
            parse_line("delete seven"),
            HostEvent::Invalid("delete seven".to_string())
        );
        assert_eq!(parse_line("text 7"), HostEvent::Invalid("text 7".to_string()));
    }

    #[test]
    fn host_commands() {
        assert_eq!(parse_line("  QUIT "), HostEvent::Quit);
        assert_eq!(parse_line("help"), HostEvent::Help);
        assert_eq!(parse_line(""), HostEvent::Core(Msg::NoOp));
        assert_eq!(parse_line("tag"), HostEvent::Invalid("tag".to_string()));
        assert_eq!(parse_line("frobnicate"), HostEvent::Invalid("frobnicate".to_string()));
    }
}
