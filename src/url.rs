//! URL formatting: the delimiters and the join that every action shares.
//!
//! ```text
//! com.sygic.aura://<action>|<arg1>|...|<argN>
//! com.sygic.aura://<action1>|<args...>&&&<action2>|<args...>
//! ```
//!
//! Arguments are written verbatim. The one exception is the settings
//! overwrite path, which the caller encodes with [`encode_component`]
//! before it gets here.

use tracing::trace;

use crate::model::{ActionEntry, ActionKind, Arg};

/// Custom URL scheme registered by the navigation app.
pub const SCHEME: &str = "com.sygic.aura";

/// Separates actions chained into one URL.
pub const ACTIONS_SEPARATOR: &str = "&&&";

/// Separates the action token and its arguments.
pub const OPTIONS_SEPARATOR: &str = "|";

/// Separates `key=value` pairs inside the truck settings argument.
pub const TRUCK_SETTINGS_SEPARATOR: &str = "&";

/// Join an action token and its present arguments with `|`.
///
/// Absent arguments are skipped without leaving an empty segment.
pub fn prepare_action(action: ActionKind, args: &[Option<Arg>]) -> String {
    let mut out = String::from(action.as_str());
    for arg in args.iter().flatten() {
        out.push_str(OPTIONS_SEPARATOR);
        out.push_str(&arg.to_string());
    }

    let absent = args.iter().filter(|arg| arg.is_none()).count();
    if absent > 0 {
        trace!(%action, absent, "skipped absent arguments");
    }

    out
}

pub fn prepare_entry(entry: &ActionEntry) -> String {
    prepare_action(entry.action, &entry.args)
}

/// Format each entry on its own and join them with `&&&`, in order.
pub fn prepare_actions<'a>(entries: impl IntoIterator<Item = &'a ActionEntry>) -> String {
    entries
        .into_iter()
        .map(prepare_entry)
        .collect::<Vec<_>>()
        .join(ACTIONS_SEPARATOR)
}

/// Prefix a prepared path with `com.sygic.aura://`.
pub fn custom_url(path: &str) -> String {
    format!("{SCHEME}://{path}")
}

/// Percent-encode a single argument.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepares_bare_action() {
        assert_eq!(prepare_action(ActionKind::Restore, &[]), "restore");
    }

    #[test]
    fn skips_absent_args_without_empty_segments() {
        let args = [None, Some(Arg::from("a")), None, Some(Arg::from("b")), None];
        assert_eq!(prepare_action(ActionKind::Login, &args), "login|a|b");
    }

    #[test]
    fn keeps_empty_strings_and_zero() {
        let args = [Some(Arg::from("")), Some(Arg::from(0.0))];
        assert_eq!(prepare_action(ActionKind::Coordinate, &args), "coordinate||0");
    }

    #[test]
    fn joins_entries_in_order() {
        let entries = [
            ActionEntry::new(ActionKind::Login).arg("u").arg("p"),
            ActionEntry::new(ActionKind::DeviceCode),
            ActionEntry::new(ActionKind::Route).arg("r.sif"),
        ];
        assert_eq!(
            prepare_actions(&entries),
            "login|u|p&&&deviceCode&&&route|r.sif"
        );
    }

    #[test]
    fn custom_url_adds_scheme_once() {
        assert_eq!(custom_url("restore"), "com.sygic.aura://restore");
        assert_eq!(custom_url(""), "com.sygic.aura://");
    }

    #[test]
    fn encodes_path_separators() {
        assert_eq!(
            encode_component("/sdcard/settings_overload.ini"),
            "%2Fsdcard%2Fsettings_overload.ini"
        );
    }

    #[test]
    fn other_arguments_are_not_encoded() {
        let args = [Some(Arg::from("jsmith@company.com")), Some(Arg::from("$js!PsW"))];
        assert_eq!(
            prepare_action(ActionKind::Login, &args),
            "login|jsmith@company.com|$js!PsW"
        );
    }
}
