//! Chain command: several actions read from JSON, one URL.

use std::{fs, io, path::Path};

use sygic_url::{ActionEntry, CustomUrl};

/// Read chain entries from `path`, or from stdin when `path` is `-`.
pub(super) fn read_entries(path: &Path) -> Result<Vec<ActionEntry>, String> {
    let json = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin()).map_err(|e| format!("failed to read stdin: {e}"))?
    } else {
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?
    };

    parse_entries(&json).map_err(|e| format!("invalid chain file {}: {e}", path.display()))
}

pub(super) fn parse_entries(json: &str) -> Result<Vec<ActionEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

pub(super) fn build(builder: CustomUrl, entries: &[ActionEntry], strict: bool) -> Result<String, String> {
    if entries.is_empty() {
        return Err("chain file has no actions".to_string());
    }

    if strict {
        builder
            .checked_entries(entries)
            .map_err(|e| format!("invalid chain: {e}"))
    } else {
        Ok(builder.multiple_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn builds_chained_url() {
        let entries = parse_entries(
            r#"[
                {"action": "login", "args": ["username", "password"]},
                {"action": "back_button", "args": ["package"]}
            ]"#,
        )
        .unwrap();

        let url = build(CustomUrl::new(), &entries, false).unwrap();
        assert_eq!(
            url,
            "com.sygic.aura://login|username|password&&&back_button|package"
        );
    }

    #[test]
    fn numbers_and_nulls() {
        let entries = parse_entries(
            r#"[{"action": "coordinate", "args": [15.06591, 47.73341, null, "drive"]},
                {"action": "deviceCode"}]"#,
        )
        .unwrap();

        let url = build(CustomUrl::new(), &entries, false).unwrap();
        assert_eq!(
            url,
            "com.sygic.aura://coordinate|15.06591|47.73341|drive&&&deviceCode"
        );
    }

    #[test]
    fn boolean_args_are_written_as_words() {
        let entries = parse_entries(r#"[{"action": "url", "args": [true]}]"#).unwrap();

        let url = build(CustomUrl::new(), &entries, false).unwrap();
        assert_eq!(url, "com.sygic.aura://url|true");
    }

    #[test]
    fn strict_rejects_nulls() {
        let entries = parse_entries(r#"[{"action": "login", "args": ["user", null]}]"#).unwrap();
        let err = build(CustomUrl::new(), &entries, true).unwrap_err();

        assert_eq!(err, "invalid chain: login: argument 1 is missing");
    }

    #[test]
    fn empty_chain_fails() {
        let err = build(CustomUrl::new(), &[], false).unwrap_err();
        assert_eq!(err, "chain file has no actions");
    }

    #[test]
    fn unknown_action_fails_to_parse() {
        assert!(parse_entries(r#"[{"action": "teleport", "args": []}]"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chain.json");
        fs::write(&path, r#"[{"action": "restore"}]"#).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = read_entries(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.starts_with("failed to read"));
    }
}
