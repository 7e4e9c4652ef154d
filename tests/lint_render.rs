//! Lint: key hints (`[X]`) drawn by a screen must also be click targets.
//!
//! On a phone there is no keyboard, so a `[p] Process Resume` row that is only
//! drawn with `cl.push(...)` cannot be used at all. Rows with a key hint go
//! through `push_choice()` / `push_clickable()` instead.
//!
//! This test scans every `render.rs` under `src/screens/` and flags `push(`
//! calls whose line contains a bracket-key pattern.

use std::fs;
use std::path::Path;

/// Whether `s` contains a bracket-key pattern like `[s]`, `[P]`, `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    s.as_bytes().windows(3).any(|w| {
        w[0] == b'[' && w[2] == b']' && (w[1].is_ascii_alphanumeric() || b"<>^-".contains(&w[1]))
    })
}

fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.starts_with("//") || !contains_bracket_key(line) {
                return None;
            }
            let clickable = line.contains("push_clickable(") || line.contains("push_choice(");
            (line.contains(".push(") && !clickable).then(|| (i + 1, trimmed.to_string()))
        })
        .collect()
}

fn visit_render_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, violations);
        } else if path.file_name().is_some_and(|n| n == "render.rs") {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_num, line) in find_bracket_key_in_push(&source) {
                violations.push((path.display().to_string(), line_num, line));
            }
        }
    }
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let screens_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/screens");
    assert!(screens_dir.is_dir(), "missing {}", screens_dir.display());

    let mut violations = Vec::new();
    visit_render_files(&screens_dir, &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in non-clickable cl.push() calls.\n\
             Use push_choice() or push_clickable() so the row can be tapped.\n\n",
        );
        for (file, line_num, line) in &violations {
            msg.push_str(&format!("  {file}:{line_num}: {line}\n"));
        }
        panic!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bracket_key_in_push() {
        let source = r#"cl.push(Line::from(" [p] Process Resume"));"#;
        assert_eq!(find_bracket_key_in_push(source).len(), 1);
    }

    #[test]
    fn allows_push_choice() {
        let source = r#"cl.push_choice('p', "Process Resume", style, PROCESS_RESUME);"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"cl.push_clickable(Line::from(" [x] Remove file"), REMOVE_FILE);"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [s] Start"));"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[s]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[<]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[ab]"));
        assert!(!contains_bracket_key("plain"));
    }
}
