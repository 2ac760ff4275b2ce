//! Source files, spans and text edits.
//!
//! The linter never rewrites files itself. Code fixes are expressed as
//! [`TextEdit`] insertions which the host applies; [`apply_edits`] is the
//! reference implementation of that step.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) u32);

impl FileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

/// Byte range of a declaration inside one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub file: FileId,
    pub pos: usize,
    pub end: usize,
}

/// A span resolved against its file, as reported to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub pos: usize,
    pub end: usize,
}

/// Insert `text` at byte offset `pos` of `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub file: String,
    pub pos: usize,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Offset of the first byte of the line containing `pos`.
    pub fn line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        self.text[..pos].rfind('\n').map_or(0, |nl| nl + 1)
    }

    /// Leading whitespace of the line containing `pos`, stopping at `pos`.
    pub fn indent_at(&self, pos: usize) -> &str {
        let pos = pos.min(self.text.len());
        let start = self.line_start(pos);
        let line = &self.text[start..pos];
        let width = line
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(line.len());
        &line[..width]
    }

    /// Build an edit that puts `line` on its own line directly above the
    /// declaration starting at `pos`, indented like that declaration.
    pub fn insert_line_before(&self, pos: usize, line: &str) -> TextEdit {
        TextEdit {
            file: self.path.clone(),
            pos: self.line_start(pos),
            text: format!("{}{}\n", self.indent_at(pos), line),
        }
    }
}

/// Apply insertions to `text`. Edits at the same offset keep their order.
/// Offsets past the end of the text are clamped.
pub fn apply_edits<'a>(text: &str, edits: impl IntoIterator<Item = &'a TextEdit>) -> String {
    let mut edits: Vec<&TextEdit> = edits.into_iter().collect();
    edits.sort_by_key(|e| e.pos);

    let extra: usize = edits.iter().map(|e| e.text.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for edit in edits {
        let pos = edit.pos.clamp(cursor, text.len());
        out.push_str(&text[cursor..pos]);
        out.push_str(&edit.text);
        cursor = pos;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_is_taken_from_the_declaration_line() {
        let file = SourceFile::new("main.tsp", "model Foo {\n    name: string;\n}\n");
        let pos = file.text.find("name").unwrap();
        assert_eq!(file.line_start(pos), 12);
        assert_eq!(file.indent_at(pos), "    ");
    }

    #[test]
    fn tabs_count_as_indentation() {
        let file = SourceFile::new("main.tsp", "model Foo {\n\t\tname: string;\n}");
        let pos = file.text.find("name").unwrap();
        assert_eq!(file.indent_at(pos), "\t\t");
    }

    #[test]
    fn first_line_has_no_indent() {
        let file = SourceFile::new("main.tsp", "name: string;");
        let edit = file.insert_line_before(0, "@doc(\"x\")");
        assert_eq!(edit.pos, 0);
        assert_eq!(edit.text, "@doc(\"x\")\n");
    }

    #[test]
    fn indent_stops_at_first_non_whitespace() {
        let file = SourceFile::new("main.tsp", "  @key name: string;");
        let pos = file.text.find("name").unwrap();
        assert_eq!(file.indent_at(pos), "  ");
    }

    #[test]
    fn inserted_line_lands_above_declaration() {
        let text = "model Foo {\n  name: string;\n}\n";
        let file = SourceFile::new("main.tsp", text);
        let pos = text.find("name").unwrap();
        let edit = file.insert_line_before(pos, "@minLength(3)");
        assert_eq!(
            apply_edits(text, [&edit]),
            "model Foo {\n  @minLength(3)\n  name: string;\n}\n"
        );
    }

    #[test]
    fn edits_apply_in_offset_order() {
        let a = TextEdit {
            file: "f".into(),
            pos: 4,
            text: "B".into(),
        };
        let b = TextEdit {
            file: "f".into(),
            pos: 0,
            text: "A".into(),
        };
        assert_eq!(apply_edits("xxxxyy", [&a, &b]), "AxxxxByy");
    }
}
