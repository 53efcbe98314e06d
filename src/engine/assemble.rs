//! Folds classified lines into the output document.

use serde::{Deserialize, Serialize};

use super::levels::Level;

/// What an output line was assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutputKind {
    Heading { level: Level, ordinal: u32 },
    ListItem,
    Paragraph,
}

/// A finished line of the converted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub kind: OutputKind,
    /// 1-based input line where this output line starts.
    pub source_line: usize,
    /// Whether `text` differs from the source line(s) it came from.
    pub changed: bool,
}

#[derive(Debug)]
struct PendingParagraph {
    fragments: Vec<String>,
    first_line: usize,
    changed: bool,
}

/// Output buffer plus the pending paragraph and list-mode state.
#[derive(Debug, Default)]
pub struct Assembler {
    lines: Vec<OutputLine>,
    paragraph: Option<PendingParagraph>,
    in_list: bool,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_list(&self) -> bool {
        self.in_list
    }

    pub fn heading(&mut self, text: String, level: Level, ordinal: u32, source_line: usize, changed: bool) {
        self.flush_paragraph();
        self.in_list = false;
        self.lines.push(OutputLine {
            text,
            kind: OutputKind::Heading { level, ordinal },
            source_line,
            changed,
        });
    }

    pub fn list_item(&mut self, text: String, source_line: usize, changed: bool) {
        self.flush_paragraph();
        self.in_list = true;
        self.lines.push(OutputLine {
            text,
            kind: OutputKind::ListItem,
            source_line,
            changed,
        });
    }

    /// Append an indented line to the list item just emitted.
    ///
    /// Outside list mode the text starts or extends a paragraph instead.
    pub fn continuation(&mut self, text: String, source_line: usize) {
        match self.lines.last_mut() {
            Some(last) if self.in_list => {
                last.text.push(' ');
                last.text.push_str(&text);
                last.changed = true;
            }
            _ => self.prose(text, source_line, false),
        }
    }

    pub fn prose(&mut self, text: String, source_line: usize, changed: bool) {
        self.in_list = false;
        match &mut self.paragraph {
            Some(paragraph) => {
                paragraph.fragments.push(text);
                paragraph.changed = true;
            }
            None => {
                self.paragraph = Some(PendingParagraph {
                    fragments: vec![text],
                    first_line: source_line,
                    changed,
                })
            }
        }
    }

    /// Blank line or separator: close the paragraph and leave list mode.
    pub fn boundary(&mut self) {
        self.flush_paragraph();
        self.in_list = false;
    }

    pub fn finish(mut self) -> Vec<OutputLine> {
        self.flush_paragraph();
        self.lines.retain(|line| !line.text.trim().is_empty());
        self.lines
    }

    fn flush_paragraph(&mut self) {
        if let Some(paragraph) = self.paragraph.take() {
            self.lines.push(OutputLine {
                text: paragraph.fragments.join(" "),
                kind: OutputKind::Paragraph,
                source_line: paragraph.first_line,
                changed: paragraph.changed,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[OutputLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_prose_joins_until_boundary() {
        let mut asm = Assembler::new();
        asm.prose("first".into(), 1, false);
        asm.prose("second".into(), 2, false);
        asm.boundary();
        asm.prose("third".into(), 4, false);
        let lines = asm.finish();
        assert_eq!(texts(&lines), vec!["first second", "third"]);
        assert!(lines[0].changed);
        assert!(!lines[1].changed);
        assert_eq!(lines[1].source_line, 4);
    }

    #[test]
    fn test_heading_flushes_paragraph_and_list_mode() {
        let mut asm = Assembler::new();
        asm.list_item("- a".into(), 1, false);
        assert!(asm.in_list());
        asm.heading("一、T".into(), Level::Level1, 1, 2, true);
        assert!(!asm.in_list());
        asm.prose("body".into(), 3, false);
        asm.heading("二、U".into(), Level::Level1, 2, 4, true);
        let lines = asm.finish();
        assert_eq!(texts(&lines), vec!["- a", "一、T", "body", "二、U"]);
        assert_eq!(lines[3].kind, OutputKind::Heading { level: Level::Level1, ordinal: 2 });
    }

    #[test]
    fn test_continuation_appends_to_list_item() {
        let mut asm = Assembler::new();
        asm.list_item("- a".into(), 1, false);
        asm.continuation("more".into(), 2);
        asm.list_item("- b".into(), 3, false);
        let lines = asm.finish();
        assert_eq!(texts(&lines), vec!["- a more", "- b"]);
        assert!(lines[0].changed);
        assert!(!lines[1].changed);
    }

    #[test]
    fn test_continuation_without_list_becomes_prose() {
        let mut asm = Assembler::new();
        asm.continuation("stray".into(), 1);
        let lines = asm.finish();
        assert_eq!(texts(&lines), vec!["stray"]);
        assert_eq!(lines[0].kind, OutputKind::Paragraph);
    }

    #[test]
    fn test_prose_after_list_starts_paragraph() {
        let mut asm = Assembler::new();
        asm.list_item("- a".into(), 1, false);
        asm.prose("not indented".into(), 2, false);
        assert!(!asm.in_list());
        let lines = asm.finish();
        assert_eq!(texts(&lines), vec!["- a", "not indented"]);
    }

    #[test]
    fn test_empty_lines_dropped() {
        let mut asm = Assembler::new();
        asm.list_item("  ".into(), 1, false);
        assert!(asm.finish().is_empty());
    }
}
