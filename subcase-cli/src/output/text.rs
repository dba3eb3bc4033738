//! Plain text output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Writes paragraph texts separated by blank lines, with a header per file
/// once more than one document is written
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, documents: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        if self.documents > 0 || document.fixes.is_some() {
            writeln!(self.writer, "==> {} <==", document.source)?;
        }
        self.documents += 1;

        for (i, paragraph) in document.paragraphs.iter().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "{}", paragraph.text)?;
        }

        if let Some(fixes) = &document.fixes {
            for fix in fixes {
                writeln!(
                    self.writer,
                    "# {} [{}] {:?} -> {:?}",
                    fix.index, fix.rule, fix.before, fix.after
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
