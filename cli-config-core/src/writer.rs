use std::fs;
use std::path::Path;

use thiserror::Error;

/// Indentation used for lines nested inside a stanza.
pub const INDENT: &str = "   ";

/// Errors that can occur while writing rendered configuration text.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write config file: {0}")]
    Io(#[from] std::io::Error),
}

/// One configuration stanza: a header line, indented body lines, `exit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBlock {
    pub header: String,
    pub lines: Vec<String>,
}

impl ConfigBlock {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            lines: Vec::new(),
        }
    }

    /// Append a body line. Indentation is added on render.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Render the block followed by `exit` and one blank line.
    pub fn render_into(&self, out: &mut Vec<String>) {
        out.push(self.header.clone());
        for line in &self.lines {
            out.push(format!("{INDENT}{line}"));
        }
        out.push("exit".to_string());
        out.push(String::new());
    }
}

/// An ordered sequence of output lines assembled from raw lines and blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<String>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn block(&mut self, block: &ConfigBlock) {
        block.render_into(&mut self.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Write rendered configuration text to `path`.
pub fn write_file(text: &str, path: &Path) -> Result<(), WriteError> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConfigBlock, ConfigDocument};

    #[test]
    fn block_renders_indented_with_exit_and_blank() {
        let mut block = ConfigBlock::new("interface 1/1/1");
        block.line("no shutdown").line("vlan access 10");

        let mut doc = ConfigDocument::new();
        doc.block(&block);
        doc.push("ip route 0.0.0.0/0 10.0.0.1");

        assert_eq!(
            doc.render(),
            "interface 1/1/1\n   no shutdown\n   vlan access 10\nexit\n\nip route 0.0.0.0/0 10.0.0.1"
        );
    }
}
