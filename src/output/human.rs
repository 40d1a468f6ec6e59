#![forbid(unsafe_code)]

//! Human-readable listing of a translated document

use crate::engine::{OutputDocument, RuleSet};
use serde_json::Value;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter for translated rule sets
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the document without color
    pub fn format(&self, doc: &OutputDocument) -> String {
        let mut buffer = termcolor::NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write(&mut buffer, doc);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Write the document to stdout, colored according to `choice`
    pub fn write_to_stdout(&self, doc: &OutputDocument, choice: ColorChoice) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, doc)
    }

    fn write(&self, out: &mut impl WriteColor, doc: &OutputDocument) -> io::Result<()> {
        for (i, group) in doc.groups().into_iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            let color = if i == 0 { Color::Green } else { Color::Yellow };
            write_group(out, group, color)?;
        }
        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_group(out: &mut impl WriteColor, group: &RuleSet, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", group.label)?;
    out.reset()?;
    writeln!(out, " ({} rules)", group.rules.len())?;

    if group.rules.is_empty() {
        writeln!(out, "  (none)")?;
        return Ok(());
    }

    for (name, options) in group.rules.iter() {
        match options {
            Value::Bool(true) => writeln!(out, "  {}", name)?,
            other => writeln!(out, "  {}: {}", name, other)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GroupLabels, MergedConfig, compose};
    use serde_json::json;

    #[test]
    fn test_format_document() {
        let standard = match json!({"array_syntax": {"syntax": "short"}, "single_quote": true}) {
            Value::Object(map) => MergedConfig::from(map),
            _ => unreachable!(),
        };
        let doc = compose(standard, MergedConfig::new(), &GroupLabels::default());

        let output = HumanFormatter::new().format(&doc);
        assert_eq!(
            output,
            "@Laravel (3 rules)
  @PSR2
  array_syntax: {\"syntax\":\"short\"}
  single_quote

@Laravel:risky (0 rules)
  (none)
"
        );
    }
}
