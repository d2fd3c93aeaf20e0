//! JSON output formatter

use super::OutputFormatter;
use crate::route::Plan;
use anyhow::Result;
use fanyi_core::{Classification, ParsedRecord, Rule, Verdict};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - verdicts as an array, records and plans as objects
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    pending: Pending,
}

enum Pending {
    Nothing,
    Verdicts(Vec<VerdictData>),
    Value(serde_json::Value),
}

/// Data structure for one classified input
#[derive(Debug, Serialize, Deserialize)]
pub struct VerdictData {
    /// The input as classified
    pub input: String,
    pub classification: Classification,
    /// The guard that decided
    pub rule: Rule,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            pending: Pending::Nothing,
        }
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_verdict(&mut self, input: &str, verdict: &Verdict) -> Result<()> {
        let data = VerdictData {
            input: input.to_string(),
            classification: verdict.classification,
            rule: verdict.rule,
        };
        match &mut self.pending {
            Pending::Verdicts(verdicts) => verdicts.push(data),
            pending => *pending = Pending::Verdicts(vec![data]),
        }
        Ok(())
    }

    fn format_record(&mut self, record: &ParsedRecord) -> Result<()> {
        self.pending = Pending::Value(serde_json::to_value(record)?);
        Ok(())
    }

    fn format_plan(&mut self, plan: &Plan) -> Result<()> {
        let mut value = serde_json::to_value(plan)?;
        if let Some(object) = value.as_object_mut() {
            object.insert("structured".to_string(), plan.is_structured().into());
        }
        self.pending = Pending::Value(value);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.pending, Pending::Nothing) {
            Pending::Nothing => self.write_value(&[] as &[VerdictData])?,
            Pending::Verdicts(verdicts) => self.write_value(&verdicts)?,
            Pending::Value(value) => self.write_value(&value)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
