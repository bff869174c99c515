// file: src/report.rs
// description: renders keyword results to standard output

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::KeywordResult;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    frequency: &'a KeywordResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<&'a KeywordResult>,
}

/// Text written for one run: the frequency result, then the graph result
/// when it is requested.
pub fn render(
    frequency: &KeywordResult,
    graph: Option<&KeywordResult>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Python => Ok(match graph {
            Some(graph) => format!("{}\n{}", frequency, graph),
            None => frequency.to_string(),
        }),
        OutputFormat::Json => Ok(serde_json::to_string(&JsonOutput { frequency, graph })?),
    }
}

pub fn report(
    out: &mut impl Write,
    frequency: &KeywordResult,
    graph: Option<&KeywordResult>,
    format: OutputFormat,
) -> Result<()> {
    let text = render(frequency, graph, format)?;
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}
