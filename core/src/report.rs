use serde::{Deserialize, Serialize};

/// Result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTasks {
    pub start_time: String,
    pub end_time: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Field-wise view used for rendering; every field is absent when no source
/// was given.
#[derive(Serialize)]
struct Report<'a> {
    start_time: Option<&'a str>,
    end_time: Option<&'a str>,
    tasks: Option<&'a [String]>,
}

impl<'a> From<Option<&'a ParsedTasks>> for Report<'a> {
    fn from(parsed: Option<&'a ParsedTasks>) -> Self {
        Self {
            start_time: parsed.map(|p| p.start_time.as_str()),
            end_time: parsed.map(|p| p.end_time.as_str()),
            tasks: parsed.map(|p| p.tasks.as_slice()),
        }
    }
}

/// Renders the result for stdout. The returned string ends with a newline.
///
/// Text output writes absent fields as `None` and quotes tasks in the
/// `['a', 'b']` list style; JSON output writes them as `null`.
pub fn render(parsed: Option<&ParsedTasks>, format: OutputFormat) -> serde_json::Result<String> {
    let report = Report::from(parsed);
    match format {
        OutputFormat::Text => Ok(format!(
            "Start Time: {}\nEnd Time: {}\nTasks: {}\n",
            report.start_time.unwrap_or("None"),
            report.end_time.unwrap_or("None"),
            report
                .tasks
                .map(quote_list)
                .unwrap_or_else(|| "None".to_string()),
        )),
        OutputFormat::Json => {
            let mut s = serde_json::to_string(&report)?;
            s.push('\n');
            Ok(s)
        }
    }
}

fn quote_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes unless the text holds a single quote and no double quote.
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}
