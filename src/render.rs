//! Renderers for a decoded token.
//!
//! Both renderers build the complete output in memory so that a failure
//! never leaves a half-written report on stdout.

use chrono::{DateTime, Local};
use colored::Colorize;
use serde_json::Value;
use tracing::trace;

use crate::cli::OutputFormat;
use crate::jwt::DecodedToken;

const WIDTH: usize = 80;
const TITLE: &str = "JWT TOKEN - DECODED";
const DATE_CLAIMS: [&str; 3] = ["exp", "iat", "nbf"];

/// Time zone used when annotating date claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateZone {
    Local,
    Utc,
}

/// Renders `jwt` in the chosen format, trailing newline included.
///
/// `dates` only affects the pretty report.
pub fn render(
    jwt: &DecodedToken,
    format: OutputFormat,
    dates: Option<DateZone>,
) -> serde_json::Result<String> {
    trace!(?format, "rendering token");
    match format {
        OutputFormat::Pretty => render_pretty(jwt, dates),
        OutputFormat::Json => render_json(jwt),
    }
}

pub fn render_json(jwt: &DecodedToken) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(jwt)?;
    out.push('\n');
    Ok(out)
}

pub fn render_pretty(jwt: &DecodedToken, dates: Option<DateZone>) -> serde_json::Result<String> {
    let banner = "=".repeat(WIDTH);
    let header = serde_json::to_string_pretty(&jwt.header)?;
    let payload = serde_json::to_string_pretty(&jwt.payload)?;

    let mut lines = vec![
        banner.clone(),
        TITLE.bold().bright_cyan().to_string(),
        banner.clone(),
        String::new(),
    ];

    push_section(&mut lines, "HEADER:".bold().cyan().to_string(), header.cyan().to_string());
    lines.push(String::new());
    push_section(
        &mut lines,
        "PAYLOAD:".bold().yellow().to_string(),
        payload.yellow().to_string(),
    );
    lines.push(String::new());

    if let Some(zone) = dates {
        let annotated = claim_dates(jwt, zone);
        if !annotated.is_empty() {
            push_section(
                &mut lines,
                "CLAIM DATES:".bold().green().to_string(),
                annotated.join("\n").green().to_string(),
            );
            lines.push(String::new());
        }
    }

    push_section(
        &mut lines,
        "SIGNATURE:".bold().magenta().to_string(),
        jwt.signature.magenta().to_string(),
    );
    lines.push(String::new());
    lines.push(banner);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn push_section(lines: &mut Vec<String>, label: String, body: String) {
    lines.push(label);
    lines.push("-".repeat(WIDTH));
    lines.push(body);
}

/// One `claim: seconds date` line per integer date claim in the payload.
fn claim_dates(jwt: &DecodedToken, zone: DateZone) -> Vec<String> {
    DATE_CLAIMS
        .iter()
        .filter_map(|&claim| {
            let secs = jwt.try_get_claim(claim).and_then(Value::as_i64)?;
            let date = DateTime::from_timestamp(secs, 0)?;
            let date = match zone {
                DateZone::Utc => date.to_string(),
                DateZone::Local => date.with_timezone(&Local).to_string(),
            };
            Some(format!("{}: {} {}", claim, secs, date))
        })
        .collect()
}
