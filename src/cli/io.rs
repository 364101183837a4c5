//! JSON output for one-shot commands
//!
//! A single JSON object per invocation on stdout, UTF-8.

use std::io::{self, Write};

use serde_json::json;

use super::errors::CliResult;
use crate::quake::ViewFields;

/// Write a lookup result to stdout
pub fn write_response(status: u16, fields: &ViewFields) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_response_to(&mut stdout, status, fields)
}

fn write_response_to<W: Write>(writer: &mut W, status: u16, fields: &ViewFields) -> CliResult<()> {
    let response = json!({
        "status": status,
        "view": fields,
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
