//! JSON-lines console
//!
//! Minimal presentation layer over a [`CafeLedger`]: one request per input
//! line, one JSON document per output line.
//!
//! | Input line | Output |
//! |------------|--------|
//! | `LedgerCommand` JSON | `CommandResponse` |
//! | bare payload JSON (`{"type": "PAY_BILL", ...}`) | `CommandResponse` |
//! | `tables` | table listing |
//! | `orders` | pending orders |
//! | `menu` | menu catalog |
//! | `bill <table_id>` | `BillView` or `CommandResponse` error |
//! | `events` | event journal |
//! | `verify` | invariant violations (empty when consistent) |

use serde::Serialize;
use shared::order::{
    CommandError, CommandErrorCode, CommandResponse, LedgerCommand, LedgerCommandPayload,
};
use std::io::{self, BufRead, Write};

use crate::ledger::CafeLedger;

/// Counters for one console run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSummary {
    /// Commands that reached the ledger
    pub commands: usize,
    /// Commands the ledger rejected or could not parse
    pub rejected: usize,
    /// Listing/query lines
    pub queries: usize,
}

/// Serve requests from `input` until EOF
pub fn run_console(
    ledger: &mut CafeLedger,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<ConsoleSummary> {
    let mut summary = ConsoleSummary::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "tables" => write_json(&mut output, ledger.list_tables())?,
            "orders" => write_json(&mut output, ledger.list_pending_orders())?,
            "menu" => write_json(&mut output, ledger.menu())?,
            "events" => write_json(&mut output, ledger.events())?,
            "verify" => write_json(&mut output, &ledger.verify())?,
            _ if line == "bill" || line.starts_with("bill ") => {
                let response = match parse_bill(line) {
                    Ok(table_id) => match ledger.bill(table_id) {
                        Ok(bill) => {
                            write_json(&mut output, &bill)?;
                            summary.queries += 1;
                            continue;
                        }
                        Err(err) => CommandResponse::error(String::new(), err.into()),
                    },
                    Err(response) => response,
                };
                summary.rejected += 1;
                write_json(&mut output, &response)?;
                continue;
            }
            _ => {
                let response = match parse_command(line) {
                    Ok(cmd) => {
                        summary.commands += 1;
                        ledger.execute_command(cmd)
                    }
                    Err(response) => response,
                };
                if !response.success {
                    summary.rejected += 1;
                }
                write_json(&mut output, &response)?;
                continue;
            }
        }
        summary.queries += 1;
    }

    output.flush()?;
    tracing::info!(
        commands = summary.commands,
        rejected = summary.rejected,
        queries = summary.queries,
        "Console input closed"
    );
    Ok(summary)
}

/// Table id of a `bill <table_id>` line
fn parse_bill(line: &str) -> Result<i64, CommandResponse> {
    line["bill".len()..]
        .trim()
        .parse()
        .map_err(|_| invalid_request(format!("Expected 'bill <table_id>', got '{}'", line)))
}

/// Parse a full command envelope, or a bare payload that gets a fresh envelope
fn parse_command(line: &str) -> Result<LedgerCommand, CommandResponse> {
    match serde_json::from_str::<LedgerCommand>(line) {
        Ok(cmd) => Ok(cmd),
        Err(envelope_err) => match serde_json::from_str::<LedgerCommandPayload>(line) {
            Ok(payload) => Ok(LedgerCommand::new(payload)),
            Err(_) => {
                tracing::warn!(error = %envelope_err, "Unparseable console input");
                Err(invalid_request(format!("Invalid command: {}", envelope_err)))
            }
        },
    }
}

fn invalid_request(message: String) -> CommandResponse {
    CommandResponse::error(
        String::new(),
        CommandError::new(CommandErrorCode::InvalidRequest, message),
    )
}

fn write_json<T: Serialize + ?Sized>(output: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *output, value)?;
    output.write_all(b"\n")
}
