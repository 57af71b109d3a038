//! metasniff CLI
//!
//! Prints the extracted metadata of each document as indented JSON.
//! `-` reads a document from stdin; no arguments means nothing to do.

use anyhow::{bail, Context, Result};
use metasniff::{parse_reader, PageInfo};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::env;
use std::io;

fn main() -> Result<()> {
    for arg in env::args().skip(1) {
        if arg != "-" {
            bail!("fetching {arg:?} is not implemented; pipe the document to `metasniff -`");
        }
        let info = parse_reader(io::stdin().lock()).context("failed to parse document from stdin")?;
        println!("{}", render(&info)?);
    }

    Ok(())
}

/// JSON with four-space indentation, fields in declaration order.
fn render(info: &PageInfo) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    info.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
