use crate::error::Result;
use crate::model::{ModelCatalog, ModelEntry};
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
	Selected(&'a ModelEntry),
	Cancelled,
	Invalid,
}

/// Prints the model list and reads one trimmed line of input.
///
/// End of input reads as an empty selection.
pub fn present_menu<R: BufRead, W: Write>(
	catalog: &ModelCatalog,
	input: &mut R,
	out: &mut W,
) -> Result<String> {
	writeln!(out, "Available models:")?;
	for entry in catalog.entries() {
		writeln!(out, "  {}. {} ({})", entry.key, entry.name, entry.size)?;
	}
	writeln!(out)?;
	write!(
		out,
		"Select model to download ({}, or 'q' to quit): ",
		catalog.key_range()
	)?;
	out.flush()?;

	let mut line = String::new();
	input.read_line(&mut line)?;
	Ok(line.trim().to_string())
}

pub fn resolve_selection<'a>(input: &str, catalog: &'a ModelCatalog) -> Selection<'a> {
	if input.eq_ignore_ascii_case("q") {
		return Selection::Cancelled;
	}

	match catalog.get(input) {
		Some(entry) => Selection::Selected(entry),
		None => Selection::Invalid,
	}
}
