//! List the persona catalogue

use persona_analysis::tables;
use persona_analysis::PersonaDefinition;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{render_rows, OutputFormat};

/// One row of the persona listing
#[derive(Debug, Serialize, Tabled)]
pub struct PersonaRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Color")]
    pub color: String,
    #[tabled(rename = "Traits")]
    pub traits: String,
}

impl From<&PersonaDefinition> for PersonaRow {
    fn from(def: &PersonaDefinition) -> Self {
        Self {
            key: def.key.as_str().to_string(),
            name: def.name.to_string(),
            color: def.color.to_string(),
            traits: def.traits.join(", "),
        }
    }
}

/// Execute the personas command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<PersonaRow> = tables::personas().into_iter().map(PersonaRow::from).collect();
    println!("{}", render_rows(rows, format)?);
    Ok(())
}
