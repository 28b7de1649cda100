use colored::Colorize;

use crate::core::dispatch::EquationKind;

/// One line per kind: tag and status.
pub fn kinds_table() -> String {
    EquationKind::ALL
        .into_iter()
        .map(|k| {
            let status = if k.is_implemented() {
                "implemented".green().to_string()
            } else {
                "not implemented".dimmed().to_string()
            };
            format!("{:<14} {}", k.tag(), status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", kinds_table());
    Ok(())
}
