use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ficha_mechanics::{CharacterSheet, PoolOdds, RulesConfig};

use super::Target;

pub fn run(file: &Path, target: &str) -> Result<(), String> {
    let character = super::load_character(file)?;
    let target = Target::parse(&character, target)?;
    let config = RulesConfig::default();
    let sheet = CharacterSheet::new(&character, config);
    let spec = target.pool(&sheet)?;
    let odds = PoolOdds::for_spec(&spec, &config);

    println!("  {} {}", target.label().bold(), spec.formula_text.dimmed());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Net", "Exactly", "At least"]);
    for (net, p) in odds.distribution.iter().enumerate() {
        table.add_row(vec![
            net.to_string(),
            format!("{:.1}%", p * 100.0),
            format!("{:.1}%", odds.chance_of_at_least(net) * 100.0),
        ]);
    }

    println!("{table}");
    println!();
    println!("  expected net successes: {:.2}", odds.expected_net());
    Ok(())
}
