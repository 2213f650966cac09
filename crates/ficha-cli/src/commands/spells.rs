use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ficha_core::SpellCircle;
use ficha_mechanics::{ChannelActions, CharacterSheet, RulesConfig, spell_circle_cost};

pub fn run(file: &Path, channel: Option<u8>) -> Result<(), String> {
    let character = super::load_character(file)?;
    let sheet = CharacterSheet::new(&character, RulesConfig::default());
    let mut pools = sheet.spell_pools();

    println!("  {}", character.name.bold());
    println!("  power per round: {}", sheet.power_per_round());
    if let Some(actions) = channel {
        let actions = ChannelActions::try_from(actions).map_err(|e| e.to_string())?;
        let gained = pools.channel(actions);
        println!("  channeled: +{gained}");
    }
    println!("  {}", pools.power_points);
    println!("  {}", pools.spell_points);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Circle", "Cost", "Castable", "Known"]);
    for circle in SpellCircle::all() {
        let castable = if pools.can_cast(circle) {
            "yes".green().to_string()
        } else {
            "no".red().to_string()
        };
        let known = character
            .spellcasting
            .known_spells
            .iter()
            .filter(|s| s.circle == circle)
            .count();
        table.add_row(vec![
            circle.to_string(),
            spell_circle_cost(circle).to_string(),
            castable,
            known.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
