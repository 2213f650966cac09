use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ficha_core::SkillId;
use ficha_mechanics::{Aggregate, CharacterSheet, DicePoolSpec, MechResult, RulesConfig};

fn pool_cells(pool: MechResult<DicePoolSpec>) -> (String, String) {
    match pool {
        Ok(spec) => {
            let note = if spec.is_penalty_roll {
                "penalty".to_string()
            } else if spec.is_capped() {
                format!("rolls {}", spec.dice_count)
            } else {
                String::new()
            };
            (spec.formula_text, note)
        }
        Err(e) => ("-".to_string(), e.to_string()),
    }
}

/// e.g. `"overloaded -2, Heavy armor -2, flat +3"`.
fn breakdown(aggregate: &Aggregate) -> String {
    let mut parts: Vec<String> = aggregate
        .contributions
        .iter()
        .map(|c| format!("{} {:+}", c.source, c.dice))
        .collect();
    if aggregate.numeric != 0 {
        parts.push(format!("flat {:+}", aggregate.numeric));
    }
    parts.join(", ")
}

pub fn run(file: &Path) -> Result<(), String> {
    let character = super::load_character(file)?;
    let sheet = CharacterSheet::new(&character, RulesConfig::default());

    println!(
        "  {} [level {}]",
        character.name.bold(),
        character.level.to_string().dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Roll", "Rank", "Pool", "Note"]);

    for skill in &character.skills {
        let mut name = skill.id.to_string();
        if skill.is_signature {
            name.push_str(" *");
        }
        if skill.id == SkillId::Craft
            && let Ok((craft, _)) = sheet.selected_craft()
        {
            name = format!("{name} ({})", craft.name);
        }
        let (pool, mut note) = pool_cells(sheet.skill_pool(skill.id));
        if !matches!(skill.id, SkillId::Craft | SkillId::Luck)
            && let Ok(aggregate) = sheet.modifiers(skill.id)
        {
            let sources = breakdown(&aggregate);
            if note.is_empty() {
                note = sources;
            } else if !sources.is_empty() {
                note = format!("{note}; {sources}");
            }
        }
        table.add_row(vec![name, skill.proficiency.to_string(), pool, note]);
    }

    if character.skill(SkillId::Luck).is_none() {
        let (pool, note) = pool_cells(Ok(sheet.luck_pool()));
        table.add_row(vec!["luck".to_string(), "-".to_string(), pool, note]);
    }

    for ability in &character.spellcasting.abilities {
        let (pool, note) = pool_cells(sheet.casting_pool(&ability.id));
        table.add_row(vec![
            format!("cast ({})", ability.id),
            ability.skill.to_string(),
            pool,
            note,
        ]);
    }

    println!("{table}");
    Ok(())
}
