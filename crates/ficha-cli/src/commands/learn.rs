use std::path::Path;

use colored::Colorize;
use ficha_core::SpellCircle;
use ficha_mechanics::learning::circle_modifier;
use ficha_mechanics::{LearningInput, spell_learning_chance};

/// Options for the `learn` command.
pub struct LearnArgs {
    pub circle: u8,
    pub ability: Option<String>,
    pub first: bool,
    pub known: i32,
    pub matrix: i32,
    pub other: i32,
}

pub fn run(file: &Path, args: LearnArgs) -> Result<(), String> {
    let character = super::load_character(file)?;
    let circle = SpellCircle::try_from(args.circle).map_err(|e| e.to_string())?;

    let abilities = &character.spellcasting.abilities;
    let ability = match &args.ability {
        Some(id) => abilities
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| format!("unknown spellcasting ability: {id}"))?,
        None => abilities
            .first()
            .ok_or("character has no spellcasting ability")?,
    };

    let base = LearningInput::for_ability(&character, ability, circle);
    let input = LearningInput {
        is_first_spell: base.is_first_spell || args.first,
        known_spells_modifier: args.known,
        matrix_modifier: args.matrix,
        other_modifiers: args.other,
        ..base
    };
    let chance = spell_learning_chance(&input);

    println!("  {} through {}", circle.to_string().bold(), ability.id.dimmed());
    println!("  mental:  {} x 5", input.mental_attribute);
    println!("  skill:   {:+}", input.skill_modifier);
    println!(
        "  circle:  {:+}",
        circle_modifier(input.circle, input.is_first_spell)
    );
    println!("  known:   {:+}", input.known_spells_modifier);
    println!("  matrix:  {:+}", input.matrix_modifier);
    println!("  other:   {:+}", input.other_modifiers);
    println!();
    println!("  chance to learn: {}", format!("{chance}%").bold());
    Ok(())
}
