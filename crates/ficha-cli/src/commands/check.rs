use std::path::Path;

use colored::Colorize;
use ficha_mechanics::validate_character;

pub fn run(file: &Path) -> Result<(), String> {
    let character = super::load_character(file)?;
    let issues = validate_character(&character);

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed for '{}'.", character.name);
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
