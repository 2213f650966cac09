use std::path::Path;

use colored::Colorize;
use ficha_mechanics::{CharacterSheet, CheckOutcome, RollHistory, RuleRevision, RulesConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Target;

fn describe(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Pool(result) => {
            let net = format!("{} net", result.net_successes);
            let net = if result.is_success() {
                net.green().bold()
            } else {
                net.red().bold()
            };
            let kept = if result.kept.count() < result.rolls.count() {
                format!(" keep {}", result.kept)
            } else {
                String::new()
            };
            format!(
                "{}{kept} -> {net} ({} success, {} cancel)",
                result.rolls, result.successes, result.cancellations
            )
        }
        CheckOutcome::Flat(result) => {
            let sign = if result.modifier < 0 { "-" } else { "+" };
            format!(
                "[{}] {sign} {} = {}",
                result.roll,
                result.modifier.unsigned_abs(),
                result.total.to_string().bold()
            )
        }
    }
}

pub fn run(
    file: &Path,
    target: &str,
    seed: Option<u64>,
    legacy: bool,
    times: u32,
) -> Result<(), String> {
    let character = super::load_character(file)?;
    let target = Target::parse(&character, target)?;

    let revision = if legacy {
        RuleRevision::Legacy
    } else {
        RuleRevision::Current
    };
    let config = RulesConfig::default().with_revision(revision);
    let sheet = CharacterSheet::new(&character, config);
    let check = target.check(&sheet)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let history = RollHistory::new();
    let label = target.label();

    println!("  {} {}", label.bold(), check.formula_text().dimmed());
    for _ in 0..times.max(1) {
        let outcome = check.resolve_recorded(&label, &mut rng, &config, &history);
        println!("  {}", describe(&outcome));
    }

    if history.len() > 1 {
        println!();
        print!("{}", history.export_markdown());
    }

    Ok(())
}
