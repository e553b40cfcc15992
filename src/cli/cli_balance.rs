use super::cli_main::{get_user_input, prompt};
use crate::Stoichiometry::stoich_matrix::{Side, SpeciesInput};
use crate::session::ReactionSession;

// formulas of one side, one per line, until an empty line
fn read_side(side: Side) -> Vec<SpeciesInput> {
    println!(
        "\nEnter {} formulas, one per line (empty line to finish):",
        side
    );
    let mut species = Vec::new();
    loop {
        prompt(&format!("  {} {}: ", side, species.len() + 1));
        let Some(line) = get_user_input() else {
            break;
        };
        let formula = line.trim();
        if formula.is_empty() {
            break;
        }
        species.push(SpeciesInput::new(formula, side));
    }
    species
}

pub fn balance_menu(session: &mut ReactionSession) {
    println!("\n=== Balance a reaction ===");
    let mut inputs = read_side(Side::Reactant);
    inputs.extend(read_side(Side::Product));
    match session.balance(inputs) {
        Ok(reaction) => {
            println!("\x1b[32m{}\x1b[0m", reaction.equation_string());
            reaction.pretty_print();
        }
        Err(e) => println!("\x1b[31mError: {}\x1b[0m", e),
    }
}
