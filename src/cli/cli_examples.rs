use super::cli_main::{get_user_input, prompt};
use crate::Examples::stoichiometry_examples::stoich_examples;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Formulas and molar masses");
        println!("2. Balancing reactions");
        println!("3. Quantity conversions");
        println!("4. Session with saved settings");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => stoich_examples(0),
            "2" => stoich_examples(1),
            "3" => stoich_examples(2),
            "4" => stoich_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
