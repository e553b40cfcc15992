use super::cli_balance::balance_menu;
use super::cli_convert::convert_menu;
use super::cli_examples::examples_menu;
use super::cli_settings::settings_menu;
use crate::session::ReactionSession;
use crate::settings::SettingsManager;
use std::io::{self, BufRead, Write};

pub fn run_interactive_menu(mut manager: SettingsManager) {
    let mut session = ReactionSession::new(manager.settings().clone());
    loop {
        show_main_menu(&session);
        let Some(choice) = get_user_input() else {
            println!("\nGoodbye!");
            break;
        };

        match choice.trim() {
            "1" => balance_menu(&mut session),
            "2" => convert_menu(&session),
            "3" => match session.current() {
                Some(reaction) => reaction.pretty_print(),
                None => println!("No balanced reaction yet."),
            },
            "4" => {
                settings_menu(&mut manager);
                // new tolerances apply to the next balance
                session.settings = manager.settings().clone();
            }
            "5" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Green (\x1b[32m) - current reaction

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu(session: &ReactionSession) {
    println!(
        "\x1b[34m\n Welcome to StoichCalc: balancing of chemical equations\n
    and stoichiometric conversions of masses, moles, solutions and gases \n \x1b[0m"
    );
    if let Some(reaction) = session.current() {
        println!("\x1b[32mCurrent reaction: {}\x1b[0m", reaction.equation_string());
    }
    println!("\x1b[33m1. Balance a reaction\x1b[0m");
    println!("\x1b[33m2. Convert a quantity\x1b[0m");
    println!("\x1b[33m3. Show the current reaction\x1b[0m");
    println!("\x1b[33m4. Settings\x1b[0m");
    println!("\x1b[33m5. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

pub(crate) fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    // a failed flush only delays the prompt
    let _ = io::stdout().flush();
}

/// one line from `reader`, None at end of input or on a read error
pub(crate) fn read_user_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

/// one line from stdin, None when stdin is closed
pub(crate) fn get_user_input() -> Option<String> {
    read_user_line(&mut io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_user_line() {
        let mut input = Cursor::new("1\n\n0");
        assert_eq!(read_user_line(&mut input), Some("1\n".to_string()));
        // an empty line is still an answer
        assert_eq!(read_user_line(&mut input), Some("\n".to_string()));
        assert_eq!(read_user_line(&mut input), Some("0".to_string()));
        assert_eq!(read_user_line(&mut input), None);
    }

    #[test]
    fn test_closed_input_ends_reading() {
        assert_eq!(read_user_line(&mut Cursor::new("")), None);
        assert_eq!(read_user_line(&mut io::empty()), None);
    }
}
