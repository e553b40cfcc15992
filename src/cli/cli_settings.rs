use super::cli_main::{get_user_input, prompt};
use crate::settings::SettingsManager;

pub fn settings_menu(manager: &mut SettingsManager) {
    loop {
        let settings = manager.settings();
        println!("\n=== Settings ({}) ===", manager.config_file());
        println!("max denominator: {}", settings.max_denominator);
        println!("epsilon: {:e}", settings.epsilon);
        println!("pivot tolerance: {:e}", settings.pivot_tolerance);
        println!("log level: {}", settings.log_level);
        println!("1. Set max denominator");
        println!("2. Set log level (applies after restart)");
        println!("3. Reset to defaults");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        let res = match choice.trim() {
            "1" => {
                prompt("New max denominator: ");
                match get_user_input().unwrap_or_default().trim().parse::<i64>() {
                    Ok(value) => manager.set_max_denominator(value),
                    Err(e) => {
                        println!("Not an integer: {}", e);
                        continue;
                    }
                }
            }
            "2" => {
                prompt("New log level (off, error, warn, info, debug, trace): ");
                manager.set_log_level(get_user_input().unwrap_or_default().trim())
            }
            "3" => manager.reset_to_defaults(),
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        match res {
            Ok(()) => println!("Saved to {}", manager.config_file()),
            Err(e) => println!("\x1b[31mError: {}\x1b[0m", e),
        }
    }
}
