use StoichCalc::cli::cli_main::run_interactive_menu;
use StoichCalc::settings::SettingsManager;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    let manager = SettingsManager::new();
    if let Err(e) = TermLogger::init(
        manager.settings().log_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger is not available: {}", e);
    }
    run_interactive_menu(manager);
}
