use log::info;
use treasure_hunt::app::{init_panic_hook, App, Tui};
use treasure_hunt::config::HuntConfig;
use treasure_hunt::{error, logging, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = HuntConfig::load()?;
    let log_path = logging::init_logging(config.level_filter()?)?;
    info!("logging to {}", log_path.display());

    init_panic_hook();

    let mut app = App::new(&config);
    let mut tui = Tui::new(config.tick_rate)?;
    tui.init()?;

    // Terminal is restored when `tui` drops, also on error
    app.run(&mut tui)
}
