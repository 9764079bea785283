mod accelerator;
mod app;
mod config;
mod error;
mod event;
mod logging;
mod ui;

use std::io;

use app::App;
use config::SimConfig;
use event::EventHandler;

fn main() -> error::Result<()> {
    let config = SimConfig::default();
    if let Err(e) = logging::init(config.log_level) {
        eprintln!("logger unavailable: {}", e);
    }

    let stdin = io::stdin();
    let mut events = EventHandler::new(stdin.lock());
    let mut stdout = io::stdout().lock();

    let mut app = App::new(&config);
    app.run(&mut events, &mut stdout)
}
