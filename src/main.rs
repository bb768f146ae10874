mod assets;
mod catalog;
mod config;
mod error;
mod nav;
mod ui;

use config::Config;
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1)).unwrap_or_else(|e| {
        log::warn!("{e}; following the system theme");
        Config::default()
    });
    let options = config.native_options();
    let title = config.title.clone();
    log::info!("starting {title}");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
