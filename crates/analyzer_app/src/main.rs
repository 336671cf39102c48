mod app;
mod effects;
mod logging;
mod render;
mod timers;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::destination_from_env());

    let options = app::Options::from_args(std::env::args().skip(1))?;
    app::run(options)
}
