use levelog::{Config, Severity};

fn main() -> Result<(), levelog::BuildError> {
    levelog::init(Config::new(Severity::Debug))?;

    levelog::debug!("debug message");
    levelog::info!("info message");
    levelog::warning!("warning message");
    levelog::error!("error message");
    // levelog::critical!("critical message");
    // levelog::fatal!("fatal message");

    levelog::set_level(Severity::Warn);
    levelog::info!("dropped after the threshold change");
    levelog::warning!("still emitted");

    Ok(())
}
