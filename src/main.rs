use clap::Parser;
use fib_clock::utils::{logger, validation::Validate};
use fib_clock::{
    spawn_command_reader, CliConfig, ClockEngine, ClockError, ClockFace, DisplayController,
    OutputFormat, OutputTarget, LEGEND,
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fib-clock");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    if config.legend {
        eprintln!("{}\n", LEGEND);
    }

    let mut display = DisplayController::new(config.display_state());
    match config.display_commands() {
        Ok(commands) => display.apply_all(commands),
        Err(e) => fail(&e),
    }

    let clock = match config.clock() {
        Ok(clock) => clock,
        Err(e) => fail(&e),
    };
    let mut engine = ClockEngine::new(ClockFace::default(), clock, config.renderer(), display);
    let output = OutputTarget::new(config.output.clone());

    if !config.watch {
        let result = engine.render_once().and_then(|face| output.write(&face));
        if let Err(e) = result {
            fail(&e);
        }
        return Ok(());
    }

    let clear = config.format == OutputFormat::Text && output.is_stdout();
    let rx = spawn_command_reader(std::io::BufReader::new(std::io::stdin()));

    let result = engine
        .run_watch(config.interval(), None, rx, |face| {
            if clear {
                output.write(&format!("{}{}", CLEAR_SCREEN, face))
            } else {
                output.write(face)
            }
        })
        .await;

    match result {
        Ok(ticks) => tracing::info!("✅ Stopped after {} ticks", ticks),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &ClockError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}
