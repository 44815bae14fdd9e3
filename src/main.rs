use clap::Parser;
use gwacalc::config::SessionConfig;
use gwacalc::session::{Session, Terminal};
use std::process;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grade and/or GWA calculator", long_about = None)]
struct Cli {
    #[command(flatten)]
    session: SessionConfig,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    info!(policy = ?cli.session.input_policy(), format = %cli.session.format, "Starting session");

    let mut session = Session::new(Terminal::stdio(), cli.session);
    if let Err(e) = session.run() {
        error!("Session aborted: {}", e);
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
