use clap::error::ErrorKind;
use zms_bscv_lookup::utils::logger;
use zms_bscv_lookup::{execute, CliConfig, LookupConfig, LookupError};

fn fail(e: &LookupError) -> ! {
    tracing::debug!("Lookup failed: {} (Category: {:?})", e, e.category());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match CliConfig::try_parse_go_style(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            if let Err(io_err) = e.print() {
                eprintln!("{}: {}", e, io_err);
            }
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match LookupConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", CliConfig::usage());
            std::process::exit(e.exit_code());
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = execute(&config, &mut stdout).await {
        fail(&e);
    }
}
