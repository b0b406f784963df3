use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use vname::{globalstatus, Error, ToolConfig};


/// Print the id of the Vagrant machine with the given name.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
  /// Name of the machine, as shown by `vagrant global-status`
  name: String,

  /// Vagrant executable to run
  #[arg(
    long,
    env = "VNAME_VAGRANT",
    default_value = vname::config::DEFAULT_TOOL
  )]
  vagrant: String,

  /// Enable debug logging
  #[arg(short, long)]
  debug: bool
}


fn setup_logging(debug: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if debug {
      EnvFilter::new("vname=debug")
    } else {
      EnvFilter::new("vname=warn")
    }
  });

  // stdout carries the result only.
  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
    )
    .init();
}


fn run(cli: &Cli) -> Result<(), Error> {
  let cfg = ToolConfig::default().with_tool(cli.vagrant.as_str());

  let entry = globalstatus::get_entry(&cli.name, &cfg)?;

  let mut stdout = io::stdout();
  write!(stdout, "{}", entry.id())?;
  stdout.flush()?;

  Ok(())
}


fn main() {
  let cli = Cli::parse();

  setup_logging(cli.debug);

  if let Err(e) = run(&cli) {
    eprintln!("vname: {}", e);
    process::exit(1);
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
