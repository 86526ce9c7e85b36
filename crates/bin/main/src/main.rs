//! Main entrypoint.

mod cli;
mod daemon;
mod oneshot;
mod server;

use clap::Parser as _;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    args.warn_on_extra_args();

    if args.daemon {
        // Printed before the fork, while stdout still reaches the terminal.
        println!("running in daemon mode...");
        daemon::detach()?;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(args))
}

async fn run(args: cli::Args) -> color_eyre::eyre::Result<()> {
    let config = config_load::load(args.config).await?;

    let shutdown = tokio_util::sync::CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                println!("\nreceived interrupt; terminating.");
                shutdown.cancel();
            }
        }
    });

    if args.daemon {
        daemon::run(&config, shutdown).await
    } else {
        tokio::select! {
            result = oneshot::run(&config) => result,
            () = shutdown.cancelled() => Ok(()),
        }
    }
}
