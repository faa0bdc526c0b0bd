mod app_state;
mod cli;
mod dialog;
mod logging;

use std::process::ExitCode;
use std::sync::Mutex;

use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use winit::event_loop::EventLoop;

use pipeweaver_common::{HostError, PipeweaverError};
use pipeweaver_config::PipeweaverConfig;
use pipeweaver_host::{command_channel, instance, monitor_daemon, CommandSender, JsonGeometryStore};
use pipeweaver_shell::HostLink;

use app_state::{PipeweaverApp, UserEvent};

fn main() -> ExitCode {
    let args = cli::parse();

    logging::init(args.log_level.as_deref());

    tracing::info!("Pipeweaver v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            dialog::display_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> pipeweaver_common::Result<()> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = pipeweaver_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PipeweaverConfig::default()
    });

    if args.print_config {
        println!("{}", pipeweaver_config::config_to_json(&config));
        return Ok(());
    }

    let socket = instance::socket_path(&config.host.app_name);
    if instance::signal_active_instance(&socket) {
        tracing::info!("Instance already active, exiting");
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("pipeweaver-host")
        .enable_all()
        .build()?;

    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .map_err(|e| PipeweaverError::Window(e.to_string()))?;

    let proxy = Mutex::new(event_loop.create_proxy());
    let (commands, receiver) = command_channel(move || {
        if let Ok(proxy) = proxy.lock() {
            let _ = proxy.send_event(UserEvent::Wake);
        }
    });

    match connect_daemon(&runtime, &config.host.daemon_url, commands.clone()) {
        Ok(()) => {}
        Err(e) if config.host.require_daemon => {
            return Err(PipeweaverError::Other(format!(
                "Cannot start, Pipeweaver is not running ({e})"
            )));
        }
        Err(e) => tracing::warn!("Continuing without daemon: {e}"),
    }

    {
        let _guard = runtime.enter();
        if let Err(e) = instance::spawn_listener(&socket, commands) {
            tracing::warn!("Single-instance listener unavailable: {e}");
        }
    }

    let store = JsonGeometryStore::load(JsonGeometryStore::default_path());
    tracing::debug!(path = %store.path().display(), "geometry store opened");
    let host = HostLink::detached()
        .with_geometry_store(store)
        .with_command_source(receiver);

    let mut app = PipeweaverApp::new(config, host, Some(runtime));

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PipeweaverError::Window(e.to_string()))
}

/// Start the daemon monitor and wait for its first connection attempt.
fn connect_daemon(runtime: &Runtime, url: &str, commands: CommandSender) -> Result<(), HostError> {
    let (ready_tx, ready_rx) = oneshot::channel();
    runtime.spawn(monitor_daemon(url.to_string(), ready_tx, commands));
    runtime.block_on(ready_rx).unwrap_or_else(|_| {
        Err(HostError::Connect(
            "daemon monitor ended before reporting".into(),
        ))
    })
}
