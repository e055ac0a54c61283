mod app_state;
mod cli;
mod logging;

use winit::event_loop::EventLoop;

use app_state::{ShellApp, ShellEvent};

fn main() {
    // Install panic hook for crash reports
    shellhost_platform::crash_report::install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log = logging::init(args.log_level.as_deref().unwrap_or(logging::DEFAULT_DIRECTIVE));
    tracing::info!("shellhost v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    // Load config, then layer command-line overrides on top
    let mut config = shellhost_config::toml_loader::load_or_default(args.config.as_deref());
    args.startup_overrides().apply(&mut config);

    if args.print_config {
        println!("{}", shellhost_config::config_to_json(&config));
        return;
    }

    if args.log_level.is_none() {
        log.set_directive(&config.logging.level);
    }
    tracing::info!(
        url = %config.startup.url,
        fullscreen = config.startup.fullscreen(),
        "Config loaded"
    );

    // Ensure platform directories exist
    if let Err(e) = shellhost_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("shellhost-worker")
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    // Create event loop and run
    let event_loop = match EventLoop::<ShellEvent>::with_user_event().build() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = ShellApp::new(config, event_loop.create_proxy(), runtime);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
