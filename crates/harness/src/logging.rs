use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initializes stderr logging for a suite run.
///
/// Call once from the suite entry point; `RUST_LOG` overrides the
/// verbosity presets.
pub fn init(verbosity: u8) {
	// 0 = errors only (engine protocol noise suppressed)
	// 1 (-v) = harness progress, engine warnings
	// 2+ (-vv) = debug for everything
	let filter = match verbosity {
		0 => "error,playwright=off",
		1 => "info,playwright=warn",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}
