//! tracing subscriber setup for the binary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr fmt subscriber filtered by `directive`.
///
/// `RUST_LOG` wins over the configured directive when set. Calling this twice
/// is harmless; the second install is ignored.
pub fn init_logging(directive: &str) {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(directive))
    .unwrap_or_else(|_| EnvFilter::new("info"));

  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .try_init();
}
