//! Browser Logging
//!
//! Routes `tracing` output to the devtools console, one console call per
//! event at the event's level.

use tracing::Level;
use tracing::Subscriber;
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing::subscriber::set_global_default(subscriber());
}

fn subscriber() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_console_subscriber_stops_at_debug() {
        assert_eq!(subscriber().max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
