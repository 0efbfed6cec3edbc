//! Minimal CLI: register data sources and report how they classified.

use evdisp::scene::StaticGeometry;
use evdisp::source::{register_source, Registration};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        log::error!("Usage: evdisp <name=endpoint>...");
        std::process::exit(1);
    }

    let mut failures = 0;
    for arg in &args {
        let Some((name, endpoint)) = arg.split_once('=') else {
            log::error!("malformed argument {arg:?}; expected name=endpoint");
            failures += 1;
            continue;
        };
        match register_source(name, endpoint) {
            Ok(Registration::Ready { geometry, event }) => {
                match StaticGeometry::from_value(geometry) {
                    Ok(statics) => log::info!(
                        "\"{name}\" ({}): {} sensitive plane(s), {} byte(s)",
                        event.access_model,
                        statics.len(),
                        event.data_size.unwrap_or(0),
                    ),
                    Err(e) => {
                        log::error!(
                            "\"{name}\": geometry data rejected: {e}"
                        );
                        failures += 1;
                    }
                }
            }
            Ok(Registration::FollowUp { url, event }) => {
                log::info!(
                    "\"{name}\" is a {} source; first entry at {url}",
                    event.access_model
                );
            }
            Err(e) => {
                log::error!("failed to register \"{name}\": {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
