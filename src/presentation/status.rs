use crate::infrastructure::config;
use crate::state::AppState;
use colored::Colorize;
use std::fmt::Write;

pub fn format_status(state: &AppState) -> String {
    let mut output = String::new();
    let options = state.resolver.options();

    writeln!(output, "{}", "callerid Status".green().bold()).ok();
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━").ok();
    writeln!(
        output,
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    )
    .ok();
    writeln!(output, "Lookup timeout: {} ms", options.timeout.as_millis()).ok();
    writeln!(
        output,
        "Lookup known contacts: {}",
        if options.lookup_known_contacts { "yes" } else { "no" }
    )
    .ok();
    writeln!(
        output,
        "Contact marker suffix: {}",
        state.config.contacts.marker_suffix
    )
    .ok();
    writeln!(output, "Mock lookup delay: {} ms", state.config.lookup.delay_ms).ok();
    writeln!(
        output,
        "Cache: {} entries ({} fresh), TTL {} s, capacity {}",
        state.cache.len(),
        state.cache.fresh_len(),
        state.cache.ttl().as_secs(),
        state
            .cache
            .max_entries()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unbounded".to_string())
    )
    .ok();

    output
}
