//! Colorful console output for solve events.
//!
//! Provides a `tracing` layer that formats the optimizer's events with
//! colors. Available with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the console layer as the global subscriber.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// is honored; optimizer events are shown at INFO by default.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "squadforge_solver=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // Another global subscriber may already be installed.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SquadConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats optimizer events with colors.
pub struct SquadConsoleLayer;

impl<S: Subscriber> Layer<S> for SquadConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("squadforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    engine: Option<String>,
    status: Option<String>,
    competitors: Option<u64>,
    atomic_events: Option<u64>,
    event_count_cap: Option<u64>,
    team_size: Option<u64>,
    nodes: Option<u64>,
    depth: Option<u64>,
    duration_ms: Option<u64>,
    objective: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}").trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "engine" => self.engine = Some(s),
            "status" => self.status = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "engine" => self.engine = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "competitors" => self.competitors = Some(value),
            "atomic_events" => self.atomic_events = Some(value),
            "event_count_cap" => self.event_count_cap = Some(value),
            "team_size" => self.team_size = Some(value),
            "nodes" => self.nodes = Some(value),
            "depth" => self.depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "objective" {
            self.objective = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "incumbent" => format_incumbent(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} competitors ({}), events ({}), team size cap ({}), engine ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Optimizer]".bright_cyan(),
        v.competitors.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.atomic_events.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.event_count_cap.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.engine.as_deref().unwrap_or("unknown").bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("N/A");
    let status = if status == "Optimal" {
        status.bright_green().bold().to_string()
    } else {
        status.yellow().bold().to_string()
    };

    format!(
        "{} {} {} Solving ended: status ({}), score ({}), team size ({}), time spent ({}), nodes ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Optimizer]".bright_cyan(),
        status,
        format_objective(v.objective),
        v.team_size.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en).bright_magenta()
    )
}

fn format_incumbent(v: &EventVisitor) -> String {
    format!(
        "    {} Node {:>7} | depth {:>4} | {}",
        "->".bright_blue(),
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.depth.unwrap_or(0),
        format_objective(v.objective)
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

fn format_objective(objective: Option<f64>) -> String {
    match objective {
        Some(value) if value > 0.0 => format!("{value}").bright_green().to_string(),
        Some(value) if value < 0.0 => format!("{value}").bright_red().to_string(),
        Some(value) => format!("{value}").white().to_string(),
        None => "N/A".white().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("model_built".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_solve_end_mentions_status() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            status: Some("Feasible".to_string()),
            objective: Some(30.0),
            ..EventVisitor::default()
        };
        let output = format_event(&visitor);
        assert!(output.contains("Feasible"));
        assert!(output.contains("30"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
