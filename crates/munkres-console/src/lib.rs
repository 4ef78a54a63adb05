//! Colorful console output for assignment solves.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: Initial reduction bound
//! - **TRACE**: Individual augmentations and dual updates

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `munkres_solver=info` directive.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let default = "munkres_solver=info"
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(default)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolveConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 __  __             _
|  \/  |_   _ _ __ | | ___ __ ___  ___
| |\/| | | | | '_ \| |/ / '__/ _ \/ __|
| |  | | |_| | | | |   <| | |  __/\__ \
|_|  |_|\__,_|_| |_|_|\_\_|  \___||___/
"#;

    let version_line = format!("          v{} - Optimal Assignment Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolveConsoleLayer;

impl<S: Subscriber> Layer<S> for SolveConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("munkres_solver") && !target.starts_with("munkres::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    objective: Option<String>,
    rows: Option<u64>,
    cols: Option<u64>,
    size: Option<u64>,
    row: Option<u64>,
    col: Option<u64>,
    matched: Option<u64>,
    visited_rows: Option<u64>,
    pairs: Option<u64>,
    augmentations: Option<u64>,
    dual_updates: Option<u64>,
    duration_ms: Option<u64>,
    delta: Option<f64>,
    dual_bound: Option<f64>,
    total: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "objective" => self.objective = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "rows" => self.rows = Some(value),
            "cols" => self.cols = Some(value),
            "size" => self.size = Some(value),
            "row" => self.row = Some(value),
            "col" => self.col = Some(value),
            "matched" => self.matched = Some(value),
            "visited_rows" => self.visited_rows = Some(value),
            "pairs" => self.pairs = Some(value),
            "augmentations" => self.augmentations = Some(value),
            "dual_updates" => self.dual_updates = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "delta" => self.delta = Some(value),
            "dual_bound" => self.dual_bound = Some(value),
            "total" => self.total = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "objective" => self.objective = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "reduction" => format_reduction(v),
        "augment" => format_augment(v, level),
        "dual_update" => format_dual_update(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let rows = v.rows.unwrap_or(0);
    let cols = v.cols.unwrap_or(0);
    let size = v.size.unwrap_or(rows.max(cols));
    let objective = v.objective.as_deref().unwrap_or("minimize");

    let mut output = format!(
        "{} {} Solving │ {} x {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        rows.to_formatted_string(&Locale::en).bright_yellow(),
        cols.to_formatted_string(&Locale::en).bright_yellow(),
        objective.bright_magenta()
    );

    if size != rows || size != cols {
        output.push_str(&format!(
            " │ padded to {}",
            size.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let pairs = v.pairs.unwrap_or(0);
    let augmentations = v.augmentations.unwrap_or(0);
    let dual_updates = v.dual_updates.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let total = format_total(v.total.unwrap_or(0.0));

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} pairs │ {} augmentations │ {} dual updates",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        pairs.to_formatted_string(&Locale::en).white(),
        augmentations.to_formatted_string(&Locale::en).white(),
        dual_updates
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
    );

    // Summary box
    let inner_width: usize = 58;
    let rule = "═".repeat(inner_width);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", rule).bright_cyan().to_string());
    output.push('\n');

    let status_text = "OPTIMAL ASSIGNMENT FOUND";
    let total_pad = inner_width.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_text.bright_green().bold(),
        " ".repeat(total_pad - left_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{}╣", rule).bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Objective:",
        total,
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╚{}╝", rule).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_reduction(v: &EventVisitor) -> String {
    format!(
        "{} {} Initial reduction │ dual bound {}",
        format_elapsed(),
        "▷".bright_blue(),
        format_total(v.dual_bound.unwrap_or(0.0)).white().bold()
    )
}

fn format_augment(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Augment │ row {:>5} → col {:>5} │ {} matched",
        format_elapsed(),
        "✓".bright_green(),
        v.row.unwrap_or(0).to_formatted_string(&Locale::en),
        v.col.unwrap_or(0).to_formatted_string(&Locale::en),
        v.matched
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_dual_update(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Dual update │ row {:>5} │ δ {} │ {} rows in tree",
        format_elapsed(),
        "△".yellow(),
        v.row.unwrap_or(0).to_formatted_string(&Locale::en),
        format_total(v.delta.unwrap_or(0.0)).bright_yellow(),
        v.visited_rows
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Integral values get thousands separators; others print as-is.
fn format_total(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let whole = value.abs() as u64;
        let digits = whole.to_formatted_string(&Locale::en);
        if value < 0.0 {
            format!("-{}", digits)
        } else {
            digits
        }
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(23.0), "23");
        assert_eq!(format_total(1_234_567.0), "1,234,567");
        assert_eq!(format_total(-4200.0), "-4,200");
        assert_eq!(format_total(-7.25), "-7.25");
    }

    #[test]
    fn test_step_events_need_trace_level() {
        let v = EventVisitor {
            event: Some("augment".to_string()),
            row: Some(2),
            col: Some(0),
            matched: Some(3),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("Augment"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_solve_start_mentions_padding() {
        let v = EventVisitor {
            event: Some("solve_start".to_string()),
            rows: Some(2),
            cols: Some(4),
            size: Some(4),
            objective: Some("maximize".to_string()),
            ..EventVisitor::default()
        };
        let output = format_event(&v, Level::INFO);
        assert!(output.contains("padded to"));
        assert!(output.contains("maximize"));
    }
}
