use faro_core::duration;
use faro_core::model::CorpusStatistics;
use faro_core::targets::schema::TargetCatalog;

/// Print the corpus summary in the layout of the original monthly report:
/// per-target second counters, combined downtime, and the secondary
/// downtime share of total time with 4 decimal digits.
pub fn print_summary(stats: &CorpusStatistics, catalog: &TargetCatalog) {
    println!("=== Uptime/Downtime Summary ===\n");

    println!("  {}", catalog.primary);
    println!("    Uptime:   {:>14} s", stats.primary_uptime_seconds);
    println!("    Downtime: {:>14} s", stats.primary_downtime_seconds);
    println!();
    println!("  {}", catalog.secondary);
    println!("    Uptime:   {:>14} s", stats.secondary_uptime_seconds);
    println!("    Downtime: {:>14} s", stats.secondary_downtime_seconds);
    println!();

    let combined_downtime = stats.primary_downtime_seconds + stats.secondary_downtime_seconds;
    println!("  Total time:        {:>14} s", stats.total_seconds);
    println!(
        "  Combined downtime: {:>14} s  ({})",
        combined_downtime,
        duration::to_clock(combined_downtime)
    );
    println!(
        "  Secondary downtime share: {:.4}%",
        stats.secondary_downtime_percent
    );

    if combined_downtime > 0 {
        println!();
        println!(
            "  Combined downtime: {}",
            duration::to_phrase(combined_downtime)
        );
        println!("  Total time:        {}", duration::to_phrase(stats.total_seconds));
    }
}
