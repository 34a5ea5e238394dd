use crate::cli::{FilterArgs, SourceArgs};
use crate::commands::source::load_calls;
use callsight_metrics::{
    compare_to_benchmark, compute_report, CallSet, DayQuality, MetricsReport, ReportOptions,
    SentimentBucket,
};

/// Industry reference FCR rate
const FCR_BENCHMARK_PCT: f64 = 70.0;

pub fn run(source: &SourceArgs, filter: &FilterArgs, top: usize, json: bool) -> anyhow::Result<()> {
    let calls = load_calls(source)?;
    let set = CallSet::screen(&calls, &filter.to_filter());
    let options = ReportOptions {
        top_n: top,
        ..ReportOptions::default()
    };
    let report = compute_report(&set, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", build_report(&report));
    }
    Ok(())
}

fn build_report(report: &MetricsReport) -> String {
    let mut sections = Vec::new();

    let scope = &report.scope;
    let mut header = format!(
        "Call Analytics Report\n=====================\nScope: {} ({} calls)",
        scope.filter, scope.call_count
    );
    if scope.excluded > 0 {
        header.push_str(&format!("\nExcluded inconsistent calls: {}", scope.excluded));
    }
    sections.push(header);

    if scope.call_count == 0 {
        sections.push("\nNo calls match the filter: insufficient data.".to_string());
        return sections.join("\n");
    }

    let mut kpis = vec!["\nKey Metrics\n-----------".to_string()];
    if let Some(aes) = &report.aes {
        kpis.push(format!(
            "AES: {:.1} (min {:.1}, max {:.1})",
            aes.mean, aes.min, aes.max
        ));
    }
    if let Some(fcr) = &report.fcr {
        let status = compare_to_benchmark(fcr.pct(), FCR_BENCHMARK_PCT, true);
        kpis.push(format!(
            "FCR: {:.1}% ({}/{}) [{}]",
            fcr.pct(),
            fcr.fcr_calls,
            fcr.scope.call_count,
            status.label()
        ));
    }
    match &report.epr {
        Some(epr) => kpis.push(format!(
            "EPR: {:.1}% ({} of {} at-risk calls not escalated)",
            epr.rate * 100.0,
            epr.prevented,
            epr.at_risk
        )),
        None => kpis.push("EPR: insufficient data".to_string()),
    }
    if let Some(aht) = &report.aht {
        let status = compare_to_benchmark(aht.mean_secs, aht.target_secs, false);
        kpis.push(format!(
            "AHT: {:.1} min (target {:.1} min, {:+.1}%) [{}]",
            aht.mean_minutes(),
            aht.target_secs / 60.0,
            aht.variance_pct(),
            status.label()
        ));
    }
    sections.push(kpis.join("\n"));

    if let Some(compliance) = &report.compliance {
        let mut lines = vec![
            "\nCompliance\n----------".to_string(),
            format!("Mean score: {:.1}%", compliance.mean_score),
            format!(
                "Risk levels: low {} | medium {} | high {}",
                compliance.low_risk, compliance.medium_risk, compliance.high_risk
            ),
            format!(
                "Critical violations: {} calls ({:.1}%)",
                compliance.critical_violation_calls,
                compliance.critical_violation_pct()
            ),
        ];
        if let Some(top) = &report.top_failures {
            for (rank, item) in top.items.iter().enumerate() {
                lines.push(format!(
                    "  {}. {:<26} {:>4} ({:.1}%)",
                    rank + 1,
                    item.item.as_str(),
                    item.failures,
                    item.failure_pct
                ));
            }
        }
        sections.push(lines.join("\n"));
    }

    if let Some(epr) = &report.epr {
        if !epr.reasons.is_empty() {
            let mut lines = vec!["\nEscalation Reasons\n------------------".to_string()];
            for reason in &epr.reasons {
                lines.push(format!(
                    "  {:<18} {:>4} ({:.1}%)",
                    reason.reason.as_str(),
                    reason.count,
                    reason.pct
                ));
            }
            sections.push(lines.join("\n"));
        }
    }

    if let Some(tre) = &report.tre {
        let mut lines = vec![
            "\nTopic Resolution Efficiency\n---------------------------".to_string(),
        ];
        for t in &tre.topics {
            lines.push(format!(
                "  {:<13} {:>4} calls  AHT {:>6.1}s / {:>5.0}s  eff {:>5.1}%  resolved {:>5.1}%  {}",
                t.topic.as_str(),
                t.calls,
                t.aht_secs,
                t.benchmark_secs,
                t.efficiency,
                t.resolution_pct,
                t.status.label()
            ));
        }
        sections.push(lines.join("\n"));
    }

    if let Some(matrix) = &report.sentiment_matrix {
        let mut lines = vec![
            "\nSentiment Transitions (rows: start, row %)\n------------------------------------------"
                .to_string(),
            format!("  {:<8} {:>8} {:>8} {:>8}", "", "Neg", "Neutral", "Pos"),
        ];
        for from in SentimentBucket::ALL {
            let cells: Vec<String> = SentimentBucket::ALL
                .into_iter()
                .map(|to| match matrix.row_pct(from, to) {
                    Some(pct) => format!("{:>7.1}%", pct),
                    None => format!("{:>8}", "-"),
                })
                .collect();
            lines.push(format!("  {:<8} {}", from.label(), cells.join(" ")));
        }
        if let Some(kpis) = &report.sentiment_kpis {
            lines.push(format!(
                "Improving {:.1}% | Stable {:.1}% | Deteriorating {:.1}%",
                kpis.improving_pct, kpis.stable_pct, kpis.deteriorating_pct
            ));
        }
        sections.push(lines.join("\n"));
    }

    if let Some(trend) = &report.quality_trend {
        let mut lines = vec![
            "\nDaily Quality Trend\n-------------------".to_string(),
            format!(
                "  {:<10} {:>5} {:>9} {:>7} {:>8} {:>5} {:>5}",
                "date", "calls", "listening", "empathy", "solution", "tone", "AES"
            ),
        ];
        for day in &trend.days {
            match &day.quality {
                DayQuality::Measured(q) => lines.push(format!(
                    "  {:<10} {:>5} {:>9.1} {:>7.1} {:>8.1} {:>5.1} {:>5.1}",
                    day.date.to_string(),
                    q.calls,
                    q.active_listening,
                    q.empathy,
                    q.solution,
                    q.professional_tone,
                    q.aes
                )),
                DayQuality::NoData => lines.push(format!("  {:<10} no data", day.date.to_string())),
            }
        }
        sections.push(lines.join("\n"));
    }

    if let Some(pareto) = &report.pareto {
        let mut lines = vec!["\nVolume Pareto\n-------------".to_string()];
        for (i, entry) in pareto.entries.iter().enumerate() {
            let marker = if i < pareto.vital_few { "*" } else { " " };
            lines.push(format!(
                "{} {:<13} {:>4} ({:>5.1}%)  cumulative {:>5.1}%",
                marker,
                entry.topic.as_str(),
                entry.calls,
                entry.share_pct,
                entry.cumulative_pct
            ));
        }
        sections.push(lines.join("\n"));
    }

    if let Some(sales) = &report.sales {
        sections.push(format!(
            "\nSales\n-----\nOpportunities: {} | won {} ({:.1}%) | value {:.2} EUR",
            sales.opportunities,
            sales.won,
            sales.conversion_rate * 100.0,
            sales.won_value_eur
        ));
    }

    if !report.unavailable.is_empty() {
        let mut lines = vec!["\nUnavailable\n-----------".to_string()];
        lines.extend(report.unavailable.iter().map(|u| format!("  {u}")));
        sections.push(lines.join("\n"));
    }

    sections.join("\n")
}
