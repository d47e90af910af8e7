/*!
 * Text Reports
 * Tabular rendering of averaged results
 */

use crate::core::limits::REPORT_PRECISION;
use crate::metrics::MetricsRecord;
use crate::runner::RunReport;
use crate::scenario::ScenarioId;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Proc")]
    name: String,
    #[tabled(rename = "Elapsed")]
    elapsed: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "BLOCKED")]
    blocked: String,
    #[tabled(rename = "FirstRun")]
    first_run: String,
}

impl From<&MetricsRecord> for RecordRow {
    fn from(r: &MetricsRecord) -> Self {
        Self {
            name: r.name.to_string(),
            elapsed: fixed(r.elapsed),
            cpu: fixed(r.cpu),
            blocked: fixed(r.blocked),
            first_run: fixed(r.first_run),
        }
    }
}

#[derive(Tabled)]
struct PolicyRow {
    #[tabled(rename = "Policy")]
    policy: &'static str,
    #[tabled(rename = "Turnaround")]
    turnaround: String,
    #[tabled(rename = "Response")]
    response: String,
    #[tabled(rename = "Waiting")]
    waiting: String,
    #[tabled(rename = "Makespan")]
    makespan: String,
    #[tabled(rename = "CPU util")]
    utilization: String,
    #[tabled(rename = "Switches")]
    switches: u64,
}

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Id")]
    id: u8,
    #[tabled(rename = "Processes")]
    processes: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// Three-decimal fixed point
fn fixed(value: f64) -> String {
    format!("{:.*}", REPORT_PRECISION, value)
}

/// Share as a percentage with one decimal
fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Header, per-process table, and summary lines for one report
pub fn render_report(report: &RunReport) -> String {
    let rows: Vec<RecordRow> = report.records.iter().map(RecordRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    let summary = &report.summary;

    let lines = [
        format!(
            "=== Average results (policy: {}, scenario: {}, runs: {}) ===",
            report.policy, report.scenario, report.runs
        ),
        table,
        format!("  mean turnaround: {}", fixed(summary.mean_turnaround)),
        format!("  mean response:   {}", fixed(summary.mean_response)),
        format!("  mean waiting:    {}", fixed(summary.mean_waiting)),
        format!("  makespan:        {}", fixed(summary.makespan)),
    ];
    format!("{}\n", lines.join("\n"))
}

/// One summary row per policy
pub fn render_comparison(scenario: &str, reports: &[RunReport]) -> String {
    let rows: Vec<PolicyRow> = reports
        .iter()
        .map(|r| PolicyRow {
            policy: r.policy.as_str(),
            turnaround: fixed(r.summary.mean_turnaround),
            response: fixed(r.summary.mean_response),
            waiting: fixed(r.summary.mean_waiting),
            makespan: fixed(r.summary.makespan),
            utilization: percent(r.stats.cpu_utilization()),
            switches: r.stats.context_switches,
        })
        .collect();
    let runs = reports.first().map_or(0, |r| r.runs);

    format!(
        "=== Policy comparison (scenario: {scenario}, runs: {runs}) ===\n{}\n",
        Table::new(&rows).with(Style::rounded())
    )
}

/// Listing of the built-in scenarios
pub fn render_scenarios() -> String {
    let rows: Vec<ScenarioRow> = ScenarioId::all()
        .map(|id| ScenarioRow {
            id: id.get(),
            processes: id
                .workload()
                .map(|w| {
                    w.processes()
                        .iter()
                        .map(|p| p.name().as_str())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default(),
            description: id.description(),
        })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{SimConfig, Simulation};
    use crate::scheduler::Policy;

    fn report(policy: Policy) -> RunReport {
        let workload = ScenarioId::new(3).unwrap().workload().unwrap();
        Simulation::new(workload, SimConfig::default())
            .run(policy)
            .unwrap()
    }

    #[test]
    fn test_report_layout() {
        let text = render_report(&report(Policy::Fifo));

        assert!(text.starts_with("=== Average results (policy: fifo, scenario: 3, runs: 3) ===\n"));
        for column in ["Proc", "Elapsed", "CPU", "BLOCKED", "FirstRun"] {
            assert!(text.contains(column), "missing column {column}");
        }
        assert!(text.contains("6.200"));
        assert!(text.contains("11.600"));
        assert!(text.contains("17.800"));
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(fixed(19.700000000000003), "19.700");
        assert_eq!(fixed(0.0), "0.000");
    }

    #[test]
    fn test_comparison_lists_every_policy() {
        let reports: Vec<RunReport> = Policy::ALL.iter().map(|&p| report(p)).collect();
        let text = render_comparison("3", &reports);
        for policy in Policy::ALL {
            assert!(text.contains(policy.as_str()));
        }
        // 15 CPU and 2.8 blocked for every policy
        assert!(text.contains("CPU util"));
        assert!(text.contains("84.3%"));
    }

    #[test]
    fn test_summary_lines_follow_table() {
        let text = render_report(&report(Policy::Fifo));
        let tail: Vec<&str> = text.lines().rev().take(4).collect();
        assert_eq!(
            tail,
            vec![
                "  makespan:        17.800",
                "  mean waiting:    5.933",
                "  mean response:   5.933",
                "  mean turnaround: 11.867",
            ]
        );
    }

    #[test]
    fn test_scenario_listing() {
        let text = render_scenarios();
        assert!(text.contains("A B C D E F"));
    }
}
