//! The static description of the four insight panels.
//!
//! A panel ties one insights endpoint to one chart: which fields to project
//! out of the records, which canvas the chart binds to, and the fixed visual
//! configuration the chart is drawn with. The four panels are constants;
//! nothing about them changes at run time.

use crate::series::ChartSeries;

/// The set of panels a dashboard is generated from, in page order.
pub const PANELS: [PanelSpec; 4] = [SKILL_DEMAND, TOP_COMPANIES, JOB_DISTRIBUTION, AVERAGE_SALARY];

/// The skill demand panel: a bar chart of the most requested skills.
pub const SKILL_DEMAND: PanelSpec = PanelSpec {
    name: "skill demand",
    endpoint: "/api/skill-demand",
    label_field: "skill",
    value_field: "demand",
    canvas_id: "skillDemandChart",
    title: "Top Skills in Demand",
    kind: ChartKind::Bar,
    palette: &[Rgb(75, 192, 192)],
    x_axis: Some(AxisSpec {
        title: "Skills",
        begin_at_zero: false,
    }),
    y_axis: Some(AxisSpec {
        title: "Number of Jobs",
        begin_at_zero: true,
    }),
    legend: Some(LegendSpec::Shown),
    tooltip: Some(TooltipSpec::Enabled),
};

/// The top companies panel: a horizontal bar chart of the companies
/// with the most job postings.
pub const TOP_COMPANIES: PanelSpec = PanelSpec {
    name: "top companies",
    endpoint: "/api/top-companies",
    label_field: "company",
    value_field: "job_count",
    canvas_id: "topCompaniesChart",
    title: "Top Companies with Most Job Postings",
    kind: ChartKind::HorizontalBar,
    palette: &[Rgb(153, 102, 255)],
    x_axis: Some(AxisSpec {
        title: "Number of Jobs",
        begin_at_zero: true,
    }),
    y_axis: Some(AxisSpec {
        title: "Companies",
        begin_at_zero: false,
    }),
    legend: None,
    tooltip: None,
};

/// The job distribution panel: a pie chart of postings per role.
pub const JOB_DISTRIBUTION: PanelSpec = PanelSpec {
    name: "job distribution",
    endpoint: "/api/job-distribution",
    label_field: "role",
    value_field: "count",
    canvas_id: "jobDistributionChart",
    title: "Job Distribution by Role",
    kind: ChartKind::Pie,
    palette: &[
        Rgb(255, 99, 132),
        Rgb(54, 162, 235),
        Rgb(255, 206, 86),
        Rgb(75, 192, 192),
        Rgb(153, 102, 255),
        Rgb(255, 159, 64),
    ],
    x_axis: None,
    y_axis: None,
    legend: Some(LegendSpec::Top),
    tooltip: Some(TooltipSpec::Enabled),
};

/// The average salary panel: a doughnut chart of the average salary
/// per work type.
pub const AVERAGE_SALARY: PanelSpec = PanelSpec {
    name: "average salary",
    endpoint: "/api/average-salary",
    label_field: "work_type",
    value_field: "average_salary",
    canvas_id: "averageSalaryChart",
    title: "Average Salary by Work Type",
    kind: ChartKind::Doughnut,
    palette: &[
        Rgb(54, 162, 235),
        Rgb(255, 206, 86),
        Rgb(75, 192, 192),
        Rgb(153, 102, 255),
        Rgb(255, 159, 64),
    ],
    x_axis: None,
    y_axis: None,
    legend: Some(LegendSpec::Top),
    tooltip: Some(TooltipSpec::Currency {
        label: "Average Salary",
    }),
};

/// The static configuration of one insight panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelSpec {
    /// A short panel name used in diagnostic messages.
    pub name: &'static str,

    /// The resource path of the insights endpoint, relative to the base URL.
    pub endpoint: &'static str,

    /// The record field projected into the chart labels.
    pub label_field: &'static str,

    /// The record field projected into the chart values.
    pub value_field: &'static str,

    /// The id of the canvas element the chart binds to.
    pub canvas_id: &'static str,

    /// The panel heading, also used as the dataset label.
    pub title: &'static str,

    /// The kind of chart the panel is drawn as.
    pub kind: ChartKind,

    /// The base colors of the dataset. A single color paints every data
    /// point; several colors paint the data points in turn.
    pub palette: &'static [Rgb],

    /// The horizontal axis, for chart kinds that have axes.
    pub x_axis: Option<AxisSpec>,

    /// The vertical axis, for chart kinds that have axes.
    pub y_axis: Option<AxisSpec>,

    /// The legend configuration; `None` leaves the library default.
    pub legend: Option<LegendSpec>,

    /// The tooltip configuration; `None` leaves the library default.
    pub tooltip: Option<TooltipSpec>,
}

impl PanelSpec {
    /// Precomputes the tooltip text for every value of the series,
    /// if the panel formats its tooltips.
    pub fn tooltip_labels(&self, series: &ChartSeries) -> Option<Vec<String>> {
        match self.tooltip {
            Some(TooltipSpec::Currency { label }) => Some(
                series
                    .values
                    .iter()
                    .map(|value| format_currency(label, *value))
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// The kinds of charts the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bars.
    Bar,
    /// Horizontal bars; the value axis is the horizontal one.
    HorizontalBar,
    /// A pie chart.
    Pie,
    /// A doughnut chart.
    Doughnut,
}

/// A base color of a panel palette. The rendering applies the alpha
/// channel: translucent for fills, opaque for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The configuration of one chart axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisSpec {
    /// The axis title.
    pub title: &'static str,

    /// Whether the axis scale starts at zero instead of the data minimum.
    pub begin_at_zero: bool,
}

/// The legend configuration of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendSpec {
    /// The legend is shown in its default place.
    Shown,
    /// The legend is shown at the top of the chart.
    Top,
}

/// The tooltip configuration of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipSpec {
    /// The library's default tooltip.
    Enabled,
    /// Every value is rendered as a two-decimal dollar amount,
    /// prefixed with the given label.
    Currency {
        /// The text put in front of the formatted amount.
        label: &'static str,
    },
}

fn format_currency(label: &str, value: f64) -> String {
    format!("{label}: ${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_tooltips_format_values_with_two_decimals() {
        let series = ChartSeries {
            labels: vec![String::from("Remote")],
            values: vec![93500.5],
        };

        let labels = AVERAGE_SALARY
            .tooltip_labels(&series)
            .expect("the average salary panel formats its tooltips");

        assert_eq!(labels, vec![String::from("Average Salary: $93500.50")]);
    }

    #[test]
    fn currency_tooltips_are_aligned_with_the_values() {
        let series = ChartSeries {
            labels: vec![String::from("Remote"), String::from("On-site")],
            values: vec![100.0, 75.25],
        };

        let labels = AVERAGE_SALARY.tooltip_labels(&series).unwrap();

        assert_eq!(
            labels,
            vec![
                String::from("Average Salary: $100.00"),
                String::from("Average Salary: $75.25"),
            ]
        );
    }

    #[test]
    fn default_tooltips_precompute_no_labels() {
        let series = ChartSeries {
            labels: vec![String::from("Python")],
            values: vec![42.0],
        };

        assert_eq!(SKILL_DEMAND.tooltip_labels(&series), None);
        assert_eq!(TOP_COMPANIES.tooltip_labels(&series), None);
    }

    #[test]
    fn panels_target_distinct_endpoints_and_canvases() {
        for (i, panel) in PANELS.iter().enumerate() {
            for other in &PANELS[i + 1..] {
                assert_ne!(panel.endpoint, other.endpoint);
                assert_ne!(panel.canvas_id, other.canvas_id);
            }
        }
    }

    #[test]
    fn axes_are_configured_only_for_bar_charts() {
        for panel in &PANELS {
            match panel.kind {
                ChartKind::Bar | ChartKind::HorizontalBar => {
                    assert!(panel.x_axis.is_some() && panel.y_axis.is_some())
                }
                ChartKind::Pie | ChartKind::Doughnut => {
                    assert!(panel.x_axis.is_none() && panel.y_axis.is_none())
                }
            }
        }
    }
}
