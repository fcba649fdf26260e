use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;
use serde::Serializer;

use jobscope_insights::panel::AxisSpec;
use jobscope_insights::panel::ChartKind;
use jobscope_insights::panel::LegendSpec;
use jobscope_insights::panel::PanelSpec;
use jobscope_insights::panel::Rgb;
use jobscope_insights::panel::TooltipSpec;
use jobscope_insights::series::ChartSeries;

/// The configuration of one chart, shaped exactly like the configuration
/// object that Chart.js expects as the second argument of `new Chart(...)`.
#[derive(Serialize, Debug)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    kind: Kind,
    data: ChartData,
    options: Options,
}

impl ChartConfig {
    pub fn new(panel: &PanelSpec, series: &ChartSeries) -> ChartConfig {
        Self {
            kind: Kind::new(panel.kind),
            data: ChartData::new(panel, series),
            options: Options::new(panel),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Bar,
    Pie,
    Doughnut,
}

impl Kind {
    fn new(kind: ChartKind) -> Kind {
        match kind {
            // Chart.js has no horizontal bar kind; it draws a bar chart
            // with the index axis flipped to "y".
            ChartKind::Bar | ChartKind::HorizontalBar => Kind::Bar,
            ChartKind::Pie => Kind::Pie,
            ChartKind::Doughnut => Kind::Doughnut,
        }
    }
}

#[derive(Serialize, Debug)]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

impl ChartData {
    fn new(panel: &PanelSpec, series: &ChartSeries) -> ChartData {
        Self {
            labels: series.labels.clone(),
            datasets: vec![Dataset::new(panel, series)],
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    label: String,
    data: Vec<f64>,
    background_color: Paint,
    border_color: Paint,
    border_width: u32,
}

impl Dataset {
    const BORDER_WIDTH: u32 = 1;

    fn new(panel: &PanelSpec, series: &ChartSeries) -> Dataset {
        Self {
            label: panel.title.to_owned(),
            data: series.values.clone(),
            background_color: Paint::fill(panel.palette),
            border_color: Paint::border(panel.palette),
            border_width: Self::BORDER_WIDTH,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Options {
    responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    index_axis: Option<IndexAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugins: Option<Plugins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scales: Option<Scales>,
}

impl Options {
    fn new(panel: &PanelSpec) -> Options {
        let index_axis = match panel.kind {
            ChartKind::HorizontalBar => Some(IndexAxis::Y),
            _ => None,
        };

        Self {
            responsive: true,
            index_axis,
            plugins: Plugins::new(panel),
            scales: Scales::new(panel),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
enum IndexAxis {
    Y,
}

#[derive(Serialize, Debug)]
struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
}

impl Plugins {
    fn new(panel: &PanelSpec) -> Option<Plugins> {
        let legend = panel.legend.map(Legend::new);
        let tooltip = match panel.tooltip {
            Some(TooltipSpec::Enabled) => Some(Tooltip { enabled: true }),
            // A formatted tooltip is attached by the chart script,
            // not serialized with the configuration.
            Some(TooltipSpec::Currency { .. }) | None => None,
        };

        if legend.is_none() && tooltip.is_none() {
            None
        } else {
            Some(Self { legend, tooltip })
        }
    }
}

#[derive(Serialize, Debug)]
struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
}

impl Legend {
    fn new(spec: LegendSpec) -> Legend {
        match spec {
            LegendSpec::Shown => Self {
                display: Some(true),
                position: None,
            },
            LegendSpec::Top => Self {
                display: None,
                position: Some(Position::Top),
            },
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
enum Position {
    Top,
}

#[derive(Serialize, Debug)]
struct Tooltip {
    enabled: bool,
}

#[derive(Serialize, Debug)]
struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<Axis>,
}

impl Scales {
    fn new(panel: &PanelSpec) -> Option<Scales> {
        if panel.x_axis.is_none() && panel.y_axis.is_none() {
            return None;
        }

        Some(Self {
            x: panel.x_axis.map(Axis::new),
            y: panel.y_axis.map(Axis::new),
        })
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    begin_at_zero: Option<bool>,
    title: AxisTitle,
}

impl Axis {
    fn new(spec: AxisSpec) -> Axis {
        Self {
            begin_at_zero: spec.begin_at_zero.then_some(true),
            title: AxisTitle {
                display: true,
                text: spec.title.to_owned(),
            },
        }
    }
}

#[derive(Serialize, Debug)]
struct AxisTitle {
    display: bool,
    text: String,
}

/// The paint of the data points of a dataset: a single color paints
/// every data point, a color wheel paints the data points in turn.
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Paint {
    Single(Rgba),
    Wheel(Vec<Rgba>),
}

impl Paint {
    const FILL_ALPHA: f32 = 0.2;
    const BORDER_ALPHA: f32 = 1.0;

    fn fill(palette: &[Rgb]) -> Paint {
        Self::new(palette, Self::FILL_ALPHA)
    }

    fn border(palette: &[Rgb]) -> Paint {
        Self::new(palette, Self::BORDER_ALPHA)
    }

    fn new(palette: &[Rgb], alpha: f32) -> Paint {
        match palette {
            [color] => Paint::Single(Rgba::new(*color, alpha)),
            colors => Paint::Wheel(colors.iter().map(|color| Rgba::new(*color, alpha)).collect()),
        }
    }
}

/// A panel base color rendered at a given opacity, serialized in the
/// CSS `rgba(r, g, b, a)` notation Chart.js expects.
#[derive(Debug, Clone, Copy)]
struct Rgba {
    color: Rgb,
    alpha: f32,
}

impl Rgba {
    fn new(color: Rgb, alpha: f32) -> Rgba {
        Self { color, alpha }
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Rgb(red, green, blue) = self.color;
        let alpha = self.alpha;

        write!(f, "rgba({red}, {green}, {blue}, {alpha})")
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
