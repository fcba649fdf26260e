use std::fmt::Display;

use tokio::runtime::Builder;
use tokio::task::LocalSet;

use jobscope_insights::error::SeriesError;
use jobscope_insights::panel::PANELS;
use jobscope_insights::panel::PanelSpec;
use jobscope_insights::series::ChartSeries;
use jobscope_vis::error::VisError;
use jobscope_vis::layout::DashboardLayout;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::fetch::RecordSource;
use crate::fetch::client::StatsClient;
use crate::fetch::error::FetchError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    let layout = DashboardLayout::init(&output_path)?;
    layout.render_index(&args.title)?;

    println!(
        "jobscope fetches the job market statistics from: `{url}` and generates the dashboard in: `{path}`",
        url = args.url,
        path = layout.root_path().display()
    );

    let client = StatsClient::new(args.url);
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(render_panels(&layout, &client));

    Ok(())
}

/// Draws every panel as its own task: the fetches proceed concurrently,
/// while the parsing, projection, and script writing run one at a time
/// on the runtime thread, in no guaranteed order across panels.
///
/// A failed panel is logged and leaves its canvas blank; it does not
/// affect the other panels or the exit code of the command.
async fn render_panels<S>(layout: &DashboardLayout, source: &S)
where
    S: RecordSource + Clone + 'static,
{
    let panels = LocalSet::new();

    for panel in PANELS {
        let layout = layout.clone();
        let source = source.clone();

        panels.spawn_local(async move {
            if let Err(error) = render_panel(&layout, &source, &panel).await {
                log::error!(
                    "rendering the {name} panel failed: {error}",
                    name = panel.name
                );
            }
        });
    }

    panels.await;
}

async fn render_panel<S>(
    layout: &DashboardLayout,
    source: &S,
    panel: &PanelSpec,
) -> Result<(), PanelError>
where
    S: RecordSource,
{
    let records = source.records(panel.endpoint).await?;
    let series = ChartSeries::project(&records, panel.label_field, panel.value_field)?;

    layout.render_chart(panel, &series)?;

    Ok(())
}

/// The error of one panel pipeline. It is converted into a diagnostic
/// log entry at the end of the pipeline and never escalated further.
#[derive(Debug)]
enum PanelError {
    Fetch(FetchError),
    Series(SeriesError),
    Vis(VisError),
}

impl Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelError::Fetch(error) => write!(f, "{error}"),
            PanelError::Series(error) => write!(f, "{error}"),
            PanelError::Vis(error) => write!(f, "{error}"),
        }
    }
}

impl From<FetchError> for PanelError {
    fn from(error: FetchError) -> Self {
        PanelError::Fetch(error)
    }
}

impl From<SeriesError> for PanelError {
    fn from(error: SeriesError) -> Self {
        PanelError::Series(error)
    }
}

impl From<VisError> for PanelError {
    fn from(error: VisError) -> Self {
        PanelError::Vis(error)
    }
}
