//! Defines the on-disk layout of the generated dashboard.

use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use jobscope_insights::panel::PANELS;
use jobscope_insights::panel::PanelSpec;
use jobscope_insights::series::ChartSeries;

use crate::error::Result;
use crate::script::ChartScript;
use crate::template::Context;
use crate::template::Template;

/// The generated dashboard directory is structured as follows:
///
/// ./dashboard/index.html
///
/// ./dashboard/charts/skillDemandChart.js
/// ./dashboard/charts/topCompaniesChart.js
/// ./dashboard/charts/...
///
/// The __index__ file is the page hosting one named canvas per panel.
/// The __charts__ directory holds one generated chart script per panel,
/// each binding its chart configuration to its canvas. A panel whose
/// script is missing leaves its canvas blank; the page and the other
/// panels are unaffected.
#[derive(Debug, Clone)]
pub struct DashboardLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
    charts_path: PathBuf,
}

impl DashboardLayout {
    const MAIN_DIR_NAME: &str = "dashboard";
    pub(crate) const CHARTS_DIR_NAME: &str = "charts";
    const INDEX_FILE_NAME: &str = "index.html";

    /// Creates the dashboard directories under the given path.
    ///
    /// Rendering into a path that already holds a generated dashboard
    /// overwrites the previous one.
    pub fn init(path: &Path) -> Result<DashboardLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let charts_path = root_path.join(Self::CHARTS_DIR_NAME);

        fs::create_dir_all(&charts_path)?;

        Ok(Self {
            root_path,
            index_file_path,
            charts_path,
        })
    }

    /// The root directory of the generated dashboard.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Renders the dashboard page: one heading, canvas, and script
    /// include per panel, in page order.
    pub fn render_index(&self, title: &str) -> Result<()> {
        let context = Context::new(title, &PANELS);
        let template = Template::new(&self.index_file_path);

        template.render(&context)
    }

    /// Writes the chart script of the given panel.
    pub fn render_chart(&self, panel: &PanelSpec, series: &ChartSeries) -> Result<()> {
        let path = self.chart_script_path(panel);
        let mut file = File::create(path)?;

        ChartScript::new(panel, series).write(&mut file)
    }

    fn chart_script_path(&self, panel: &PanelSpec) -> PathBuf {
        self.charts_path
            .join(format!("{id}.js", id = panel.canvas_id))
    }
}
