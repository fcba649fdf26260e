use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::SecondsFormat;
use chrono::Utc;
use serde::Serialize;
use tinytemplate::TinyTemplate;

use jobscope_insights::panel::PanelSpec;

use crate::error::Result;
use crate::layout::DashboardLayout;

pub(crate) struct Template<'a> {
    path: &'a Path,
}

impl<'a> Template<'a> {
    const INDEX: &'static str = "index";

    pub(crate) fn new(path: &'a Path) -> Template<'a> {
        Self { path }
    }

    pub(crate) fn render(&self, context: &Context) -> Result<()> {
        let mut template = TinyTemplate::new();
        template.add_template(Self::INDEX, include_str!("./template/index.html.tt"))?;

        let text = template.render(Self::INDEX, context)?;

        let mut file = File::create(self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

#[derive(Serialize)]
pub(crate) struct Context {
    title: String,
    generated_at: String,
    panels: Vec<Panel>,
}

impl Context {
    pub(crate) fn new(title: &str, panels: &[PanelSpec]) -> Context {
        Self {
            title: title.to_owned(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            panels: panels.iter().map(Panel::new).collect(),
        }
    }
}

#[derive(Serialize)]
struct Panel {
    heading: String,
    canvas_id: String,
    script: String,
}

impl Panel {
    fn new(panel: &PanelSpec) -> Panel {
        Self {
            heading: panel.title.to_owned(),
            canvas_id: panel.canvas_id.to_owned(),
            script: format!(
                "{charts}/{id}.js",
                charts = DashboardLayout::CHARTS_DIR_NAME,
                id = panel.canvas_id
            ),
        }
    }
}
