use std::io::Write;

use jobscope_insights::panel::PanelSpec;
use jobscope_insights::series::ChartSeries;

use crate::chart::ChartConfig;
use crate::error::Result;

/// The generated script of one panel: the serialized chart configuration
/// and the binding that draws it into the panel's canvas.
///
/// The four generated scripts share the page's global scope, so every
/// identifier is prefixed with the canvas id of its panel.
pub(crate) struct ChartScript<'a> {
    panel: &'a PanelSpec,
    config: ChartConfig,
    tooltips: Option<Vec<String>>,
}

impl<'a> ChartScript<'a> {
    pub(crate) fn new(panel: &'a PanelSpec, series: &ChartSeries) -> ChartScript<'a> {
        Self {
            panel,
            config: ChartConfig::new(panel, series),
            tooltips: panel.tooltip_labels(series),
        }
    }

    pub(crate) fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let canvas_id = self.panel.canvas_id;
        let config = serde_json::to_string(&self.config)?;

        if let Some(tooltips) = &self.tooltips {
            let tooltips = serde_json::to_string(tooltips)?;
            writeln!(writer, "const {canvas_id}Tooltips = {tooltips};")?;
        }

        writeln!(writer, "const {canvas_id}Config = {config};")?;

        if self.tooltips.is_some() {
            writeln!(writer, "{canvas_id}Config.options.plugins ??= {{}};")?;
            writeln!(
                writer,
                "{canvas_id}Config.options.plugins.tooltip = {{ callbacks: {{ label: (context) => {canvas_id}Tooltips[context.dataIndex] }} }};"
            )?;
        }

        writeln!(
            writer,
            "new Chart(document.getElementById(\"{canvas_id}\").getContext(\"2d\"), {canvas_id}Config);"
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use jobscope_insights::panel::AVERAGE_SALARY;
    use jobscope_insights::panel::SKILL_DEMAND;
    use jobscope_insights::panel::TOP_COMPANIES;

    fn script(panel: &PanelSpec, series: &ChartSeries) -> String {
        let mut writer: Cursor<Vec<u8>> = Cursor::new(Vec::new());

        ChartScript::new(panel, series)
            .write(&mut writer)
            .expect("writing into a memory buffer does not fail");

        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn the_script_binds_the_configuration_to_the_panel_canvas() {
        let series = ChartSeries {
            labels: vec![String::from("Python"), String::from("SQL")],
            values: vec![42.0, 17.0],
        };

        let script = script(&SKILL_DEMAND, &series);

        assert!(script.contains("const skillDemandChartConfig = {\"type\":\"bar\","));
        assert!(script.contains("\"labels\":[\"Python\",\"SQL\"]"));
        assert!(script.contains("\"data\":[42.0,17.0]"));
        assert!(script.contains(
            "new Chart(document.getElementById(\"skillDemandChart\").getContext(\"2d\"), skillDemandChartConfig);"
        ));
    }

    #[test]
    fn a_formatting_panel_attaches_its_precomputed_tooltips() {
        let series = ChartSeries {
            labels: vec![String::from("Remote")],
            values: vec![93500.5],
        };

        let script = script(&AVERAGE_SALARY, &series);

        assert!(script.contains(
            "const averageSalaryChartTooltips = [\"Average Salary: $93500.50\"];"
        ));
        assert!(script.contains(
            "averageSalaryChartConfig.options.plugins.tooltip = { callbacks: { label: (context) => averageSalaryChartTooltips[context.dataIndex] } };"
        ));
    }

    #[test]
    fn a_default_tooltip_panel_emits_no_tooltip_identifiers() {
        let series = ChartSeries {
            labels: vec![String::from("Acme")],
            values: vec![120.0],
        };

        let script = script(&TOP_COMPANIES, &series);

        assert!(!script.contains("Tooltips"));
        assert!(!script.contains("callbacks"));
    }

    #[test]
    fn an_empty_series_still_produces_a_binding() {
        let series = ChartSeries {
            labels: Vec::new(),
            values: Vec::new(),
        };

        let script = script(&SKILL_DEMAND, &series);

        assert!(script.contains("\"labels\":[]"));
        assert!(script.contains("\"data\":[]"));
        assert!(script.contains("new Chart("));
    }
}
