use std::fs;
use std::path::Path;

use log::info;
use maud::{html, PreEscaped, DOCTYPE};

use super::{Figure, RenderError};
use crate::dataset::LocationSample;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";
const PLOT_DIV_ID: &str = "iss-overhead";

/// Build the figure for `samples` and write it as a standalone HTML page.
pub fn write_report(path: &Path, samples: &[LocationSample], title: &str) -> Result<(), RenderError> {
    let figure = Figure::build(samples, title);
    info!(
        "rendering {} rows across {} frames into {}",
        samples.len(),
        figure.frame_count(),
        path.display()
    );
    let page = render_page(&figure, title)?;
    fs::write(path, page)?;
    Ok(())
}

fn render_page(figure: &Figure, title: &str) -> Result<String, RenderError> {
    let figure_json = serde_json::to_string(figure)?;
    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(PLOTLY_CDN) {}
            }
            body style="margin:0" {
                div id=(PLOT_DIV_ID) style="width:100vw;height:100vh" {}
                script {
                    (PreEscaped(format!("Plotly.newPlot({PLOT_DIV_ID:?}, {figure_json});")))
                }
            }
        }
    };
    Ok(markup.into_string())
}
