use anyhow::Context;

mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;


use crate::app::App;
use crate::domain::entities::page::PageButtonKind;

const PAGE_SIZE: usize = 5;
const DATA_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("{err:#}");
    }
    launch();
}

fn init_logging() -> anyhow::Result<()> {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    dioxus::logger::init(level).context("failed to install log subscriber")
}

#[cfg(feature = "desktop")]
fn launch() {
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Admin UI")),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}

fn root_container_style() -> &'static str {
    "font-family: sans-serif; padding: 12px; background: #fff; min-height: 100vh; display: flex; flex-direction: column; gap: 12px;"
}

fn toolbar_style() -> &'static str {
    "display: flex; gap: 8px; align-items: center; position: sticky; top: 0; background: #fff; z-index: 900; padding: 8px 0;"
}

fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f5f5f5; border: 1px solid #bbb; padding: 6px; text-align: left;"
}

fn table_cell_style(clickable: bool) -> String {
    format!(
        "border: 1px solid #bbb; padding: 4px;{}",
        if clickable {
            " cursor: pointer; background: #fffbe6;"
        } else {
            ""
        }
    )
}

fn row_style(selected: bool) -> &'static str {
    if selected {
        "background: #eef4ff;"
    } else {
        ""
    }
}

fn pagination_style() -> &'static str {
    "display: flex; gap: 4px; justify-content: center; flex-wrap: wrap;"
}

fn page_button_style(is_current: bool) -> &'static str {
    if is_current {
        "padding: 4px 10px; border: 1px solid #3366cc; background: #3366cc; color: #fff; border-radius: 4px;"
    } else {
        "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 4px;"
    }
}

fn page_button_class(kind: PageButtonKind) -> String {
    match kind {
        PageButtonKind::First => "first-page".to_string(),
        PageButtonKind::Previous => "previous-page".to_string(),
        PageButtonKind::Number(number) => format!("page-{number}"),
        PageButtonKind::Next => "next-page".to_string(),
        PageButtonKind::Last => "last-page".to_string(),
    }
}
