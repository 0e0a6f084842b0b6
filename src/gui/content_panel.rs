use std::collections::HashMap;

use egui::{Align, Color32, Context, Frame, Layout, RichText, ScrollArea, TextureHandle, Ui};
use egui_extras::{Column, TableBuilder};

use super::theme::{INFO_FILL, LABEL_BLUE, SIGNIFICANT_RED, WARNING_AMBER};
use super::utils::{format_file_size, get_file_size};
use crate::output::{
    Block, DatasetView, Download, Fallback, Figure, RasterImage, Rendered, RenderedOutput,
    StatTable,
};
use crate::section::Section;
use crate::table::{ColumnType, Dataset};

/// Central panel showing the output of the latest render pass
pub struct ContentPanel {
    output: Option<RenderedOutput>,
    textures: HashMap<String, TextureHandle>,
}

impl ContentPanel {
    pub fn new() -> Self {
        Self {
            output: None,
            textures: HashMap::new(),
        }
    }

    /// Section of the output currently held, if any
    pub fn section(&self) -> Option<Section> {
        self.output.as_ref().map(|o| o.section)
    }

    /// Replaces the output and uploads its images once
    pub fn load(&mut self, output: RenderedOutput, ctx: &Context) {
        self.textures.clear();
        upload_textures(&output.blocks, ctx, &mut self.textures);
        self.output = Some(output);
    }

    /// Draws the page. Returns a download the user asked for.
    pub fn show(&self, ui: &mut Ui) -> Option<Download> {
        let mut requested = None;
        if let Some(output) = &self.output {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                show_blocks(ui, &output.blocks, &self.textures, &mut requested);
            });
        }
        requested
    }
}

fn upload_textures(blocks: &[Block], ctx: &Context, textures: &mut HashMap<String, TextureHandle>) {
    for block in blocks {
        match block {
            Block::Figure(Figure {
                image: Rendered::Loaded(img),
                ..
            }) => {
                textures.insert(img.name.clone(), load_texture(ctx, img));
            }
            Block::Columns(columns) => {
                for column in columns {
                    upload_textures(column, ctx, textures);
                }
            }
            _ => {}
        }
    }
}

fn load_texture(ctx: &Context, img: &RasterImage) -> TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.pixels.as_raw());
    ctx.load_texture(format!("asset_{}", img.name), color_image, egui::TextureOptions::LINEAR)
}

fn show_blocks(
    ui: &mut Ui,
    blocks: &[Block],
    textures: &HashMap<String, TextureHandle>,
    requested: &mut Option<Download>,
) {
    for block in blocks {
        match block {
            Block::Title(text) => {
                ui.label(RichText::new(text).size(28.0).strong());
                ui.add_space(8.0);
            }
            Block::Heading { level, text } => {
                let size = match *level {
                    0..=2 => 22.0,
                    3 => 18.0,
                    _ => 15.0,
                };
                ui.add_space(6.0);
                ui.label(RichText::new(text).size(size).strong());
            }
            Block::Paragraph(text) => {
                ui.label(text);
            }
            Block::Labeled { label, text } => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(format!("{}:", label)).strong().color(LABEL_BLUE));
                    ui.label(text);
                });
            }
            Block::Bullets(items) => {
                for item in items {
                    ui.label(format!("  • {}", item));
                }
            }
            Block::Links(links) => {
                for link in links {
                    ui.hyperlink_to(&link.label, &link.url);
                }
            }
            Block::Info(text) => {
                Frame::group(ui.style()).fill(INFO_FILL).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(text);
                });
            }
            Block::Table(table) => show_stat_table(ui, table),
            Block::Figure(figure) => show_figure(ui, figure, textures),
            Block::Dataset(view) => show_dataset(ui, view, requested),
            Block::Columns(columns) => {
                ui.columns(columns.len().max(1), |cols| {
                    for (col, blocks) in cols.iter_mut().zip(columns) {
                        show_blocks(col, blocks, textures, requested);
                    }
                });
            }
            Block::Divider => {
                ui.separator();
            }
        }
    }
}

fn show_fallback(ui: &mut Ui, fallback: &Fallback) {
    ui.colored_label(WARNING_AMBER, format!("⚠ {}", fallback));
}

fn show_figure(ui: &mut Ui, figure: &Figure, textures: &HashMap<String, TextureHandle>) {
    match &figure.image {
        Rendered::Loaded(img) => {
            if let Some(texture) = textures.get(&img.name) {
                ui.add(
                    egui::Image::new(texture)
                        .max_width(ui.available_width())
                        .maintain_aspect_ratio(true),
                );
            }
            if let Some(caption) = &figure.caption {
                ui.label(RichText::new(caption).small().weak());
            }
        }
        Rendered::Unavailable(fallback) => show_fallback(ui, fallback),
    }
}

fn show_stat_table(ui: &mut Ui, table: &StatTable) {
    ui.add_space(6.0);
    ui.label(RichText::new(&table.title).strong());
    egui::Grid::new(&table.title)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for header in &table.headers {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for row in &table.rows {
                for (i, cell) in row.iter().enumerate() {
                    let mut text = RichText::new(&cell.text);
                    if i == 0 {
                        text = text.color(LABEL_BLUE);
                    }
                    if cell.significant {
                        text = text.color(SIGNIFICANT_RED).strong();
                    }
                    ui.label(text);
                }
                ui.end_row();
            }
        });
}

fn show_dataset(ui: &mut Ui, view: &DatasetView, requested: &mut Option<Download>) {
    ui.add_space(6.0);
    ui.label(RichText::new(&view.title).size(18.0).strong());

    match &view.data {
        Rendered::Loaded(dataset) => {
            ui.push_id(&view.title, |ui| show_dataset_table(ui, dataset));
        }
        Rendered::Unavailable(fallback) => {
            let message = format!("Dataset not found or failed to load. {}", fallback);
            ui.colored_label(Color32::RED, message);
        }
    }

    if let Some(download) = &view.download {
        let response = ui.button(&download.label);
        let response = match get_file_size(&download.path) {
            Some(size) => {
                let hover = format!("{} ({})", download.file_name, format_file_size(size));
                response.on_hover_text(hover)
            }
            None => response,
        };
        if response.clicked() {
            *requested = Some(download.clone());
        }
    }
}

fn show_dataset_table(ui: &mut Ui, dataset: &Dataset) {
    let columns = dataset.headers().len();
    if columns == 0 {
        ui.label("(empty worksheet)");
        return;
    }
    let numeric: Vec<bool> = (0..columns)
        .map(|i| dataset.column_type(i) == ColumnType::Number)
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(300.0)
        .columns(Column::auto().at_least(60.0), columns)
        .header(20.0, |mut header| {
            for name in dataset.headers() {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dataset.rows().len(), |mut row| {
                let cells = &dataset.rows()[row.index()];
                for (cell, &is_numeric) in cells.iter().zip(&numeric) {
                    row.col(|ui| {
                        if is_numeric {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell.to_string());
                            });
                        } else {
                            ui.label(cell.to_string());
                        }
                    });
                }
            });
        });
}
