use std::path::PathBuf;

use eframe::{egui, CreationContext};
use egui::{Context, RichText, Ui};
use rfd::FileDialog;

use super::content_panel::ContentPanel;
use super::utils::{get_file_extension, save_with_notice};
use crate::output::Download;
use crate::shell::{Shell, Sidebar, FOOTER, PAGE_TITLE};

/// One dashboard window. Owns its own shell, so navigation state is per
/// window.
pub struct DashboardApp {
    shell: Shell,
    sidebar: Sidebar,
    content: ContentPanel,
    /// Result of the last save, shown until dismissed
    notice: Option<String>,
}

impl DashboardApp {
    pub fn new(cc: &CreationContext, assets_dir: PathBuf) -> Self {
        super::theme::setup_custom_theme(&cc.egui_ctx);

        let shell = Shell::new(assets_dir);
        let sidebar = shell.sidebar();
        Self {
            shell,
            sidebar,
            content: ContentPanel::new(),
            notice: None,
        }
    }

    /// Runs a render pass when the selection differs from what is shown
    fn refresh(&mut self, ctx: &Context) {
        if self.content.section() == Some(self.shell.current()) {
            return;
        }
        let output = self.shell.render_current_section();
        self.content.load(output, ctx);
        self.sidebar = self.shell.sidebar();
    }

    fn show_sidebar(&mut self, ui: &mut Ui) -> Option<Download> {
        ui.heading("Navigation");
        ui.add_space(4.0);

        let mut selected = self.shell.current();
        for section in self.sidebar.sections {
            ui.radio_value(&mut selected, section, section.title());
        }
        if selected != self.shell.current() {
            self.shell.select(selected);
        }

        ui.separator();
        ui.label(RichText::new("📄 Documents").strong().size(16.0));

        let mut requested = None;
        for doc in &self.sidebar.documents {
            if ui.button(&doc.label).clicked() {
                requested = Some(doc.clone());
            }
        }
        if self.sidebar.documents.is_empty() {
            ui.label(RichText::new("No documents available").weak());
        }
        requested
    }

    /// Asks where to save a download and copies the file there
    fn save_download(&mut self, download: &Download) {
        let mut dialog = FileDialog::new().set_file_name(&download.file_name);
        let extension = get_file_extension(&download.file_name);
        if !extension.is_empty() {
            dialog = dialog.add_filter(download.mime, &[extension.as_str()]);
        }

        let Some(dest) = dialog.save_file() else {
            return;
        };

        let notice = save_with_notice(download, &dest);
        self.notice = Some(notice);
    }

    fn show_notice(&mut self, ctx: &Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Download")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.refresh(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(PAGE_TITLE);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.columns(FOOTER.len(), |cols| {
                for (col, caption) in cols.iter_mut().zip(FOOTER) {
                    col.label(RichText::new(caption).small().weak());
                }
            });
        });

        let mut requested = None;
        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(230.0)
            .width_range(180.0..=320.0)
            .show(ctx, |ui| {
                requested = self.show_sidebar(ui);
            });

        // A navigation click this frame renders on the next one
        if self.content.section() != Some(self.shell.current()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(download) = self.content.show(ui) {
                requested = Some(download);
            }
        });

        if let Some(download) = requested {
            self.save_download(&download);
        }
        self.show_notice(ctx);
    }
}
