//! Main application for the YouTube Thumbnail Downloader GUI

// Video-id extraction rules
mod extract;
// Candidate construction and image fetching
mod thumbnail;
// Header-only existence probes
mod probe;
// Save-to-disk logic
mod download;
// Data models for candidates, cards and save tasks
mod model;
// User-facing error types
mod error;

use error::GrabError;
use model::{CardState, CardStatus, PreviewSelection, SaveStatus, SaveTask};

// eframe/egui for GUI application framework
use eframe::{egui, App, Frame};
// OnceCell/Lazy for single-time runtime and client initialization
use once_cell::sync::{Lazy, OnceCell};
// MessageDialog for blocking alerts, FileDialog for folder selection
use rfd::{FileDialog, MessageDialog};
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

use egui::{ColorImage, TextureOptions, Visuals};

// Global Tokio runtime stored in a OnceCell for lazy init
static RUNTIME: OnceCell<Arc<Runtime>> = OnceCell::new();

// Shared blocking HTTP client; probes and fetches reuse its connection pool
static HTTP: Lazy<reqwest::blocking::Client> = Lazy::new(reqwest::blocking::Client::new);

/// Outcome of probing one candidate: its generation, its position in the
/// card grid, and the decoded image when the probe found one.
struct ProbeOutcome {
    generation: u64,
    index: usize,
    image: Option<ColorImage>,
}

/// Program entry point: initializes runtime and launches GUI
fn main() -> Result<(), eframe::Error> {
    // Create a new Tokio runtime and store it globally
    let rt = Arc::new(Runtime::new().unwrap());
    RUNTIME.set(rt).unwrap();

    // Configure default native options for egui window
    let options = eframe::NativeOptions::default();
    // Run the application
    eframe::run_native(
        "YouTube Thumbnail Downloader",
        options,
        Box::new(|cc| {
            // Use dark theme visuals
            let visuals = Visuals::dark();
            cc.egui_ctx.set_visuals(visuals);
            // Instantiate default app state
            Box::new(GrabberApp::default())
        }),
    )
}

/// Application state for the GUI
struct GrabberApp {
    /// Input field for the YouTube URL
    url_input: String,
    /// Destination folder for saved thumbnails
    save_folder: String,
    /// One card per thumbnail candidate of the current generation
    cards: Vec<CardState>,
    /// Generation counter; results from superseded requests are dropped
    generation: u64,
    /// True while probes for the current generation are outstanding
    generating: bool,
    /// Incoming probe results from blocking tasks
    probe_results: Arc<Mutex<Vec<ProbeOutcome>>>,
    /// Image currently enlarged in the preview modal, if any
    preview: Option<PreviewSelection>,
    /// List of save-to-disk tasks shown in the side panel
    saves: Vec<SaveTask>,
    /// Incoming save outcomes (task id, final status)
    save_results: Arc<Mutex<Vec<(u64, SaveStatus)>>>,
    /// Id handed to the next save task
    next_save_id: u64,
}

/// Default initial state for GrabberApp
impl Default for GrabberApp {
    fn default() -> Self {
        Self {
            url_input: String::new(),
            save_folder: "./downloads".to_string(),
            cards: Vec::new(),
            generation: 0,
            generating: false,
            probe_results: Arc::new(Mutex::new(Vec::new())),
            preview: None,
            saves: Vec::new(),
            save_results: Arc::new(Mutex::new(Vec::new())),
            next_save_id: 0,
        }
    }
}

/// GUI update loop: called each frame to redraw and handle interactions
impl App for GrabberApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Whether the modal was already open when this frame began; close
        // gestures only apply then, so the click that opens the modal
        // cannot also close it
        let modal_was_open = self.preview.is_some();

        // 1️⃣ Handle completed probes for the current generation
        {
            let mut pending = self.probe_results.lock().unwrap();
            for outcome in pending.drain(..) {
                // Probes from a superseded request race in late; drop them
                if outcome.generation != self.generation {
                    continue;
                }
                if let Some(card) = self.cards.get_mut(outcome.index) {
                    card.status = match outcome.image {
                        Some(img) => {
                            // Load image into an egui texture for the card
                            let tex = ctx.load_texture(
                                &card.candidate.filename,
                                img,
                                TextureOptions::default(),
                            );
                            CardStatus::Available(tex)
                        }
                        None => CardStatus::Unavailable,
                    };
                }
            }
        }
        self.generating = self
            .cards
            .iter()
            .any(|c| matches!(c.status, CardStatus::Pending));

        // 2️⃣ Handle completed save tasks
        {
            let mut pending = self.save_results.lock().unwrap();
            for (id, status) in pending.drain(..) {
                if let Some(task) = self.saves.iter_mut().find(|t| t.id == id) {
                    task.status = status;
                }
            }
        }

        // 3️⃣ Right-side panel: list of save-to-disk tasks
        egui::SidePanel::right("saves_panel").show(ctx, |ui| {
            ui.heading("Saved Thumbnails");
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let mut to_remove = vec![];

                    for task in &self.saves {
                        let status_text = match &task.status {
                            SaveStatus::Saving => "⬇️ Saving".to_string(),
                            SaveStatus::Done => "✅ Saved".to_string(),
                            SaveStatus::Failed(reason) => format!("❌ {}", reason),
                        };
                        ui.group(|ui| {
                            ui.vertical(|ui| {
                                ui.label(&task.filename);
                                ui.label(status_text);
                                // When done, provide folder and remove options
                                if matches!(task.status, SaveStatus::Done | SaveStatus::Failed(_)) {
                                    ui.horizontal(|ui| {
                                        if matches!(task.status, SaveStatus::Done)
                                            && ui.button("Open Folder").clicked()
                                        {
                                            open_folder(self.save_folder.clone());
                                        }
                                        // Queue removal of the finished task
                                        if ui
                                            .add(egui::Button::new("❌").fill(egui::Color32::RED))
                                            .clicked()
                                        {
                                            to_remove.push(task.id);
                                        }
                                    });
                                }
                            });
                        });
                    }

                    // Remove tasks after iteration
                    if !to_remove.is_empty() {
                        self.saves.retain(|t| !to_remove.contains(&t.id));
                    }
                });
        });

        // Deferred actions collected while the card grid borrows self.cards
        let mut open_preview: Option<PreviewSelection> = None;
        let mut save_requests: Vec<(String, String)> = Vec::new();
        let mut submit = false;

        // 4️⃣ Main panel: URL input, folder selection, and the card grid
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("YouTube Thumbnail Downloader");

            // URL input field; Enter submits like the button does
            ui.label("Paste YouTube video URL:");
            let response = ui.text_edit_singleline(&mut self.url_input);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            // Folder selection
            ui.horizontal(|ui| {
                ui.label("Save folder:");
                ui.text_edit_singleline(&mut self.save_folder);
                if ui.button("Browse…").clicked() {
                    if let Some(folder) =
                        FileDialog::new().set_directory(&self.save_folder).pick_folder()
                    {
                        self.save_folder = folder.display().to_string();
                    }
                }
            });

            // Generate button, disabled while probes are outstanding
            let label = if self.generating {
                "Processing…"
            } else {
                "Generate Thumbnails"
            };
            if ui
                .add_enabled(!self.generating, egui::Button::new(label))
                .clicked()
            {
                submit = true;
            }

            ui.separator();

            // Card grid: one card per candidate, in tier order
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for card in &self.cards {
                        ui.group(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(card.candidate.quality.label()).strong());
                                ui.label(
                                    egui::RichText::new(card.candidate.quality.dimensions()).weak(),
                                );
                                match &card.status {
                                    CardStatus::Pending => {
                                        ui.add_sized(
                                            [240.0, 135.0],
                                            egui::Spinner::new(),
                                        );
                                    }
                                    CardStatus::Available(tex) => {
                                        // Clickable image opens the preview modal
                                        let img = egui::Image::new(tex)
                                            .fit_to_exact_size(egui::vec2(240.0, 135.0));
                                        if ui.add(egui::ImageButton::new(img)).clicked() {
                                            open_preview = Some(PreviewSelection {
                                                url: card.candidate.url.clone(),
                                                filename: card.candidate.filename.clone(),
                                                texture: tex.clone(),
                                            });
                                        }
                                    }
                                    CardStatus::Unavailable => {
                                        ui.add_sized(
                                            [240.0, 135.0],
                                            egui::Label::new("Thumbnail not available"),
                                        );
                                    }
                                }
                                let available =
                                    matches!(card.status, CardStatus::Available(_));
                                let btn_label =
                                    if available { "Download" } else { "Not Available" };
                                if ui
                                    .add_enabled(available, egui::Button::new(btn_label))
                                    .clicked()
                                {
                                    save_requests.push((
                                        card.candidate.url.clone(),
                                        card.candidate.filename.clone(),
                                    ));
                                }
                            });
                        });
                    }
                });
            });
        });

        // 5️⃣ Preview modal: one enlarged image plus its download action
        let mut close_modal = false;
        if let Some(preview) = &self.preview {
            let win = egui::Window::new("Preview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.add(
                        egui::Image::new(&preview.texture).max_size(egui::vec2(640.0, 480.0)),
                    );
                    ui.horizontal(|ui| {
                        if ui.button(format!("Download {}", preview.filename)).clicked() {
                            save_requests.push((preview.url.clone(), preview.filename.clone()));
                        }
                        if ui.button("Close").clicked() {
                            close_modal = true;
                        }
                    });
                });
            // Backdrop click closes the modal
            if modal_was_open {
                if let Some(win) = win {
                    if win.response.clicked_elsewhere() {
                        close_modal = true;
                    }
                }
            }
        }
        // Escape closes the modal too
        if modal_was_open && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            close_modal = true;
        }
        if close_modal {
            self.preview = None;
        }

        // Apply deferred actions now that the UI borrows are released
        if let Some(selection) = open_preview {
            self.preview = Some(selection);
        }
        for (url, filename) in save_requests {
            self.start_save(ctx, url, filename);
        }
        if submit {
            self.generate_thumbnails(ctx);
        }

        // Request periodic repaint for incoming probe and save results
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl GrabberApp {
    /// Validates the URL, rebuilds the card grid, and launches the probe
    /// pipeline for a new generation
    fn generate_thumbnails(&mut self, ctx: &egui::Context) {
        let url = self.url_input.trim().to_string();

        // Validate input before any network work
        if url.is_empty() {
            show_error(&GrabError::EmptyInput);
            return;
        }
        if !extract::is_valid_youtube_url(&url) {
            show_error(&GrabError::InvalidUrl);
            return;
        }
        // Validity is defined as extraction succeeding, so this cannot fail
        let Some(video_id) = extract::extract_video_id(&url) else {
            return;
        };

        // New generation supersedes the previous card set. In-flight probes
        // are not aborted; their results are dropped on arrival instead.
        self.generation += 1;
        let generation = self.generation;

        let candidates = thumbnail::build_candidates(&video_id);
        self.cards = candidates
            .iter()
            .cloned()
            .map(|candidate| CardState {
                candidate,
                status: CardStatus::Pending,
            })
            .collect();
        self.generating = true;

        // Probe each candidate in tier order on one blocking task, reporting
        // back per candidate so cards fill in as results arrive
        let results = Arc::clone(&self.probe_results);
        let ctx_c = ctx.clone();
        RUNTIME.get().unwrap().spawn_blocking(move || {
            for (index, candidate) in candidates.into_iter().enumerate() {
                let exists = probe::probe(&HTTP, &candidate.url);
                let image = if exists {
                    let img = thumbnail::fetch_image(&HTTP, &candidate.url);
                    if img.is_none() {
                        eprintln!("Error: failed to decode image at {}", candidate.url);
                    }
                    img
                } else {
                    None
                };
                results.lock().unwrap().push(ProbeOutcome {
                    generation,
                    index,
                    image,
                });
                ctx_c.request_repaint();
            }
        });
    }

    /// Starts a save-to-disk task for one candidate and registers it in
    /// the side panel
    fn start_save(&mut self, ctx: &egui::Context, url: String, filename: String) {
        let id = self.next_save_id;
        self.next_save_id += 1;
        self.saves.push(SaveTask {
            id,
            filename: filename.clone(),
            status: SaveStatus::Saving,
        });

        let folder = self.save_folder.clone();
        let results = Arc::clone(&self.save_results);
        let ctx_c = ctx.clone();
        RUNTIME.get().unwrap().spawn_blocking(move || {
            let status = match download::save_image(&HTTP, &url, &folder, &filename) {
                Ok(()) => {
                    println!("Saved: {}", filename);
                    SaveStatus::Done
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    SaveStatus::Failed(e.to_string())
                }
            };
            results.lock().unwrap().push((id, status));
            ctx_c.request_repaint();
        });
    }
}

/// Surfaces an error as a blocking alert dialog, mirroring a browser alert
fn show_error(err: &GrabError) {
    MessageDialog::new()
        .set_title("Error")
        .set_description(&format!("Error: {}", err))
        .show();
}

/// Opens the save folder in the platform file manager
fn open_folder(folder: String) {
    std::thread::spawn(move || {
        #[cfg(target_os = "windows")]
        {
            let _ = std::process::Command::new("explorer").arg(folder).spawn();
        }
        #[cfg(target_os = "macos")]
        {
            let _ = std::process::Command::new("open").arg(folder).spawn();
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let _ = std::process::Command::new("xdg-open").arg(folder).spawn();
        }
    });
}
