use eframe::egui::{Button, Color32, ComboBox, TextEdit};
use eframe::{egui, Frame};
use lingo::llm::openai::OpenAiChatBuilder;
use lingo::settings::Settings;
use lingo::*;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use std::{panic, process, thread};

fn main() {
    dotenv::dotenv().ok();

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    let llm_builder = OpenAiChatBuilder::new(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let (tx, rx) = std::sync::mpsc::channel();
    eframe::run_native(
        "Lingo",
        options,
        Box::new(|_cc| {
            Ok(Box::new(TranslatorGui {
                llm_builder,
                target_language: Language::Urdu,
                input_text: "".to_owned(),
                output_text: "".to_owned(),
                tx,
                rx,
                status: None,
                translation_thread: None,
            }))
        }),
    )
    .expect("eframe/egui run failed");
}

#[derive(Debug)]
struct TranslatorGui {
    llm_builder: OpenAiChatBuilder,
    target_language: Language,
    input_text: String,
    output_text: String,
    tx: Sender<TranslationStatus>,
    rx: Receiver<TranslationStatus>,
    status: Option<TranslationStatus>,
    translation_thread: Option<thread::JoinHandle<()>>,
}

impl eframe::App for TranslatorGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lingo");
            ui.label("Translate English text using a hosted language model");

            if let Ok(status) = self.rx.try_recv() {
                match status {
                    TranslationStatus::Success { ref result, .. } => {
                        self.output_text = result.output_text.clone();
                        self.translation_thread = None;
                    }
                    TranslationStatus::Error(_) => {
                        self.translation_thread = None;
                    }
                    _ => {}
                }
                self.status = Some(status);
            }

            if self.translation_thread.is_some() {
                // Keep polling the channel while a request is in flight.
                ctx.request_repaint_after(Duration::from_millis(100));
            }

            ComboBox::from_label("Target language")
                .selected_text(self.target_language.to_string())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(
                            &mut self.target_language,
                            language,
                            language.to_string(),
                        );
                    }
                });

            ui.label("English text");
            ui.add(
                TextEdit::multiline(&mut self.input_text)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                let btn = ui
                    .add_enabled(self.translation_thread.is_none(), Button::new("Translate"))
                    .on_hover_text("Translate the input text");

                if self.translation_thread.is_some() {
                    ui.spinner();
                }

                let (status_text, status_text_color) = match self.status.as_ref() {
                    Some(TranslationStatus::Started) => ("Translating...".to_owned(), None),
                    Some(TranslationStatus::Warning) => (
                        "Please enter text to translate.".to_owned(),
                        Some(Color32::GOLD),
                    ),
                    Some(TranslationStatus::Success { language, .. }) => (
                        format!("Translated to {}", language),
                        Some(Color32::DARK_GREEN),
                    ),
                    Some(TranslationStatus::Error(_)) => {
                        ("Translation failed".to_owned(), Some(Color32::RED))
                    }
                    None => ("".to_owned(), None),
                };

                let mut status_text = status_text.as_str();
                ui.add(
                    TextEdit::singleline(&mut status_text)
                        .desired_width(f32::INFINITY)
                        .text_color_opt(status_text_color),
                );

                if btn.clicked() {
                    self.status = None;
                    self.output_text.clear();

                    if self.input_text.trim().is_empty() {
                        self.status = Some(TranslationStatus::Warning);
                    } else {
                        let request = TranslationRequest {
                            target_language: self.target_language,
                            source_text: self.input_text.clone(),
                        };
                        let language = request.target_language;
                        let llm_builder = self.llm_builder.clone();
                        let tx = self.tx.clone();

                        self.translation_thread = Some(thread::spawn(move || {
                            tx.send(TranslationStatus::Started).unwrap();

                            let translation_res =
                                panic::catch_unwind(|| translate(request, llm_builder));
                            match translation_res {
                                Ok(Ok(result)) => {
                                    tx.send(TranslationStatus::Success { language, result })
                                        .unwrap();
                                }
                                Ok(Err(failure)) => {
                                    log::error!("Translation failed: {}", failure);
                                    tx.send(TranslationStatus::Error(failure)).unwrap();
                                }
                                Err(_) => {
                                    log::error!("Translation thread crashed");
                                    tx.send(TranslationStatus::Error(TranslationError::LlmError(
                                        LLMError::OtherError(anyhow::anyhow!("Crash!")),
                                    )))
                                    .unwrap();
                                }
                            }
                        }));
                    }
                };
            });

            ui.label("Translation");
            let mut output_text = self.output_text.as_str();
            ui.add(
                TextEdit::multiline(&mut output_text)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );
        });
    }
}
