//! Maura 90 Anos: slideshow presentation with in-place visual editing.
//!
//! The deck of slides is owned by the edit controller in `state::deck`;
//! everything here is wiring: messages in, deck mutations and mode
//! changes out, widgets rebuilt from the current state every frame.
//! Two presentation modes share the window and are never active
//! together: manual navigation (arrow keys, edit mode, recording) and
//! music-synchronized autoplay.

use std::path::Path;
use std::time::Duration;

use iced::keyboard::{self, key};
use iced::widget::{button, column, container, progress_bar, row, text, Stack};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use tracing::{info, warn};

mod assets;
mod audio;
mod export;
mod playback;
mod recorder;
mod state;
mod ui;

use assets::AssetLibrary;
use audio::AudioPlayer;
use playback::{Autoplay, Navigator, VolumeRamp};
use recorder::ActiveRecording;
use state::deck::{Deck, ImageAddress};
use state::store::SlideStore;
use ui::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayMode {
    Manual,
    /// Autoplay chosen; waiting for the user's start gesture.
    AutoArmed,
    AutoRunning,
}

enum RecordingState {
    Idle,
    Recording(ActiveRecording),
    Saving,
}

struct JourneyApp {
    deck: Deck,
    assets: AssetLibrary,
    nav: Navigator,
    mode: PlayMode,
    autoplay: Option<Autoplay>,
    edit_mode: bool,
    export_code: Option<String>,
    export_copied: bool,
    audio: Option<AudioPlayer>,
    ramp: Option<VolumeRamp>,
    volume: f32,
    recording: RecordingState,
    toast: Option<Toast>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    Next,
    Previous,
    ToggleEditMode,
    OpenPicker {
        slide_id: String,
        address: ImageAddress,
    },
    PickerImageChosen(String),
    PickerClosed,
    PanImage {
        slide_id: String,
        address: ImageAddress,
        dx: f32,
        dy: f32,
    },
    ZoomImage {
        slide_id: String,
        address: ImageAddress,
        delta: f32,
    },
    GenerateExport,
    CopyExport,
    CloseExport,
    ChooseMusic,
    EnterAutoplay,
    LeaveAutoplay,
    StartAutoplay,
    AutoplayTick,
    FadeTick,
    ToastTick,
    ToggleRecording,
    RecordingSaved(Result<std::path::PathBuf, String>),
}

impl JourneyApp {
    fn new() -> (Self, Task<Message>) {
        // Without a place to persist edits the app cannot do its job.
        let store = SlideStore::open_default()
            .expect("Failed to locate a user data directory for the deck.");
        let deck = Deck::load_or_default(store);
        let assets = AssetLibrary::scan(Path::new("img"), Path::new("music"));

        let mut audio = match AudioPlayer::try_new() {
            Ok(player) => Some(player),
            Err(err) => {
                warn!(%err, "audio unavailable, presenting silently");
                None
            }
        };
        if let (Some(player), Some(track)) = (audio.as_mut(), assets.default_track()) {
            if let Err(err) = player.load_track(&track) {
                warn!(%err, "default track unreadable");
            }
        }

        info!(slides = deck.len(), "deck ready");

        let mut app = JourneyApp {
            deck,
            assets,
            nav: Navigator::default(),
            mode: PlayMode::Manual,
            autoplay: None,
            edit_mode: false,
            export_code: None,
            export_copied: false,
            audio,
            ramp: None,
            volume: 0.0,
            recording: RecordingState::Idle,
            toast: None,
        };
        app.sync_soundtrack();
        (app, Task::none())
    }

    fn current_index(&self) -> usize {
        match (self.mode, &self.autoplay) {
            (PlayMode::AutoRunning, Some(auto)) => auto.index,
            _ => self.nav.index,
        }
    }

    fn modal_open(&self) -> bool {
        self.deck.editing().is_some() || self.export_code.is_some()
    }

    /// Manual-mode soundtrack policy: fade out on the last slide, fade
    /// in (starting playback if needed) everywhere else.
    fn sync_soundtrack(&mut self) {
        if self.mode != PlayMode::Manual {
            return;
        }
        let Some(audio) = self.audio.as_mut() else {
            return;
        };
        if !audio.has_track() {
            return;
        }

        if self.nav.is_last(self.deck.len()) {
            self.ramp = Some(VolumeRamp::fade_out(self.volume));
        } else if !audio.is_playing() {
            self.volume = 0.0;
            audio.set_volume(0.0);
            // A sink paused by an earlier fade-out picks up where it
            // left off; otherwise the loop starts fresh.
            audio.resume();
            if audio.is_playing() {
                self.ramp = Some(VolumeRamp::fade_in(0.0));
            } else {
                match audio.play(true, 0.0) {
                    Ok(()) => self.ramp = Some(VolumeRamp::fade_in(0.0)),
                    Err(err) => warn!(%err, "soundtrack failed to start"),
                }
            }
        } else if matches!(self.ramp, Some(ramp) if ramp.target == 0.0) {
            // Navigated away from the last slide mid-fade: ramp back up.
            self.ramp = Some(VolumeRamp::fade_in(self.volume));
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed(pressed, modifiers) => {
                // Shift is reserved for drag gestures, and nothing
                // navigates while a picker or modal is up.
                if modifiers.shift() || self.modal_open() || self.mode != PlayMode::Manual {
                    return Task::none();
                }
                match pressed.as_ref() {
                    keyboard::Key::Named(key::Named::ArrowRight) => {
                        return self.update(Message::Next)
                    }
                    keyboard::Key::Named(key::Named::ArrowLeft) => {
                        return self.update(Message::Previous)
                    }
                    keyboard::Key::Character(c) if c.eq_ignore_ascii_case("e") => {
                        return self.update(Message::ToggleEditMode)
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Next => {
                self.nav.next(self.deck.len());
                self.sync_soundtrack();
                Task::none()
            }
            Message::Previous => {
                self.nav.previous(self.deck.len());
                self.sync_soundtrack();
                Task::none()
            }
            Message::ToggleEditMode => {
                self.edit_mode = !self.edit_mode;
                if !self.edit_mode {
                    self.deck.cancel_picking();
                }
                Task::none()
            }
            Message::OpenPicker { slide_id, address } => {
                self.deck.start_picking(&slide_id, address);
                Task::none()
            }
            Message::PickerImageChosen(src) => {
                self.deck.commit_pick(&src);
                Task::none()
            }
            Message::PickerClosed => {
                self.deck.cancel_picking();
                Task::none()
            }
            Message::PanImage {
                slide_id,
                address,
                dx,
                dy,
            } => {
                self.deck.pan_image(&slide_id, address, dx, dy);
                Task::none()
            }
            Message::ZoomImage {
                slide_id,
                address,
                delta,
            } => {
                self.deck.zoom_image(&slide_id, address, delta);
                Task::none()
            }
            Message::GenerateExport => {
                self.export_code = Some(export::generate(self.deck.slides()));
                self.export_copied = false;
                Task::none()
            }
            Message::CopyExport => match &self.export_code {
                Some(code) => {
                    self.export_copied = true;
                    iced::clipboard::write(code.clone())
                }
                None => Task::none(),
            },
            Message::CloseExport => {
                self.export_code = None;
                Task::none()
            }
            Message::ChooseMusic => {
                let picked = FileDialog::new()
                    .set_title("Escolher Música")
                    .add_filter("Áudio", &["mp3", "ogg", "flac", "wav"])
                    .pick_file();

                // Session-only override; the chosen file is never
                // written into the persisted deck.
                if let (Some(path), Some(audio)) = (picked, self.audio.as_mut()) {
                    match audio.load_track(&path) {
                        Ok(()) => {
                            self.ramp = None;
                            self.volume = 0.0;
                            self.sync_soundtrack();
                        }
                        Err(err) => {
                            warn!(%err, "music override unreadable");
                            self.toast =
                                Some(Toast::new("Não foi possível carregar a música escolhida."));
                        }
                    }
                }
                Task::none()
            }
            Message::EnterAutoplay => {
                self.edit_mode = false;
                self.deck.cancel_picking();
                self.export_code = None;
                self.ramp = None;
                self.autoplay = None;
                if let Some(audio) = self.audio.as_mut() {
                    audio.stop();
                }
                self.mode = PlayMode::AutoArmed;
                Task::none()
            }
            Message::LeaveAutoplay => {
                self.autoplay = None;
                self.mode = PlayMode::Manual;
                self.nav = Navigator::default();
                if let Some(audio) = self.audio.as_mut() {
                    audio.stop();
                }
                self.volume = 0.0;
                self.sync_soundtrack();
                Task::none()
            }
            Message::StartAutoplay => {
                let Some(audio) = self.audio.as_mut() else {
                    self.toast = Some(Toast::new("Sem áudio disponível para sincronizar."));
                    return Task::none();
                };
                let Some(duration) = audio.duration() else {
                    self.toast = Some(Toast::new("A duração da música ainda não é conhecida."));
                    return Task::none();
                };
                match playback::dwell_per_slide(duration, self.deck.len()) {
                    Some(dwell) => match audio.play(false, 1.0) {
                        Ok(()) => {
                            info!(?duration, ?dwell, slides = self.deck.len(), "autoplay started");
                            self.autoplay = Some(Autoplay::new(dwell));
                            self.mode = PlayMode::AutoRunning;
                        }
                        Err(err) => {
                            warn!(%err, "autoplay audio failed");
                            self.toast = Some(Toast::new("Não foi possível iniciar a música."));
                        }
                    },
                    None => {
                        self.toast =
                            Some(Toast::new("Música curta demais para sincronizar os slides."));
                    }
                }
                Task::none()
            }
            Message::AutoplayTick => {
                if let Some(auto) = self.autoplay.as_mut() {
                    // At the end the timer keeps firing idle; teardown
                    // happens when the mode is left.
                    auto.tick(self.deck.len());
                }
                Task::none()
            }
            Message::FadeTick => {
                match (self.ramp.as_mut(), self.audio.as_ref()) {
                    (Some(ramp), Some(audio)) => {
                        self.volume = ramp.step();
                        audio.set_volume(self.volume);
                        if ramp.finished() {
                            if ramp.target == 0.0 {
                                audio.pause();
                            }
                            self.ramp = None;
                        }
                    }
                    _ => self.ramp = None,
                }
                Task::none()
            }
            Message::ToastTick => {
                if self.toast.as_ref().is_some_and(Toast::is_expired) {
                    self.toast = None;
                }
                Task::none()
            }
            Message::ToggleRecording => {
                match std::mem::replace(&mut self.recording, RecordingState::Idle) {
                    RecordingState::Idle => match ActiveRecording::start() {
                        Ok(active) => self.recording = RecordingState::Recording(active),
                        Err(err) => {
                            warn!(%err, "recording failed to start");
                            self.toast = Some(Toast::new(err.user_message()));
                        }
                    },
                    RecordingState::Recording(active) => {
                        self.recording = RecordingState::Saving;
                        return Task::perform(
                            async move {
                                match tokio::task::spawn_blocking(move || active.finish()).await {
                                    Ok(Ok(path)) => Ok(path),
                                    Ok(Err(err)) => Err(err.user_message()),
                                    Err(_) => Err("Erro ao salvar o arquivo.".to_string()),
                                }
                            },
                            Message::RecordingSaved,
                        );
                    }
                    // A press while flushing is ignored.
                    RecordingState::Saving => self.recording = RecordingState::Saving,
                }
                Task::none()
            }
            Message::RecordingSaved(result) => {
                self.recording = RecordingState::Idle;
                self.toast = Some(match result {
                    Ok(path) => Toast::new(format!("Vídeo salvo em {}", path.display())),
                    Err(message) => Toast::new(message),
                });
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![keyboard::on_key_press(|pressed, modifiers| {
            Some(Message::KeyPressed(pressed, modifiers))
        })];

        if let Some(auto) = &self.autoplay {
            subscriptions.push(iced::time::every(auto.dwell).map(|_| Message::AutoplayTick));
        }
        if self.ramp.is_some() {
            subscriptions.push(iced::time::every(playback::FADE_TICK).map(|_| Message::FadeTick));
        }
        if self.toast.is_some() {
            subscriptions
                .push(iced::time::every(Duration::from_millis(500)).map(|_| Message::ToastTick));
        }

        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<Message> {
        let total = self.deck.len().max(1);
        let index = self.current_index();

        let progress = progress_bar(0.0..=1.0, (index + 1) as f32 / total as f32)
            .height(Length::Fixed(5.0));

        let slide_view: Element<Message> = match self.deck.get(index) {
            Some(slide) => ui::slides::view(
                slide,
                &ui::slides::SlideContext {
                    deck: &self.deck,
                    assets: &self.assets,
                    edit_mode: self.edit_mode && self.mode == PlayMode::Manual,
                },
            ),
            None => container(text("Nenhum slide para apresentar."))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        let base = column![progress, self.top_bar(), slide_view, self.bottom_bar()]
            .spacing(8)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers: Vec<Element<Message>> = vec![base.into()];
        if self.mode == PlayMode::AutoArmed {
            layers.push(self.autoplay_overlay());
        }
        if self.deck.editing().is_some() {
            layers.push(ui::picker::view(&self.assets));
        }
        if let Some(code) = &self.export_code {
            layers.push(ui::export_modal::view(code, self.export_copied));
        }
        if let Some(toast) = &self.toast {
            layers.push(toast.view());
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn top_bar(&self) -> Element<'_, Message> {
        if self.mode != PlayMode::Manual {
            return row![button(text("Voltar ao Modo Manual").size(14))
                .on_press(Message::LeaveAutoplay)
                .padding(6)]
            .padding(8)
            .into();
        }

        let record_label = match self.recording {
            RecordingState::Idle => "Gravar Vídeo",
            RecordingState::Recording(_) => "Parar e Salvar Vídeo",
            RecordingState::Saving => "Salvando...",
        };
        let record = button(text(record_label).size(14))
            .on_press_maybe(
                (!matches!(self.recording, RecordingState::Saving))
                    .then_some(Message::ToggleRecording),
            )
            .padding(6);

        let edit_label = if self.edit_mode {
            "Sair da Edição"
        } else {
            "Entrar na Edição"
        };

        row![
            record,
            button(text("Versão Automática").size(14))
                .on_press(Message::EnterAutoplay)
                .padding(6),
            button(text("Música").size(14))
                .on_press(Message::ChooseMusic)
                .padding(6),
            button(text(edit_label).size(14))
                .on_press(Message::ToggleEditMode)
                .padding(6),
        ]
        .push_maybe(self.edit_mode.then(|| {
            button(text("Salvar Alterações").size(14))
                .on_press(Message::GenerateExport)
                .padding(6)
        }))
        .spacing(8)
        .padding(8)
        .into()
    }

    fn bottom_bar(&self) -> Element<'_, Message> {
        if self.mode != PlayMode::Manual {
            return row![].into();
        }

        row![
            button(text("‹ Anterior").size(14))
                .on_press(Message::Previous)
                .padding(6),
            text(format!("{} / {}", self.nav.index + 1, self.deck.len())).size(14),
            button(text("Próximo ›").size(14))
                .on_press(Message::Next)
                .padding(6),
        ]
        .spacing(16)
        .padding(10)
        .align_y(Alignment::Center)
        .into()
    }

    fn autoplay_overlay(&self) -> Element<'_, Message> {
        let ready = self
            .audio
            .as_ref()
            .and_then(AudioPlayer::duration)
            .is_some();
        let start_label = if ready {
            "Iniciar Vídeo Automático"
        } else {
            "Carregando..."
        };

        let panel = column![
            text("Maura 90 Anos").size(34),
            button(text(start_label).size(20))
                .on_press_maybe(ready.then_some(Message::StartAutoplay))
                .padding(14),
            text("A apresentação será sincronizada com a música.").size(13),
        ]
        .spacing(18)
        .align_x(Alignment::Center);

        container(container(panel).padding(30).style(container::rounded_box))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application("Maura 90 Anos", JourneyApp::update, JourneyApp::view)
        .subscription(JourneyApp::subscription)
        .theme(JourneyApp::theme)
        .centered()
        .run_with(JourneyApp::new)
}
