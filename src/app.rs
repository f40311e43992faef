//! Application state and core logic

use crate::config::AdmissionConfig;
use crate::device::{
    ConfigPermissionGate, DocumentPicker, FsPicker, ImagePicker, PermissionGate, PickOutcome,
    PickRequest, SubmissionSink, TracingSink, PHOTO_NAME,
};
use crate::error::{PermissionError, PickerError};
use crate::state::{
    AppState, AttachmentKind, Form, Navigator, Notice, NoticeLevel, PathPrompt, Route,
    SubmissionReceipt,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// External collaborators the app talks to
pub struct Devices {
    pub documents: Box<dyn DocumentPicker>,
    pub images: Box<dyn ImagePicker>,
    pub permission: Box<dyn PermissionGate>,
    pub sink: Box<dyn SubmissionSink>,
}

impl Devices {
    /// Filesystem pickers, config-driven permission and the log sink
    pub fn from_config(config: &AdmissionConfig) -> Self {
        let picker = FsPicker::new(config.document_dir());
        Self {
            documents: Box::new(picker.clone()),
            images: Box::new(picker),
            permission: Box::new(ConfigPermissionGate::new(config.media_access())),
            sink: Box::new(TracingSink),
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Pickers, permission gate and submission sink
    devices: Devices,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance wired to the real devices
    pub fn new(config: &AdmissionConfig) -> Self {
        let navigator = Navigator::new(config.start_route(), config.tab_animation());
        let mut app = Self::with_devices(navigator, Devices::from_config(config));
        config.apply_prefill(&mut app.state.form);
        app
    }

    pub fn with_devices(navigator: Navigator, devices: Devices) -> Self {
        Self {
            state: AppState::new(navigator),
            devices,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while the tab indicator is sliding
    pub fn is_animating(&self) -> bool {
        self.state.navigator.indicator.is_animating()
    }

    pub fn current_route(&self) -> Route {
        self.state.navigator.current()
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Path prompt is modal
        if self.state.is_prompting() {
            self.handle_prompt_key(key).await;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if self.handle_global_key(key) {
            return Ok(());
        }

        match self.current_route() {
            Route::Form => self.handle_form_key(key).await,
            Route::Home | Route::Uploads | Route::Profile => self.handle_tab_key(key),
        }

        Ok(())
    }

    /// Tab switching that works on every screen. Returns true if consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let navigator = &mut self.state.navigator;
        match key.code {
            KeyCode::F(n @ 1..=4) => navigator.select_index(usize::from(n) - 1),
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => navigator.next(),
            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => navigator.prev(),
            _ => return false,
        }
        true
    }

    /// Keys on screens without text input
    fn handle_tab_key(&mut self, key: KeyEvent) {
        let navigator = &mut self.state.navigator;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Right | KeyCode::Char('l') => navigator.next(),
            KeyCode::Left | KeyCode::Char('h') => navigator.prev(),
            KeyCode::Char(c @ '1'..='4') => {
                navigator.select_index(c as usize - '1' as usize);
            }
            _ => {}
        }
    }

    /// Keys on the admission form
    async fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Submit (Ctrl+S or Cmd+W / Ctrl+W)
            KeyCode::Char('s') if ctrl => self.submit_form(),
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_FALLBACK_MODIFIER) => {
                self.submit_form()
            }
            KeyCode::Char('d') if ctrl => {
                self.state.path_prompt = Some(PathPrompt::new(AttachmentKind::Document));
            }
            KeyCode::Char('o') if ctrl => self.start_photo_pick().await,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ if self.state.form.is_attachments_row_active() => self.handle_attachment_key(key),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down | KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.state.form.active_text_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_text_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Keys while the attachment list has focus
    fn handle_attachment_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => form.select_prev_attachment(),
            KeyCode::Down | KeyCode::Char('j') => form.select_next_attachment(),
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                match form.remove_selected_attachment() {
                    Ok(removed) => {
                        self.state.status_message = Some(format!("Removed {}", removed.name()));
                    }
                    Err(e) => tracing::debug!("nothing to remove: {e}"),
                }
            }
            _ => {}
        }
    }

    /// Keys inside the path prompt
    async fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.path_prompt = None;
                self.pick_cancelled();
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.state.path_prompt.take() {
                    self.complete_pick(prompt).await;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(prompt) = self.state.path_prompt.as_mut() {
                    prompt.input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.state.path_prompt.as_mut() {
                    prompt.input.pop();
                }
            }
            _ => {}
        }
    }

    async fn check_media_access(&self) -> Result<(), PermissionError> {
        if self.devices.permission.request_media_access().await {
            Ok(())
        } else {
            Err(PermissionError::MediaAccessDenied)
        }
    }

    /// Ask for media access, then open the photo prompt
    async fn start_photo_pick(&mut self) {
        if let Err(e) = self.check_media_access().await {
            self.state.push_notice(Notice::new(
                NoticeLevel::Warning,
                "Permission required",
                e.to_string(),
            ));
            return;
        }
        self.state.path_prompt = Some(PathPrompt::new(AttachmentKind::Image));
    }

    /// Hand the typed path to the matching picker and store the result
    async fn complete_pick(&mut self, prompt: PathPrompt) {
        let request = PickRequest::new(prompt.input);
        match prompt.kind {
            AttachmentKind::Document => {
                let result = self.devices.documents.pick_document(request).await;
                match result {
                    Ok(PickOutcome::Picked(doc)) => {
                        self.state.status_message = Some(format!("Attached {}", doc.name));
                        self.state
                            .form
                            .add_attachment(AttachmentKind::Document, doc.name, doc.locator);
                    }
                    Ok(PickOutcome::Cancelled) => self.pick_cancelled(),
                    Err(e) => self.pick_failed(e),
                }
            }
            AttachmentKind::Image => {
                let result = self.devices.images.pick_image(request).await;
                match result {
                    Ok(PickOutcome::Picked(image)) => {
                        self.state.status_message = Some("Attached photo".to_string());
                        self.state
                            .form
                            .add_attachment(AttachmentKind::Image, PHOTO_NAME, image.locator);
                    }
                    Ok(PickOutcome::Cancelled) => self.pick_cancelled(),
                    Err(e) => self.pick_failed(e),
                }
            }
        }
    }

    fn pick_cancelled(&mut self) {
        self.state.status_message = Some("Pick cancelled".to_string());
    }

    fn pick_failed(&mut self, error: PickerError) {
        tracing::warn!("pick failed: {error}");
        self.state.push_error(error.to_string());
    }

    /// Validate and submit the form, then show the Uploads tab
    fn submit_form(&mut self) {
        let result = self.state.form.submit(self.devices.sink.as_ref());
        match result {
            Ok(submission) => {
                self.state.push_notice(Notice::new(
                    NoticeLevel::Success,
                    "Success",
                    "Application submitted",
                ));
                self.state.last_submission = Some(SubmissionReceipt::new(submission.payload));
                self.state.navigator.navigate(submission.next_route);
            }
            Err(reason) => {
                self.state.push_notice(Notice::new(
                    NoticeLevel::Warning,
                    "Validation",
                    reason.to_string(),
                ));
            }
        }
    }
}
