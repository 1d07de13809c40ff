//! The chemistry form: two bounded counts, the pattern editor, the
//! "Generate chemistry" button, the preview region and, once something has
//! been generated, the download button.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use chemistry::config::{
    DEFAULT_SPECIES_COUNT, DEFAULT_STATE_COUNT, MAX_COUNT, MIN_COUNT, PATTERN_HELP, PATTERN_KEY,
    PATTERN_LABEL, SPECIES_HELP, SPECIES_KEY, SPECIES_LABEL, STATES_HELP, STATES_KEY,
    STATES_LABEL,
};
use chemistry::{ActiveSession, ChemistrySessions, FormInput, SubmitChemistryEvent};
use export::{DownloadChemistryEvent, LastExport};

use crate::preview::{ChemistryPreview, DOWNLOAD_LABEL, SUBMIT_LABEL};
use crate::status::{export_status_text, GenerationStatus};
use crate::{theme, widgets};

// =============================================================================
// Resources
// =============================================================================

/// Widget values between frames.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub species: u16,
    pub states: u16,
    pub pattern: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            species: DEFAULT_SPECIES_COUNT,
            states: DEFAULT_STATE_COUNT,
            pattern: String::new(),
        }
    }
}

impl FormDraft {
    /// Counts are clamped here as well as in the widgets.
    pub fn to_input(&self) -> FormInput {
        FormInput::new(
            i64::from(self.species),
            i64::from(self.states),
            self.pattern.clone(),
        )
    }
}

/// Buttons clicked during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormActions {
    pub submit: bool,
    pub download: bool,
}

// =============================================================================
// Drawing
// =============================================================================

fn count_field(ui: &mut egui::Ui, key: &str, label: &str, help: &str, value: &mut u16) {
    ui.push_id(key, |ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .range(MIN_COUNT..=MAX_COUNT)
                .speed(1.0),
        )
        .on_hover_text(help);
    });
}

pub fn draw_form(
    ui: &mut egui::Ui,
    draft: &mut FormDraft,
    preview: &ChemistryPreview<'_>,
    status: &[(String, egui::Color32)],
) -> FormActions {
    let mut actions = FormActions::default();

    ui.columns(2, |cols| {
        count_field(
            &mut cols[0],
            SPECIES_KEY,
            SPECIES_LABEL,
            SPECIES_HELP,
            &mut draft.species,
        );
        count_field(
            &mut cols[1],
            STATES_KEY,
            STATES_LABEL,
            STATES_HELP,
            &mut draft.states,
        );
    });

    ui.label(PATTERN_LABEL);
    ui.add(
        egui::TextEdit::multiline(&mut draft.pattern)
            .id_salt(PATTERN_KEY)
            .code_editor()
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    )
    .on_hover_text(PATTERN_HELP);

    if widgets::primary_button(ui, SUBMIT_LABEL).clicked() {
        actions.submit = true;
    }

    ui.separator();
    ui.label(egui::RichText::new(preview.label()).strong());
    widgets::code_block(ui, preview.body());

    if preview.download_visible() && widgets::primary_button(ui, DOWNLOAD_LABEL).clicked() {
        actions.download = true;
    }

    for (text, color) in status {
        widgets::status_line(ui, text, *color);
    }

    actions
}

// =============================================================================
// Systems
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn chemistry_form_ui(
    mut contexts: EguiContexts,
    mut draft: ResMut<FormDraft>,
    mut sessions: ResMut<ChemistrySessions>,
    mut active: ResMut<ActiveSession>,
    generation: Res<GenerationStatus>,
    last_export: Res<LastExport>,
    mut submit_events: EventWriter<SubmitChemistryEvent>,
    mut download_events: EventWriter<DownloadChemistryEvent>,
) {
    let mut status = Vec::new();
    if let Some(msg) = &generation.message {
        status.push((msg.clone(), theme::TEXT_ERROR));
    }
    if let Some(outcome) = &last_export.0 {
        if let Some(text) = export_status_text(outcome, active.0) {
            let color = if outcome.result.is_ok() {
                theme::TEXT_OK
            } else {
                theme::TEXT_ERROR
            };
            status.push((text, color));
        }
    }

    let actions = {
        let session = active.0.and_then(|id| sessions.get(id));
        let preview = ChemistryPreview::from_session(session);
        let mut actions = FormActions::default();
        egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
            actions = draw_form(ui, &mut draft, &preview, &status);
        });
        actions
    };

    if actions.submit {
        let session = sessions.ensure(&mut active);
        submit_events.send(SubmitChemistryEvent {
            session,
            input: draft.to_input(),
        });
    }
    if actions.download {
        if let Some(session) = active.0 {
            download_events.send(DownloadChemistryEvent { session });
        }
    }
}
