use bevy::prelude::*;

use crate::form::FormInput;
use crate::generator::{ActiveGenerator, ChemistryGenerator, GenerateError};
use crate::session::{ActiveSession, ChemistrySessions, SessionId};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// The user pressed "Generate chemistry".
#[derive(Event, Debug, Clone)]
pub struct SubmitChemistryEvent {
    pub session: SessionId,
    pub input: FormInput,
}

/// The session is over; its output is dropped.
#[derive(Event, Debug, Clone, Copy)]
pub struct EndSessionEvent {
    pub session: SessionId,
}

/// Emitted once per processed [`SubmitChemistryEvent`].
#[derive(Event, Debug, Clone)]
pub struct ChemistryGenerated {
    pub session: SessionId,
    pub error: Option<GenerateError>,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChemistrySet;

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ChemistryPlugin {
    generator: ActiveGenerator,
}

impl ChemistryPlugin {
    pub fn with_generator(generator: impl ChemistryGenerator) -> Self {
        Self {
            generator: ActiveGenerator::new(generator),
        }
    }
}

impl Plugin for ChemistryPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SubmitChemistryEvent>()
            .add_event::<EndSessionEvent>()
            .add_event::<ChemistryGenerated>()
            .insert_resource(self.generator.clone())
            .init_resource::<ChemistrySessions>()
            .init_resource::<ActiveSession>()
            .add_systems(
                Update,
                (process_submissions, process_session_end, end_sessions_on_exit)
                    .chain()
                    .in_set(ChemistrySet),
            );
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Runs the generator for every submission, in arrival order.
fn process_submissions(
    mut events: EventReader<SubmitChemistryEvent>,
    generator: Res<ActiveGenerator>,
    mut sessions: ResMut<ChemistrySessions>,
    mut generated: EventWriter<ChemistryGenerated>,
) {
    for event in events.read() {
        let input = event.input.clone();
        info!(
            "Generating chemistry for {} ({} species, {} states, {} byte pattern)",
            event.session,
            input.species_count,
            input.state_count,
            input.pattern_text.len()
        );
        let error = match sessions.submit(event.session, input, &**generator) {
            Ok(_) => None,
            Err(e) => {
                error!("Chemistry generation for {} failed: {e}", event.session);
                Some(e)
            }
        };
        generated.send(ChemistryGenerated {
            session: event.session,
            error,
        });
    }
}

fn process_session_end(
    mut events: EventReader<EndSessionEvent>,
    mut sessions: ResMut<ChemistrySessions>,
    mut active: ResMut<ActiveSession>,
) {
    for event in events.read() {
        sessions.end(event.session);
        if active.0 == Some(event.session) {
            active.0 = None;
        }
    }
}

fn end_sessions_on_exit(
    mut exits: EventReader<AppExit>,
    mut sessions: ResMut<ChemistrySessions>,
    mut active: ResMut<ActiveSession>,
) {
    if exits.read().next().is_some() {
        exits.read().for_each(drop);
        sessions.end_all();
        active.0 = None;
    }
}
