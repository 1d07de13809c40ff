use bevy::prelude::*;
use chemistry::{ActiveSession, ChemistryGenerated, SessionId};
use export::{ExportDestination, ExportOutcome, CHEMISTRY_FILE_NAME};

/// Last generation failure for the active session. Cleared by the next
/// successful submission and whenever the active session changes.
#[derive(Resource, Default, Debug)]
pub struct GenerationStatus {
    pub session: Option<SessionId>,
    pub message: Option<String>,
}

pub fn track_generation_status(
    mut events: EventReader<ChemistryGenerated>,
    active: Res<ActiveSession>,
    mut status: ResMut<GenerationStatus>,
) {
    if status.session != active.0 {
        status.session = active.0;
        status.message = None;
    }
    for event in events.read() {
        if active.0 != Some(event.session) {
            continue;
        }
        status.message = event.error.as_ref().map(ToString::to_string);
    }
}

/// One-line summary of an export, or `None` if it belongs to another
/// session.
pub fn export_status_text(outcome: &ExportOutcome, active: Option<SessionId>) -> Option<String> {
    if active != Some(outcome.session) {
        return None;
    }
    Some(match &outcome.result {
        Ok(ExportDestination::File(path)) => format!("Saved {}", path.display()),
        Ok(ExportDestination::Browser) => format!("Downloading {CHEMISTRY_FILE_NAME}"),
        Err(e) => e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemistry::GenerateError;
    use export::ExportError;
    use std::path::PathBuf;

    #[test]
    fn test_export_status_for_file() {
        let outcome = ExportOutcome {
            session: SessionId(0),
            result: Ok(ExportDestination::File(PathBuf::from("./chemistry.cfg"))),
        };
        assert_eq!(
            export_status_text(&outcome, Some(SessionId(0))).as_deref(),
            Some("Saved ./chemistry.cfg")
        );
    }

    #[test]
    fn test_export_status_for_error() {
        let outcome = ExportOutcome {
            session: SessionId(0),
            result: Err(ExportError::NoOutput),
        };
        let text = export_status_text(&outcome, Some(SessionId(0))).unwrap();
        assert!(text.contains("Nothing generated"), "got: {text}");
    }

    #[test]
    fn test_export_status_ignores_other_sessions() {
        let outcome = ExportOutcome {
            session: SessionId(1),
            result: Ok(ExportDestination::Browser),
        };
        assert!(export_status_text(&outcome, Some(SessionId(2))).is_none());
        assert!(export_status_text(&outcome, None).is_none());
    }

    fn build_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<ChemistryGenerated>()
            .init_resource::<ActiveSession>()
            .init_resource::<GenerationStatus>()
            .add_systems(Update, track_generation_status);
        app.insert_resource(ActiveSession(Some(SessionId(3))));
        app
    }

    #[test]
    fn test_generation_failure_is_tracked_then_cleared() {
        let mut app = build_app();

        app.world_mut().send_event(ChemistryGenerated {
            session: SessionId(3),
            error: Some(GenerateError::Failed("unknown species".to_string())),
        });
        app.update();
        let status = app.world().resource::<GenerationStatus>();
        assert!(
            status
                .message
                .as_deref()
                .is_some_and(|s| s.contains("unknown species")),
            "got: {:?}",
            status.message
        );

        app.world_mut().send_event(ChemistryGenerated {
            session: SessionId(3),
            error: None,
        });
        app.update();
        assert!(app.world().resource::<GenerationStatus>().message.is_none());
    }

    #[test]
    fn test_generation_status_ignores_other_sessions() {
        let mut app = build_app();
        app.world_mut().send_event(ChemistryGenerated {
            session: SessionId(9),
            error: Some(GenerateError::Failed("elsewhere".to_string())),
        });
        app.update();
        assert!(app.world().resource::<GenerationStatus>().message.is_none());
    }

    #[test]
    fn test_generation_failure_cleared_when_active_session_ends() {
        let mut app = build_app();
        app.world_mut().send_event(ChemistryGenerated {
            session: SessionId(3),
            error: Some(GenerateError::Failed("stale".to_string())),
        });
        app.update();
        assert!(app.world().resource::<GenerationStatus>().message.is_some());

        // Ending the session resets ActiveSession to None.
        app.insert_resource(ActiveSession(None));
        app.update();
        let status = app.world().resource::<GenerationStatus>();
        assert!(status.message.is_none(), "got: {:?}", status.message);
        assert_eq!(status.session, None);

        // A new session starts without the old message.
        app.insert_resource(ActiveSession(Some(SessionId(4))));
        app.update();
        assert!(app.world().resource::<GenerationStatus>().message.is_none());
    }
}
