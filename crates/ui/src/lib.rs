use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use chemistry::ChemistrySet;

pub mod form_panel;
pub mod preview;
pub mod status;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<form_panel::FormDraft>()
            .init_resource::<status::GenerationStatus>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (
                    status::track_generation_status.after(ChemistrySet),
                    form_panel::chemistry_form_ui.before(ChemistrySet),
                ),
            );
    }
}
