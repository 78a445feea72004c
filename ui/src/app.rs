use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::viewer_badge(&self.state.viewer, ui);
                ui.separator();
                widgets::backend_origin(self.state.dispatcher.config(), ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Students");
            ui.separator();

            let State {
                viewer,
                users,
                dispatcher,
            } = &mut self.state;
            widgets::dash_users_panel(viewer, users, dispatcher, ui);
        });
    }
}
