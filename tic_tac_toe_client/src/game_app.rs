use crate::game_service::{GameService, StartForm};

use tic_tac_toe_game::{Command, Game, GameConfig, Seat, Status};

pub struct GameApp {
    game_service: GameService,
    form: StartForm,
}

impl GameApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let mut game_service = GameService::new(&config);
        game_service.attach(cc.egui_ctx.clone());

        Self {
            game_service,
            form: StartForm::default(),
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.game_service.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.handle_game_ui(ui);
        });
    }
}

impl GameApp {
    fn handle_game_ui(&mut self, ui: &mut egui::Ui) {
        let mut command = None;

        ui.vertical_centered(|ui| {
            ui.group(|ui| {
                ui.set_width(400.0);
                ui.set_min_height(500.0);

                if self.game_service.game().status() == Status::Idle {
                    if self.render_start_form(ui) {
                        self.game_service.submit_start(&self.form);
                    }
                } else {
                    self.display_scores(ui);
                    ui.add_space(10.0);
                    command = self.render_board(ui).or(command.take());
                    ui.add_space(10.0);
                    self.display_game_status(ui);
                    ui.add_space(5.0);
                    command = self.render_controls(ui).or(command.take());
                }

                if let Some(error) = self.game_service.view().error() {
                    ui.add_space(10.0);
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });

        if let Some(command) = command {
            self.game_service.dispatch(command);
        }
    }

    /// Returns true when "Start Game" was clicked.
    fn render_start_form(&mut self, ui: &mut egui::Ui) -> bool {
        ui.label("Player 1 name:");
        ui.add_space(3.0);
        ui.text_edit_singleline(&mut self.form.player1_name);
        ui.label("Symbol:");
        ui.add(egui::TextEdit::singleline(&mut self.form.player1_symbol).desired_width(30.0));

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Opponent:");
            ui.radio_value(&mut self.form.vs_computer, false, "Human");
            ui.radio_value(&mut self.form.vs_computer, true, "Computer");
        });

        ui.add_space(10.0);

        if self.form.vs_computer {
            ui.label(format!(
                "Player 2 name: {}",
                self.game_service.computer_name()
            ));
        } else {
            ui.label("Player 2 name:");
            ui.add_space(3.0);
            ui.text_edit_singleline(&mut self.form.player2_name);
        }
        ui.label("Symbol:");
        ui.add(egui::TextEdit::singleline(&mut self.form.player2_symbol).desired_width(30.0));

        ui.add_space(10.0);

        ui.add(egui::Button::new("Start Game").min_size(egui::vec2(100.0, 30.0)))
            .clicked()
    }

    fn render_board(&self, ui: &mut egui::Ui) -> Option<Command> {
        let game = self.game_service.game();
        let cells = self.game_service.view().cells();
        let first_symbol = game.player(Seat::One).map(|p| p.symbol());
        let button_size = 100.0;
        let mut clicked = None;

        ui.vertical_centered(|ui| {
            for row in 0..3 {
                ui.horizontal(|ui| {
                    ui.add_space(40.0);
                    for col in 0..3 {
                        let index = row * 3 + col;
                        let cell = cells[index];
                        let can_move =
                            game.is_active() && !game.awaiting_computer() && cell.is_none();

                        let text = match cell {
                            Some(symbol) if Some(symbol) == first_symbol => {
                                egui::RichText::new(symbol.to_string())
                                    .color(egui::Color32::from_rgb(255, 99, 71))
                            }
                            Some(symbol) => egui::RichText::new(symbol.to_string())
                                .color(egui::Color32::from_rgb(34, 139, 34)),
                            None => egui::RichText::new(" ")
                                .color(egui::Color32::from_rgb(180, 180, 180)),
                        };

                        let button = ui.add_enabled(
                            can_move,
                            egui::Button::new(text.size(50.0))
                                .min_size(egui::vec2(button_size, button_size)),
                        );

                        if button.clicked() {
                            clicked = Some(Command::SelectCell { index });
                        }
                    }
                });
            }
        });

        clicked
    }

    fn render_controls(&self, ui: &mut egui::Ui) -> Option<Command> {
        let game = self.game_service.game();
        let mut command = None;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!game.history().is_empty(), egui::Button::new("↩ Undo"))
                .clicked()
            {
                command = Some(Command::Undo);
            }
            if ui.button("✖ Cancel").clicked() {
                command = Some(Command::Cancel);
            }
            if ui.button("Reset Scores").clicked() {
                command = Some(Command::ResetScores);
            }
        });

        if game.status().is_terminal() {
            ui.add_space(5.0);
            if ui
                .button(
                    egui::RichText::new("🔄 New Round")
                        .size(25.0)
                        .color(egui::Color32::from_rgb(240, 148, 0)),
                )
                .clicked()
            {
                command = Some(Command::Restart);
            }
        }

        command
    }

    fn display_scores(&self, ui: &mut egui::Ui) {
        let game = self.game_service.game();
        let (Some(one), Some(two)) = (game.player(Seat::One), game.player(Seat::Two)) else {
            return;
        };

        let score_text = format!(
            "{} {} : {} {}",
            one.name(),
            one.score(),
            two.score(),
            two.name()
        );

        ui.label(
            egui::RichText::new(score_text)
                .size(24.0)
                .color(egui::Color32::from_rgb(0, 191, 255)),
        );
    }

    fn display_game_status(&self, ui: &mut egui::Ui) {
        let game = self.game_service.game();

        if let Some(banner) = self.game_service.view().banner() {
            ui.label(
                egui::RichText::new(format!("🏁 {banner}"))
                    .size(30.0)
                    .color(egui::Color32::from_rgb(255, 0, 0)),
            );
        } else if game.is_active() {
            ui.label(
                egui::RichText::new(turn_message(game))
                    .size(30.0)
                    .color(egui::Color32::from_rgb(0, 255, 0)),
            );
        }
    }
}

fn turn_message(game: &Game) -> String {
    let name = game.current_player().map(|p| p.name()).unwrap_or("?");
    if game.awaiting_computer() {
        format!("🤖 {name} is thinking...")
    } else {
        format!("🕐 {name}'s turn")
    }
}
