// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppSolveur (etat.rs) pour natif + wasm
// - Clavier : Enter résout (quand le champ est focus)
// - Tactile : boutons, focus redonné après clic (focus_entree)
// - Deux modes : expression (résultat + étapes) / équation (x)

use eframe::egui;
use serde::Serialize;

use super::etat::{AppSolveur, Demarche, Mode};
use crate::noyau::jetons::format_tokens;
use crate::noyau::normalise::normaliser;
use crate::noyau::rpn::to_rpn;
use crate::noyau::{solve_equation, solve_expression};

impl AppSolveur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Solveur de notes");
                ui.add_space(6.0);

                self.ui_mode(ui);
                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_mode(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.mode;
        ui.horizontal(|ui| {
            ui.label("Mode :");
            for m in [Mode::Expression, Mode::Equation] {
                ui.radio_value(&mut mode, m, m.libelle());
            }
        });
        self.set_mode(mode);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let hint = match self.mode {
            Mode::Expression => "Ex: 3 + 4 * 2, (1+2)^2, -5 + 3",
            Mode::Equation => "Ex: 2x + 3x - 4 = 21, -x + 10 = 4",
        };

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(hint)
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter résout (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.resoudre_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);

            ui.add_space(10.0);

            let ok = ui.add_sized([96.0, 30.0], egui::Button::new("Résoudre"));
            if ok.clicked() {
                self.resoudre_via_noyau();
            }
        });

        ui.add_space(8.0);

        // Touches rapides
        ui.horizontal_wrapped(|ui| {
            for t in ["(", ")", "+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, t);
            }
            ui.separator();
            // x et '=' ne servent qu'aux équations
            ui.add_enabled_ui(self.mode == Mode::Equation, |ui| {
                self.bouton_insert(ui, "x");
                self.bouton_insert(ui, "=");
            });
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_solveur")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", " "]] {
                    for t in ligne {
                        self.bouton_insert(ui, t);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        let titre = match self.mode {
            Mode::Expression => "Résultat :",
            Mode::Equation => "x =",
        };
        ui.label(titre);
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                if self.mode == Mode::Expression {
                    Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                }

                let etapes = self
                    .demarche
                    .etapes
                    .iter()
                    .enumerate()
                    .map(|(i, e)| format!("{}. {e}", i + 1))
                    .collect::<Vec<_>>()
                    .join("\n");
                Self::champ_demarche(ui, "Étapes", "demarche_etapes", &etapes);
                Self::champ_demarche(ui, "Réponse", "demarche_json", &self.demarche.json);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([48.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str) {
        if texte.trim().is_empty() {
            ui.label("");
            return;
        }
        let resp = ui.add_sized([40.0, 28.0], egui::Button::new(texte));
        if resp.clicked() {
            // les blancs sont ignorés par le noyau : rien à gérer ici
            self.entree.push_str(texte);
            self.focus_entree = true;
        }
    }

    /// Résout l'entrée via le noyau, puis dépose résultat/démarche dans l'état UI.
    fn resoudre_via_noyau(&mut self) {
        match self.mode {
            Mode::Expression => {
                let reponse = solve_expression(&self.entree);
                let json = json_reponse(&reponse);
                match (reponse.ok, reponse.result, reponse.steps) {
                    (true, Some(v), Some(etapes)) => {
                        let d = Demarche {
                            rpn: rpn_lisible(&self.entree),
                            etapes,
                            json,
                        };
                        self.set_resultats(format!("{v}"), d);
                    }
                    _ => {
                        let msg = reponse.error.unwrap_or_default();
                        self.set_erreur(msg, json);
                    }
                }
            }
            Mode::Equation => {
                let reponse = solve_equation(&self.entree);
                let json = json_reponse(&reponse);
                match (reponse.ok, reponse.x) {
                    (true, Some(x)) => {
                        let d = Demarche {
                            json,
                            ..Demarche::default()
                        };
                        self.set_resultats(format!("{x}"), d);
                    }
                    _ => {
                        let msg = reponse.error.unwrap_or_default();
                        self.set_erreur(msg, json);
                    }
                }
            }
        }
    }
}

/// RPN affichable (la réponse publique ne la contient pas ; l'entrée est déjà validée).
fn rpn_lisible(entree: &str) -> String {
    normaliser(entree)
        .and_then(|s| to_rpn(&s))
        .map(|rpn| format_tokens(&rpn))
        .unwrap_or_default()
}

/// Réponse telle qu'envoyée par le transport (inf/NaN en chaînes, voir `solveur`).
fn json_reponse<T: Serialize>(reponse: &T) -> String {
    serde_json::to_string_pretty(reponse).unwrap_or_else(|e| format!("<json indisponible : {e}>"))
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
