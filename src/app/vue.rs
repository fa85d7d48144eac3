// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppQuiz (etat.rs) pour natif + wasm
// - Énoncé en monospace, 4 choix en boutons radio
// - Valider / Suivante / Recommencer ; score en fin de session
//
// Note :
// - Pas de temporisation : le retour (correct/faux) reste affiché jusqu’à “Suivante”.

use eframe::egui;

use quiz_qpur::noyau::parametres::NB_TERMES_MAX;
use quiz_qpur::noyau::NB_CHOIX;

use super::etat::{AppQuiz, Retour};

const VERT: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x7d, 0x32);
const ROUGE: egui::Color32 = egui::Color32::from_rgb(0xc6, 0x28, 0x28);

impl AppQuiz {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Quiz Q-pur");
                ui.add_space(6.0);

                if self.termine {
                    self.ui_resultat(ui);
                } else {
                    self.ui_question(ui);
                }

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
            });
    }

    fn ui_question(&mut self, ui: &mut egui::Ui) {
        // On copie ce qu’il faut afficher : les boutons modifient ensuite l’état.
        let Some(p) = &self.probleme else {
            return;
        };
        let enonce = format!("{} = ?", p.enonce);
        let libelles: Vec<String> = (0..NB_CHOIX).filter_map(|i| p.choix_texte(i)).collect();
        let index_correct = p.index_correct;
        let details = format!(
            "{} termes, profondeur {}",
            p.arbre.nombre_feuilles(),
            p.arbre.profondeur()
        );

        ui.label(format!(
            "Question {} / {} :",
            self.question + 1,
            self.params.nb_questions
        ));
        Self::champ_monospace(ui, "enonce_out", &enonce, 1);
        ui.small(details);

        ui.add_space(6.0);

        for (i, libelle) in libelles.iter().enumerate() {
            let mut texte = egui::RichText::new(libelle).monospace();
            if self.retour.is_some() && i == index_correct {
                texte = texte.strong().color(VERT);
            }
            if ui.radio(self.selection == Some(i), texte).clicked() {
                self.choisir(i);
            }
        }

        ui.add_space(6.0);

        match self.retour {
            Some(Retour::Correct) => {
                ui.colored_label(VERT, "Correct !");
            }
            Some(Retour::Faux { index_correct }) => {
                let bonne = libelles.get(index_correct).cloned().unwrap_or_default();
                ui.colored_label(ROUGE, format!("Faux : la bonne réponse était {bonne}"));
            }
            None => {}
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let valider = ui.add_enabled(
                self.peut_valider(),
                egui::Button::new("Valider").min_size(egui::vec2(88.0, 30.0)),
            );
            if valider.clicked() {
                self.valider();
            }

            let suivante = ui.add_enabled(
                self.retour.is_some(),
                egui::Button::new("Suivante").min_size(egui::vec2(88.0, 30.0)),
            );
            if suivante.clicked() {
                self.question_suivante();
            }

            ui.separator();
            ui.label(format!("Score : {}", self.bonnes_reponses));
        });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        Self::champ_monospace(ui, "score_out", &self.score_texte(), 2);
        ui.add_space(6.0);
        self.bouton_action(ui, "Recommencer", "Nouvelle session", Action::Recommencer);
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Termes :");
            let mut n = self.params.nb_termes as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut n)
                    .speed(1)
                    .range(1..=NB_TERMES_MAX as u32)
                    .suffix(" nombres"),
            );
            if resp.changed() {
                self.set_nb_termes(n as usize);
            }

            ui.separator();

            self.bouton_action(
                ui,
                "Passer",
                "Nouvelle question (sans compter la réponse)",
                Action::Passer,
            );
            self.bouton_action(ui, "Recommencer", "Nouvelle session", Action::Recommencer);
        });
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
            .add(egui::Button::new(label).min_size(egui::vec2(56.0, 30.0)))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Passer => {
                    if !self.termine {
                        self.nouvelle_question();
                    }
                }
                Action::Recommencer => self.recommencer(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Passer,
    Recommencer,
}
