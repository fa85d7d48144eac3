// src/app.rs
//
// Quiz Q-pur — module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppQuiz (pour main.rs: use crate::app::AppQuiz;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppQuiz;`
pub use etat::AppQuiz;

use eframe::egui;

impl eframe::App for AppQuiz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis clavier globaux (safe natif + web) :
        // 1..4 = choisir, Enter = valider puis “suivante”.
        let (touche_choix, enter) = ctx.input(|i| {
            let touches = [
                egui::Key::Num1,
                egui::Key::Num2,
                egui::Key::Num3,
                egui::Key::Num4,
            ];
            (
                touches.iter().position(|k| i.key_pressed(*k)),
                i.key_pressed(egui::Key::Enter),
            )
        });

        if let Some(index) = touche_choix {
            self.choisir(index);
        }
        if enter {
            if self.retour.is_some() {
                self.question_suivante();
            } else {
                self.valider();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
