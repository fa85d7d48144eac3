//! src/app/etat.rs
//!
//! État UI du quiz (sans vue).
//!
//! Rôle : contenir la session en cours (question, choix sélectionné, score)
//! et offrir les actions simples (choisir / valider / suivante / recommencer)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Tout le calcul passe par le noyau (generer_probleme).
//! - Session en mémoire seulement : rien n’est persisté.
//! - Actions idempotentes hors contexte (valider sans sélection = rien).

use rand::rngs::StdRng;
use rand::SeedableRng;

use quiz_qpur::noyau::{generer_probleme, ParametresQuiz, Probleme};

/// Résultat de la dernière validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retour {
    Correct,
    Faux { index_correct: usize },
}

#[derive(Clone, Debug)]
pub struct AppQuiz {
    pub params: ParametresQuiz,

    // --- question courante ---
    pub probleme: Option<Probleme>,
    pub selection: Option<usize>,
    pub retour: Option<Retour>,

    // --- session ---
    pub question: usize, // index 0-based
    pub bonnes_reponses: usize,
    pub termine: bool,

    pub erreur: String,

    rng: StdRng,
}

impl Default for AppQuiz {
    fn default() -> Self {
        Self::avec_rng(StdRng::from_os_rng())
    }
}

impl AppQuiz {
    /// Session reproductible (tests, démo).
    pub fn avec_graine(graine: u64) -> Self {
        Self::avec_rng(StdRng::seed_from_u64(graine))
    }

    fn avec_rng(rng: StdRng) -> Self {
        let mut app = Self {
            params: ParametresQuiz::default(),
            probleme: None,
            selection: None,
            retour: None,
            question: 0,
            bonnes_reponses: 0,
            termine: false,
            erreur: String::new(),
            rng,
        };
        app.nouvelle_question();
        app
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn nouvelle_question(&mut self) {
        self.selection = None;
        self.retour = None;

        match generer_probleme(&mut self.rng, &self.params) {
            Ok(p) => {
                self.erreur.clear();
                self.probleme = Some(p);
            }
            Err(e) => {
                self.probleme = None;
                self.erreur = e.to_string();
            }
        }
    }

    /// Sélection d’un choix (bloquée une fois la réponse validée).
    pub fn choisir(&mut self, index: usize) {
        if self.retour.is_some() {
            return;
        }
        if let Some(p) = &self.probleme {
            if index < p.choix.len() {
                self.selection = Some(index);
            }
        }
    }

    pub fn peut_valider(&self) -> bool {
        self.probleme.is_some() && self.selection.is_some() && self.retour.is_none()
    }

    pub fn valider(&mut self) {
        if !self.peut_valider() {
            return;
        }
        let (Some(p), Some(i)) = (&self.probleme, self.selection) else {
            return;
        };

        let retour = if p.est_correct(i) {
            self.bonnes_reponses += 1;
            Retour::Correct
        } else {
            Retour::Faux {
                index_correct: p.index_correct,
            }
        };
        self.retour = Some(retour);
    }

    /// Passe à la question suivante, ou termine la session.
    pub fn question_suivante(&mut self) {
        if self.retour.is_none() || self.termine {
            return;
        }
        self.question += 1;
        if self.question >= self.params.nb_questions {
            self.termine = true;
            self.probleme = None;
            self.selection = None;
            self.retour = None;
        } else {
            self.nouvelle_question();
        }
    }

    pub fn recommencer(&mut self) {
        self.question = 0;
        self.bonnes_reponses = 0;
        self.termine = false;
        self.nouvelle_question();
    }

    /// Garde-fou : nb_termes borné ; pris en compte à la prochaine question.
    pub fn set_nb_termes(&mut self, nb_termes: usize) {
        self.params = self.params.clone().avec_nb_termes(nb_termes);
    }

    pub fn score_texte(&self) -> String {
        format!(
            "Vous avez répondu correctement à {} question(s) sur {} !",
            self.bonnes_reponses, self.params.nb_questions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demarre_avec_une_question() {
        let app = AppQuiz::avec_graine(1);
        assert!(app.probleme.is_some());
        assert!(app.erreur.is_empty());
        assert_eq!(app.question, 0);
        assert!(!app.peut_valider());
    }

    #[test]
    fn bonne_reponse_comptee() {
        let mut app = AppQuiz::avec_graine(2);
        let i = app.probleme.as_ref().unwrap().index_correct;
        app.choisir(i);
        app.valider();
        assert_eq!(app.retour, Some(Retour::Correct));
        assert_eq!(app.bonnes_reponses, 1);

        // double validation : sans effet
        app.valider();
        assert_eq!(app.bonnes_reponses, 1);
    }

    #[test]
    fn mauvaise_reponse_montre_la_bonne() {
        let mut app = AppQuiz::avec_graine(3);
        let i = app.probleme.as_ref().unwrap().index_correct;
        app.choisir((i + 1) % 4);
        app.valider();
        assert_eq!(app.retour, Some(Retour::Faux { index_correct: i }));
        assert_eq!(app.bonnes_reponses, 0);

        // sélection figée après validation
        app.choisir(i);
        assert_eq!(app.selection, Some((i + 1) % 4));
    }

    #[test]
    fn session_complete_puis_recommencer() {
        let mut app = AppQuiz::avec_graine(4);
        let total = app.params.nb_questions;

        for _ in 0..total {
            assert!(!app.termine);
            let i = app.probleme.as_ref().unwrap().index_correct;
            app.choisir(i);
            app.valider();
            app.question_suivante();
        }

        assert!(app.termine);
        assert!(app.probleme.is_none());
        assert_eq!(app.bonnes_reponses, total);
        assert!(app.score_texte().contains(&format!("{total} question(s) sur {total}")));

        app.recommencer();
        assert!(!app.termine);
        assert_eq!(app.bonnes_reponses, 0);
        assert!(app.probleme.is_some());
    }

    #[test]
    fn suivante_exige_une_validation() {
        let mut app = AppQuiz::avec_graine(5);
        app.question_suivante();
        assert_eq!(app.question, 0);
    }

    #[test]
    fn nb_termes_applique_a_la_question_suivante() {
        let mut app = AppQuiz::avec_graine(6);
        app.set_nb_termes(3);
        app.nouvelle_question();
        assert_eq!(app.probleme.as_ref().unwrap().arbre.nombre_feuilles(), 3);

        app.set_nb_termes(0);
        assert_eq!(app.params.nb_termes, 1);
    }
}
