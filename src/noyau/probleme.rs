//! Noyau — un problème de quiz complet.
//!
//! arbre (generateur) -> énoncé (rendu) -> réponse exacte (eval) -> choix
//!
//! Recalculé à chaque question, jamais stocké par le noyau.

use rand::Rng;
use tracing::debug;

use super::arbre::Noeud;
use super::choix::{generer_choix, NB_CHOIX};
use super::erreur::Resultat;
use super::eval::evaluer;
use super::generateur::generer_expression;
use super::parametres::ParametresQuiz;
use super::rationnel::Rationnel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probleme {
    pub arbre: Noeud,
    pub enonce: String,
    pub reponse: Rationnel,
    pub choix: [Rationnel; NB_CHOIX],
    pub index_correct: usize,
}

impl Probleme {
    pub fn est_correct(&self, index: usize) -> bool {
        index == self.index_correct
    }

    /// Libellé d’un choix : "n", ou "n / d" (plus lisible qu’un "n/d" collé).
    /// None si l’index sort des choix.
    pub fn choix_texte(&self, index: usize) -> Option<String> {
        let c = self.choix.get(index)?;
        Some(if c.est_entier() {
            c.numerateur().to_string()
        } else {
            format!("{} / {}", c.numerateur(), c.denominateur())
        })
    }
}

pub fn generer_probleme<R: Rng + ?Sized>(rng: &mut R, params: &ParametresQuiz) -> Resultat<Probleme> {
    let arbre = generer_expression(params.nb_termes, rng, &params.generation)?;
    let enonce = arbre.rendu();
    let reponse = evaluer(&arbre)?;
    let jeu = generer_choix(&reponse, rng, &params.choix)?;

    debug!(
        %enonce,
        %reponse,
        profondeur = arbre.profondeur(),
        index = jeu.index_correct,
        "problème généré"
    );

    Ok(Probleme {
        arbre,
        enonce,
        reponse,
        choix: jeu.choix,
        index_correct: jeu.index_correct,
    })
}
