//! Noyau exact Q-pur (quiz)
//!
//! Organisation interne :
//! - rationnel.rs  : rationnel exact, toujours irréductible
//! - arbre.rs      : arbre d’expression + rendu avec parenthèses
//! - eval.rs       : évaluation exacte de l’arbre
//! - generateur.rs : arbres aléatoires à nombre de termes fixé
//! - choix.rs      : bonne réponse + 3 distracteurs, mélangés
//! - probleme.rs   : pipeline complet d’une question
//! - jetons.rs     : tokenisation du format rendu
//! - lecture.rs    : shunting-yard + construction Noeud
//! - parametres.rs : bornes des tirages + garde-fous
//! - erreur.rs     : erreurs typées
//!
//! Aucun état global : chaque appel reçoit sa source aléatoire.

pub mod arbre;
pub mod choix;
pub mod erreur;
pub mod eval;
pub mod generateur;
pub mod jetons;
pub mod lecture;
pub mod parametres;
pub mod probleme;
pub mod rationnel;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_quiz;

// API publique minimale
pub use arbre::{Noeud, Operateur};
pub use choix::{generer_choix, JeuDeChoix, NB_CHOIX};
pub use erreur::{ErreurNoyau, Resultat};
pub use eval::evaluer;
pub use generateur::{generer_expression, GenerateurExpression};
pub use lecture::lire_expression;
pub use parametres::{ParametresChoix, ParametresGeneration, ParametresQuiz};
pub use probleme::{generer_probleme, Probleme};
pub use rationnel::Rationnel;
