// src/noyau/erreur.rs
//
// Erreurs du noyau (aucune n’est avalée : elles remontent toutes à l’appelant).
// Seule exception : la division par zéro découverte PENDANT la génération
// est rattrapée par le générateur (nouvel essai), voir generateur.rs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Construction impossible (dénominateur nul, texte non entier, …).
    #[error("rationnel invalide : {0}")]
    RationnelInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// L’exposant doit être un entier >= 0.
    #[error("exposant invalide : {0} (entier positif ou nul attendu)")]
    ExposantInvalide(String),

    /// Exposant entier valide, mais au-delà du garde-fou de taille.
    #[error("exposant trop grand : {exposant} (maximum {max})")]
    ExposantTropGrand { exposant: String, max: u32 },

    #[error("opérateur inconnu : {0:?}")]
    OperateurInconnu(char),

    /// Nombre de termes invalide, ou budget d’essais épuisé.
    #[error("génération impossible : {0}")]
    GenerationEchouee(String),

    #[error("génération des choix impossible : {0}")]
    GenerationChoixEchouee(String),

    /// Texte d’expression mal formé (lecture.rs).
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),
}

pub type Resultat<T> = Result<T, ErreurNoyau>;
