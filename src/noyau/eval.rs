//! Noyau — évaluation exacte d’un arbre.
//!
//! Feuille => sa valeur ; opération => on évalue les deux enfants puis :
//! - `+ - *` : toujours défini
//! - `/`     : DivisionParZero si le diviseur vaut 0
//! - `^`     : ExposantInvalide si l’exposant n’est pas un entier >= 0,
//!   ExposantTropGrand au-delà de EXPOSANT_MAX
//!
//! Aucune erreur n’est rattrapée ici : c’est au générateur (ou à l’appelant)
//! de décider.

use super::arbre::{Noeud, Operateur};
use super::erreur::Resultat;
use super::rationnel::Rationnel;

pub fn evaluer(noeud: &Noeud) -> Resultat<Rationnel> {
    match noeud {
        Noeud::Feuille(r) => Ok(r.clone()),
        Noeud::Operation(op, g, d) => {
            let a = evaluer(g)?;
            let b = evaluer(d)?;
            appliquer(*op, &a, &b)
        }
    }
}

fn appliquer(op: Operateur, a: &Rationnel, b: &Rationnel) -> Resultat<Rationnel> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => a.diviser(b),
        Operateur::Puissance => a.puissance(b),
    }
}
