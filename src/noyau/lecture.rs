// src/noyau/lecture.rs
//
// Texte -> jetons -> RPN (shunting-yard) -> Noeud
//
// Lit le format produit par Noeud::rendu() ("3 + 4 * 2", "(9 - 5) - 2", …).
// Règles:
// - priorités : ^ (3) > * / (2) > + - (1)
// - ^ associatif à droite, les autres à gauche
// - pour un arbre généré : lire_expression(&n.rendu()) == n

use std::str::FromStr;

use super::arbre::{Noeud, Operateur};
use super::erreur::{ErreurNoyau, Resultat};
use super::jetons::{tokenize, Tok};
use super::rationnel::Rationnel;

fn invalide(msg: &str) -> ErreurNoyau {
    ErreurNoyau::ExpressionInvalide(msg.into())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Op(+), Num(4), Op(*), Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(invalide("parenthèse fermante en trop")),
                    }
                }
            }

            Tok::Op(op) => {
                // dépile tant que la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(Tok::Op(top)) = ops.last() {
                    let doit_pop = if op == Operateur::Puissance {
                        top.priorite() > op.priorite()
                    } else {
                        top.priorite() >= op.priorite()
                    };
                    if !doit_pop {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(invalide("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit un Noeud à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Resultat<Noeud> {
    let mut st: Vec<Noeud> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push(Noeud::Feuille(Rationnel::entier(n))),

            Tok::Op(op) => {
                let d = st.pop().ok_or_else(|| invalide("opérande manquante"))?;
                let g = st.pop().ok_or_else(|| invalide("opérande manquante"))?;
                st.push(Noeud::operation(op, g, d));
            }

            Tok::LPar | Tok::RPar => return Err(invalide("parenthèse inattendue en RPN")),
        }
    }

    let racine = st.pop().ok_or_else(|| invalide("entrée vide"))?;
    if !st.is_empty() {
        return Err(invalide("opérateur manquant entre deux valeurs"));
    }
    Ok(racine)
}

/// API publique : texte -> arbre.
pub fn lire_expression(s: &str) -> Resultat<Noeud> {
    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    from_rpn(&rpn)
}

impl FromStr for Noeud {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lire_expression(s)
    }
}
