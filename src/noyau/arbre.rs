// src/noyau/arbre.rs
//
// Arbre d’expression (AST exact, binaire).
// - Feuille(Rationnel)
// - Operation(op, gauche, droite) : deux enfants, toujours (par construction)
//
// Rendu “quiz” : "<gauche> <op> <droite>", parenthèses sur un enfant opération
// dont la priorité est <= à celle du parent. Le <= est voulu : même à priorité
// égale on parenthèse (a - (b - c), (a - b) - c, (2 ^ 3) ^ 2).

use std::fmt;

use super::erreur::ErreurNoyau;
use super::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    /// Les cinq opérateurs du quiz (ordre stable pour les tirages).
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    pub fn priorite(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurNoyau;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            '^' => Ok(Operateur::Puissance),
            autre => Err(ErreurNoyau::OperateurInconnu(autre)),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Noeud {
    Feuille(Rationnel),
    Operation(Operateur, Box<Noeud>, Box<Noeud>),
}

impl Noeud {
    pub fn feuille(n: i64) -> Noeud {
        Noeud::Feuille(Rationnel::from(n))
    }

    pub fn operation(op: Operateur, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Operation(op, Box::new(gauche), Box::new(droite))
    }

    pub fn est_feuille(&self) -> bool {
        matches!(self, Noeud::Feuille(_))
    }

    pub fn nombre_feuilles(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 1,
            Noeud::Operation(_, g, d) => g.nombre_feuilles() + d.nombre_feuilles(),
        }
    }

    /// Une feuille seule a une profondeur de 0.
    pub fn profondeur(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 0,
            Noeud::Operation(_, g, d) => 1 + g.profondeur().max(d.profondeur()),
        }
    }

    /// Rendu lisible, parenthèses selon la priorité (voir en-tête).
    pub fn rendu(&self) -> String {
        match self {
            Noeud::Feuille(r) => r.to_string(),
            Noeud::Operation(op, g, d) => {
                let sg = rendu_enfant(*op, g);
                let sd = rendu_enfant(*op, d);
                format!("{sg} {op} {sd}")
            }
        }
    }
}

fn besoin_parentheses(parent: Operateur, enfant: &Noeud) -> bool {
    match enfant {
        Noeud::Feuille(_) => false,
        Noeud::Operation(op, _, _) => op.priorite() <= parent.priorite(),
    }
}

fn rendu_enfant(parent: Operateur, enfant: &Noeud) -> String {
    let s = enfant.rendu();
    if besoin_parentheses(parent, enfant) {
        format!("({s})")
    } else {
        s
    }
}

impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendu())
    }
}
