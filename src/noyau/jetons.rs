// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::arbre::Operateur;
use super::erreur::{ErreurNoyau, Resultat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigInt),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une expression au format du rendu quiz.
/// Supporte:
/// - entiers (ex: 12), et entier négatif là où une valeur est attendue (ex: -3, 2 * -3)
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Un autre symbole de ponctuation (%, &, …) => OperateurInconnu.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Moins unaire collé à un entier : littéral négatif
        let attend_valeur = matches!(out.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar));
        let negatif = c == '-' && attend_valeur && chars.get(i + 1).is_some_and(char::is_ascii_digit);

        if c.is_ascii_digit() || negatif {
            let debut = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && (chars[i] == '.' || chars[i] == ',') {
                return Err(ErreurNoyau::ExpressionInvalide(
                    "nombres décimaux non pris en charge".into(),
                ));
            }
            let txt: String = chars[debut..i].iter().collect();
            let n = txt
                .parse::<BigInt>()
                .map_err(|_| ErreurNoyau::ExpressionInvalide(format!("nombre illisible : {txt}")))?;
            out.push(Tok::Num(n));
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            c if c.is_ascii_punctuation() => out.push(Tok::Op(Operateur::try_from(c)?)),
            _ => {
                return Err(ErreurNoyau::ExpressionInvalide(format!(
                    "caractère inattendu : {c:?}"
                )))
            }
        }
        i += 1;
    }

    Ok(out)
}
