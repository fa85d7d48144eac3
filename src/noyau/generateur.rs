//! Noyau — génération aléatoire d’expressions à nombre de termes fixé.
//!
//! Règles (quiz calcul mental) :
//! - feuille : entier tiré dans feuille_min..=feuille_max (2..=10)
//! - opérateur tiré uniformément parmi `+ - * / ^`
//! - `^` : tout le budget va à la base, l’exposant est une feuille 0..=3
//!   construite directement (jamais une sous-expression)
//! - `/` : si le diviseur s’évalue à 0, on jette la tentative entière et on
//!   recommence pour le même nombre de termes (borné par essais_max)
//!
//! Invariant : l’arbre rendu contient exactement `nb_termes` feuilles.

use rand::Rng;
use tracing::trace;

use super::arbre::{Noeud, Operateur};
use super::erreur::{ErreurNoyau, Resultat};
use super::eval::evaluer;
use super::parametres::ParametresGeneration;

pub struct GenerateurExpression<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    params: &'a ParametresGeneration,
}

impl<'a, R: Rng + ?Sized> GenerateurExpression<'a, R> {
    pub fn new(rng: &'a mut R, params: &'a ParametresGeneration) -> Self {
        Self { rng, params }
    }

    /// Arbre de `nb_termes` feuilles (>= 1).
    pub fn generer(&mut self, nb_termes: usize) -> Resultat<Noeud> {
        if nb_termes == 0 {
            return Err(ErreurNoyau::GenerationEchouee(
                "il faut au moins un terme".into(),
            ));
        }
        self.verifier_bornes()?;

        for essai in 1..=self.params.essais_max {
            match self.tenter(nb_termes)? {
                Some(noeud) => return Ok(noeud),
                None => trace!(nb_termes, essai, "diviseur nul, nouvel essai"),
            }
        }

        Err(ErreurNoyau::GenerationEchouee(format!(
            "{nb_termes} termes : {} essais sans diviseur non nul",
            self.params.essais_max
        )))
    }

    /// Une tentative. `None` = diviseur nul, à recommencer.
    fn tenter(&mut self, nb_termes: usize) -> Resultat<Option<Noeud>> {
        if nb_termes == 1 {
            return Ok(Some(self.terme()));
        }

        let op = Operateur::TOUS[self.rng.random_range(0..Operateur::TOUS.len())];

        // n1 + n2 = nb_termes - 1 ; la gauche reçoit n1 + 1 feuilles.
        let n1 = self.rng.random_range(0..=nb_termes - 2);
        let n2 = nb_termes - 1 - n1;

        let (gauche, droite) = if op == Operateur::Puissance {
            let base = self.generer(n1 + n2)?;
            let exposant = Noeud::feuille(self.rng.random_range(0..=self.params.exposant_max));
            (base, exposant)
        } else {
            let gauche = self.generer(n1 + 1)?;
            let droite = self.generer(n2)?;
            (gauche, droite)
        };

        if op == Operateur::Divise && evaluer(&droite)?.est_zero() {
            return Ok(None);
        }

        Ok(Some(Noeud::operation(op, gauche, droite)))
    }

    fn terme(&mut self) -> Noeud {
        Noeud::feuille(
            self.rng
                .random_range(self.params.feuille_min..=self.params.feuille_max),
        )
    }

    /// Une plage vide ferait paniquer random_range.
    fn verifier_bornes(&self) -> Resultat<()> {
        let p = self.params;
        if p.feuille_min > p.feuille_max {
            return Err(ErreurNoyau::GenerationEchouee(format!(
                "bornes des feuilles vides ({}..={})",
                p.feuille_min, p.feuille_max
            )));
        }
        if p.exposant_max < 0 {
            return Err(ErreurNoyau::GenerationEchouee(format!(
                "exposant maximum négatif ({})",
                p.exposant_max
            )));
        }
        Ok(())
    }
}

/// Raccourci : un arbre de `nb_termes` feuilles avec la source `rng`.
pub fn generer_expression<R: Rng + ?Sized>(
    nb_termes: usize,
    rng: &mut R,
    params: &ParametresGeneration,
) -> Resultat<Noeud> {
    GenerateurExpression::new(rng, params).generer(nb_termes)
}
