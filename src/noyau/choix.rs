//! Noyau — choix multiples : la bonne réponse + 3 distracteurs plausibles.
//!
//! - réponse entière     : n + u, u dans -5..=5
//! - réponse fractionnaire : (n + u - 5·d) / d, d dans 2..=10
//!
//! Les 4 candidats ont des clés (num, den) normalisées deux à deux distinctes.
//! Mélange Fisher–Yates, puis on retient où la bonne réponse a atterri.

use std::collections::HashSet;

use num_bigint::BigInt;
use rand::seq::SliceRandom;
use rand::Rng;

use super::erreur::{ErreurNoyau, Resultat};
use super::parametres::ParametresChoix;
use super::rationnel::Rationnel;

pub const NB_CHOIX: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JeuDeChoix {
    pub choix: [Rationnel; NB_CHOIX],
    pub index_correct: usize,
}

pub fn generer_choix<R: Rng + ?Sized>(
    reponse: &Rationnel,
    rng: &mut R,
    params: &ParametresChoix,
) -> Resultat<JeuDeChoix> {
    verifier_bornes(params)?;

    let mut vus: HashSet<(BigInt, BigInt)> = HashSet::with_capacity(NB_CHOIX);
    vus.insert(reponse.cle());

    let mut candidats: Vec<Rationnel> = Vec::with_capacity(NB_CHOIX);
    candidats.push(reponse.clone());

    while candidats.len() < NB_CHOIX {
        let distracteur = tirer_distracteur_inedit(reponse, &vus, rng, params)?;
        vus.insert(distracteur.cle());
        candidats.push(distracteur);
    }

    candidats.shuffle(rng);

    let index_correct = candidats
        .iter()
        .position(|c| c == reponse)
        .ok_or_else(|| ErreurNoyau::GenerationChoixEchouee("réponse perdue au mélange".into()))?;

    let choix: [Rationnel; NB_CHOIX] = candidats
        .try_into()
        .map_err(|_| ErreurNoyau::GenerationChoixEchouee("nombre de candidats inattendu".into()))?;

    Ok(JeuDeChoix {
        choix,
        index_correct,
    })
}

/// Retire jusqu’à obtenir une clé jamais vue (au plus essais_max tirages).
fn tirer_distracteur_inedit<R: Rng + ?Sized>(
    reponse: &Rationnel,
    vus: &HashSet<(BigInt, BigInt)>,
    rng: &mut R,
    params: &ParametresChoix,
) -> Resultat<Rationnel> {
    for _ in 0..params.essais_max {
        let candidat = tirer_distracteur(reponse, rng, params)?;
        if !vus.contains(&candidat.cle()) {
            return Ok(candidat);
        }
    }
    Err(ErreurNoyau::GenerationChoixEchouee(format!(
        "aucun distracteur inédit pour {reponse} en {} tirages",
        params.essais_max
    )))
}

fn tirer_distracteur<R: Rng + ?Sized>(
    reponse: &Rationnel,
    rng: &mut R,
    params: &ParametresChoix,
) -> Resultat<Rationnel> {
    let ecart = rng.random_range(-params.ecart_max..=params.ecart_max);

    if reponse.est_entier() {
        return Ok(Rationnel::entier(reponse.numerateur() + ecart));
    }

    let d = rng.random_range(params.denominateur_min..=params.denominateur_max);
    let n = reponse.numerateur() + ecart - BigInt::from(d) * 5i64;
    Rationnel::new(n, d)
}

fn verifier_bornes(p: &ParametresChoix) -> Resultat<()> {
    if p.ecart_max < 0 {
        return Err(ErreurNoyau::GenerationChoixEchouee(format!(
            "écart maximum négatif ({})",
            p.ecart_max
        )));
    }
    if p.denominateur_min < 1 || p.denominateur_min > p.denominateur_max {
        return Err(ErreurNoyau::GenerationChoixEchouee(format!(
            "bornes de dénominateur invalides ({}..={})",
            p.denominateur_min, p.denominateur_max
        )));
    }
    Ok(())
}
