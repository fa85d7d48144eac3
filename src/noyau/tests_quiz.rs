//! Campagne “quiz” : beaucoup de problèmes complets, graines fixes, budget temps.
//!
//! But : vérifier le pipeline entier (générer -> rendre -> évaluer -> choix)
//! tel que l’appelle l’interface, sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : la bonne réponse est à index_correct, et nulle part ailleurs

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::arbre::{Noeud, Operateur};
use super::eval::evaluer;
use super::lecture::lire_expression;
use super::parametres::{ParametresQuiz, NB_TERMES_MAX};
use super::probleme::generer_probleme;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn operateurs(n: &Noeud, vus: &mut HashSet<Operateur>) {
    if let Noeud::Operation(op, g, d) = n {
        vus.insert(*op);
        operateurs(g, vus);
        operateurs(d, vus);
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn campagne_pipeline_complet() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = StdRng::seed_from_u64(0xBADC0DE_u64);
    let params = ParametresQuiz::default();

    let mut vus = HashSet::new();
    let mut fractionnaires = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let p = generer_probleme(&mut rng, &params)
            .unwrap_or_else(|e| panic!("génération impossible: {e}"));

        // énoncé relu => même arbre => même réponse
        let relu = lire_expression(&p.enonce).unwrap_or_else(|e| panic!("{:?}: {e}", p.enonce));
        assert_eq!(relu, p.arbre, "énoncé={:?}", p.enonce);
        assert_eq!(evaluer(&relu).unwrap(), p.reponse);

        assert_eq!(p.choix[p.index_correct], p.reponse);
        let cles: HashSet<_> = p.choix.iter().map(|c| c.cle()).collect();
        assert_eq!(cles.len(), p.choix.len(), "doublons: {:?}", p.choix);

        if !p.reponse.est_entier() {
            fractionnaires += 1;
        }
        operateurs(&p.arbre, &mut vus);
    }

    // Les cinq opérateurs doivent sortir, et les réponses ne sont pas toutes entières.
    assert_eq!(vus.len(), Operateur::TOUS.len(), "opérateurs vus: {vus:?}");
    assert!(fractionnaires > 0, "aucune réponse fractionnaire en 300 problèmes");
}

#[test]
fn campagne_toutes_tailles() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64);

    for nb in 1..=NB_TERMES_MAX {
        let params = ParametresQuiz::default().avec_nb_termes(nb);
        for _ in 0..20 {
            budget(t0, max);
            let p = generer_probleme(&mut rng, &params)
                .unwrap_or_else(|e| panic!("nb_termes={nb}: {e}"));
            assert_eq!(p.arbre.nombre_feuilles(), nb);
        }
    }
}

#[test]
fn meme_graine_meme_quiz() {
    let params = ParametresQuiz::default();
    let mut a = StdRng::seed_from_u64(77);
    let mut b = StdRng::seed_from_u64(77);
    for _ in 0..params.nb_questions {
        assert_eq!(
            generer_probleme(&mut a, &params).unwrap(),
            generer_probleme(&mut b, &params).unwrap()
        );
    }
}
