//! Tests de propriétés (proptest) : invariants du noyau sur des entrées tirées.
//!
//! - rationnels : forme irréductible, dénominateur > 0, déterminisme
//! - générateur : nombre de feuilles, exposants 0..=3, jamais de division par zéro
//! - choix      : 4 candidats distincts, la bonne réponse à index_correct
//! - rendu      : idempotent, relu à l’identique

use num_traits::ToPrimitive;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::arbre::{Noeud, Operateur};
use super::choix::{generer_choix, NB_CHOIX};
use super::erreur::ErreurNoyau;
use super::eval::evaluer;
use super::generateur::generer_expression;
use super::lecture::lire_expression;
use super::parametres::{ParametresChoix, ParametresGeneration};
use super::rationnel::Rationnel;

fn pgcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        pgcd(b, a % b)
    }
}

fn est_normalise(r: &Rationnel) -> bool {
    let n = r.numerateur().to_i64().unwrap();
    let d = r.denominateur().to_i64().unwrap();
    d > 0 && pgcd(n.abs(), d) == 1
}

fn petit_entier() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_nul() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn rationnel() -> impl Strategy<Value = Rationnel> {
    (petit_entier(), non_nul()).prop_map(|(n, d)| Rationnel::new(n, d).unwrap())
}

fn exposants_valides(n: &Noeud) -> bool {
    match n {
        Noeud::Feuille(_) => true,
        Noeud::Operation(Operateur::Puissance, base, exposant) => {
            let feuille_ok = match exposant.as_ref() {
                Noeud::Feuille(e) => {
                    e.est_entier() && *e >= Rationnel::zero() && *e <= Rationnel::entier(3)
                }
                Noeud::Operation(..) => false,
            };
            feuille_ok && exposants_valides(base)
        }
        Noeud::Operation(_, g, d) => exposants_valides(g) && exposants_valides(d),
    }
}

proptest! {
    #[test]
    fn construction_normalisee(n in petit_entier(), d in non_nul()) {
        let r = Rationnel::new(n, d).unwrap();
        prop_assert!(est_normalise(&r));
        // même valeur : n * den == num * d
        let num = r.numerateur().to_i64().unwrap();
        let den = r.denominateur().to_i64().unwrap();
        prop_assert_eq!(n * den, num * d);
    }

    #[test]
    fn denominateur_nul_toujours_refuse(n in petit_entier()) {
        prop_assert!(matches!(Rationnel::new(n, 0), Err(ErreurNoyau::RationnelInvalide(_))));
    }

    #[test]
    fn operations_fermees_et_deterministes(a in rationnel(), b in rationnel()) {
        let somme = &a + &b;
        let diff = &a - &b;
        let prod = &a * &b;
        prop_assert!(est_normalise(&somme));
        prop_assert!(est_normalise(&diff));
        prop_assert!(est_normalise(&prod));
        prop_assert_eq!(&somme, &(&a + &b));
        prop_assert_eq!(&prod, &(&b * &a));
        prop_assert_eq!(&(&somme - &b), &a);

        if !b.est_zero() {
            let quot = a.diviser(&b).unwrap();
            prop_assert!(est_normalise(&quot));
            prop_assert_eq!(&quot * &b, a.clone());
        }
    }

    #[test]
    fn puissance_multiplications_repetees(a in rationnel(), k in 0i64..=3) {
        let p = a.puissance(&Rationnel::entier(k)).unwrap();
        let mut attendu = Rationnel::entier(1);
        for _ in 0..k {
            attendu = &attendu * &a;
        }
        prop_assert_eq!(p, attendu);
    }

    #[test]
    fn ordre_coherent_avec_la_difference(a in rationnel(), b in rationnel()) {
        prop_assert_eq!(a < b, (&b - &a) > Rationnel::zero());
        prop_assert_eq!(a.abs() == a, a >= Rationnel::zero());
    }

    #[test]
    fn generateur_invariants(graine in any::<u64>(), nb in 1usize..=7) {
        let mut rng = StdRng::seed_from_u64(graine);
        let arbre = generer_expression(nb, &mut rng, &ParametresGeneration::default()).unwrap();
        prop_assert_eq!(arbre.nombre_feuilles(), nb);
        prop_assert!(exposants_valides(&arbre));
        prop_assert!(evaluer(&arbre).is_ok());
    }

    #[test]
    fn rendu_idempotent_et_relu(graine in any::<u64>(), nb in 1usize..=7) {
        let mut rng = StdRng::seed_from_u64(graine);
        let arbre = generer_expression(nb, &mut rng, &ParametresGeneration::default()).unwrap();
        let texte = arbre.rendu();
        prop_assert_eq!(&texte, &arbre.rendu());
        prop_assert_eq!(lire_expression(&texte).unwrap(), arbre);
    }

    #[test]
    fn choix_distincts(reponse in rationnel(), graine in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(graine);
        let jeu = generer_choix(&reponse, &mut rng, &ParametresChoix::default()).unwrap();
        prop_assert_eq!(&jeu.choix[jeu.index_correct], &reponse);
        for i in 0..NB_CHOIX {
            for j in (i + 1)..NB_CHOIX {
                prop_assert_ne!(jeu.choix[i].cle(), jeu.choix[j].cle());
            }
        }
    }
}
