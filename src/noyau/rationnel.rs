// src/noyau/rationnel.rs
//
// Rationnel exact (sans flottants).
// - toujours irréductible, dénominateur > 0 (le signe vit dans le numérateur)
// - valeur immuable : chaque opération renvoie un nouveau rationnel normalisé
// - division et puissance sont partielles => Result
//
// Représentation : BigRational (num-rational), donc pas de débordement même
// sur des puissances empilées du générateur ((10^3)^3)^3…

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::{ErreurNoyau, Resultat};

/// Garde-fou de taille : au-delà, ExposantTropGrand (pas ExposantInvalide).
pub const EXPOSANT_MAX: u32 = 4096;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rationnel(BigRational);

impl Rationnel {
    /// n/d normalisé. Échoue si d == 0.
    pub fn new(numerateur: impl Into<BigInt>, denominateur: impl Into<BigInt>) -> Resultat<Self> {
        let n = numerateur.into();
        let d = denominateur.into();
        if d.is_zero() {
            return Err(ErreurNoyau::RationnelInvalide(format!(
                "{n}/{d} : dénominateur nul"
            )));
        }
        // BigRational::new réduit (pgcd) et remet le signe au numérateur.
        Ok(Self(BigRational::new(n, d)))
    }

    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn numerateur(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominateur(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn est_entier(&self) -> bool {
        self.0.denom().is_one()
    }

    pub fn est_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Clé canonique (identité) : couple (numérateur, dénominateur) normalisé.
    pub fn cle(&self) -> (BigInt, BigInt) {
        (self.0.numer().clone(), self.0.denom().clone())
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// a / b, avec DivisionParZero si b == 0.
    pub fn diviser(&self, autre: &Rationnel) -> Resultat<Self> {
        if autre.est_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        Ok(Self(&self.0 / &autre.0))
    }

    /// base^k, k entier >= 0.
    ///
    /// Numérateur et dénominateur sont élevés séparément (multiplications
    /// répétées), puis le résultat est renormalisé.
    pub fn puissance(&self, exposant: &Rationnel) -> Resultat<Self> {
        if !exposant.est_entier() || exposant.numerateur().is_negative() {
            return Err(ErreurNoyau::ExposantInvalide(exposant.to_string()));
        }
        let k = exposant
            .numerateur()
            .to_u32()
            .filter(|k| *k <= EXPOSANT_MAX)
            .ok_or_else(|| ErreurNoyau::ExposantTropGrand {
                exposant: exposant.to_string(),
                max: EXPOSANT_MAX,
            })?;

        let n = puissance_entiere(self.numerateur(), k);
        let d = puissance_entiere(self.denominateur(), k);
        Rationnel::new(n, d)
    }
}

/// Exponentiation rapide sur entiers (carré-multiplié).
fn puissance_entiere(base: &BigInt, exposant: u32) -> BigInt {
    let mut e = exposant;
    let mut acc = BigInt::one();
    let mut b = base.clone();

    while e > 0 {
        if (e & 1) == 1 {
            acc *= &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }
    acc
}

/* ------------------------ Opérations totales (+ - * et négation) ------------------------ */

impl Add for &Rationnel {
    type Output = Rationnel;
    fn add(self, autre: Self) -> Rationnel {
        Rationnel(&self.0 + &autre.0)
    }
}

impl Sub for &Rationnel {
    type Output = Rationnel;
    fn sub(self, autre: Self) -> Rationnel {
        Rationnel(&self.0 - &autre.0)
    }
}

impl Mul for &Rationnel {
    type Output = Rationnel;
    fn mul(self, autre: Self) -> Rationnel {
        Rationnel(&self.0 * &autre.0)
    }
}

impl Add for Rationnel {
    type Output = Rationnel;
    fn add(self, autre: Rationnel) -> Rationnel {
        &self + &autre
    }
}

impl Sub for Rationnel {
    type Output = Rationnel;
    fn sub(self, autre: Rationnel) -> Rationnel {
        &self - &autre
    }
}

impl Mul for Rationnel {
    type Output = Rationnel;
    fn mul(self, autre: Rationnel) -> Rationnel {
        &self * &autre
    }
}

impl Neg for Rationnel {
    type Output = Rationnel;
    fn neg(self) -> Rationnel {
        Rationnel(-self.0)
    }
}

impl From<i64> for Rationnel {
    fn from(n: i64) -> Self {
        Rationnel::entier(n)
    }
}

/* ------------------------ Texte ------------------------ */

/// "n" si entier, sinon "n/d".
impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.numer();
        let d = self.0.denom();
        if d.is_one() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

/// Lit "n", "n/d" ou "n / d" (entiers signés seulement).
/// Tout composant non entier ("1.5", "x") => RationnelInvalide.
impl FromStr for Rationnel {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (n_txt, d_txt) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s, "1"),
        };

        let lire = |t: &str| {
            BigInt::from_str(t)
                .map_err(|_| ErreurNoyau::RationnelInvalide(format!("{s:?} : {t:?} n’est pas un entier")))
        };

        Rationnel::new(lire(n_txt)?, lire(d_txt)?)
    }
}
