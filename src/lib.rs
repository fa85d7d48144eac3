// src/lib.rs
//
// Quiz Q-pur — noyau de calcul mental exact.
// L’interface (src/app) n’est qu’un consommateur de ce noyau.

pub mod noyau;
