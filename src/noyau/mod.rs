//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs       : jetons typés (Num | Op) + découpe sur l’espace
//! - rpn.rs          : shunting-yard sans parenthèses + évaluation postfix
//! - eval.rs         : pipeline complet (calculate)
//! - format.rs       : arrondi, notation scientifique, glyphes d’affichage
//! - calculatrice.rs : machine d’état de la saisie
//! - erreur.rs       : erreurs du noyau

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::{Calculatrice, Edition};
#[allow(unused_imports)]
pub use eval::calculate;
pub use jetons::Op;
